//! SSD1306 OLED display wrapper.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use super::layout::{AirQualityView, GraphView, SummaryView};
use super::Renderer;
use crate::config::OLED_ADDR;
use crate::error::Error;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Row of the first text line.
const TITLE_Y: i32 = 0;
/// Row of the value label on graph screens.
const LABEL_Y: i32 = 55;
/// Line spacing on the summary screen.
const LINE_HEIGHT: i32 = 10;
/// Left margin for all text.
const TEXT_X: i32 = 1;

/// OLED-backed [`Renderer`].
pub struct Oled<I2C> {
    display: Display<I2C>,
}

impl<I2C> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 and clear the screen.
    pub fn init(i2c: I2C) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_ADDR);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| Error::Display)?;
        display.clear_buffer();
        display.flush().map_err(|_| Error::Display)?;
        Ok(Self { display })
    }

    fn text(&mut self, s: &str, x: i32, y: i32) -> Result<(), Error> {
        Text::with_baseline(s, Point::new(x, y), text_style(), Baseline::Top)
            .draw(&mut self.display)
            .map_err(|_| Error::Display)?;
        Ok(())
    }

    fn graph(&mut self, view: &GraphView) -> Result<(), Error> {
        self.display.clear_buffer();
        self.text(view.title, TEXT_X, TITLE_Y)?;

        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        for pair in view.points.windows(2) {
            Line::new(Point::new(pair[0].x, pair[0].y), Point::new(pair[1].x, pair[1].y))
                .into_styled(stroke)
                .draw(&mut self.display)
                .map_err(|_| Error::Display)?;
        }

        self.text(view.label.as_str(), TEXT_X, LABEL_Y)?;
        self.flush()
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.display.flush().map_err(|_| Error::Display)
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> Renderer for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn draw_summary(&mut self, view: &SummaryView) -> Result<(), Error> {
        self.display.clear_buffer();
        self.text(view.temperature.as_str(), TEXT_X, TITLE_Y)?;
        self.text(view.humidity.as_str(), TEXT_X, TITLE_Y + LINE_HEIGHT)?;
        self.text(view.voc_index.as_str(), TEXT_X, TITLE_Y + 2 * LINE_HEIGHT)?;
        self.flush()
    }

    fn draw_temperature_graph(&mut self, view: &GraphView) -> Result<(), Error> {
        self.graph(view)
    }

    fn draw_humidity_graph(&mut self, view: &GraphView) -> Result<(), Error> {
        self.graph(view)
    }

    fn draw_air_quality(&mut self, view: &AirQualityView) -> Result<(), Error> {
        self.display.clear_buffer();
        self.text("Air Quality", TEXT_X, TITLE_Y)?;

        // A zero-height bar draws nothing.
        Rectangle::new(Point::new(view.x, view.y), Size::new(view.width, view.height))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.display)
            .map_err(|_| Error::Display)?;

        self.text(view.label.as_str(), TEXT_X, LABEL_Y)?;
        self.flush()
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.display.clear_buffer();
        self.flush()
    }
}
