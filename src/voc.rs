//! VOC index estimation from the SGP40 raw signal.
//!
//! The monitor treats the estimator as an opaque stateful function behind
//! [`VocEstimator`]. The bundled [`AdaptiveVocIndex`] follows the usual
//! Sensirion convention: the sensor's recent baseline maps to 100, more
//! VOCs (a falling raw signal) push the index towards 500, cleaner air
//! towards 0.

use crate::config::{VOC_INDEX_MAX, VOC_WARMUP_SAMPLES};

/// Maps one compensated raw reading to a VOC index.
pub trait VocEstimator {
    fn process(&mut self, raw: u16) -> u16;
}

/// Index reported for a reading that sits on the learned baseline.
pub const VOC_INDEX_BASELINE: f32 = 100.0;

/// Learning rate of the baseline and spread once warm-up is over.
const BASELINE_ALPHA: f32 = 1.0 / 720.0;
const SPREAD_ALPHA: f32 = 1.0 / 720.0;

/// Floor for the typical deviation, in raw ticks.
const MIN_SPREAD: f32 = 50.0;

/// Deviation, in multiples of the spread, that moves the index by 100.
const SPREAD_SCALE: f32 = 3.0;

/// Baseline-tracking VOC index.
#[derive(Debug, Clone)]
pub struct AdaptiveVocIndex {
    baseline: f32,
    spread: f32,
    samples: u32,
}

impl AdaptiveVocIndex {
    pub const fn new() -> Self {
        Self {
            baseline: 0.0,
            spread: MIN_SPREAD,
            samples: 0,
        }
    }

    /// True while the next reading will still report 0.
    pub fn warming_up(&self) -> bool {
        self.samples < VOC_WARMUP_SAMPLES
    }

    fn learn(&mut self, raw: f32, deviation: f32, warming_up: bool) {
        // Plain running mean while warming up, slow EMA afterwards.
        let alpha = if warming_up {
            1.0 / self.samples as f32
        } else {
            BASELINE_ALPHA
        };
        self.baseline += (raw - self.baseline) * alpha;

        let magnitude = if deviation < 0.0 { -deviation } else { deviation };
        self.spread += (magnitude - self.spread) * SPREAD_ALPHA;
        self.spread = self.spread.max(MIN_SPREAD);
    }
}

impl Default for AdaptiveVocIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl VocEstimator for AdaptiveVocIndex {
    fn process(&mut self, raw: u16) -> u16 {
        let raw = f32::from(raw);
        if self.samples == 0 {
            self.baseline = raw;
        }
        self.samples = self.samples.saturating_add(1);

        let deviation = self.baseline - raw;
        let index = VOC_INDEX_BASELINE
            + VOC_INDEX_BASELINE * deviation / (self.spread * SPREAD_SCALE);
        let warming_up = self.samples <= VOC_WARMUP_SAMPLES;
        self.learn(raw, deviation, warming_up);

        if warming_up {
            return 0;
        }
        index.clamp(0.0, f32::from(VOC_INDEX_MAX)) as u16
    }
}
