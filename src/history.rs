//! Fixed-capacity sample history for the graph views.
//!
//! One instance per trace (temperature, humidity). Values are kept
//! oldest-first; once the buffer holds [`HISTORY_CAPACITY`] samples the
//! oldest one is evicted on every push.

use crate::config::HISTORY_CAPACITY;
use heapless::{Deque, Vec};

/// Returned by [`HistoryBuffer::latest`] when nothing was pushed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmptyBufferError;

/// Bounded FIFO of `f32` samples.
#[derive(Debug, Default)]
pub struct HistoryBuffer {
    samples: Deque<f32, HISTORY_CAPACITY>,
}

impl HistoryBuffer {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn push(&mut self, value: f32) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Cannot fail: a slot was freed above if needed.
        let _ = self.samples.push_back(value);
    }

    /// Most recently pushed sample.
    pub fn latest(&self) -> Result<f32, EmptyBufferError> {
        self.samples.back().copied().ok_or(EmptyBufferError)
    }

    /// Copy of the history, oldest first.
    pub fn snapshot(&self) -> Vec<f32, HISTORY_CAPACITY> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
