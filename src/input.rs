//! Debounced input sampling
//!
//! Turns raw button lines and the latest tilt reading into a `TickInput`.
//! The only state kept between samples is the time of the last evaluation.

use crate::consts::*;
use crate::platform::{Button, Buttons};
use crate::sim::TickInput;

#[derive(Debug, Clone)]
pub struct InputSampler {
    last_sample_ms: u64,
    interval_ms: u64,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSampler {
    pub fn new() -> Self {
        Self::with_interval(DEBOUNCE_INTERVAL_MS)
    }

    pub fn with_interval(interval_ms: u64) -> Self {
        Self {
            last_sample_ms: 0,
            interval_ms,
        }
    }

    /// Sample the buttons if the debounce interval has passed
    ///
    /// `tilt_y` is the most recent accelerometer Y reading. Positive tilt
    /// pushes the paddle left. Returns `None` while still debouncing.
    pub fn sample<B: Buttons>(
        &mut self,
        now_ms: u64,
        buttons: &mut B,
        tilt_y: f32,
    ) -> Option<TickInput> {
        if now_ms.saturating_sub(self.last_sample_ms) < self.interval_ms {
            return None;
        }
        self.last_sample_ms = now_ms;

        let input = TickInput {
            left: buttons.is_pressed(Button::Left),
            right: buttons.is_pressed(Button::Right),
            tilt_dx: -tilt_y * TILT_SENSITIVITY,
            confirm: buttons.is_pressed(Button::Up),
            restart: buttons.is_pressed(Button::Down),
        };
        log::trace!("Sampled input at {} ms: {:?}", now_ms, input);
        Some(input)
    }

    pub fn last_sample_ms(&self) -> u64 {
        self.last_sample_ms
    }
}
