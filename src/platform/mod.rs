//! Platform abstraction layer
//!
//! The game only sees hardware through these traits:
//! - Monotonic millisecond clock
//! - Four active-low direction buttons
//! - Three-axis accelerometer
//!
//! The drawing surface lives in `renderer`. `host` provides scripted
//! implementations for the desktop harness and tests.

pub mod host;

use crate::error::Result;

/// Monotonic milliseconds since power-on
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// The four directions of the 5-way switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
}

/// Digital input lines. Lines are pulled up, so a held button reads low.
pub trait Buttons {
    fn is_low(&mut self, button: Button) -> bool;

    fn is_pressed(&mut self, button: Button) -> bool {
        self.is_low(button)
    }
}

/// One accelerometer sample, in g
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRate {
    Hz1,
    Hz10,
    Hz25,
    Hz50,
    Hz100,
}

/// Full scale measurement range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullScale {
    G2,
    G4,
    G8,
    G16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelConfig {
    pub data_rate: DataRate,
    pub full_scale: FullScale,
}

pub trait Accelerometer {
    /// Probe the sensor and apply `config`. Fails if the sensor does not answer.
    fn begin(&mut self, config: AccelConfig) -> Result<()>;

    /// Latest sample. Never blocks.
    fn read(&mut self) -> Acceleration;
}
