//! Crate error type
//!
//! Gameplay never fails: out-of-range positions are clamped. The only errors
//! are hardware ones surfaced while booting or flushing a frame.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The accelerometer did not answer during `begin`. Unrecoverable.
    #[error("accelerometer did not respond during initialization")]
    AccelerometerInit,
    /// The front display rejected the frame flush
    #[error("display present failed: {0}")]
    Present(String),
}

pub type Result<T> = std::result::Result<T, Error>;
