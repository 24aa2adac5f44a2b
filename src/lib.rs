//! Bounce Ball - a tilt-and-button arcade game for a 320x240 handheld
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, bounces, scoring, status)
//! - `input`: Debounced button and tilt sampling
//! - `scheduler`: Fixed-timestep polling loop that bundles sample, update and render
//! - `renderer`: Double-buffered presentation over `embedded-graphics`
//! - `platform`: Clock, button, and accelerometer seams plus host fakes

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod sim;

pub use error::{Error, Result};
pub use input::InputSampler;
pub use scheduler::{Console, FixedStep};
pub use sim::{GameState, GameStatus, TickInput};

/// Game configuration constants
pub mod consts {
    use crate::platform::{AccelConfig, DataRate, FullScale};

    /// Screen dimensions (landscape)
    pub const SCREEN_WIDTH: i32 = 320;
    pub const SCREEN_HEIGHT: i32 = 240;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Serve speed per axis, pixels per tick
    pub const INITIAL_SPEED: f32 = 3.0;
    /// Multiplicative speed-up applied on every top wall bounce
    pub const SPEED_INCREMENT: f32 = 0.05;

    /// Paddle geometry - paddle rides near the bottom edge
    pub const PADDLE_WIDTH: i32 = 60;
    pub const PADDLE_HEIGHT: i32 = 10;
    pub const PADDLE_Y: i32 = SCREEN_HEIGHT - 20;
    pub const PADDLE_CORNER_RADIUS: u32 = 5;
    /// Paddle step per tick while LEFT or RIGHT is held
    pub const PADDLE_SPEED: i32 = 5;
    /// Paddle pixels per tick per g of Y tilt
    pub const TILT_SENSITIVITY: f32 = 10.0;

    /// Paddle bounce angle range, measured from vertical
    pub const MIN_BOUNCE_ANGLE: f32 = 30.0 * std::f32::consts::PI / 180.0;
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::PI / 3.0;

    /// Reward strip along the top edge
    pub const REWARD_WIDTH: i32 = 40;
    pub const REWARD_HEIGHT: i32 = 1;
    pub const REWARD_POINTS: u32 = 2;
    pub const WALL_POINTS: u32 = 1;

    /// Frame tick (~60 Hz)
    pub const FRAME_INTERVAL_MS: u64 = 16;
    /// Minimum spacing between input evaluations
    pub const DEBOUNCE_INTERVAL_MS: u64 = 10;

    /// Accelerometer setup applied once at boot
    pub const ACCEL_CONFIG: AccelConfig = AccelConfig {
        data_rate: DataRate::Hz25,
        full_scale: FullScale::G2,
    };
}
