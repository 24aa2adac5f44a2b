//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only (one Euler step per frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bounce_velocity, paddle_bounce_angle};
pub use state::{Ball, GameState, GameStatus, RewardZone};
pub use tick::{TickInput, apply_input, tick};
