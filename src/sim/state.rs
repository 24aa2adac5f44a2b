//! Game state and core simulation types
//!
//! A single `GameState` is owned by the console and handed by reference to the
//! sampler, the simulation, and the renderer. Nothing else is mutable.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Title screen, waiting for UP
    #[default]
    StartScreen,
    /// Active gameplay
    Playing,
    /// Ball fell past the bottom edge, waiting for DOWN
    GameOver,
}

/// The ball (centre position, velocity in pixels per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at rest in the middle of the screen
    pub fn centered() -> Self {
        Self {
            pos: Vec2::new((SCREEN_WIDTH / 2) as f32, (SCREEN_HEIGHT / 2) as f32),
            vel: Vec2::ZERO,
        }
    }

    /// Scalar speed
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn left(&self) -> f32 {
        self.pos.x - BALL_RADIUS
    }

    pub fn right(&self) -> f32 {
        self.pos.x + BALL_RADIUS
    }

    pub fn top(&self) -> f32 {
        self.pos.y - BALL_RADIUS
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + BALL_RADIUS
    }
}

/// Bonus strip along the top edge. Only `x` moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardZone {
    pub x: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for RewardZone {
    fn default() -> Self {
        Self {
            x: 0,
            width: REWARD_WIDTH,
            height: REWARD_HEIGHT,
        }
    }
}

impl RewardZone {
    /// Whether a ball centred at `x` is over the strip (edges inclusive)
    pub fn contains(&self, x: f32) -> bool {
        x >= self.x as f32 && x <= (self.x + self.width) as f32
    }

    /// Largest valid `x`
    pub fn max_x(&self) -> i32 {
        SCREEN_WIDTH - self.width
    }
}

/// Complete game state (deterministic for a given seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Left edge of the paddle
    pub paddle_x: i32,
    pub score: u32,
    pub status: GameStatus,
    /// Clock reading (ms) when the last game ended
    pub game_over_time: Option<u64>,
    pub reward: RewardZone,
    /// Shared random source for reward placement and serve direction
    rng: Pcg32,
}

impl GameState {
    /// Power-on state: title screen, ball parked, reward strip placed once
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            ball: Ball::centered(),
            paddle_x: 140,
            score: 0,
            status: GameStatus::StartScreen,
            game_over_time: None,
            reward: RewardZone::default(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.regenerate_reward();
        state
    }

    /// Fresh round: centred ball served diagonally, centred paddle, zero score
    pub fn reset(&mut self) {
        let sx = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };

        self.ball = Ball::centered();
        self.ball.vel = Vec2::new(sx * INITIAL_SPEED, sy * INITIAL_SPEED);
        self.paddle_x = (SCREEN_WIDTH - PADDLE_WIDTH) / 2;
        self.score = 0;
        self.game_over_time = None;
        self.regenerate_reward();
    }

    /// Move the reward strip to a uniformly random `x` in `[0, width - strip]`
    pub fn regenerate_reward(&mut self) {
        self.reward.x = self.rng.random_range(0..=self.reward.max_x());
        log::debug!("Reward zone moved to x={}", self.reward.x);
    }

    /// Clamp a candidate paddle position into the screen
    pub fn clamp_paddle(x: i32) -> i32 {
        x.clamp(0, SCREEN_WIDTH - PADDLE_WIDTH)
    }

    /// Horizontal centre of the paddle
    pub fn paddle_center(&self) -> f32 {
        self.paddle_x as f32 + PADDLE_WIDTH as f32 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let state = GameState::new(7);
        assert_eq!(state.status, GameStatus::StartScreen);
        assert_eq!(state.ball.pos, Vec2::new(160.0, 120.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.paddle_x, 140);
        assert_eq!(state.score, 0);
        assert_eq!(state.game_over_time, None);
        assert_eq!(state.reward.width, 40);
        assert_eq!(state.reward.height, 1);
        assert!((0..=280).contains(&state.reward.x));
    }

    #[test]
    fn test_reset_serves_diagonally() {
        let mut state = GameState::new(42);
        state.score = 17;
        state.paddle_x = 0;
        state.game_over_time = Some(1234);
        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.paddle_x, 130);
        assert_eq!(state.game_over_time, None);
        assert_eq!(state.ball.pos, Vec2::new(160.0, 120.0));
        assert_eq!(state.ball.vel.x.abs(), INITIAL_SPEED);
        assert_eq!(state.ball.vel.y.abs(), INITIAL_SPEED);
    }

    #[test]
    fn test_serve_directions_vary() {
        // Every sign combination should eventually show up
        let mut state = GameState::new(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            state.reset();
            seen.insert((state.ball.vel.x > 0.0, state.ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_reward_stays_on_screen() {
        let mut state = GameState::new(99);
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for _ in 0..5000 {
            state.regenerate_reward();
            min = min.min(state.reward.x);
            max = max.max(state.reward.x);
        }
        assert!(min >= 0);
        assert!(max <= SCREEN_WIDTH - REWARD_WIDTH);
        // Both ends of the range are reachable
        assert_eq!(min, 0);
        assert_eq!(max, SCREEN_WIDTH - REWARD_WIDTH);
    }

    #[test]
    fn test_same_seed_same_rewards() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        for _ in 0..10 {
            a.reset();
            b.reset();
            assert_eq!(a.reward, b.reward);
            assert_eq!(a.ball, b.ball);
        }
    }

    #[test]
    fn test_reward_contains_edges() {
        let zone = RewardZone {
            x: 100,
            ..Default::default()
        };
        assert!(zone.contains(100.0));
        assert!(zone.contains(140.0));
        assert!(zone.contains(120.5));
        assert!(!zone.contains(99.9));
        assert!(!zone.contains(140.1));
    }

    #[test]
    fn test_clamp_paddle() {
        assert_eq!(GameState::clamp_paddle(-12), 0);
        assert_eq!(GameState::clamp_paddle(400), 260);
        assert_eq!(GameState::clamp_paddle(75), 75);
    }
}
