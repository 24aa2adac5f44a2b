//! Fixed timestep simulation tick
//!
//! One call to `tick` advances the ball by exactly one frame's worth of
//! velocity. Input is applied separately through `apply_input`, which only runs
//! on debounce-eligible frames.

use super::collision::{
    below_bottom, bounce_velocity, hits_side_wall, hits_top_wall, overlaps_paddle,
    paddle_bounce_angle,
};
use super::state::{GameState, GameStatus};
use crate::consts::*;

/// Input commands for a single debounced sample
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// LEFT button held
    pub left: bool,
    /// RIGHT button held
    pub right: bool,
    /// Continuous paddle shift from tilt (pixels, not yet truncated)
    pub tilt_dx: f32,
    /// UP: leave the title screen and serve
    pub confirm: bool,
    /// DOWN: leave the game over screen
    pub restart: bool,
}

/// Apply one sample of input to the state machine
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    match state.status {
        GameStatus::StartScreen => {
            if input.confirm {
                state.status = GameStatus::Playing;
                state.reset();
                log::info!("Game started (ball vel {:?})", state.ball.vel);
            }
        }
        GameStatus::Playing => {
            // LEFT counts only off the left edge; otherwise RIGHT gets a turn
            let step = if input.left && state.paddle_x > 0 {
                -PADDLE_SPEED
            } else if input.right && state.paddle_x < SCREEN_WIDTH - PADDLE_WIDTH {
                PADDLE_SPEED
            } else {
                0
            };
            // Button step and tilt are clamped separately
            state.paddle_x = GameState::clamp_paddle(state.paddle_x + step);
            let tilted = (state.paddle_x as f32 + input.tilt_dx) as i32;
            state.paddle_x = GameState::clamp_paddle(tilted);
        }
        GameStatus::GameOver => {
            if input.restart {
                state.status = GameStatus::StartScreen;
                log::info!("Back to title screen");
            }
        }
    }
}

/// Advance the game state by one frame
///
/// `now_ms` is only used to stamp the moment the ball is lost.
pub fn tick(state: &mut GameState, now_ms: u64) {
    if state.status != GameStatus::Playing {
        return;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // --- SIDE WALLS ---
    if hits_side_wall(ball) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = ball
            .pos
            .x
            .clamp(BALL_RADIUS, SCREEN_WIDTH as f32 - BALL_RADIUS);
    }

    // --- TOP WALL / REWARD ---
    if hits_top_wall(ball) {
        if state.reward.contains(ball.pos.x) {
            state.score += REWARD_POINTS;
            log::debug!("Reward caught at x={:.1}, score {}", ball.pos.x, state.score);
            state.regenerate_reward();
        } else {
            state.score += WALL_POINTS;
            log::debug!("Top wall, score {}", state.score);
        }

        let ball = &mut state.ball;
        ball.vel.y = -ball.vel.y;
        ball.pos.y = BALL_RADIUS;
        ball.vel *= 1.0 + SPEED_INCREMENT;
    }

    // --- BOTTOM EDGE ---
    if below_bottom(&state.ball) {
        state.status = GameStatus::GameOver;
        state.game_over_time = Some(now_ms);
        log::info!("Game over at {} ms, final score {}", now_ms, state.score);
    }

    // --- PADDLE ---
    // Checked even on the frame the ball is lost
    if overlaps_paddle(&state.ball, state.paddle_x) {
        let ball = &mut state.ball;
        let angle = paddle_bounce_angle(ball.pos.x, state.paddle_x);
        ball.vel = bounce_velocity(ball.speed(), angle);
        ball.pos.y = PADDLE_Y as f32 - BALL_RADIUS;
    }
}
