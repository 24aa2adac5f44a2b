//! Bounce geometry for the walls and the paddle
//!
//! Everything is plain float arithmetic on the ball centre. Edge cases are
//! settled by the order `tick` evaluates these tests in, not by guards here.

use glam::Vec2;

use super::state::Ball;
use crate::consts::*;

/// Ball pokes out of the left or right side
pub fn hits_side_wall(ball: &Ball) -> bool {
    ball.left() < 0.0 || ball.right() > SCREEN_WIDTH as f32
}

/// Ball pokes above the top edge
pub fn hits_top_wall(ball: &Ball) -> bool {
    ball.top() < 0.0
}

/// Ball has dropped past the bottom edge
pub fn below_bottom(ball: &Ball) -> bool {
    ball.bottom() > SCREEN_HEIGHT as f32
}

/// Ball overlaps the paddle band and its centre is strictly between the paddle ends
pub fn overlaps_paddle(ball: &Ball, paddle_x: i32) -> bool {
    let top = PADDLE_Y as f32;
    let bottom = (PADDLE_Y + PADDLE_HEIGHT) as f32;
    let left = paddle_x as f32;
    let right = (paddle_x + PADDLE_WIDTH) as f32;

    ball.bottom() > top && ball.top() < bottom && ball.pos.x > left && ball.pos.x < right
}

/// Bounce angle from vertical for a ball hitting the paddle at `ball_x`
///
/// The offset from the paddle centre maps linearly onto `±MAX_BOUNCE_ANGLE`.
/// Anything shallower than `MIN_BOUNCE_ANGLE` is pushed out to the floor,
/// keeping its side; a dead-centre hit goes left.
pub fn paddle_bounce_angle(ball_x: f32, paddle_x: i32) -> f32 {
    let half_width = PADDLE_WIDTH as f32 / 2.0;
    let offset = ball_x - (paddle_x as f32 + half_width);
    let angle = (offset / half_width) * MAX_BOUNCE_ANGLE;

    if angle.abs() < MIN_BOUNCE_ANGLE {
        let side = if angle > 0.0 { 1.0 } else { -1.0 };
        side * MIN_BOUNCE_ANGLE
    } else {
        angle
    }
}

/// Upward velocity at `angle` from vertical with the given speed
pub fn bounce_velocity(speed: f32, angle: f32) -> Vec2 {
    Vec2::new(speed * angle.sin(), -speed * angle.cos())
}
