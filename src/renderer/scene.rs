//! Per-status frame composition

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use super::*;
use crate::consts::*;
use crate::error::Result;
use crate::sim::{GameState, GameStatus};

/// Draw one frame for `state` and present it
pub fn render<S: Surface>(state: &GameState, surface: &mut S) -> Result<()> {
    surface.clear(BACKGROUND);

    match state.status {
        GameStatus::StartScreen => draw_title(surface),
        GameStatus::Playing => draw_playfield(state, surface),
        GameStatus::GameOver => draw_game_over(state, surface),
    }

    surface.present()
}

fn draw_title<S: Surface>(surface: &mut S) {
    surface.draw_text("Bounce Ball", Point::new(60, 80), 3, TITLE_COLOR, None);
    surface.draw_text("Press UP to Start", Point::new(60, 140), 2, TITLE_COLOR, None);
}

fn draw_playfield<S: Surface>(state: &GameState, surface: &mut S) {
    let ball = Point::new(state.ball.pos.x as i32, state.ball.pos.y as i32);
    surface.fill_circle(ball, BALL_RADIUS as u32, BALL_COLOR);

    let paddle = Rectangle::new(
        Point::new(state.paddle_x, PADDLE_Y),
        Size::new(PADDLE_WIDTH as u32, PADDLE_HEIGHT as u32),
    );
    surface.fill_round_rect(paddle, PADDLE_CORNER_RADIUS, PADDLE_COLOR);

    let score = format!("Score: {}", state.score);
    surface.draw_text(&score, Point::new(10, 10), 2, SCORE_COLOR, Some(BACKGROUND));

    let reward = Rectangle::new(
        Point::new(state.reward.x, 0),
        Size::new(state.reward.width as u32, state.reward.height as u32),
    );
    surface.fill_rect(reward, REWARD_COLOR);
}

fn draw_game_over<S: Surface>(state: &GameState, surface: &mut S) {
    let score = format!("Score: {}", state.score);
    surface.draw_text("Game Over", Point::new(80, 80), 3, GAME_OVER_COLOR, None);
    surface.draw_text(&score, Point::new(80, 120), 3, GAME_OVER_COLOR, None);
    surface.draw_text(
        "Press DOWN to Restart",
        Point::new(35, 160),
        2,
        GAME_OVER_COLOR,
        None,
    );
}
