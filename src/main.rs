//! Bounce Ball host harness
//!
//! Runs the full console (scheduler, sampler, simulation, renderer) on the
//! desktop against a simulated clock, with an autopilot holding the buttons.
//!
//! Environment:
//! - `RUST_LOG`: log filter (e.g. `bounce_ball=debug`)
//! - `BOUNCE_SEED`: RNG seed (random if unset)
//! - `BOUNCE_GAMES`: games to play before exiting (default 3)

use bounce_ball::consts::*;
use bounce_ball::platform::{Button, Clock};
use bounce_ball::platform::host::{ButtonPanel, FixedTilt, SimClock};
use bounce_ball::renderer::{BufferedDisplay, Framebuffer};
use bounce_ball::{Console, Error, GameState, GameStatus};

type HostConsole = Console<SimClock, ButtonPanel, FixedTilt, BufferedDisplay<Framebuffer>>;

/// Virtual time budget for the whole run
const MAX_RUN_MS: u64 = 60 * 60 * 1000;

/// Pixels of slack before the autopilot chases the ball
const AUTOPILOT_DEADBAND: f32 = 4.0;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Device behaviour on a dead sensor: report and stop forever
fn halt(err: &Error) -> ! {
    log::error!("ERROR: {err}");
    loop {
        std::thread::park();
    }
}

/// The button a reasonable player would hold for the next frame
fn autopilot(state: &GameState) -> Option<Button> {
    match state.status {
        GameStatus::StartScreen => Some(Button::Up),
        GameStatus::Playing => {
            let gap = state.ball.pos.x - state.paddle_center();
            if gap < -AUTOPILOT_DEADBAND {
                Some(Button::Left)
            } else if gap > AUTOPILOT_DEADBAND {
                Some(Button::Right)
            } else {
                None
            }
        }
        GameStatus::GameOver => Some(Button::Down),
    }
}

fn main() {
    env_logger::init();

    let seed = env_or("BOUNCE_SEED", rand::random::<u64>());
    let games: u32 = env_or("BOUNCE_GAMES", 3);
    log::info!("Bounce Ball (host) starting, seed {seed}, {games} game(s)");

    let display = BufferedDisplay::new(Framebuffer::screen());
    let mut console: HostConsole = match Console::boot(
        SimClock::new(),
        ButtonPanel::new(),
        FixedTilt::new(),
        display,
        seed,
    ) {
        Ok(console) => console,
        Err(err) => halt(&err),
    };

    let mut played = 0;
    let mut last_status = console.state().status;
    let mut best = 0;

    while played < games && console.clock_mut().now_ms() < MAX_RUN_MS {
        console.clock_mut().advance(1);
        match console.poll() {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        }

        let state = console.state();
        if state.status == GameStatus::GameOver && last_status == GameStatus::Playing {
            played += 1;
            best = best.max(state.score);
            log::info!(
                "Game {played}: score {} after {} frames",
                state.score,
                console.frames()
            );
            match serde_json::to_string(state) {
                Ok(json) => log::debug!("Final state: {json}"),
                Err(err) => log::warn!("Could not serialize state: {err}"),
            }
        }
        last_status = state.status;

        let held = autopilot(state);
        let buttons = console.buttons_mut();
        buttons.release_all();
        if let Some(button) = held {
            buttons.press(button);
        }
    }

    let lit = SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize
        - console
            .surface()
            .front()
            .count(bounce_ball::renderer::BACKGROUND);
    log::info!(
        "Done: {played} game(s), best score {best}, {} frames presented, {lit} lit pixels on the last frame",
        console.surface().frames()
    );
}
