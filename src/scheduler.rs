//! Fixed timestep polling loop
//!
//! `Console` owns the one `GameState` and every hardware handle. Each call to
//! `poll` is one iteration of the device's main loop:
//!
//! 1. If a frame is due: sample input, update the simulation, render.
//! 2. Always: read the accelerometer into scratch storage.
//!
//! The frame bundle is the only code that mutates `GameState`. The tilt read
//! only touches the scratch sample, which the next frame picks up.

use crate::consts::*;
use crate::error::Result;
use crate::input::InputSampler;
use crate::platform::{Accelerometer, Acceleration, Buttons, Clock};
use crate::renderer::{Surface, render};
use crate::sim::{GameState, apply_input, tick};

/// Elapsed-time gate for a fixed interval
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval_ms: u64,
    last_ms: u64,
}

impl FixedStep {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: 0,
        }
    }

    /// True once `interval_ms` has elapsed since the last due step
    pub fn due(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}

/// The whole device: game state plus injected hardware
pub struct Console<C, B, A, S> {
    clock: C,
    buttons: B,
    accel: A,
    surface: S,
    state: GameState,
    sampler: InputSampler,
    frame: FixedStep,
    /// Latest accelerometer sample, refreshed every loop iteration
    tilt: Acceleration,
    frames: u64,
}

impl<C, B, A, S> Console<C, B, A, S>
where
    C: Clock,
    B: Buttons,
    A: Accelerometer,
    S: Surface,
{
    /// Bring up the sensor and place the first reward strip
    ///
    /// Fails only if the accelerometer does not respond. There is no retry.
    pub fn boot(clock: C, buttons: B, mut accel: A, surface: S, seed: u64) -> Result<Self> {
        accel.begin(ACCEL_CONFIG)?;
        log::info!(
            "Accelerometer ready ({:?}, {:?})",
            ACCEL_CONFIG.data_rate,
            ACCEL_CONFIG.full_scale
        );

        Ok(Self {
            clock,
            buttons,
            accel,
            surface,
            state: GameState::new(seed),
            sampler: InputSampler::new(),
            frame: FixedStep::default(),
            tilt: Acceleration::default(),
            frames: 0,
        })
    }

    /// One loop iteration. Returns whether a frame ran.
    pub fn poll(&mut self) -> Result<bool> {
        let now = self.clock.now_ms();
        let ran = self.frame.due(now);
        if ran {
            self.step(now)?;
        }

        self.tilt = self.accel.read();
        Ok(ran)
    }

    /// Sample, update, render
    fn step(&mut self, now: u64) -> Result<()> {
        if let Some(input) = self.sampler.sample(now, &mut self.buttons, self.tilt.y) {
            apply_input(&mut self.state, &input);
        }
        tick(&mut self.state, now);
        render(&self.state, &mut self.surface)?;

        self.frames += 1;
        log::trace!("Frame {} at {} ms", self.frames, now);
        Ok(())
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Frames run since boot
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Most recent accelerometer sample
    pub fn tilt(&self) -> Acceleration {
        self.tilt
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn accel_mut(&mut self) -> &mut A {
        &mut self.accel
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::platform::Button;
    use crate::platform::host::{ButtonPanel, FixedTilt, SimClock};
    use crate::renderer::recording::RecordingSurface;
    use crate::sim::GameStatus;
    use glam::Vec2;

    type TestConsole = Console<SimClock, ButtonPanel, FixedTilt, RecordingSurface>;

    fn console() -> TestConsole {
        Console::boot(
            SimClock::new(),
            ButtonPanel::new(),
            FixedTilt::new(),
            RecordingSurface::default(),
            2024,
        )
        .unwrap()
    }

    /// Advance to the next frame boundary and poll once
    fn frame(console: &mut TestConsole) {
        console.clock_mut().advance(FRAME_INTERVAL_MS);
        assert!(console.poll().unwrap());
    }

    #[test]
    fn test_fixed_step_gate() {
        let mut step = FixedStep::new(16);
        assert!(!step.due(0));
        assert!(!step.due(15));
        assert!(step.due(16));
        assert!(!step.due(31));
        assert!(step.due(40));
        // Late frames are not made up
        assert!(!step.due(55));
        assert!(step.due(56));
    }

    #[test]
    fn test_boot_fails_without_sensor() {
        let result = Console::boot(
            SimClock::new(),
            ButtonPanel::new(),
            FixedTilt::missing(),
            RecordingSurface::default(),
            1,
        );
        assert!(matches!(result, Err(Error::AccelerometerInit)));
    }

    #[test]
    fn test_boot_configures_sensor() {
        let console = console();
        assert_eq!(console.accel.config(), Some(ACCEL_CONFIG));
        assert_eq!(console.state().status, GameStatus::StartScreen);
    }

    #[test]
    fn test_accel_read_every_iteration() {
        let mut console = console();
        for _ in 0..5 {
            console.clock_mut().advance(1);
            console.poll().unwrap();
        }
        assert_eq!(console.accel.reads(), 5);
        assert_eq!(console.frames(), 0);

        console.clock_mut().advance(11);
        assert!(console.poll().unwrap());
        assert_eq!(console.frames(), 1);
        assert_eq!(console.accel.reads(), 6);
    }

    #[test]
    fn test_frame_renders_once() {
        let mut console = console();
        frame(&mut console);
        let presents = console
            .surface()
            .ops
            .iter()
            .filter(|op| matches!(op, crate::renderer::recording::DrawOp::Present))
            .count();
        assert_eq!(presents, 1);
        assert_eq!(
            console.surface().texts(),
            vec!["Bounce Ball", "Press UP to Start"]
        );
    }

    #[test]
    fn test_full_cycle() {
        let mut console = console();

        console.buttons_mut().press(Button::Up);
        frame(&mut console);
        assert_eq!(console.state().status, GameStatus::Playing);
        console.buttons_mut().release_all();

        // Let the ball fall untouched: aim straight down away from the paddle
        console.state.ball.pos = Vec2::new(20.0, 120.0);
        console.state.ball.vel = Vec2::new(0.0, 3.0);
        console.state.paddle_x = 200;

        let mut guard = 0;
        while console.state().status == GameStatus::Playing {
            frame(&mut console);
            guard += 1;
            assert!(guard < 100);
        }
        let over_at = console.state().game_over_time;
        assert!(over_at.is_some());

        // Nothing happens while idle on the game over screen
        frame(&mut console);
        frame(&mut console);
        assert_eq!(console.state().game_over_time, over_at);

        console.buttons_mut().press(Button::Down);
        frame(&mut console);
        assert_eq!(console.state().status, GameStatus::StartScreen);
    }

    #[test]
    fn test_tilt_reaches_paddle_next_frame() {
        let mut console = console();
        console.buttons_mut().press(Button::Up);
        frame(&mut console);
        console.buttons_mut().release_all();
        let start = console.state().paddle_x;

        // Tilt lands in scratch after this frame runs, so the paddle has not moved yet
        console.accel_mut().set_y(0.5);
        frame(&mut console);
        assert_eq!(console.tilt().y, 0.5);
        assert_eq!(console.state().paddle_x, start);

        frame(&mut console);
        assert_eq!(console.state().paddle_x, start - 5);
    }

    #[test]
    fn test_both_buttons_held_at_left_edge() {
        let mut console = console();
        console.buttons_mut().press(Button::Up);
        frame(&mut console);
        console.buttons_mut().release_all();

        console.state.paddle_x = 0;
        console.buttons_mut().press(Button::Left);
        console.buttons_mut().press(Button::Right);
        frame(&mut console);
        assert_eq!(console.state().paddle_x, 5);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = console();
        let mut b = console();
        a.buttons_mut().press(Button::Up);
        b.buttons_mut().press(Button::Up);
        for _ in 0..200 {
            frame(&mut a);
            frame(&mut b);
        }
        assert_eq!(a.state().ball, b.state().ball);
        assert_eq!(a.state().score, b.state().score);
        assert_eq!(a.state().reward, b.state().reward);
    }
}
