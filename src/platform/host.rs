//! Host implementations of the platform traits
//!
//! Used by the desktop harness and by tests. `SimClock` only moves when told
//! to, which makes the scheduler fully deterministic.

use std::collections::HashSet;

use super::{AccelConfig, Accelerometer, Acceleration, Button, Buttons, Clock};
use crate::error::{Error, Result};

/// Virtual clock advanced by hand
#[derive(Debug, Clone, Copy, Default)]
pub struct SimClock {
    now: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    pub fn set(&mut self, ms: u64) {
        self.now = ms;
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

/// Set of held buttons; held lines read low
#[derive(Debug, Clone, Default)]
pub struct ButtonPanel {
    held: HashSet<Button>,
}

impl ButtonPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        self.held.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl Buttons for ButtonPanel {
    fn is_low(&mut self, button: Button) -> bool {
        self.held.contains(&button)
    }
}

/// Accelerometer that reports whatever tilt it was last given
#[derive(Debug, Clone)]
pub struct FixedTilt {
    reading: Acceleration,
    config: Option<AccelConfig>,
    present: bool,
    reads: u64,
}

impl FixedTilt {
    /// A level device lying flat
    pub fn new() -> Self {
        Self {
            reading: Acceleration {
                x: 0.0,
                y: 0.0,
                z: 1.0,
            },
            config: None,
            present: true,
            reads: 0,
        }
    }

    /// A sensor that never answers `begin`
    pub fn missing() -> Self {
        Self {
            present: false,
            ..Self::new()
        }
    }

    pub fn set_y(&mut self, y: f32) {
        self.reading.y = y;
    }

    /// Configuration applied by the last successful `begin`
    pub fn config(&self) -> Option<AccelConfig> {
        self.config
    }

    /// How many times the sensor has been read
    pub fn reads(&self) -> u64 {
        self.reads
    }
}

impl Default for FixedTilt {
    fn default() -> Self {
        Self::new()
    }
}

impl Accelerometer for FixedTilt {
    fn begin(&mut self, config: AccelConfig) -> Result<()> {
        if !self.present {
            return Err(Error::AccelerometerInit);
        }
        self.config = Some(config);
        Ok(())
    }

    fn read(&mut self) -> Acceleration {
        self.reads += 1;
        self.reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ACCEL_CONFIG;

    #[test]
    fn test_sim_clock_advances() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now_ms(), 0);
        clock.advance(16);
        clock.advance(4);
        assert_eq!(clock.now_ms(), 20);
        clock.set(1000);
        assert_eq!(clock.now_ms(), 1000);
    }

    #[test]
    fn test_buttons_read_low_when_held() {
        let mut panel = ButtonPanel::new();
        assert!(!panel.is_low(Button::Up));
        panel.press(Button::Up);
        assert!(panel.is_low(Button::Up));
        assert!(panel.is_pressed(Button::Up));
        assert!(!panel.is_low(Button::Down));
        panel.release(Button::Up);
        assert!(!panel.is_low(Button::Up));
    }

    #[test]
    fn test_missing_sensor_fails_begin() {
        let mut sensor = FixedTilt::missing();
        assert!(matches!(
            sensor.begin(ACCEL_CONFIG),
            Err(Error::AccelerometerInit)
        ));
        assert_eq!(sensor.config(), None);

        let mut sensor = FixedTilt::new();
        assert!(sensor.begin(ACCEL_CONFIG).is_ok());
        assert_eq!(sensor.config(), Some(ACCEL_CONFIG));
    }
}
