//! Raw Output Lines
//!
//! The boundary between the motor core and the platform. A line is a single
//! physical output identified by its pin number; the platform supplies a
//! [`HardwareHandle`] that can configure and drive those lines.
//!
//! # Contract
//! - `set_line_mode` is called once per line while the driver initializes
//! - `write_digital` asserts a direction line
//! - `write_pwm` asserts a duty cycle (0-255) on a PWM capable line
//!
//! Writes are not fallible at this level. A handle whose backend can fail
//! must deal with that itself (the RP2350 board ignores PWM errors the same
//! way the motor tasks always have).

use core::fmt;

/// Physical line identifier (the pin number on the board)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineId(u8);

impl LineId {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Digital output level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

/// Line mode requested during initialization
///
/// Only outputs are needed for an H-bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    Output,
}

/// Digital I/O surface the motor driver writes through
///
/// Passed by `&mut` to every driver operation. Implementations own the
/// physical lines; nothing else may write them while the driver is in use.
pub trait HardwareHandle {
    /// Configure `line` for the given mode
    fn set_line_mode(&mut self, line: LineId, mode: LineMode);

    /// Assert a digital level on `line`
    fn write_digital(&mut self, line: LineId, level: Level);

    /// Assert a duty cycle on `line`, 0 = always low, 255 = always high
    fn write_pwm(&mut self, line: LineId, duty: u8);

    /// Whether this handle owns `line`
    ///
    /// Checked once per role by `MotorDriver::initialize`.
    fn has_line(&self, _line: LineId) -> bool {
        true
    }

    /// Whether `line` can carry a PWM signal
    fn supports_pwm(&self, _line: LineId) -> bool {
        true
    }
}

impl<H: HardwareHandle + ?Sized> HardwareHandle for &mut H {
    fn set_line_mode(&mut self, line: LineId, mode: LineMode) {
        (**self).set_line_mode(line, mode)
    }

    fn write_digital(&mut self, line: LineId, level: Level) {
        (**self).write_digital(line, level)
    }

    fn write_pwm(&mut self, line: LineId, duty: u8) {
        (**self).write_pwm(line, duty)
    }

    fn has_line(&self, line: LineId) -> bool {
        (**self).has_line(line)
    }

    fn supports_pwm(&self, line: LineId) -> bool {
        (**self).supports_pwm(line)
    }
}
