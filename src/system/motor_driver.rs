//! Motor Driver
//!
//! Translates motion commands into H-bridge line writes.
//!
//! # Hardware Configuration
//!
//! One H-bridge channel per motor, each with two direction inputs and one
//! PWM enable input:
//!
//! | Direction | forward line | backward line |
//! |-----------|--------------|---------------|
//! | Forward   | HIGH         | LOW           |
//! | Backward  | LOW          | HIGH          |
//! | Coast     | LOW          | LOW           |
//!
//! Both lines HIGH would short the bridge leg on most drivers, so there is no
//! brake pattern. Stopping coasts the motors and leaves the enable duty where
//! it was.
//!
//! # Usage
//!
//! ```ignore
//! let driver = MotorDriver::initialize(&mut lines, profile::BENCH.config)?;
//! driver.forward(&mut lines, driver.cruise());
//! driver.stop(&mut lines);
//! ```
//!
//! The driver keeps no record of what it wrote last. Every call writes its
//! full pattern, so repeating a call only repeats the writes.

use crate::system::error::{ConfigurationError, DriveError};
use crate::system::line::{HardwareHandle, Level, LineId, LineMode};
use crate::system::motion::MotionCommand;
use crate::system::pins::PinAssignment;
use crate::system::profile::DriveConfig;
use crate::system::speed::SpeedLevel;

/// Direction pattern for a single bridge channel
#[derive(Debug, Clone, Copy, PartialEq)]
enum MotorDirection {
    Forward,
    Backward,
    Coast, // Both lines low - freewheeling
}

/// Write one channel's direction lines
///
/// The line going HIGH is written first, then the one going LOW.
fn set_direction<H: HardwareHandle>(hw: &mut H, fwd: LineId, bwd: LineId, direction: MotorDirection) {
    match direction {
        MotorDirection::Forward => {
            hw.write_digital(fwd, Level::High);
            hw.write_digital(bwd, Level::Low);
        }
        MotorDirection::Backward => {
            hw.write_digital(bwd, Level::High);
            hw.write_digital(fwd, Level::Low);
        }
        MotorDirection::Coast => {
            hw.write_digital(fwd, Level::Low);
            hw.write_digital(bwd, Level::Low);
        }
    }
}

/// Validated motor driver for a two-channel H-bridge
///
/// Only obtainable through [`MotorDriver::initialize`], so holding one means
/// the pin assignment was checked and all six lines were configured.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorDriver {
    pins: PinAssignment,
    cruise: SpeedLevel,
}

impl MotorDriver {
    /// Validate `config` against `hw` and configure all six lines as outputs
    ///
    /// Fails without touching the hardware if two roles share a line, a line
    /// is not provided by the handle, a speed line cannot do PWM, or the
    /// cruise duty does not fit in 0..=255.
    ///
    /// Line levels are left as they are; issue a motion command afterwards
    /// to put the bridge in a known state.
    pub fn initialize<H: HardwareHandle>(hw: &mut H, config: DriveConfig) -> Result<Self, ConfigurationError> {
        let pins = config.pins;
        pins.check_distinct()?;

        for (role, line) in pins.lines() {
            if !hw.has_line(line) {
                return Err(ConfigurationError::UnknownLine { role, line });
            }
            if role.is_speed() && !hw.supports_pwm(line) {
                return Err(ConfigurationError::NotPwmCapable { role, line });
            }
        }

        let cruise = SpeedLevel::try_from(config.cruise_duty)?;

        for (_, line) in pins.lines() {
            hw.set_line_mode(line, LineMode::Output);
        }

        info!(
            "Motor driver initialized: LF={} LB={} RF={} RB={} ENA={} ENB={}, cruise duty {}",
            pins.left_forward,
            pins.left_backward,
            pins.right_forward,
            pins.right_backward,
            pins.left_speed,
            pins.right_speed,
            cruise
        );

        Ok(Self { pins, cruise })
    }

    pub fn pins(&self) -> &PinAssignment {
        &self.pins
    }

    /// Duty used by [`MotorDriver::apply`] for moving commands
    pub fn cruise(&self) -> SpeedLevel {
        self.cruise
    }

    /// Both motors forward at `speed`
    pub fn forward<H: HardwareHandle>(&self, hw: &mut H, speed: SpeedLevel) {
        debug!("drive forward {}", speed);
        self.set_directions(hw, MotorDirection::Forward);
        self.set_speeds(hw, speed);
    }

    /// Both motors backward at `speed`
    pub fn backward<H: HardwareHandle>(&self, hw: &mut H, speed: SpeedLevel) {
        debug!("drive backward {}", speed);
        self.set_directions(hw, MotorDirection::Backward);
        self.set_speeds(hw, speed);
    }

    /// All direction lines low; enable lines keep their duty so the motors coast
    pub fn stop<H: HardwareHandle>(&self, hw: &mut H) {
        debug!("coasting all motors");
        self.set_directions(hw, MotorDirection::Coast);
    }

    /// Reserved. Writes nothing and reports [`DriveError::NotImplemented`].
    pub fn turn_left<H: HardwareHandle>(&self, _hw: &mut H, speed: SpeedLevel) -> Result<(), DriveError> {
        warn!("turn left at {} requested, no turn pattern defined", speed);
        Err(DriveError::NotImplemented(MotionCommand::TurnLeft))
    }

    /// Reserved. Writes nothing and reports [`DriveError::NotImplemented`].
    pub fn turn_right<H: HardwareHandle>(&self, _hw: &mut H, speed: SpeedLevel) -> Result<(), DriveError> {
        warn!("turn right at {} requested, no turn pattern defined", speed);
        Err(DriveError::NotImplemented(MotionCommand::TurnRight))
    }

    /// Execute `command`, moving at the cruise speed
    pub fn apply<H: HardwareHandle>(&self, hw: &mut H, command: MotionCommand) -> Result<(), DriveError> {
        match command {
            MotionCommand::Forward => self.forward(hw, self.cruise),
            MotionCommand::Backward => self.backward(hw, self.cruise),
            MotionCommand::Stop => self.stop(hw),
            MotionCommand::TurnLeft => return self.turn_left(hw, self.cruise),
            MotionCommand::TurnRight => return self.turn_right(hw, self.cruise),
        }
        Ok(())
    }

    fn set_directions<H: HardwareHandle>(&self, hw: &mut H, direction: MotorDirection) {
        set_direction(hw, self.pins.left_forward, self.pins.left_backward, direction);
        set_direction(hw, self.pins.right_forward, self.pins.right_backward, direction);
    }

    fn set_speeds<H: HardwareHandle>(&self, hw: &mut H, speed: SpeedLevel) {
        hw.write_pwm(self.pins.left_speed, speed.duty());
        hw.write_pwm(self.pins.right_speed, speed.duty());
    }
}
