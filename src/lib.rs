//! Motor direction control for a two-motor chassis
//!
//! Drives two DC motors through an L298N style H-bridge: four direction lines
//! (two per motor) and two PWM enable lines. The core is hardware agnostic;
//! every operation takes a [`HardwareHandle`] by reference, so the same code
//! runs on the RP2350 firmware and against a recording fake in tests.
//!
//! ```ignore
//! let driver = MotorDriver::initialize(&mut lines, profile::BENCH.config)?;
//! driver.forward(&mut lines, driver.cruise());
//! driver.stop(&mut lines);
//! ```

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

/// Motor control core
pub mod system;

pub use system::drive_command;
pub use system::error::{ConfigurationError, DriveError};
pub use system::line::{HardwareHandle, Level, LineId, LineMode};
pub use system::motion::MotionCommand;
pub use system::motor_driver::MotorDriver;
pub use system::pins::{LineRole, PinAssignment};
pub use system::profile::{self, BootAction, DriveConfig, Profile};
pub use system::shared::SharedMotorDriver;
pub use system::speed::SpeedLevel;
