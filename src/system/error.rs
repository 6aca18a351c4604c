//! Error types for motor control
//!
//! Configuration problems surface once, from `MotorDriver::initialize`,
//! before any line is written. Line writes themselves cannot fail.

use thiserror::Error;

use crate::system::line::LineId;
use crate::system::motion::MotionCommand;
use crate::system::pins::LineRole;

/// Invalid pin assignment or speed, detected at initialization
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    #[error("line {line} is assigned to both {first} and {second}")]
    DuplicateLine {
        line: LineId,
        first: LineRole,
        second: LineRole,
    },
    #[error("{role} is assigned to line {line}, which the board does not provide")]
    UnknownLine { role: LineRole, line: LineId },
    #[error("{role} is assigned to line {line}, which cannot output PWM")]
    NotPwmCapable { role: LineRole, line: LineId },
    #[error("duty {0} is outside 0..=255")]
    SpeedOutOfRange(u16),
}

/// Failure of a drive operation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveError {
    #[error("configuration rejected: {0}")]
    Configuration(#[from] ConfigurationError),
    /// Turning has no defined line pattern yet
    #[error("{0} is not implemented")]
    NotImplemented(MotionCommand),
    #[error("motor driver is not initialized")]
    NotInitialized,
    #[error("motor driver is already initialized")]
    AlreadyInitialized,
}
