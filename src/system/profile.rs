//! Drive Profiles
//!
//! A profile bundles the wiring, the cruise duty and what the firmware does
//! right after the driver is initialized. Two chassis builds exist:
//!
//! ## Bench
//! - Left: IN1 = 6, IN2 = 7, ENA = 5
//! - Right: IN3 = 8, IN4 = 9, ENB = 10
//! - Cruise duty 150, idles after boot
//!
//! ## Cruise
//! - Left: IN1 = 14, IN2 = 15, ENA = 12
//! - Right: IN3 = 16, IN4 = 17, ENB = 13
//! - Cruise duty 80, drives forward as soon as it boots

use crate::system::line::LineId;
use crate::system::motion::MotionCommand;
use crate::system::pins::PinAssignment;

/// Unvalidated wiring and cruise duty, checked by `MotorDriver::initialize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveConfig {
    pub pins: PinAssignment,
    /// Duty for moving commands, must fit 0..=255
    pub cruise_duty: u16,
}

/// What the caller does once the driver is initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootAction {
    /// Leave the lines alone and wait for commands
    Idle,
    /// Start driving forward at the cruise duty
    Forward,
}

impl BootAction {
    /// Command to issue right after initialization, if any
    pub fn command(self) -> Option<MotionCommand> {
        match self {
            BootAction::Idle => None,
            BootAction::Forward => Some(MotionCommand::Forward),
        }
    }
}

/// A named chassis build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Profile {
    pub name: &'static str,
    pub config: DriveConfig,
    pub on_boot: BootAction,
}

/// Bench build: waits for commands after boot
pub const BENCH: Profile = Profile {
    name: "bench",
    config: DriveConfig {
        pins: PinAssignment {
            left_forward: LineId::new(6),
            left_backward: LineId::new(7),
            right_forward: LineId::new(8),
            right_backward: LineId::new(9),
            left_speed: LineId::new(5),
            right_speed: LineId::new(10),
        },
        cruise_duty: 150,
    },
    on_boot: BootAction::Idle,
};

/// Cruise build: slower duty, drives forward on boot
pub const CRUISE: Profile = Profile {
    name: "cruise",
    config: DriveConfig {
        pins: PinAssignment {
            left_forward: LineId::new(14),
            left_backward: LineId::new(15),
            right_forward: LineId::new(16),
            right_backward: LineId::new(17),
            left_speed: LineId::new(12),
            right_speed: LineId::new(13),
        },
        cruise_duty: 80,
    },
    on_boot: BootAction::Forward,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_profiles_have_distinct_lines() {
        assert_eq!(BENCH.config.pins.check_distinct(), Ok(()));
        assert_eq!(CRUISE.config.pins.check_distinct(), Ok(()));
    }

    #[test]
    fn built_in_profiles_do_not_share_wiring() {
        for (_, bench_line) in BENCH.config.pins.lines() {
            assert!(CRUISE.config.pins.lines().all(|(_, line)| line != bench_line));
        }
    }

    #[test]
    fn boot_actions() {
        assert_eq!(BENCH.on_boot.command(), None);
        assert_eq!(CRUISE.on_boot.command(), Some(MotionCommand::Forward));
    }
}
