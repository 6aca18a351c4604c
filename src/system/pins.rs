//! Pin Assignment
//!
//! Maps the six logical line roles of the H-bridge onto physical lines.
//!
//! # Roles
//! - Left motor: forward (IN1), backward (IN2), speed (ENA)
//! - Right motor: forward (IN3), backward (IN4), speed (ENB)
//!
//! An assignment is fixed at startup and never mutated. All six lines must be
//! distinct; [`PinAssignment::check_distinct`] reports the first collision.

use core::fmt;

use crate::system::error::ConfigurationError;
use crate::system::line::LineId;

/// Logical function of a line, independent of the pin it is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineRole {
    LeftForward,
    LeftBackward,
    RightForward,
    RightBackward,
    LeftSpeed,
    RightSpeed,
}

impl LineRole {
    /// All roles, in the order the lines are configured at startup
    pub const ALL: [LineRole; 6] = [
        LineRole::LeftForward,
        LineRole::LeftBackward,
        LineRole::RightForward,
        LineRole::RightBackward,
        LineRole::LeftSpeed,
        LineRole::RightSpeed,
    ];

    /// Speed (enable) roles need a PWM capable line
    pub const fn is_speed(self) -> bool {
        matches!(self, LineRole::LeftSpeed | LineRole::RightSpeed)
    }

    pub const fn name(self) -> &'static str {
        match self {
            LineRole::LeftForward => "Left-Forward",
            LineRole::LeftBackward => "Left-Backward",
            LineRole::RightForward => "Right-Forward",
            LineRole::RightBackward => "Right-Backward",
            LineRole::LeftSpeed => "Left-Speed",
            LineRole::RightSpeed => "Right-Speed",
        }
    }
}

impl fmt::Display for LineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical wiring of the H-bridge inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    /// Left motor forward direction (IN1)
    pub left_forward: LineId,
    /// Left motor backward direction (IN2)
    pub left_backward: LineId,
    /// Right motor forward direction (IN3)
    pub right_forward: LineId,
    /// Right motor backward direction (IN4)
    pub right_backward: LineId,
    /// Left motor enable, PWM (ENA)
    pub left_speed: LineId,
    /// Right motor enable, PWM (ENB)
    pub right_speed: LineId,
}

impl PinAssignment {
    /// Line wired to `role`
    pub const fn line(&self, role: LineRole) -> LineId {
        match role {
            LineRole::LeftForward => self.left_forward,
            LineRole::LeftBackward => self.left_backward,
            LineRole::RightForward => self.right_forward,
            LineRole::RightBackward => self.right_backward,
            LineRole::LeftSpeed => self.left_speed,
            LineRole::RightSpeed => self.right_speed,
        }
    }

    /// `(role, line)` pairs in configuration order
    pub fn lines(&self) -> impl Iterator<Item = (LineRole, LineId)> + '_ {
        LineRole::ALL.into_iter().map(move |role| (role, self.line(role)))
    }

    /// Fails on the first line shared by two roles
    pub fn check_distinct(&self) -> Result<(), ConfigurationError> {
        for (i, first) in LineRole::ALL.iter().enumerate() {
            for second in &LineRole::ALL[i + 1..] {
                let line = self.line(*first);
                if line == self.line(*second) {
                    return Err(ConfigurationError::DuplicateLine {
                        line,
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        Ok(())
    }
}
