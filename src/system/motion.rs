//! Motion Commands
//!
//! The chassis motions a caller can request. Commands are transient: they are
//! produced and consumed synchronously and never stored by the driver.

use core::fmt;

/// Desired chassis motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionCommand {
    /// Both motors forward at the cruise speed
    Forward,
    /// Both motors backward at the cruise speed
    Backward,
    /// All direction lines low, motors coast
    Stop,
    /// Reserved, no line pattern defined
    TurnLeft,
    /// Reserved, no line pattern defined
    TurnRight,
}

impl MotionCommand {
    /// Whether going from `self` straight to `next` flips the motor direction
    ///
    /// Callers stop in between so a motor never sees both of its direction
    /// lines high while the new pattern is written.
    pub fn reverses(self, next: MotionCommand) -> bool {
        matches!(
            (self, next),
            (MotionCommand::Forward, MotionCommand::Backward)
                | (MotionCommand::Backward, MotionCommand::Forward)
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            MotionCommand::Forward => "forward",
            MotionCommand::Backward => "backward",
            MotionCommand::Stop => "stop",
            MotionCommand::TurnLeft => "turn left",
            MotionCommand::TurnRight => "turn right",
        }
    }
}

impl fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_direct_direction_flips_reverse() {
        use MotionCommand::*;
        assert!(Forward.reverses(Backward));
        assert!(Backward.reverses(Forward));

        assert!(!Forward.reverses(Forward));
        assert!(!Forward.reverses(Stop));
        assert!(!Stop.reverses(Backward));
        assert!(!Backward.reverses(TurnLeft));
        assert!(!TurnRight.reverses(Forward));
    }
}
