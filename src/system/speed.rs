//! Speed Level
//!
//! PWM duty applied to both enable lines while moving, 0 (off) to 255 (full).

use core::fmt;

use crate::system::error::ConfigurationError;

/// Duty cycle for the enable lines, always within 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const STOPPED: SpeedLevel = SpeedLevel(0);
    pub const FULL: SpeedLevel = SpeedLevel(u8::MAX);

    pub const fn new(duty: u8) -> Self {
        Self(duty)
    }

    pub const fn duty(self) -> u8 {
        self.0
    }
}

impl From<u8> for SpeedLevel {
    fn from(duty: u8) -> Self {
        Self(duty)
    }
}

impl TryFrom<u16> for SpeedLevel {
    type Error = ConfigurationError;

    fn try_from(duty: u16) -> Result<Self, Self::Error> {
        u8::try_from(duty)
            .map(Self)
            .map_err(|_| ConfigurationError::SpeedOutOfRange(duty))
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
