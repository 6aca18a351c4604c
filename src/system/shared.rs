//! Shared Motor Driver
//!
//! Serializes access to the driver and its lines when more than one task can
//! issue commands. Every operation holds the lock for its complete write
//! sequence, so a forward pattern can never interleave with a backward one.
//!
//! The wrapper is const-constructible and meant to live in a `static`:
//!
//! ```ignore
//! static MOTORS: SharedMotorDriver<CriticalSectionRawMutex, BoardLines> = SharedMotorDriver::new();
//!
//! MOTORS.install(lines, profile.config)?;
//! MOTORS.apply(MotionCommand::Forward)?;
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::system::error::DriveError;
use crate::system::line::HardwareHandle;
use crate::system::motion::MotionCommand;
use crate::system::motor_driver::MotorDriver;
use crate::system::profile::DriveConfig;
use crate::system::speed::SpeedLevel;

/// Driver bound to the lines it writes
struct Bound<H> {
    driver: MotorDriver,
    hw: H,
}

/// Mutex protected motor driver, empty until [`SharedMotorDriver::install`]
pub struct SharedMotorDriver<M: RawMutex, H> {
    inner: Mutex<M, RefCell<Option<Bound<H>>>>,
}

impl<M: RawMutex, H: HardwareHandle> SharedMotorDriver<M, H> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Initialize the driver on `hw` and take ownership of the lines
    ///
    /// May succeed only once. A rejected configuration leaves the wrapper
    /// empty, and the handle is dropped.
    pub fn install(&self, mut hw: H, config: DriveConfig) -> Result<SpeedLevel, DriveError> {
        self.inner.lock(|cell| {
            let mut slot = cell.borrow_mut();
            if slot.is_some() {
                return Err(DriveError::AlreadyInitialized);
            }
            let driver = MotorDriver::initialize(&mut hw, config)?;
            let cruise = driver.cruise();
            *slot = Some(Bound { driver, hw });
            Ok(cruise)
        })
    }

    /// Whether a driver has been installed
    pub fn is_installed(&self) -> bool {
        self.inner.lock(|cell| cell.borrow().is_some())
    }

    /// Run `f` with exclusive access to the driver and its lines
    pub fn with<R>(&self, f: impl FnOnce(&MotorDriver, &mut H) -> R) -> Result<R, DriveError> {
        self.inner.lock(|cell| {
            let mut slot = cell.borrow_mut();
            let bound = slot.as_mut().ok_or(DriveError::NotInitialized)?;
            Ok(f(&bound.driver, &mut bound.hw))
        })
    }

    /// Execute `command` at the cruise speed
    pub fn apply(&self, command: MotionCommand) -> Result<(), DriveError> {
        self.with(|driver, hw| driver.apply(hw, command))?
    }

    pub fn forward(&self, speed: SpeedLevel) -> Result<(), DriveError> {
        self.with(|driver, hw| driver.forward(hw, speed))
    }

    pub fn backward(&self, speed: SpeedLevel) -> Result<(), DriveError> {
        self.with(|driver, hw| driver.backward(hw, speed))
    }

    pub fn stop(&self) -> Result<(), DriveError> {
        self.with(|driver, hw| driver.stop(hw))
    }

    /// Take the lines back, leaving the wrapper empty
    pub fn release(&self) -> Option<H> {
        self.inner.lock(|cell| cell.borrow_mut().take().map(|bound| bound.hw))
    }
}

impl<M: RawMutex, H: HardwareHandle> Default for SharedMotorDriver<M, H> {
    fn default() -> Self {
        Self::new()
    }
}
