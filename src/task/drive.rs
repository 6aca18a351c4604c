//! Drive Task Module
//!
//! Applies motion commands to the shared motor driver. Runs the profile's
//! boot action once, then executes every command received on the drive
//! command signal.
//!
//! A direct forward/backward flip is split into a stop, a short settle time
//! and the new direction, so neither bridge leg sees both inputs high while
//! the pattern changes.

use crate::board::MOTORS;
use defmt::{info, warn};
use embassy_time::{Duration, Timer};
use l298n_drive::{drive_command, BootAction, MotionCommand};

/// Coast time between opposite directions
const REVERSAL_SETTLE: Duration = Duration::from_millis(100);

#[embassy_executor::task]
pub async fn drive(on_boot: BootAction) {
    info!("Drive task starting, boot action {:?}", on_boot);

    // Nothing has been written since initialize
    let mut current = MotionCommand::Stop;

    if let Some(command) = on_boot.command() {
        current = execute(current, command).await;
    }

    loop {
        let command = drive_command::wait().await;
        current = execute(current, command).await;
    }
}

/// Execute `command` and return the motion now in effect
async fn execute(current: MotionCommand, command: MotionCommand) -> MotionCommand {
    if current.reverses(command) {
        info!("in conflicting motion, stopping");
        if let Err(e) = MOTORS.stop() {
            warn!("stop before reversal failed: {}", e);
            return current;
        }
        Timer::after(REVERSAL_SETTLE).await;
    }

    match MOTORS.apply(command) {
        Ok(()) => {
            info!("drive {}", command);
            command
        }
        Err(e) => {
            warn!("drive {} rejected: {}", command, e);
            current
        }
    }
}
