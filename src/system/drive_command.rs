//! Drive Command Module
//!
//! Hands motion commands to the drive task through an embassy-sync Signal.
//! Only the latest command matters: a command signaled before the previous
//! one was picked up replaces it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::system::motion::MotionCommand;

/// Signal for drive commands
pub static DRIVE: Signal<CriticalSectionRawMutex, MotionCommand> = Signal::new();

/// Sends a new drive command
///
/// Synchronous, callable from any task or interrupt.
pub fn update(command: MotionCommand) {
    DRIVE.signal(command);
}

/// Waits for the next drive command
pub async fn wait() -> MotionCommand {
    DRIVE.wait().await
}
