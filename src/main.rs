//! Chassis firmware entry point
//!
//! Selects the build profile, installs the motor driver and spawns the
//! drive task.

#![no_std]
#![no_main]

use crate::board::{
    AssignedResources, BenchWiringResources, BoardLines, CruiseWiringResources, ProfileSelectResources, MOTORS,
};
use crate::task::drive::drive;
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::gpio::{Input, Pull};
use l298n_drive::profile;
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Board wiring and line access
mod board;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());
    let r = split_resources!(p);

    // The jumper is only read once; the build cannot change while running
    let jumper = Input::new(r.profile_select.jumper_pin, Pull::Up);
    let (profile, lines) = if jumper.is_high() {
        (profile::BENCH, BoardLines::bench(r.bench_wiring))
    } else {
        (profile::CRUISE, BoardLines::cruise(r.cruise_wiring))
    };
    info!("Profile {} selected", profile.name);

    if let Err(e) = MOTORS.install(lines, profile.config) {
        error!("Motor driver not installed: {}", e);
        return;
    }

    spawner.spawn(drive(profile.on_boot)).unwrap();
}
