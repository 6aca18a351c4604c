mod common;

use std::thread;

use common::{speed, RecordingLines, Write};
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use l298n_drive::{
    drive_command, profile, ConfigurationError, DriveConfig, DriveError, Level, LineId, MotionCommand,
    SharedMotorDriver,
};

#[test]
fn commands_before_install_are_rejected() {
    let motors: SharedMotorDriver<NoopRawMutex, RecordingLines> = SharedMotorDriver::new();

    assert!(!motors.is_installed());
    assert_eq!(motors.apply(MotionCommand::Forward), Err(DriveError::NotInitialized));
    assert_eq!(motors.stop(), Err(DriveError::NotInitialized));
    assert!(motors.release().is_none());
}

#[test]
fn install_happens_once() {
    let motors: SharedMotorDriver<NoopRawMutex, RecordingLines> = SharedMotorDriver::new();

    assert_eq!(
        motors.install(RecordingLines::default(), profile::BENCH.config),
        Ok(speed(150))
    );
    assert_eq!(
        motors.install(RecordingLines::default(), profile::CRUISE.config),
        Err(DriveError::AlreadyInitialized)
    );

    // the first installation stays in place
    motors.apply(MotionCommand::Forward).unwrap();
    let lines = motors.release().unwrap();
    assert_eq!(lines.duty(LineId::new(5)), Some(150));
}

#[test]
fn rejected_configuration_leaves_driver_empty() {
    let motors: SharedMotorDriver<NoopRawMutex, RecordingLines> = SharedMotorDriver::new();
    let config = DriveConfig {
        cruise_duty: 256,
        ..profile::BENCH.config
    };

    assert_eq!(
        motors.install(RecordingLines::default(), config),
        Err(DriveError::Configuration(ConfigurationError::SpeedOutOfRange(256)))
    );
    assert!(!motors.is_installed());
    assert_eq!(motors.install(RecordingLines::default(), profile::BENCH.config), Ok(speed(150)));
}

#[test]
fn shared_operations_reach_the_lines() {
    let motors: SharedMotorDriver<NoopRawMutex, RecordingLines> = SharedMotorDriver::new();
    motors.install(RecordingLines::default(), profile::CRUISE.config).unwrap();

    motors.backward(speed(60)).unwrap();
    assert_eq!(
        motors.apply(MotionCommand::TurnLeft),
        Err(DriveError::NotImplemented(MotionCommand::TurnLeft))
    );
    motors.stop().unwrap();

    let cruise = motors.with(|driver, _| driver.cruise()).unwrap();
    assert_eq!(cruise, speed(80));

    let lines = motors.release().unwrap();
    for (role, line) in profile::CRUISE.config.pins.lines() {
        if role.is_speed() {
            assert_eq!(lines.duty(line), Some(60));
        } else {
            assert_eq!(lines.level(line), Some(Level::Low));
        }
    }
    assert!(!motors.is_installed());
}

#[test]
fn concurrent_callers_never_interleave_writes() {
    static MOTORS: SharedMotorDriver<CriticalSectionRawMutex, RecordingLines> = SharedMotorDriver::new();
    MOTORS.install(RecordingLines::default(), profile::BENCH.config).unwrap();
    MOTORS.with(|_, lines| lines.take_log()).unwrap();

    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..200 {
                MOTORS.apply(MotionCommand::Forward).unwrap();
            }
        });
        s.spawn(|| {
            for _ in 0..200 {
                MOTORS.apply(MotionCommand::Backward).unwrap();
            }
        });
    });

    let lines = MOTORS.release().unwrap();
    assert_eq!(lines.log.len(), 400 * 6);

    let forward = [
        Write::Digital(6, Level::High),
        Write::Digital(7, Level::Low),
        Write::Digital(8, Level::High),
        Write::Digital(9, Level::Low),
        Write::Pwm(5, 150),
        Write::Pwm(10, 150),
    ];
    let backward = [
        Write::Digital(7, Level::High),
        Write::Digital(6, Level::Low),
        Write::Digital(9, Level::High),
        Write::Digital(8, Level::Low),
        Write::Pwm(5, 150),
        Write::Pwm(10, 150),
    ];
    for chunk in lines.log.chunks(6) {
        assert!(chunk == forward || chunk == backward, "interleaved writes: {chunk:?}");
    }
    assert!(!lines.shorted(&profile::BENCH.config.pins));
}

#[test]
fn drive_command_delivers_latest_command() {
    drive_command::update(MotionCommand::Forward);
    drive_command::update(MotionCommand::Stop);

    let command = embassy_futures::block_on(drive_command::wait());
    assert_eq!(command, MotionCommand::Stop);
    assert!(!drive_command::DRIVE.signaled());
}
