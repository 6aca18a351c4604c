//! Core system components for motor control
pub mod drive_command;
pub mod error;
pub mod line;
pub mod motion;
pub mod motor_driver;
pub mod pins;
pub mod profile;
pub mod shared;
pub mod speed;
