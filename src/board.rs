//! RP2350 Board Lines
//!
//! Implements the motor core's `HardwareHandle` on the RP2350 and declares
//! the physical wiring of both chassis builds.
//!
//! # Resource Groups
//! - Profile select: jumper input choosing the build at startup
//! - Bench wiring: direction GPIO 6-9, enable GPIO 5 (PWM2 B) and 10 (PWM5 A)
//! - Cruise wiring: direction GPIO 14-17, enable GPIO 12/13 (PWM6 A/B)
//!
//! The line ids below are the GPIO numbers the pins are soldered to.
//! `MotorDriver::initialize` rejects a profile naming a line that is not
//! listed here, so wiring and profile cannot silently disagree.
//!
//! # Shared Driver
//! [`MOTORS`] owns the installed driver together with its lines. Every task
//! goes through it, which serializes all line writes.

use assign_resources::assign_resources;
use defmt::{debug, warn};
use embassy_rp::gpio::{self, Flex};
use embassy_rp::peripherals;
use embassy_rp::pwm::{self, Pwm, PwmOutput, SetDutyCycle};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use l298n_drive::{HardwareHandle, Level, LineId, LineMode, SharedMotorDriver};

/// PWM frequency for the L298N enable inputs
const PWM_FREQ_HZ: u32 = 1_000;

/// Motor driver shared by all tasks, installed once in main
pub static MOTORS: SharedMotorDriver<CriticalSectionRawMutex, BoardLines> = SharedMotorDriver::new();

assign_resources! {
    /// Build selection jumper, open = bench, tied to ground = cruise
    profile_select: ProfileSelectResources {
        jumper_pin: PIN_22,
    },
    /// L298N wiring of the bench build
    bench_wiring: BenchWiringResources {
        left_forward_pin: PIN_6,
        left_backward_pin: PIN_7,
        right_forward_pin: PIN_8,
        right_backward_pin: PIN_9,
        // ENA on slice 2 channel B
        left_slice: PWM_SLICE2,
        left_pwm_pin: PIN_5,
        // ENB on slice 5 channel A
        right_slice: PWM_SLICE5,
        right_pwm_pin: PIN_10,
    },
    /// L298N wiring of the cruise build
    cruise_wiring: CruiseWiringResources {
        left_forward_pin: PIN_14,
        left_backward_pin: PIN_15,
        right_forward_pin: PIN_16,
        right_backward_pin: PIN_17,
        // ENA and ENB share slice 6
        pwm_slice: PWM_SLICE6,
        left_pwm_pin: PIN_12,
        right_pwm_pin: PIN_13,
    },
}

/// PWM configuration for the enable lines
///
/// Keeps the period within the 16-bit counter by picking the smallest
/// divider that fits.
fn pwm_config() -> pwm::Config {
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq(); // 150MHz
    let divider = ((clock_freq_hz / PWM_FREQ_HZ) / 65535 + 1) as u8;
    let period = (clock_freq_hz / (PWM_FREQ_HZ * divider as u32)) as u16 - 1;

    let mut config = pwm::Config::default();
    config.divider = divider.into();
    config.top = period;
    config
}

/// The six H-bridge lines of one build, addressed by GPIO number
pub struct BoardLines {
    directions: [(LineId, Flex<'static>); 4],
    speeds: [(LineId, PwmOutput<'static>); 2],
}

impl BoardLines {
    /// Lines of the bench build
    pub fn bench(r: BenchWiringResources) -> Self {
        let config = pwm_config();
        let (_, left_speed) = Pwm::new_output_b(r.left_slice, r.left_pwm_pin, config.clone()).split();
        let (right_speed, _) = Pwm::new_output_a(r.right_slice, r.right_pwm_pin, config).split();

        Self {
            directions: [
                (LineId::new(6), Flex::new(r.left_forward_pin)),
                (LineId::new(7), Flex::new(r.left_backward_pin)),
                (LineId::new(8), Flex::new(r.right_forward_pin)),
                (LineId::new(9), Flex::new(r.right_backward_pin)),
            ],
            speeds: [
                (LineId::new(5), left_speed.expect("ENA channel B not configured")),
                (LineId::new(10), right_speed.expect("ENB channel A not configured")),
            ],
        }
    }

    /// Lines of the cruise build
    pub fn cruise(r: CruiseWiringResources) -> Self {
        let (left_speed, right_speed) =
            Pwm::new_output_ab(r.pwm_slice, r.left_pwm_pin, r.right_pwm_pin, pwm_config()).split();

        Self {
            directions: [
                (LineId::new(14), Flex::new(r.left_forward_pin)),
                (LineId::new(15), Flex::new(r.left_backward_pin)),
                (LineId::new(16), Flex::new(r.right_forward_pin)),
                (LineId::new(17), Flex::new(r.right_backward_pin)),
            ],
            speeds: [
                (LineId::new(12), left_speed.expect("ENA channel A not configured")),
                (LineId::new(13), right_speed.expect("ENB channel B not configured")),
            ],
        }
    }

    fn direction_pin(&mut self, line: LineId) -> Option<&mut Flex<'static>> {
        self.directions
            .iter_mut()
            .find(|(id, _)| *id == line)
            .map(|(_, pin)| pin)
    }

    fn speed_output(&mut self, line: LineId) -> Option<&mut PwmOutput<'static>> {
        self.speeds
            .iter_mut()
            .find(|(id, _)| *id == line)
            .map(|(_, output)| output)
    }
}

impl HardwareHandle for BoardLines {
    fn set_line_mode(&mut self, line: LineId, mode: LineMode) {
        match mode {
            LineMode::Output => {
                if let Some(pin) = self.direction_pin(line) {
                    pin.set_as_output();
                } else {
                    // enable lines are switched to PWM output when the slice is created
                    debug!("line {} already driven by PWM", line);
                }
            }
        }
    }

    fn write_digital(&mut self, line: LineId, level: Level) {
        let level = match level {
            Level::High => gpio::Level::High,
            Level::Low => gpio::Level::Low,
        };
        match self.direction_pin(line) {
            Some(pin) => pin.set_level(level),
            None => warn!("digital write to unknown line {}", line),
        }
    }

    fn write_pwm(&mut self, line: LineId, duty: u8) {
        match self.speed_output(line) {
            Some(output) => {
                let _ = output.set_duty_cycle_fraction(duty as u16, u8::MAX as u16);
            }
            None => warn!("PWM write to unknown line {}", line),
        }
    }

    fn has_line(&self, line: LineId) -> bool {
        self.directions.iter().any(|(id, _)| *id == line) || self.supports_pwm(line)
    }

    fn supports_pwm(&self, line: LineId) -> bool {
        self.speeds.iter().any(|(id, _)| *id == line)
    }
}
