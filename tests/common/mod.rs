#![allow(dead_code)]

use std::collections::BTreeMap;

use l298n_drive::{HardwareHandle, Level, LineId, LineMode, PinAssignment, SpeedLevel};

/// One call made on the hardware handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Mode(u8, LineMode),
    Digital(u8, Level),
    Pwm(u8, u8),
}

/// Fake lines that record every call and track the resulting line state
#[derive(Default)]
pub struct RecordingLines {
    pub log: Vec<Write>,
    pub modes: BTreeMap<LineId, LineMode>,
    pub levels: BTreeMap<LineId, Level>,
    pub duties: BTreeMap<LineId, u8>,
    /// Lines the board provides, `None` means every line
    pub known: Option<Vec<u8>>,
    /// PWM capable lines, `None` means every line
    pub pwm_capable: Option<Vec<u8>>,
}

impl RecordingLines {
    pub fn level(&self, line: LineId) -> Option<Level> {
        self.levels.get(&line).copied()
    }

    pub fn duty(&self, line: LineId) -> Option<u8> {
        self.duties.get(&line).copied()
    }

    /// Drain the log recorded so far
    pub fn take_log(&mut self) -> Vec<Write> {
        std::mem::take(&mut self.log)
    }

    /// Whether a motor has both direction lines high right now
    pub fn shorted(&self, pins: &PinAssignment) -> bool {
        let high = |line| self.level(line) == Some(Level::High);
        (high(pins.left_forward) && high(pins.left_backward))
            || (high(pins.right_forward) && high(pins.right_backward))
    }
}

impl HardwareHandle for RecordingLines {
    fn set_line_mode(&mut self, line: LineId, mode: LineMode) {
        self.log.push(Write::Mode(line.number(), mode));
        self.modes.insert(line, mode);
    }

    fn write_digital(&mut self, line: LineId, level: Level) {
        self.log.push(Write::Digital(line.number(), level));
        self.levels.insert(line, level);
    }

    fn write_pwm(&mut self, line: LineId, duty: u8) {
        self.log.push(Write::Pwm(line.number(), duty));
        self.duties.insert(line, duty);
    }

    fn has_line(&self, line: LineId) -> bool {
        self.known
            .as_ref()
            .map_or(true, |known| known.contains(&line.number()))
    }

    fn supports_pwm(&self, line: LineId) -> bool {
        self.pwm_capable
            .as_ref()
            .map_or(true, |capable| capable.contains(&line.number()))
    }
}

pub fn speed(duty: u8) -> SpeedLevel {
    SpeedLevel::new(duty)
}
