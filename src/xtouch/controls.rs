//! Identifiers and status values of the X-Touch One controls
//! in its standard (non-Mackie) MIDI mode.

use std::fmt;

/// Buttons, identified by the note / CC number the device uses for them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[repr(u8)]
pub enum Button {
    Bpm = 1,
    Master = 2,
    Select = 3,
    Mute = 4,
    ChSolo = 5,
    ChRec = 6,
    F1 = 7,
    F2 = 8,
    F3 = 9,
    F4 = 10,
    F5 = 11,
    F6 = 12,
    Marker = 13,
    Nudge = 14,
    Cycle = 15,
    Drop = 16,
    Replace = 17,
    Click = 18,
    Solo = 19,
    Rewind = 20,
    Forward = 21,
    Stop = 22,
    Play = 23,
    Rec = 24,
    FbPrev = 25,
    FbNext = 26,
    ChPrev = 27,
    ChNext = 28,
    Scrub = 29,
    Up = 30,
    Left = 31,
    Enter = 32,
    Right = 33,
    Down = 34,
    /// Fader touch sensor.
    Fader = 110,
}

impl Button {
    /// Every button, in code order.
    pub const ALL: [Button; 35] = [
        Button::Bpm,
        Button::Master,
        Button::Select,
        Button::Mute,
        Button::ChSolo,
        Button::ChRec,
        Button::F1,
        Button::F2,
        Button::F3,
        Button::F4,
        Button::F5,
        Button::F6,
        Button::Marker,
        Button::Nudge,
        Button::Cycle,
        Button::Drop,
        Button::Replace,
        Button::Click,
        Button::Solo,
        Button::Rewind,
        Button::Forward,
        Button::Stop,
        Button::Play,
        Button::Rec,
        Button::FbPrev,
        Button::FbNext,
        Button::ChPrev,
        Button::ChNext,
        Button::Scrub,
        Button::Up,
        Button::Left,
        Button::Enter,
        Button::Right,
        Button::Down,
        Button::Fader,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        use Button::*;

        let button = match code {
            1 => Bpm,
            2 => Master,
            3 => Select,
            4 => Mute,
            5 => ChSolo,
            6 => ChRec,
            7 => F1,
            8 => F2,
            9 => F3,
            10 => F4,
            11 => F5,
            12 => F6,
            13 => Marker,
            14 => Nudge,
            15 => Cycle,
            16 => Drop,
            17 => Replace,
            18 => Click,
            19 => Solo,
            20 => Rewind,
            21 => Forward,
            22 => Stop,
            23 => Play,
            24 => Rec,
            25 => FbPrev,
            26 => FbNext,
            27 => ChPrev,
            28 => ChNext,
            29 => Scrub,
            30 => Up,
            31 => Left,
            32 => Enter,
            33 => Right,
            34 => Down,
            110 => Fader,
            _ => return None,
        };

        Some(button)
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human readable label.
    pub fn name(self) -> &'static str {
        use Button::*;

        match self {
            Bpm => "Bpm",
            Master => "Master",
            Select => "Select",
            Mute => "Mute",
            ChSolo => "Ch_solo",
            ChRec => "Ch_rec",
            F1 => "F1",
            F2 => "F2",
            F3 => "F3",
            F4 => "F4",
            F5 => "F5",
            F6 => "F6",
            Marker => "Marker",
            Nudge => "Nudge",
            Cycle => "Cycle",
            Drop => "Drop",
            Replace => "Replace",
            Click => "Click",
            Solo => "Solo",
            Rewind => "Rewind",
            Forward => "Forward",
            Stop => "Stop",
            Play => "Play",
            Rec => "Rec",
            FbPrev => "Fb_prev",
            FbNext => "Fb_next",
            ChPrev => "Ch_prev",
            ChNext => "Ch_next",
            Scrub => "Scrub",
            Up => "Up",
            Left => "Left",
            Enter => "Enter",
            Right => "Right",
            Down => "Down",
            Fader => "Fader",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn is_button(code: u8) -> bool {
    Button::from_code(code).is_some()
}

/// Controls which are not buttons.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Control {
    Fader = 70,
    Encoder = 80,
    Jogwheel = 88,
    FaderLed = 90,
}

impl Control {
    pub fn code(self) -> u8 {
        self as u8
    }
}

pub mod press {
    pub const OFF: u8 = 0;
    pub const ON: u8 = 127;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum LightStatus {
    Off = 0,
    Blink = 64,
    On = 127,
}

impl LightStatus {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<bool> for LightStatus {
    fn from(is_on: bool) -> Self {
        if is_on {
            LightStatus::On
        } else {
            LightStatus::Off
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncoderMode {
    Relative,
    Absolute,
}

/// Values reported by the encoder in relative mode and by the jog wheel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Direction {
    Left = 1,
    Right = 65,
}

impl Direction {
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Direction::Left),
            65 => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Fader, fader LEDs and encoder ring position.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(0);
    pub const MAX: Level = Level(127);

    /// Saturates `level` to the range accepted by the device.
    pub fn clamp(level: i32) -> Self {
        Level(level.clamp(Self::MIN.0 as i32, Self::MAX.0 as i32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}
