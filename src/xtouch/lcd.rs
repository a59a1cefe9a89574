//! LCD scribble strip encoding: two rows of 7 characters on a colored backlight.

use bitflags::bitflags;

/// Opcode for a full LCD update.
pub const UPDATE: [u8; 2] = [0x4c, 0x00];

pub const ROW_LEN: usize = 7;
pub const TEXT_LEN: usize = 2 * ROW_LEN;

/// Opcode, color / flags byte then one byte per character.
pub const PAYLOAD_LEN: usize = UPDATE.len() + 1 + TEXT_LEN;

/// Backlight color, bits 0..=2 of the color byte.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Color {
    #[default]
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

bitflags! {
    /// Row inversion, bits 4 and 5 of the color byte.
    #[derive(Default)]
    pub struct Invert: u8 {
        const TOP = 0b0001_0000;
        const BOTTOM = 0b0010_0000;
    }
}

impl Invert {
    pub fn rows(top: bool, bottom: bool) -> Self {
        let mut invert = Invert::empty();
        invert.set(Invert::TOP, top);
        invert.set(Invert::BOTTOM, bottom);

        invert
    }
}

/// Text to show on the LCD.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LcdText {
    /// Up to 14 characters, the first 7 on the top row.
    Single(String),
    /// Top and bottom rows, up to 7 characters each.
    Rows([String; 2]),
}

impl LcdText {
    /// Returns exactly [`TEXT_LEN`] characters, truncating or padding with blanks.
    pub fn flatten(&self) -> String {
        let flat = match self {
            LcdText::Single(text) => text.clone(),
            LcdText::Rows(rows) => rows.iter().map(|row| fit(row, ROW_LEN)).collect(),
        };

        fit(&flat, TEXT_LEN)
    }
}

impl Default for LcdText {
    fn default() -> Self {
        LcdText::Single(String::new())
    }
}

impl From<&str> for LcdText {
    fn from(text: &str) -> Self {
        LcdText::Single(text.to_string())
    }
}

impl From<String> for LcdText {
    fn from(text: String) -> Self {
        LcdText::Single(text)
    }
}

impl From<[&str; 2]> for LcdText {
    fn from([top, bottom]: [&str; 2]) -> Self {
        LcdText::Rows([top.to_string(), bottom.to_string()])
    }
}

fn fit(text: &str, len: usize) -> String {
    let mut fitted: String = text.chars().take(len).collect();
    let count = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(len - count));

    fitted
}

/// Bytes sent for characters the LCD can't render.
const UNPRINTABLE: u8 = b' ';

fn char_code(c: char) -> u8 {
    if c.is_ascii() && !c.is_ascii_control() {
        c as u8
    } else {
        UNPRINTABLE
    }
}

/// Encodes an LCD update payload.
pub fn encode(text: &LcdText, color: Color, invert: Invert) -> [u8; PAYLOAD_LEN] {
    let mut payload = [UNPRINTABLE; PAYLOAD_LEN];

    payload[..UPDATE.len()].copy_from_slice(&UPDATE);
    payload[UPDATE.len()] = color as u8 | invert.bits();

    let text_start = UPDATE.len() + 1;
    for (dst, c) in payload[text_start..].iter_mut().zip(text.flatten().chars()) {
        *dst = char_code(c);
    }

    payload
}

/// Encodes a blank LCD with a black backlight.
pub fn blank() -> [u8; PAYLOAD_LEN] {
    encode(&LcdText::default(), Color::Black, Invert::empty())
}
