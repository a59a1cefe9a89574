//! 7-segment display encoding.
//!
//! The display has 12 cells, each with a trailing dot. Glyphs are 7-bit
//! patterns `0bGFEDCBA` for the following segment layout:
//!
//! ```text
//!  --A--
//!  F   B
//!  --G--
//!  E   C
//!  --D--
//! ```

/// Opcode for a full display update.
pub const UPDATE: u8 = 0x37;

pub const CELLS: usize = 12;

/// Opcode, one glyph per cell, then the two dot bytes.
pub const PAYLOAD_LEN: usize = 1 + CELLS + 2;

/// Number of cells whose dot is carried by the first dot byte.
/// The second byte carries the remaining 5 cells. Fixed by firmware.
const FIRST_DOT_BYTE_CELLS: usize = 7;

pub const BLANK: u8 = 0;

/// Side on which short text is padded with blanks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Pad {
    /// Right-aligned text.
    #[default]
    Start,
    /// Left-aligned text.
    End,
}

/// Returns the segment pattern for `c`, ignoring case.
///
/// Characters which can't be displayed are rendered as [`BLANK`].
pub fn glyph(c: char) -> u8 {
    match c.to_ascii_uppercase() {
        'A' => 0b1110111,
        'B' => 0b1111100,
        'C' => 0b0111001,
        'D' => 0b1011110,
        'E' => 0b1111001,
        'F' => 0b1110001,
        'G' => 0b0111101,
        'H' => 0b1110110,
        'I' => 0b0110000,
        'J' => 0b0001110,
        'K' => 0b1110101,
        'L' => 0b0111000,
        'M' => 0b0101011,
        'N' => 0b0110111,
        'O' => 0b1011100,
        'P' => 0b1110011,
        'Q' => 0b1100111,
        'R' => 0b1010000,
        'S' => 0b1101101,
        'T' => 0b1111000,
        'U' => 0b0111110,
        'V' => 0b0011100,
        'W' => 0b0101010,
        'X' => 0b1001001,
        'Y' => 0b1101110,
        'Z' => 0b1011011,

        '0' => 0b0111111,
        '1' => 0b0000110,
        '2' => 0b1011011,
        '3' => 0b1001111,
        '4' => 0b1100110,
        '5' => 0b1101101,
        '6' => 0b1111101,
        '7' => 0b0100111,
        '8' => 0b1111111,
        '9' => 0b1101111,

        '=' => 0b1001000,
        '?' => 0b1010011,
        '"' => 0b0100010,
        '\'' => 0b0100000,
        '-' => 0b1000000,
        '_' => 0b0001000,

        _ => BLANK,
    }
}

/// Encodes `text` as a display update payload.
///
/// A `.` lights the dot of the character preceding it and doesn't use a cell.
/// Text is truncated or padded to [`CELLS`] characters.
///
/// A leading `.` targets the cell before the first character: it is shown
/// on the last blank cell when padding at start and dropped otherwise.
pub fn encode(text: &str, pad: Pad) -> [u8; PAYLOAD_LEN] {
    let mut chars = Vec::with_capacity(CELLS);
    // Positions in the dot-less text, -1 when the dot leads.
    let mut dots = Vec::new();

    for c in text.chars() {
        if c == '.' {
            dots.push(chars.len() as isize - 1);
        } else {
            chars.push(c);
        }
    }

    chars.truncate(CELLS);

    let offset = match pad {
        Pad::Start => CELLS - chars.len(),
        Pad::End => 0,
    };

    let mut cells = [' '; CELLS];
    cells[offset..offset + chars.len()].copy_from_slice(&chars);

    let mut dot_map = 0u16;
    for pos in dots {
        let cell = pos + offset as isize;
        if (0..CELLS as isize).contains(&cell) {
            dot_map |= 1 << cell;
        }
    }

    let mut payload = [BLANK; PAYLOAD_LEN];
    payload[0] = UPDATE;
    for (dst, &c) in payload[1..=CELLS].iter_mut().zip(cells.iter()) {
        *dst = glyph(c);
    }

    let low_mask = (1u16 << FIRST_DOT_BYTE_CELLS) - 1;
    payload[CELLS + 1] = (dot_map & low_mask) as u8;
    payload[CELLS + 2] = (dot_map >> FIRST_DOT_BYTE_CELLS) as u8;

    payload
}

/// Encodes a blank display.
pub fn blank() -> [u8; PAYLOAD_LEN] {
    encode(&" ".repeat(CELLS), Pad::Start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot_cells(payload: &[u8; PAYLOAD_LEN]) -> Vec<usize> {
        let map = payload[CELLS + 1] as u16 | (payload[CELLS + 2] as u16) << 7;
        (0..CELLS).filter(|cell| map & (1 << cell) != 0).collect()
    }

    fn glyphs(text: &str) -> Vec<u8> {
        text.chars().map(glyph).collect()
    }

    #[test]
    fn full_width_without_dots() {
        let payload = encode("Hello World?", Pad::Start);

        assert_eq!(payload[0], UPDATE);
        assert_eq!(&payload[1..=CELLS], glyphs("HELLO WORLD?").as_slice());
        assert_eq!(payload[CELLS + 1], 0);
        assert_eq!(payload[CELLS + 2], 0);
    }

    #[test]
    fn glyph_case_and_fallback() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('8'), 0b1111111);
        assert_eq!(glyph(' '), BLANK);
        assert_eq!(glyph('#'), BLANK);
        assert_eq!(glyph('é'), BLANK);
    }

    #[test]
    fn dot_decorates_previous_char() {
        let payload = encode("1.2", Pad::Start);

        assert_eq!(payload[CELLS - 1], glyph('1'));
        assert_eq!(payload[CELLS], glyph('2'));
        // '1' lands on cell 10
        assert_eq!(dot_cells(&payload), vec![10]);
        assert_eq!(payload[CELLS + 1], 0);
        assert_eq!(payload[CELLS + 2], 0b1000);
    }

    #[test]
    fn dots_with_end_padding() {
        let payload = encode("1.2.", Pad::End);

        assert_eq!(&payload[1..=3], &[glyph('1'), glyph('2'), BLANK]);
        assert_eq!(dot_cells(&payload), vec![0, 1]);
        assert_eq!(payload[CELLS + 1], 0b11);
        assert_eq!(payload[CELLS + 2], 0);
    }

    #[test]
    fn timecode() {
        let payload = encode("01.02.03.004", Pad::Start);

        assert_eq!(&payload[1..=3], &[BLANK, BLANK, BLANK]);
        assert_eq!(&payload[4..=CELLS], glyphs("010203004").as_slice());
        assert_eq!(dot_cells(&payload), vec![4, 6, 8]);
    }

    #[test]
    fn consecutive_dots_share_cell() {
        let payload = encode("1..2", Pad::End);
        assert_eq!(dot_cells(&payload), vec![0]);
    }

    #[test]
    fn leading_dot() {
        assert_eq!(dot_cells(&encode(".5", Pad::Start)), vec![10]);
        assert!(dot_cells(&encode(".5", Pad::End)).is_empty());
        assert!(dot_cells(&encode(".123456789012", Pad::Start)).is_empty());
    }

    #[test]
    fn truncation_drops_trailing_dots() {
        let payload = encode("123.45678.9.012", Pad::Start);

        assert_eq!(&payload[1..=CELLS], glyphs("123456789012").as_slice());
        assert_eq!(dot_cells(&payload), vec![2, 7, 8]);

        let payload = encode("0123456789ab.", Pad::Start);
        assert_eq!(dot_cells(&payload), vec![11]);
        assert_eq!(payload[CELLS + 2], 0b10000);

        let payload = encode("0123456789abc.", Pad::Start);
        assert!(dot_cells(&payload).is_empty());
    }

    #[test]
    fn blank_display() {
        let payload = blank();
        assert_eq!(payload[0], UPDATE);
        assert!(payload[1..].iter().all(|&b| b == BLANK));
        assert_eq!(encode("", Pad::End), payload);
    }
}
