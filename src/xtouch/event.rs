use super::controls::Button;

/// What a device message means.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    ButtonDown(Button),
    ButtonUp(Button),
    /// Ring position in absolute mode, a [`Direction`](super::Direction) value in relative mode.
    EncoderTurn(u8),
    FaderMove(u8),
    /// A [`Direction`](super::Direction) value.
    JogTurn(u8),
}
