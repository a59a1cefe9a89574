mod error;
pub use error::Error;

mod io;
pub use io::Connection;

pub mod msg;
pub use msg::{Msg, MsgList};

pub mod port;

/// Upper nibble of a status byte: the message type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tag(u8);

impl Tag {
    pub const fn from(byte: u8) -> Self {
        Self(byte & 0xf0)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 {
        tag.0
    }
}

pub mod tag {
    use super::Tag;

    pub const NOTE_ON: Tag = Tag::from(0x90);
    pub const CONTROL_CHANGE: Tag = Tag::from(0xb0);
}

/// Lower nibble of a status byte: the channel, 0 being MIDI channel 1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Channel(u8);

impl Channel {
    pub const fn from(byte: u8) -> Self {
        Self(byte & 0x0f)
    }
}

impl From<Channel> for u8 {
    fn from(chan: Channel) -> u8 {
        chan.0
    }
}

impl std::ops::BitOr<Channel> for Tag {
    type Output = u8;

    fn bitor(self, chan: Channel) -> Self::Output {
        self.0 | chan.0
    }
}

pub mod sysex {
    pub const TAG: u8 = 0xf0;
    pub const END_TAG: u8 = 0xf7;
}

/// Destination for complete outgoing MIDI messages.
///
/// Each call carries exactly one message. Implementations report
/// their failures as is: callers never retry.
pub trait Output {
    fn send(&mut self, msg: &[u8]) -> Result<(), Error>;
}
