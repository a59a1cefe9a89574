//! Behringer X-Touch One protocol in standard MIDI mode.

pub mod classifier;
pub use classifier::Classifier;

pub mod controls;
pub use controls::{is_button, Button, Control, Direction, EncoderMode, Level, LightStatus};

mod device;
pub use device::XTouchOne;

pub mod event;
pub use event::Event;

pub mod lcd;
pub use lcd::{Color, Invert, LcdText};

pub mod segments;
pub use segments::Pad;

pub mod sysex;

use crate::midi;

/// The device sends and receives on MIDI channel 1.
pub const CHANNEL: midi::Channel = midi::Channel::from(0);

pub const DEFAULT_CLIENT_NAME: &str = "xtouch-one";
/// Input ports are named after the device family.
pub const DEFAULT_IN_PORT: &str = "x-touch";
pub const DEFAULT_OUT_PORT: &str = "x-touch one";
