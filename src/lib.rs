pub mod bytes;

pub mod midi;

pub mod xtouch;
pub use xtouch::XTouchOne;
