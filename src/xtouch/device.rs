use super::{
    classifier::Classifier,
    controls::{Button, Control, EncoderMode, Level, LightStatus},
    lcd::{self, Color, Invert, LcdText},
    segments::{self, Pad},
    sysex, Event, CHANNEL,
};
use crate::{bytes, midi};

/// X-Touch One in standard MIDI mode.
///
/// Outgoing updates are written to `O` as soon as they are requested.
/// Device messages are fed back through [`XTouchOne::handle_msg`]
/// which must be called from the thread owning the device.
#[derive(Debug)]
pub struct XTouchOne<O> {
    output: O,
    classifier: Classifier,
}

impl<O: midi::Output> XTouchOne<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            classifier: Classifier::default(),
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Last encoder mode inferred from device messages, if any.
    pub fn encoder_mode(&self) -> Option<EncoderMode> {
        self.classifier.encoder_mode()
    }

    pub fn handle_msg(&mut self, msg: &[u8]) -> Option<Event> {
        log::debug!("MIDI message: {}", bytes::Displayable::from(msg));

        let event = self.classifier.classify(msg);
        match event {
            Some(Event::ButtonDown(button)) => log::debug!("Button press: {button}"),
            Some(Event::ButtonUp(button)) => log::debug!("Button release: {button}"),
            Some(other) => log::trace!("{other:?}"),
            None => (),
        }

        event
    }

    pub fn light(&mut self, button: Button, status: LightStatus) -> Result<(), midi::Error> {
        log::debug!("Setting button light: {button} to {status:?}");
        self.send_cc(button.code(), status.value())
    }

    pub fn set_fader_level(&mut self, level: i32) -> Result<(), midi::Error> {
        let level = Level::clamp(level);
        log::debug!("Setting fader level to {}", level.value());
        self.send_cc(Control::Fader.code(), level.value())
    }

    /// Only one LED lights up, a hardware limitation.
    pub fn set_fader_led_level(&mut self, level: i32) -> Result<(), midi::Error> {
        let level = Level::clamp(level);
        log::debug!("Setting fader LED level to {}", level.value());
        self.send_cc(Control::FaderLed.code(), level.value())
    }

    pub fn set_encoder_ring_level(&mut self, level: i32) -> Result<(), midi::Error> {
        let level = Level::clamp(level);
        log::debug!("Setting encoder ring level to {}", level.value());
        self.send_cc(Control::Encoder.code(), level.value())
    }

    /// Shows `text` on the 7-segment display, see [`segments::encode`].
    pub fn set_segment_display(&mut self, text: &str, pad: Pad) -> Result<(), midi::Error> {
        log::debug!("Setting segment display to {text:?}");
        self.send_sysex(&segments::encode(text, pad))
    }

    pub fn clear_segment_display(&mut self) -> Result<(), midi::Error> {
        log::debug!("Clearing segment display");
        self.send_sysex(&segments::blank())
    }

    pub fn set_lcd(
        &mut self,
        text: impl Into<LcdText>,
        color: Color,
        invert: Invert,
    ) -> Result<(), midi::Error> {
        let text = text.into();
        log::debug!("Setting LCD to {text:?} on {color:?}, inverted {invert:?}");
        self.send_sysex(&lcd::encode(&text, color, invert))
    }

    pub fn clear_lcd(&mut self) -> Result<(), midi::Error> {
        log::debug!("Clearing LCD");
        self.send_sysex(&lcd::blank())
    }

    /// Turns off every light, blanks both displays and zeroes all levels.
    pub fn clear(&mut self) -> Result<(), midi::Error> {
        for button in Button::ALL {
            self.light(button, LightStatus::Off)?;
        }

        self.clear_segment_display()?;
        self.set_fader_level(0)?;
        self.set_fader_led_level(0)?;
        self.set_encoder_ring_level(0)?;
        self.clear_lcd()
    }

    fn send_cc(&mut self, target: u8, value: u8) -> Result<(), midi::Error> {
        self.output
            .send(&[midi::tag::CONTROL_CHANGE | CHANNEL, target, value])
    }

    fn send_sysex(&mut self, payload: &[u8]) -> Result<(), midi::Error> {
        self.output.send(&sysex::frame(payload))
    }
}
