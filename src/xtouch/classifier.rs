use super::{
    controls::{press, Button, Control, Direction, EncoderMode},
    Event, CHANNEL,
};
use crate::midi;

/// Turns raw device messages into [`Event`]s.
///
/// The encoder mode is not reported by the device: it is inferred
/// from each encoder value, the last one winning.
#[derive(Debug, Default)]
pub struct Classifier {
    encoder_mode: Option<EncoderMode>,
}

impl Classifier {
    pub fn encoder_mode(&self) -> Option<EncoderMode> {
        self.encoder_mode
    }

    /// Classifies a `[status, target, value]` message.
    ///
    /// Any other message, as well as unknown targets, yields `None`.
    pub fn classify(&mut self, msg: &[u8]) -> Option<Event> {
        let &[status, target, value] = msg else {
            return None;
        };

        if midi::Channel::from(status) != CHANNEL {
            return None;
        }

        match midi::Tag::from(status) {
            midi::tag::NOTE_ON | midi::tag::CONTROL_CHANGE => (),
            _ => return None,
        }

        if let Some(button) = Button::from_code(target) {
            return Some(if value == press::ON {
                Event::ButtonDown(button)
            } else {
                Event::ButtonUp(button)
            });
        }

        let event = match target {
            code if code == Control::Encoder.code() => {
                self.encoder_mode = Some(match Direction::from_value(value) {
                    Some(_) => EncoderMode::Relative,
                    None => EncoderMode::Absolute,
                });

                Event::EncoderTurn(value)
            }
            code if code == Control::Fader.code() => Event::FaderMove(value),
            code if code == Control::Jogwheel.code() => Event::JogTurn(value),
            _ => return None,
        };

        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons() {
        let mut classifier = Classifier::default();

        assert_eq!(
            classifier.classify(&[0x90, 23, 127]),
            Some(Event::ButtonDown(Button::Play))
        );
        assert_eq!(
            classifier.classify(&[0x90, 23, 0]),
            Some(Event::ButtonUp(Button::Play))
        );
        assert_eq!(
            classifier.classify(&[0xb0, 110, 127]),
            Some(Event::ButtonDown(Button::Fader))
        );
        // Anything but ON is a release
        assert_eq!(
            classifier.classify(&[0x90, 32, 64]),
            Some(Event::ButtonUp(Button::Enter))
        );
        assert!(classifier.encoder_mode().is_none());
    }

    #[test]
    fn relative_encoder() {
        let mut classifier = Classifier::default();
        assert!(classifier.encoder_mode().is_none());

        assert_eq!(
            classifier.classify(&[176, 80, 1]),
            Some(Event::EncoderTurn(1))
        );
        assert_eq!(classifier.encoder_mode(), Some(EncoderMode::Relative));

        assert_eq!(
            classifier.classify(&[176, 80, 65]),
            Some(Event::EncoderTurn(65))
        );
        assert_eq!(classifier.encoder_mode(), Some(EncoderMode::Relative));
    }

    #[test]
    fn encoder_mode_follows_last_value() {
        let mut classifier = Classifier::default();

        classifier.classify(&[176, 80, 42]);
        assert_eq!(classifier.encoder_mode(), Some(EncoderMode::Absolute));

        classifier.classify(&[176, 80, 65]);
        assert_eq!(classifier.encoder_mode(), Some(EncoderMode::Relative));

        classifier.classify(&[176, 80, 0]);
        assert_eq!(classifier.encoder_mode(), Some(EncoderMode::Absolute));

        // other controls leave it untouched
        classifier.classify(&[176, 70, 1]);
        assert_eq!(classifier.encoder_mode(), Some(EncoderMode::Absolute));
    }

    #[test]
    fn fader_and_jogwheel() {
        let mut classifier = Classifier::default();

        assert_eq!(
            classifier.classify(&[176, 70, 100]),
            Some(Event::FaderMove(100))
        );
        assert_eq!(
            classifier.classify(&[176, 88, 65]),
            Some(Event::JogTurn(65))
        );
        assert_eq!(classifier.classify(&[0x90, 88, 1]), Some(Event::JogTurn(1)));
    }

    #[test]
    fn ignored() {
        let mut classifier = Classifier::default();

        // note off, pitch bend
        assert!(classifier.classify(&[0x80, 23, 0]).is_none());
        assert!(classifier.classify(&[0xe0, 80, 1]).is_none());
        // other channel
        assert!(classifier.classify(&[0x91, 23, 127]).is_none());
        assert!(classifier.classify(&[0xb1, 80, 1]).is_none());
        // unknown target, including the output-only fader LEDs
        assert!(classifier.classify(&[0xb0, 50, 1]).is_none());
        assert!(classifier.classify(&[0xb0, 90, 1]).is_none());
        // not a 3 bytes message
        assert!(classifier.classify(&[0xb0, 80]).is_none());
        assert!(classifier.classify(&[0xf0, 0x00, 0x20, 0x32, 0xf7]).is_none());
        assert!(classifier.classify(&[]).is_none());

        assert!(classifier.encoder_mode().is_none());
    }
}
