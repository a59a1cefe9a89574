use crossbeam_channel as channel;
use std::time::{Duration, Instant};

use xtouch_one::{
    midi,
    xtouch::{Button, Color, Direction, EncoderMode, Event, Invert, Level, LightStatus, Pad},
    XTouchOne,
};

#[derive(clap::Subcommand, Clone, Copy, Debug, PartialEq)]
pub enum Demo {
    /// List MIDI ports
    List,
    /// Light buttons while they are held
    Echo,
    /// Jog wheel moves the fader, the fader moves its LEDs, Scrub toggles fine steps
    Fader,
    /// Encoder in relative mode drives the ring
    Encoder,
    /// Fader position selects the LCD message
    Lcd,
    /// Transport buttons show messages on the 7-segment display
    Segments,
    /// Elapsed time on the 7-segment display
    Clock,
}

trait Handler<O: midi::Output> {
    fn start(&mut self, _device: &mut XTouchOne<O>) -> Result<(), midi::Error> {
        Ok(())
    }

    fn event(&mut self, device: &mut XTouchOne<O>, event: Event) -> Result<(), midi::Error>;

    fn tick(&mut self, _device: &mut XTouchOne<O>) -> Result<(), midi::Error> {
        Ok(())
    }
}

const CLOCK_PERIOD: Duration = Duration::from_millis(32);

/// Runs `demo` until Enter is pressed or the device is disconnected.
///
/// The device is cleared before returning.
pub fn run<O: midi::Output + 'static>(
    demo: Demo,
    device: &mut XTouchOne<O>,
    msg_rx: channel::Receiver<midi::Msg>,
) -> Result<(), midi::Error> {
    let mut handler: Box<dyn Handler<O>> = match demo {
        Demo::List => return Ok(()),
        Demo::Echo => Box::new(Echo),
        Demo::Fader => Box::<Fader>::default(),
        Demo::Encoder => Box::<Encoder>::default(),
        Demo::Lcd => Box::new(Lcd),
        Demo::Segments => Box::new(Segments),
        Demo::Clock => Box::new(Clock::new()),
    };

    let ticker = if demo == Demo::Clock {
        channel::tick(CLOCK_PERIOD)
    } else {
        channel::never()
    };

    device.clear()?;
    handler.start(device)?;
    log::info!("Running {demo:?} demo, press Enter to quit");

    loop {
        channel::select! {
            recv(msg_rx) -> msg => {
                let msg = match msg {
                    Ok(msg) => msg,
                    Err(err) => {
                        log::error!("Error MIDI msg channel: {err}");
                        break;
                    }
                };

                let Some(event) = device.handle_msg(&msg) else {
                    continue;
                };

                if event == Event::ButtonDown(Button::Enter) {
                    break;
                }

                handler.event(device, event)?;
            }
            recv(ticker) -> _ => handler.tick(device)?,
        }
    }

    device.clear()
}

struct Echo;

impl<O: midi::Output> Handler<O> for Echo {
    fn event(&mut self, device: &mut XTouchOne<O>, event: Event) -> Result<(), midi::Error> {
        match event {
            Event::ButtonDown(button) => device.light(button, LightStatus::On)?,
            Event::ButtonUp(button) => device.light(button, LightStatus::Off)?,
            _ => (),
        }

        Ok(())
    }
}

#[derive(Default)]
struct Fader {
    level: i32,
    is_scrubbing: bool,
}

impl<O: midi::Output> Handler<O> for Fader {
    fn event(&mut self, device: &mut XTouchOne<O>, event: Event) -> Result<(), midi::Error> {
        match event {
            Event::JogTurn(value) => {
                let step = if self.is_scrubbing { 1 } else { 10 };
                match Direction::from_value(value) {
                    Some(Direction::Left) => self.level -= step,
                    Some(Direction::Right) => self.level += step,
                    None => return Ok(()),
                }

                self.level = Level::clamp(self.level).value() as i32;
                device.set_fader_level(self.level)?;
            }
            Event::FaderMove(value) => {
                self.level = value as i32;
                device.set_fader_led_level(self.level)?;
            }
            Event::ButtonDown(Button::Scrub) => {
                self.is_scrubbing = !self.is_scrubbing;
                let status = if self.is_scrubbing {
                    LightStatus::Blink
                } else {
                    LightStatus::Off
                };
                device.light(Button::Scrub, status)?;
            }
            _ => (),
        }

        Ok(())
    }
}

#[derive(Default)]
struct Encoder {
    level: i32,
}

impl<O: midi::Output> Handler<O> for Encoder {
    fn event(&mut self, device: &mut XTouchOne<O>, event: Event) -> Result<(), midi::Error> {
        if let Event::EncoderTurn(value) = event {
            if device.encoder_mode() != Some(EncoderMode::Relative) {
                log::info!("Encoder in absolute mode, ignoring");
                return Ok(());
            }

            match Direction::from_value(value) {
                Some(Direction::Left) => self.level -= 10,
                _ => self.level += 10,
            }

            self.level = Level::clamp(self.level).value() as i32;
            device.set_encoder_ring_level(self.level)?;
        }

        Ok(())
    }
}

struct Lcd;

impl<O: midi::Output> Handler<O> for Lcd {
    fn start(&mut self, device: &mut XTouchOne<O>) -> Result<(), midi::Error> {
        device.set_lcd("CH1    Main", Color::Blue, Invert::TOP)
    }

    fn event(&mut self, device: &mut XTouchOne<O>, event: Event) -> Result<(), midi::Error> {
        match event {
            Event::FaderMove(value) if value == Level::MAX.value() => {
                device.set_lcd(["You", "Lost"], Color::Red, Invert::BOTTOM)?
            }
            Event::FaderMove(_) => device.set_lcd("CH1    Main", Color::Blue, Invert::TOP)?,
            _ => (),
        }

        Ok(())
    }
}

struct Segments;

impl Segments {
    const MESSAGES: [(Button, &'static str); 5] = [
        (Button::Rewind, "123.45678.9.012"),
        (Button::Forward, "foo.bar"),
        (Button::Stop, "got milk?"),
        (Button::Play, "01.23.45   "),
        (Button::Rec, "004258023"),
    ];
}

impl<O: midi::Output> Handler<O> for Segments {
    fn event(&mut self, device: &mut XTouchOne<O>, event: Event) -> Result<(), midi::Error> {
        match event {
            Event::ButtonDown(pressed) => {
                let Some(&(_, text)) = Self::MESSAGES.iter().find(|(b, _)| *b == pressed) else {
                    return Ok(());
                };

                for (button, _) in Self::MESSAGES {
                    device.light(button, LightStatus::from(button == pressed))?;
                }

                device.set_segment_display(text, Pad::Start)?;
            }
            Event::ButtonUp(button) => log::info!("{button}"),
            _ => (),
        }

        Ok(())
    }
}

struct Clock {
    start: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

/// Formats `elapsed` as `HH.MM.SS.FFF`, frames being 32ms long.
fn timecode(elapsed: Duration) -> String {
    let s_total = elapsed.as_secs();
    let frames = elapsed.subsec_millis() / CLOCK_PERIOD.as_millis() as u32;

    format!(
        "{:02}.{:02}.{:02}.{:03}",
        s_total / 3600,
        (s_total / 60) % 60,
        s_total % 60,
        frames,
    )
}

impl<O: midi::Output> Handler<O> for Clock {
    fn start(&mut self, _device: &mut XTouchOne<O>) -> Result<(), midi::Error> {
        self.start = Instant::now();
        Ok(())
    }

    fn event(&mut self, _device: &mut XTouchOne<O>, _event: Event) -> Result<(), midi::Error> {
        Ok(())
    }

    fn tick(&mut self, device: &mut XTouchOne<O>) -> Result<(), midi::Error> {
        device.set_segment_display(&timecode(self.start.elapsed()), Pad::Start)
    }
}
