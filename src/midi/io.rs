use crossbeam_channel as channel;
use std::sync::Arc;

use super::{
    port::{self, Direction},
    Error, Msg,
};

/// Input and output MIDI connections to the same device.
///
/// Inbound messages are forwarded on the channel handed to [`Connection::connect`]
/// so they can be processed by the thread which owns the device.
pub struct Connection {
    input: Option<(Arc<str>, midir::MidiInputConnection<()>)>,
    output: Option<(Arc<str>, midir::MidiOutputConnection)>,
}

impl Connection {
    pub fn connect(
        client_name: &str,
        in_pattern: &str,
        out_pattern: &str,
        msg_tx: channel::Sender<Msg>,
    ) -> Result<Self, Error> {
        let midi_in = midir::MidiInput::new(client_name)?;
        let (in_name, in_port) = port::lookup(&midi_in, Direction::In, client_name, in_pattern)?;

        let midi_out = midir::MidiOutput::new(client_name)?;
        let (out_name, out_port) =
            port::lookup(&midi_out, Direction::Out, client_name, out_pattern)?;

        let input = midi_in
            .connect(
                &in_port,
                &format!("{client_name} In"),
                move |_ts, buf, _| {
                    let _ = msg_tx.send(Msg::from(buf));
                },
                (),
            )
            .map_err(|_| {
                let err = Error::Connection(in_name.clone());
                log::error!("{err}");
                err
            })?;
        log::info!("Connected for Input to {in_name}");

        let output = midi_out
            .connect(&out_port, &format!("{client_name} Out"))
            .map_err(|_| {
                let err = Error::Connection(out_name.clone());
                log::error!("{err}");
                err
            })?;
        log::info!("Connected for Output to {out_name}");

        Ok(Self {
            input: Some((in_name, input)),
            output: Some((out_name, output)),
        })
    }

    pub fn is_connected(&self) -> bool {
        self.input.is_some() && self.output.is_some()
    }

    pub fn disconnect(&mut self) {
        if let Some((name, conn)) = self.input.take() {
            conn.close();
            log::debug!("Disconnected Input from {name}");
        }

        if let Some((name, conn)) = self.output.take() {
            conn.close();
            log::debug!("Disconnected Output from {name}");
        }
    }
}

impl super::Output for Connection {
    fn send(&mut self, msg: &[u8]) -> Result<(), Error> {
        match self.output {
            Some((_, ref mut conn)) => {
                conn.send(msg).map_err(|err| {
                    log::error!(
                        "Failed to send MIDI msg {}: {err}",
                        crate::bytes::Displayable::from(msg)
                    );
                    err
                })?;
            }
            None => {
                log::warn!("Attempt to send a msg, but MIDI Out is not connected");
                return Err(Error::NotConnected);
            }
        }

        Ok(())
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.disconnect();
    }
}
