use std::{fmt, sync::Arc};

use super::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    In,
    Out,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "input",
            Direction::Out => "output",
        }
    }
}

#[derive(Debug, Default)]
pub struct PortNames {
    pub ins: Vec<Arc<str>>,
    pub outs: Vec<Arc<str>>,
}

/// Lists the input and output ports currently available,
/// except those opened by this client.
pub fn list(client_name: &str) -> Result<PortNames, Error> {
    let midi_in = midir::MidiInput::new(&format!("{client_name} list In ports"))?;
    let midi_out = midir::MidiOutput::new(&format!("{client_name} list Out ports"))?;

    let names = PortNames {
        ins: names_of(&midi_in, client_name)?,
        outs: names_of(&midi_out, client_name)?,
    };

    log::debug!("MIDI input ports: {:?}", names.ins);
    log::debug!("MIDI output ports: {:?}", names.outs);

    Ok(names)
}

/// Returns the first name containing `pattern`, ignoring case.
pub fn find<'a>(names: impl IntoIterator<Item = &'a Arc<str>>, pattern: &str) -> Option<Arc<str>> {
    let pattern = pattern.to_lowercase();

    names
        .into_iter()
        .find(|name| name.to_lowercase().contains(&pattern))
        .cloned()
}

fn names_of<IO: midir::MidiIO>(io: &IO, client_name: &str) -> Result<Vec<Arc<str>>, Error> {
    let mut names = Vec::new();

    for port in io.ports().iter() {
        let name = io.port_name(port)?;
        if !name.starts_with(client_name) {
            names.push(name.into());
        }
    }

    Ok(names)
}

/// Resolves the first port of `io` whose name matches `pattern`.
pub(super) fn lookup<IO: midir::MidiIO>(
    io: &IO,
    direction: Direction,
    client_name: &str,
    pattern: &str,
) -> Result<(Arc<str>, IO::Port), Error> {
    let lowercase = pattern.to_lowercase();

    for port in io.ports() {
        let name = io.port_name(&port)?;
        if name.starts_with(client_name) {
            continue;
        }

        let is_match = name.to_lowercase().contains(&lowercase);
        log::debug!(
            "{direction} port {name}{}",
            if is_match { " (match)" } else { "" }
        );

        if is_match {
            return Ok((name.into(), port));
        }
    }

    Err(Error::PortNotFound {
        direction: direction.as_str(),
        pattern: pattern.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_case() {
        let names: Vec<Arc<str>> = vec![
            "Midi Through:Midi Through Port-0 14:0".into(),
            "X-Touch One:X-Touch One MIDI 1 24:0".into(),
        ];

        assert_eq!(
            find(&names, "x-touch one").as_deref(),
            Some("X-Touch One:X-Touch One MIDI 1 24:0")
        );
        assert_eq!(
            find(&names, "THROUGH").as_deref(),
            Some("Midi Through:Midi Through Port-0 14:0")
        );
        assert!(find(&names, "launchpad").is_none());
    }

    #[test]
    fn find_first_match() {
        let names: Vec<Arc<str>> = vec!["X-Touch 1".into(), "X-Touch 2".into()];
        assert_eq!(find(&names, "x-touch").as_deref(), Some("X-Touch 1"));
    }
}
