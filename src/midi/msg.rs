use super::{sysex, Error};
use crate::bytes;

/// One complete MIDI message as exchanged with the transport.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Msg(Box<[u8]>);

impl Msg {
    pub fn inner(&self) -> &[u8] {
        self.0.as_ref()
    }

    pub fn display(&self) -> bytes::Displayable {
        bytes::Displayable::from(self.0.as_ref())
    }

    /// Wraps `data` between the SysEx start and end tags.
    pub fn new_sysex(data: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(data.len() + 2);

        buf.push(sysex::TAG);
        buf.extend_from_slice(data);
        buf.push(sysex::END_TAG);

        Self(buf.into())
    }

    /// Returns the data between the SysEx start and end tags.
    pub fn parse_sysex(&self) -> Result<&[u8], Error> {
        match self.0.as_ref() {
            [sysex::TAG, data @ .., sysex::END_TAG] => Ok(data),
            [sysex::TAG, ..] => Err(Error::InvalidSysExFinalTag(self.display().to_owned())),
            _ => Err(Error::InvalidSysExInitTag(self.display().to_owned())),
        }
    }
}

impl<const S: usize> From<[u8; S]> for Msg {
    fn from(buf: [u8; S]) -> Self {
        Self(buf.into())
    }
}

impl From<&[u8]> for Msg {
    fn from(buf: &[u8]) -> Self {
        Self(buf.into())
    }
}

impl From<Vec<u8>> for Msg {
    fn from(buf: Vec<u8>) -> Self {
        Self(buf.into())
    }
}

impl std::ops::Deref for Msg {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Ordered list of outgoing messages.
///
/// Also usable as an [`Output`](super::Output) which records
/// every message sent through it.
#[derive(Debug, Default)]
pub struct MsgList(Vec<Msg>);

impl MsgList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, msg: impl Into<Msg>) {
        self.0.push(msg.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Msg> {
        self.0.iter()
    }
}

impl super::Output for MsgList {
    fn send(&mut self, msg: &[u8]) -> Result<(), Error> {
        self.push(msg);
        Ok(())
    }
}

impl IntoIterator for MsgList {
    type Item = Msg;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MsgList {
    type Item = &'a Msg;
    type IntoIter = std::slice::Iter<'a, Msg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Into<Msg>> From<T> for MsgList {
    fn from(msg: T) -> Self {
        Self(vec![msg.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi::Output;

    #[test]
    fn sysex_envelope() {
        let msg = Msg::new_sysex(&[0x00, 0x20, 0x32]);
        assert_eq!(msg.inner(), &[0xf0, 0x00, 0x20, 0x32, 0xf7]);
        assert_eq!(msg.parse_sysex().unwrap(), &[0x00, 0x20, 0x32]);

        let empty = Msg::new_sysex(&[]);
        assert_eq!(empty.inner(), &[0xf0, 0xf7]);
        assert!(empty.parse_sysex().unwrap().is_empty());
    }

    #[test]
    fn sysex_invalid_tags() {
        assert!(matches!(
            Msg::from([0xb0, 70, 0]).parse_sysex(),
            Err(Error::InvalidSysExInitTag(_))
        ));
        assert!(matches!(
            Msg::from([0xf0, 0x00, 0x20]).parse_sysex(),
            Err(Error::InvalidSysExFinalTag(_))
        ));
        assert!(matches!(
            Msg::default().parse_sysex(),
            Err(Error::InvalidSysExInitTag(_))
        ));
    }

    #[test]
    fn msg_list_records() {
        let mut list = MsgList::new();
        list.send(&[0xb0, 1, 127]).unwrap();
        list.push([0xb0, 2, 0]);

        assert_eq!(list.len(), 2);
        let msgs: Vec<Msg> = list.into_iter().collect();
        assert_eq!(msgs[0].inner(), &[0xb0, 1, 127]);
        assert_eq!(msgs[1].inner(), &[0xb0, 2, 0]);
    }
}
