use std::{borrow::Cow, fmt};

/// Hex rendering of a raw byte sequence, for logs and error messages.
#[derive(Debug)]
pub struct Displayable<'a>(Cow<'a, [u8]>);

impl<'a> From<&'a [u8]> for Displayable<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self(Cow::Borrowed(buf))
    }
}

impl From<Vec<u8>> for Displayable<'static> {
    fn from(buf: Vec<u8>) -> Self {
        Self(Cow::Owned(buf))
    }
}

impl<'a> Displayable<'a> {
    pub fn to_owned(&self) -> Displayable<'static> {
        Displayable::from(self.0.to_vec())
    }
}

impl<'a> fmt::Display for Displayable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();

        match iter.next() {
            Some(first) => write!(f, "{first:02x}")?,
            None => return f.write_str("(empty)"),
        };

        for byte in iter {
            write!(f, " {byte:02x}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Displayable;

    #[test]
    fn hex_bytes() {
        let frame = [0xf0, 0x00, 0x20, 0x32, 0x41, 0x37, 0xf7];
        assert_eq!(
            Displayable::from(frame.as_slice()).to_string(),
            "f0 00 20 32 41 37 f7"
        );
    }

    #[test]
    fn empty() {
        assert_eq!(Displayable::from(&[][..]).to_string(), "(empty)");
    }

    #[test]
    fn owned_outlives_source() {
        let owned = {
            let buf = vec![0xb0, 70, 127];
            Displayable::from(buf.as_slice()).to_owned()
        };
        assert_eq!(owned.to_string(), "b0 46 7f");
    }
}
