use crate::midi;

/// Behringer manufacturer id followed by the X-Touch One device id.
pub const HEADER: [u8; 4] = [0x00, 0x20, 0x32, 0x41];

/// Wraps `payload` in the X-Touch One SysEx envelope:
/// `F0 00 20 32 41 <payload> F7`.
pub fn frame(payload: &[u8]) -> midi::Msg {
    let mut data = Vec::with_capacity(HEADER.len() + payload.len());
    data.extend_from_slice(&HEADER);
    data.extend_from_slice(payload);

    midi::Msg::new_sysex(&data)
}
