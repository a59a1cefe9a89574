use xtouch_one::{
    midi::MsgList,
    xtouch::{lcd, segments, sysex, Button, Color, Invert, LightStatus, Pad},
    XTouchOne,
};

fn clear_all() -> Vec<Vec<u8>> {
    let mut device = XTouchOne::new(MsgList::new());
    device.clear().unwrap();

    device
        .into_output()
        .into_iter()
        .map(|msg| msg.to_vec())
        .collect()
}

fn count(sent: &[Vec<u8>], expected: &[u8]) -> usize {
    sent.iter().filter(|msg| msg.as_slice() == expected).count()
}

#[test]
fn every_light_off_once() {
    let sent = clear_all();

    for button in Button::ALL {
        let off = [0xb0, button.code(), LightStatus::Off.value()];
        assert_eq!(count(&sent, &off), 1, "{button}");
    }
}

#[test]
fn levels_zeroed_once() {
    let sent = clear_all();

    for control in [70, 90, 80] {
        assert_eq!(count(&sent, &[0xb0, control, 0]), 1, "control {control}");
    }
}

#[test]
fn displays_blanked_once() {
    let sent = clear_all();

    let blank_segments = sysex::frame(&segments::encode(&" ".repeat(12), Pad::Start));
    assert_eq!(count(&sent, &blank_segments), 1);

    let blank_lcd = sysex::frame(&lcd::encode(&"".into(), Color::Black, Invert::empty()));
    assert_eq!(count(&sent, &blank_lcd), 1);
    assert_eq!(&blank_lcd[5..8], &[0x4c, 0x00, 0x00]);
    assert!(blank_lcd[8..22].iter().all(|&b| b == b' '));
}

#[test]
fn nothing_else() {
    let sent = clear_all();
    assert_eq!(sent.len(), Button::ALL.len() + 3 + 2);
}
