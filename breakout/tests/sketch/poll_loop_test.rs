use breakout::config::SketchConfig;
use breakout::sketch::{Outcome, Phase, Sketch};
use breakout::types::{KeyType, MifareKey};

use crate::common::fixtures;
use crate::common::scripted::{Call, Poll, RecordingDelay, ScriptedReader};

type TestSketch = Sketch<ScriptedReader, Vec<u8>, RecordingDelay>;

/// A sketch that already went through setup, with the setup transcript
/// cleared from the console.
fn polling(reader: ScriptedReader) -> TestSketch {
    let mut s = Sketch::new(
        reader,
        Vec::new(),
        RecordingDelay::default(),
        SketchConfig::default(),
    );
    assert_eq!(s.setup(), Phase::Polling);
    s
}

/// Console lines printed after setup.
fn loop_output(s: &TestSketch) -> Vec<String> {
    let out = String::from_utf8(s.console().clone()).unwrap();
    out.lines()
        .skip_while(|l| *l != "Waiting for an ISO14443A Card ...")
        .skip(1)
        .map(str::to_owned)
        .collect()
}

fn auth_call() -> Call {
    Call::Authenticate {
        uid: fixtures::uid4(),
        block: 4,
        key_type: KeyType::A,
        key: MifareKey::DEFAULT,
    }
}

#[test]
fn poll_miss_polls_again_silently() {
    let mut s = polling(ScriptedReader::pn532().poll(Poll::Miss).poll(Poll::Miss));

    assert_eq!(s.step(), Some(Outcome::NoCard));
    assert_eq!(s.step(), Some(Outcome::NoCard));

    assert_eq!(s.reader().loop_calls(), &[Call::Poll(1000), Call::Poll(1000)]);
    assert!(loop_output(&s).is_empty());
    assert!(s.delay().pauses_ms.is_empty());
    assert_eq!(s.phase(), Phase::Polling);
}

#[test]
fn poll_error_is_a_silent_miss() {
    let mut s = polling(ScriptedReader::pn532().poll(Poll::Fail));

    assert_eq!(s.step(), Some(Outcome::NoCard));
    assert!(loop_output(&s).is_empty());
    assert_eq!(s.reader().loop_calls(), &[Call::Poll(1000)]);
}

#[test]
fn seven_byte_uid_is_reported_only() {
    let mut s = polling(ScriptedReader::pn532().poll(Poll::Card(fixtures::ultralight_card())));

    assert_eq!(s.step(), Some(Outcome::Unsupported(fixtures::uid7())));
    assert_eq!(s.reader().loop_calls(), &[Call::Poll(1000)]);
    assert_eq!(
        loop_output(&s),
        vec![
            "Splendid! Found an ISO14443A card",
            "  UID Length: 7 bytes",
            "  UID Value: 0x04 0x11 0x22 0x33 0x44 0x55 0x66",
        ]
    );
    assert!(s.delay().pauses_ms.is_empty());
}

#[test]
fn authentication_failure_skips_read() {
    let reader = ScriptedReader::pn532()
        .poll(Poll::Card(fixtures::classic_card()))
        .auth(false);
    let mut s = polling(reader);

    assert_eq!(s.step(), Some(Outcome::AuthenticationFailed(fixtures::uid4())));
    assert_eq!(s.reader().loop_calls(), &[Call::Poll(1000), auth_call()]);
    assert_eq!(
        loop_output(&s),
        vec![
            "Splendid! Found an ISO14443A card",
            "  UID Length: 4 bytes",
            "  UID Value: 0xDE 0xAD 0xBE 0xEF",
            "Mifare Card obtained (4 byte UID)",
            "Trying to authenticate block 4 with default KEYA value",
            "Ooops ... authentication failed: Try another key?",
        ]
    );
    assert!(s.delay().pauses_ms.is_empty());
}

#[test]
fn read_failure_is_reported() {
    let reader = ScriptedReader::pn532()
        .poll(Poll::Card(fixtures::classic_card()))
        .auth(true)
        .read(None);
    let mut s = polling(reader);

    assert_eq!(s.step(), Some(Outcome::ReadFailed(fixtures::uid4())));
    assert_eq!(
        s.reader().loop_calls(),
        &[Call::Poll(1000), auth_call(), Call::Read(4)]
    );
    let out = loop_output(&s);
    assert_eq!(out[5], "Sector 1 (Blocks 4..7) has been authenticated");
    assert_eq!(
        out.last().unwrap(),
        "Ooops ... unable to read the requested block.  Try another key?"
    );
    assert!(s.delay().pauses_ms.is_empty());
}

#[test]
fn blank_block_is_dumped_then_settles() {
    let reader = ScriptedReader::pn532()
        .poll(Poll::Card(fixtures::classic_card()))
        .auth(true)
        .read(Some(fixtures::zero_block()));
    let mut s = polling(reader);

    assert_eq!(
        s.step(),
        Some(Outcome::BlockRead {
            uid: fixtures::uid4(),
            data: fixtures::zero_block(),
        })
    );
    let out = loop_output(&s);
    assert_eq!(
        &out[5..],
        &[
            "Sector 1 (Blocks 4..7) has been authenticated",
            "Reading Block 4:",
            "00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00  ................",
        ]
    );
    assert_eq!(s.delay().pauses_ms, vec![1000]);
}

#[test]
fn written_block_is_dumped_with_text() {
    let reader = ScriptedReader::pn532()
        .poll(Poll::Card(fixtures::classic_card()))
        .auth(true)
        .read(Some(fixtures::pave_block()));
    let mut s = polling(reader);

    assert!(matches!(s.step(), Some(Outcome::BlockRead { .. })));
    assert_eq!(
        loop_output(&s).last().unwrap(),
        "50 41 56 45 20 53 4C 4E 20 43 41 52 44 20 49 44  PAVE SLN CARD ID"
    );
    assert_eq!(s.delay().pauses_ms, vec![1000]);
}

#[test]
fn iterations_do_not_carry_state() {
    let reader = ScriptedReader::pn532()
        .poll(Poll::Card(fixtures::classic_card()))
        .auth(false)
        .poll(Poll::Miss)
        .poll(Poll::Card(fixtures::classic_card()))
        .auth(true)
        .read(Some(fixtures::pave_block()));
    let mut s = polling(reader);

    assert!(matches!(s.step(), Some(Outcome::AuthenticationFailed(_))));
    assert_eq!(s.step(), Some(Outcome::NoCard));
    assert!(matches!(s.step(), Some(Outcome::BlockRead { .. })));

    let auths = s
        .reader()
        .loop_calls()
        .iter()
        .filter(|c| matches!(c, Call::Authenticate { .. }))
        .count();
    assert_eq!(auths, 2);
    assert_eq!(s.delay().pauses_ms, vec![1000]);
}

#[test]
fn custom_config_drives_block_and_key() {
    let key = MifareKey::new([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);
    let config = SketchConfig {
        block: 9,
        key_type: KeyType::B,
        key,
        settle_delay_ms: 250,
        poll_timeout_ms: 50,
    };
    let reader = ScriptedReader::pn532()
        .poll(Poll::Card(fixtures::classic_card()))
        .auth(true)
        .read(Some(fixtures::zero_block()));
    let mut s = Sketch::new(reader, Vec::new(), RecordingDelay::default(), config);
    s.setup();

    assert!(matches!(s.step(), Some(Outcome::BlockRead { .. })));
    assert_eq!(
        s.reader().loop_calls(),
        &[
            Call::Poll(50),
            Call::Authenticate {
                uid: fixtures::uid4(),
                block: 9,
                key_type: KeyType::B,
                key,
            },
            Call::Read(9),
        ]
    );
    let out = loop_output(&s);
    assert!(out.contains(&"Trying to authenticate block 9 with KEYB value".to_string()));
    assert!(out.contains(&"Sector 2 (Blocks 8..11) has been authenticated".to_string()));
    assert_eq!(s.delay().pauses_ms, vec![250]);
}

#[test]
fn default_key_b_is_called_default() {
    let config = SketchConfig {
        key_type: KeyType::B,
        ..SketchConfig::default()
    };
    let reader = ScriptedReader::pn532()
        .poll(Poll::Card(fixtures::classic_card()))
        .auth(false);
    let mut s = Sketch::new(reader, Vec::new(), RecordingDelay::default(), config);
    s.setup();

    assert!(matches!(s.step(), Some(Outcome::AuthenticationFailed(_))));
    assert_eq!(
        loop_output(&s)[4],
        "Trying to authenticate block 4 with default KEYB value"
    );
}
