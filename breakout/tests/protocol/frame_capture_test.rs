use breakout::protocol::codec::{decode_response_frame, encode_command_frame};
use breakout::protocol::{Command, Frame, Response};

// GetFirmwareVersion reply from a PN532 v1.6 breakout
fn firmware_capture() -> Vec<u8> {
    hex::decode("0000ff06fad50332010607e800").unwrap()
}

#[test]
fn captured_firmware_reply_decodes() {
    match decode_response_frame(0x02, &firmware_capture()).unwrap() {
        Response::FirmwareVersion(v) => {
            assert_eq!(v.raw(), 0x3201_0607);
            assert_eq!(format!("PN5{:02X}", v.ic()), "PN532");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn captured_reply_survives_spi_padding() {
    // A data read starts with the DR echo slot and ends in idle bytes
    let mut window = vec![0x01];
    window.extend_from_slice(&firmware_capture());
    window.resize(64, 0x00);
    assert_eq!(Frame::locate(&window).unwrap(), firmware_capture());
}

#[test]
fn in_list_passive_target_frame() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        brty: 0x00,
    };
    assert_eq!(
        encode_command_frame(&cmd).unwrap(),
        vec![0x00, 0x00, 0xFF, 0x04, 0xFC, 0xD4, 0x4A, 0x01, 0x00, 0xE1, 0x00]
    );
}

#[test]
fn read_block_frame() {
    let cmd = Command::InDataExchange {
        target: 1,
        data: vec![0x30, 0x04],
    };
    assert_eq!(
        encode_command_frame(&cmd).unwrap(),
        vec![0x00, 0x00, 0xFF, 0x05, 0xFB, 0xD4, 0x40, 0x01, 0x30, 0x04, 0xB7, 0x00]
    );
}

#[test]
fn oversized_payload_is_rejected() {
    let payload = vec![0xD4; 256];
    assert!(Frame::encode(&payload).is_err());
}
