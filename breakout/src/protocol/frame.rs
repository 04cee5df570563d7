// breakout/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK, PN532_MAX_PAYLOAD_LEN, PN532_MIN_FRAME_LEN, PN532_NACK, PN532_POSTAMBLE,
    PN532_PREAMBLE, PN532_START_CODE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame helper.
/// Format: [Preamble(3)] [Len(1)] [LCS(1)] [TFI + Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00 0x00 0xFF
/// Postamble: 0x00
pub struct Frame;

impl Frame {
    /// Encode a payload (starting with the TFI byte) into a full frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.is_empty() {
            return Err(Error::FrameFormat("empty payload".into()));
        }
        if payload.len() > PN532_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(PN532_MIN_FRAME_LEN + payload.len());
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Decode a full frame and return the payload (TFI included)
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if Self::is_ack(frame) || Self::is_nack(frame) {
            return Err(Error::FrameFormat("ack/nack where a response was expected".into()));
        }

        // Minimal frame length: preamble(3) + len(1) + lcs(1) + dcs(1) + postamble(1)
        if frame.len() < PN532_MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }

        if frame[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = frame[3];
        let lcs_actual = frame[4];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        let required_len = PN532_MIN_FRAME_LEN + len as usize;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let payload_start = 5usize;
        let payload_end = payload_start + (len as usize);
        let payload = &frame[payload_start..payload_end];

        let dcs_actual = frame[payload_end];
        let dcs_expected = dcs(payload);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[payload_end + 1] != PN532_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        // Syntax error frame: single 0x7F payload
        if payload == [0x7F] {
            return Err(Error::ApplicationError);
        }

        Ok(payload.to_vec())
    }

    pub fn is_ack(frame: &[u8]) -> bool {
        frame == PN532_ACK
    }

    pub fn is_nack(frame: &[u8]) -> bool {
        frame == PN532_NACK
    }

    /// Cut the first complete frame out of a padded read buffer and return
    /// it with a canonical `00 00 FF` preamble. Transports that read a fixed
    /// window (SPI) hand their raw buffer here.
    pub fn locate(raw: &[u8]) -> Result<Vec<u8>> {
        let start = raw
            .windows(2)
            .position(|w| w == PN532_START_CODE)
            .ok_or_else(|| Error::FrameFormat("no start code".into()))?;
        let body = &raw[start + 2..];

        if body.len() < 2 {
            return Err(Error::InvalidLength {
                expected: start + 4,
                actual: raw.len(),
            });
        }

        // ACK: 00 FF 00 / NACK: FF 00 00 after the start code
        let total = if body[..2] == [0x00, 0xFF] || body[..2] == [0xFF, 0x00] {
            3
        } else {
            // len, lcs, payload, dcs, postamble
            body[0] as usize + 4
        };

        if body.len() < total {
            return Err(Error::InvalidLength {
                expected: start + 2 + total,
                actual: raw.len(),
            });
        }

        let mut out = Vec::with_capacity(total + 3);
        out.extend_from_slice(&PN532_PREAMBLE);
        out.extend_from_slice(&body[..total]);
        Ok(out)
    }
}
