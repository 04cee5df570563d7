// breakout/src/protocol/checksum.rs

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = 0x100 - length (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) for a PN532 frame. The payload includes the
/// frame identifier (TFI).
/// DCS = 0x100 - (sum(payload) & 0xff)
pub fn dcs(payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
