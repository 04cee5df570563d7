//! Hexadecimal helpers used for debugging and console output.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Uppercase bytes, each prefixed with ` 0x`, as printed for UIDs.
///
/// Example: `&[0xde, 0xad]` -> `" 0xDE 0xAD"`
pub fn bytes_to_hex_prefixed(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 5);
    for b in bytes {
        let _ = write!(&mut s, " 0x{:02X}", b);
    }
    s
}

/// Uppercase hex bytes followed by their printable characters, non-printable
/// bytes shown as `.`.
///
/// Example: `b"Hi\x00"` -> `"48 69 00  Hi."`
pub fn hex_char_dump(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 4 + 2);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s.push_str("  ");
    for &b in bytes {
        s.push(if b.is_ascii_graphic() || b == b' ' {
            b as char
        } else {
            '.'
        });
    }
    s
}
