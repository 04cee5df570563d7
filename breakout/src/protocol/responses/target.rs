// breakout/src/protocol/responses/target.rs

use crate::card::Card;
use crate::protocol::parser;
use crate::types::Uid;
use crate::Result;

/// SEL_RES bit announcing ISO14443-4 compliance (an ATS follows the UID).
const SEL_RES_ISO14443_4: u8 = 0x20;

/// Decode an InListPassiveTarget response for 106 kbps type A targets.
/// Layout: D5 4B NbTg then per target:
/// Tg(1) SENS_RES(2) SEL_RES(1) NFCIDLength(1) NFCID1(n) [ATS(len byte + ...)]
pub fn decode_in_list_passive_target(data: &[u8]) -> Result<Vec<Card>> {
    parser::ensure_len(data, 3)?;
    parser::expect_response_code(data, 0x4B)?;

    let count = parser::byte_at(data, 2)? as usize;
    let mut cards = Vec::with_capacity(count);
    let mut pos = 3usize;

    for _ in 0..count {
        let target = parser::byte_at(data, pos)?;
        let sens_res = parser::be_u16_at(data, pos + 1)?;
        let sel_res = parser::byte_at(data, pos + 3)?;
        let uid_len = parser::byte_at(data, pos + 4)? as usize;
        let uid = Uid::try_from(parser::slice_at(data, pos + 5, uid_len)?)?;
        pos += 5 + uid_len;

        if sel_res & SEL_RES_ISO14443_4 != 0 && pos < data.len() {
            // ATS length byte counts itself
            let ats_len = parser::byte_at(data, pos)? as usize;
            pos += ats_len.max(1);
        }

        cards.push(Card::new(target, sens_res, sel_res, uid));
    }

    Ok(cards)
}
