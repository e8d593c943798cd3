//! # `DataGym` Merges IO
//!
//! The legacy GPT-2 "vocab.bpe" format: an ordered list of merge pairs,
//! written in a byte-remapped printable alphabet.
//!
//! Every printable, non-whitespace ISO/IEC 8859-1 byte
//! (`[0x21-0x7E]`, `[0xA1-0xAD)`, `(0xAD-0xFF]`) stands for itself;
//! the remaining 68 bytes are written as `U+0100 + n`, in byte order.
//! When the file is read as UTF-8 these show up as "mojibake", and
//! the [`MojibakeMap`] translates them back to bytes.

use std::io::BufRead;

use crate::{
    errors::{TBError, TBResult},
    types::{TBHashMap, TokenType},
    vocab::{SpanTokenMap, validators::try_token},
};

/// A map from mojibake characters to the bytes they stand for.
pub type MojibakeMap = TBHashMap<char, u8>;

/// Number of bytes with no printable stand-in.
const REMAPPED_BYTE_COUNT: u32 = 68;

/// The single-byte rank order, and the character map, for datagym files.
///
/// ## Returns
/// `(rank_to_byte, mojibake_map)`; `rank_to_byte[r]` is the byte with rank `r`.
pub fn datagym_byte_order() -> (Vec<u8>, MojibakeMap) {
    let mut rank_to_byte: Vec<u8> = Vec::with_capacity(256);
    rank_to_byte.extend(0x21..=0x7E);
    rank_to_byte.extend(0xA1..0xAD);
    rank_to_byte.extend(0xAE..=0xFF);

    let mut mojibake_map: MojibakeMap = rank_to_byte.iter().map(|&b| (char::from(b), b)).collect();

    let mut printable = [false; 256];
    for &b in &rank_to_byte {
        printable[b as usize] = true;
    }

    let mut n = 0u32;
    for b in 0..=255u8 {
        if printable[b as usize] {
            continue;
        }
        rank_to_byte.push(b);
        // 256 + n < 0x1_0000 is always a valid scalar value.
        if let Some(c) = char::from_u32(256 + n) {
            mojibake_map.insert(c, b);
        }
        n += 1;
    }
    debug_assert_eq!(n, REMAPPED_BYTE_COUNT);
    debug_assert_eq!(rank_to_byte.len(), 256);

    (rank_to_byte, mojibake_map)
}

/// Translate a mojibake word back into bytes.
fn decode_mojibake(
    mojibake_map: &MojibakeMap,
    word: &str,
    line_no: usize,
) -> TBResult<Vec<u8>> {
    word.chars()
        .map(|c| {
            mojibake_map
                .get(&c)
                .copied()
                .ok_or_else(|| TBError::parse(line_no, format!("character {c:?} is not remapped")))
        })
        .collect()
}

/// Read a datagym "vocab.bpe" merges file into a [`SpanTokenMap`].
///
/// Ranks are assigned in two phases: the 256 single bytes in
/// [`datagym_byte_order`], then each merge in file order, the merged
/// span being the concatenation of its operands' bytes.
///
/// `#version` lines and blank lines are skipped.
pub fn read_datagym_span_map<T, R>(reader: R) -> TBResult<SpanTokenMap<T>>
where
    T: TokenType,
    R: BufRead,
{
    let (rank_to_byte, mojibake_map) = datagym_byte_order();

    let mut span_map: SpanTokenMap<T> = SpanTokenMap::default();
    for (rank, &b) in rank_to_byte.iter().enumerate() {
        span_map.insert(vec![b], try_token(rank as u64)?);
    }

    let mut next_rank = rank_to_byte.len() as u64;
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| TBError::parse(line_no, e))?;
        if line.starts_with("#version") || line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(first), Some(second), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(TBError::parse(line_no, "expected `<first> <second>`"));
        };

        let mut span = decode_mojibake(&mojibake_map, first, line_no)?;
        span.extend(decode_mojibake(&mojibake_map, second, line_no)?);

        if span_map.insert(span, try_token(next_rank)?).is_some() {
            return Err(TBError::parse(line_no, "merge duplicates an earlier span"));
        }
        next_rank += 1;
    }

    Ok(span_map)
}
