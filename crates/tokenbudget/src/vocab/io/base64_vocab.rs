//! # Base64 Rank File IO
//!
//! The rank file format used by the modern vocabularies. Lines are:
//! ```terminaloutput
//! {BASE64 SPAN} {DECIMAL RANK}
//! ```
//! There is no header; blank lines are ignored.

use std::io::{BufRead, Write};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{TBError, TBResult},
    types::TokenType,
    vocab::{SpanTokenMap, validators::try_token},
};

/// Read a [`SpanTokenMap`] from a base64 rank file line reader.
///
/// ## Returns
/// The span map, or [`TBError::Parse`] naming the first malformed line.
pub fn read_base64_span_map<T, R>(reader: R) -> TBResult<SpanTokenMap<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut span_map = SpanTokenMap::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| TBError::parse(line_no, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let (span, rank) = line
            .split_once(' ')
            .ok_or_else(|| TBError::parse(line_no, "expected `<base64> <rank>`"))?;

        let span = BASE64_STANDARD
            .decode(span)
            .map_err(|e| TBError::parse(line_no, format!("bad base64 span: {e}")))?;

        let rank: u64 = rank
            .parse()
            .map_err(|e| TBError::parse(line_no, format!("bad rank {rank:?}: {e}")))?;
        let rank: T = try_token(rank)?;

        if span_map.insert(span, rank).is_some() {
            return Err(TBError::parse(line_no, "duplicate span"));
        }
    }

    Ok(span_map)
}

/// Write a [`SpanTokenMap`] as a base64 rank file, in rank order.
pub fn write_base64_span_map<T, W>(
    span_map: &SpanTokenMap<T>,
    writer: &mut W,
) -> TBResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut items: Vec<(T, &Vec<u8>)> = span_map
        .iter()
        .map(|(span, &token)| (token, span))
        .collect();
    items.sort_by_key(|(t, _)| *t);

    for (token, span) in items {
        let rank = token.to_u64().ok_or(TBError::TokenOutOfRange)?;
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(span), rank)?;
    }

    Ok(())
}
