//! # Vocabulary File IO
//!
//! Decoders from raw vocabulary file bytes into [`RankTable`](crate::vocab::RankTable)s.

pub mod base64_vocab;
pub mod datagym_vocab;

pub use base64_vocab::{read_base64_span_map, write_base64_span_map};
pub use datagym_vocab::{MojibakeMap, datagym_byte_order, read_datagym_span_map};
