//! # Byte Pair Encoding Engine
//!
//! * [`byte_pair`] - the rank-priority merge of a single chunk.
//! * [`CoreBpe`] - chunking, special-token scanning, and decoding.

pub mod byte_pair;
mod core_bpe;

pub use core_bpe::CoreBpe;
