//! # Vocabulary Tables
//!
//! * [`RankTable`] / [`InverseRankTable`] - the byte-sequence <=> rank bijection.
//! * [`SpecialVocab`] - literal special-token strings and their reserved ids.
//! * [`io`] - rank file and legacy merges file decoders.

pub mod io;
pub(crate) mod rank_table;
mod special_vocab;
pub mod validators;
mod vocab_types;

pub use rank_table::{InverseRankTable, RankTable};
pub use special_vocab::SpecialVocab;
pub use vocab_types::{SpanTokenMap, TokenSpanMap};
