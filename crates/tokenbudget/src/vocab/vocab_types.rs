//! # Vocabulary Map Types

use crate::types::TBHashMap;

/// Map from a byte span to its token.
pub type SpanTokenMap<T> = TBHashMap<Vec<u8>, T>;

/// Map from a token to its byte span.
pub type TokenSpanMap<T> = TBHashMap<T, Vec<u8>>;
