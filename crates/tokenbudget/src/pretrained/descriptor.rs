//! # Vocabulary Descriptors

use crate::{
    errors::TBResult,
    regex::ConstRegexPattern,
    resources::{RankFileFormat, cache_key},
    types::TokenType,
    vocab::SpecialVocab,
};

/// Static description of one named vocabulary.
///
/// Descriptors are `const` catalog entries; loading one produces an
/// [`Encoding`](crate::Encoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabDescriptor {
    /// The vocabulary name; e.g. `"cl100k_base"`.
    pub name: &'static str,

    /// The URL or path of the rank data.
    pub source: &'static str,

    /// Optional lowercase hex SHA-256 of the rank data.
    pub content_hash: Option<&'static str>,

    /// The published total vocabulary size, if any.
    ///
    /// Informational; a mismatch with the loaded data is logged.
    pub explicit_vocab_size: Option<usize>,

    /// The chunking pattern.
    pub pattern: ConstRegexPattern,

    /// Special token words and their ids.
    pub specials: &'static [(&'static str, usize)],
}

impl VocabDescriptor {
    /// The wire format of [`Self::source`].
    pub fn format(&self) -> RankFileFormat {
        RankFileFormat::for_vocab_name(self.name)
    }

    /// The cache key of [`Self::source`].
    pub fn cache_key(&self) -> String {
        cache_key(self.source)
    }

    /// Build the [`SpecialVocab`] for [`Self::specials`].
    pub fn special_vocab<T: TokenType>(&self) -> TBResult<SpecialVocab<T>> {
        SpecialVocab::from_static_pairs(self.specials)
    }
}
