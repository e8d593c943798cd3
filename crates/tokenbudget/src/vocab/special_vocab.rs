//! # Special Tokens Vocabulary

use crate::{
    errors::{TBError, TBResult},
    regex::{RegexPattern, alternate_choice_regex_pattern},
    strings::string_from_utf8_lossy,
    types::{TBHashSet, TokenType},
    vocab::{SpanTokenMap, TokenSpanMap, validators::try_token},
};

/// Literal special-token strings and their reserved ids.
///
/// This contains no byte ranks; ids here must be disjoint from the
/// [`RankTable`](crate::vocab::RankTable) they are paired with.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialVocab<T: TokenType> {
    /// The map of special words to tokens.
    span_map: SpanTokenMap<T>,
}

impl<T: TokenType> From<SpanTokenMap<T>> for SpecialVocab<T> {
    fn from(span_map: SpanTokenMap<T>) -> Self {
        Self::from_map(span_map)
    }
}

impl<T: TokenType> SpecialVocab<T> {
    /// Create a special vocab from a span map.
    pub fn from_map(span_map: SpanTokenMap<T>) -> Self {
        Self { span_map }
    }

    /// Build a special vocab from static `(word, id)` pairs.
    ///
    /// ## Returns
    /// [`TBError::TokenOutOfRange`] if an id does not fit `T`,
    /// or [`TBError::VocabConflict`] if two words share an id.
    pub fn from_static_pairs(pairs: &[(&str, usize)]) -> TBResult<Self> {
        let mut vocab = Self::default();
        for &(word, id) in pairs {
            vocab.add_str_word(word, try_token(id as u64)?);
        }
        vocab.check_unique_tokens()?;
        Ok(vocab)
    }

    /// Get the span map.
    pub fn span_map(&self) -> &SpanTokenMap<T> {
        &self.span_map
    }

    /// Get the number of special words in the vocab.
    pub fn len(&self) -> usize {
        self.span_map.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a word to the vocab.
    pub fn add_str_word(
        &mut self,
        word: &str,
        token: T,
    ) {
        self.span_map.insert(word.as_bytes().to_vec(), token);
    }

    /// Extend the vocabulary with the given special words.
    pub fn with_special_words<W, S>(
        self,
        special_words: W,
    ) -> Self
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut vocab = self;
        for (word, token) in special_words {
            vocab.add_str_word(word.as_ref(), token);
        }
        vocab
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        chunk: &[u8],
    ) -> Option<T> {
        self.span_map.get(chunk).copied()
    }

    /// The set of special tokens.
    pub fn tokens(&self) -> TBHashSet<T> {
        self.span_map.values().copied().collect()
    }

    /// The largest special token, if any.
    pub fn max_token(&self) -> Option<T> {
        self.span_map.values().max().copied()
    }

    /// Derive the token to word map.
    pub fn inverse(&self) -> TokenSpanMap<T> {
        self.span_map
            .iter()
            .map(|(span, &token)| (token, span.clone()))
            .collect()
    }

    /// Check that no two words share a token.
    pub fn check_unique_tokens(&self) -> TBResult<()> {
        if self.tokens().len() != self.len() {
            return Err(TBError::VocabConflict(
                "special tokens share an id".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the regex pattern matching any special word.
    ///
    /// ## Returns
    /// `None` if no special words are present;
    /// and `Some(RegexPattern)` otherwise.
    pub fn special_pattern(&self) -> Option<RegexPattern> {
        if self.is_empty() {
            return None;
        }

        let alts = self
            .span_map
            .keys()
            .map(|k| string_from_utf8_lossy(k.clone()))
            .collect::<Vec<_>>();
        Some(alternate_choice_regex_pattern(&alts))
    }
}
