//! # Encoding
//!
//! The public encode / decode surface for one vocabulary.

use crate::{
    bpe::CoreBpe,
    errors::TBResult,
    pretrained::VocabDescriptor,
    regex::RegexPattern,
    types::TokenType,
    vocab::{RankTable, SpecialVocab},
};

/// A named, loaded vocabulary: chunking pattern, ranks, and special tokens.
///
/// An `Encoding` is immutable once built, and is `Send + Sync`;
/// share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Encoding<T: TokenType = u32> {
    name: String,
    core: CoreBpe<T>,
}

impl<T: TokenType> Encoding<T> {
    /// Build an encoding.
    ///
    /// ## Arguments
    /// * `name` - the vocabulary name.
    /// * `pattern` - the chunking pattern.
    /// * `ranks` - the rank table.
    /// * `specials` - special tokens; ids must be disjoint from `ranks`.
    ///
    /// ## Returns
    /// The encoding, or a [`TBError::Pattern`](crate::TBError::Pattern) /
    /// [`TBError::VocabConflict`](crate::TBError::VocabConflict) error.
    pub fn new<S, P>(
        name: S,
        pattern: P,
        ranks: RankTable<T>,
        specials: SpecialVocab<T>,
    ) -> TBResult<Self>
    where
        S: Into<String>,
        P: Into<RegexPattern>,
    {
        Ok(Self {
            name: name.into(),
            core: CoreBpe::new(ranks, specials, pattern)?,
        })
    }

    /// Build the encoding `descriptor` describes, over loaded `ranks`.
    ///
    /// A mismatch between the descriptor's explicit vocabulary size and
    /// the loaded data is logged, not rejected.
    pub fn from_descriptor(
        descriptor: &VocabDescriptor,
        ranks: RankTable<T>,
    ) -> TBResult<Self> {
        let specials = descriptor.special_vocab()?;
        let encoding = Self::new(descriptor.name, descriptor.pattern, ranks, specials)?;

        if let Some(expected) = descriptor.explicit_vocab_size {
            let loaded = encoding.rank_table().len() + encoding.special_vocab().len();
            if loaded != expected || encoding.vocab_size() != expected {
                log::warn!(
                    "{}: expected {} tokens, loaded {} (max token + 1 = {})",
                    descriptor.name,
                    expected,
                    loaded,
                    encoding.vocab_size()
                );
            }
        }

        Ok(encoding)
    }

    /// The vocabulary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One past the largest token id, rank or special.
    pub fn vocab_size(&self) -> usize {
        let max_rank = self.rank_table().max_rank();
        let max_token = match self.special_vocab().max_token() {
            Some(special) => max_rank.max(special),
            None => max_rank,
        };
        max_token.to_usize().map_or(usize::MAX, |m| m + 1)
    }

    /// The rank table.
    pub fn rank_table(&self) -> &RankTable<T> {
        self.core.ranks()
    }

    /// The special tokens.
    pub fn special_vocab(&self) -> &SpecialVocab<T> {
        self.core.specials()
    }

    /// Split `text` into the chunks merging is confined to.
    pub fn split_chunks<'a>(
        &self,
        text: &'a str,
    ) -> TBResult<Vec<&'a str>> {
        self.core.split_chunks(text)
    }

    /// Encode text into tokens.
    ///
    /// Special-token strings in `text` are encoded as ordinary text;
    /// see [`Self::encode_with_special_tokens`].
    ///
    /// ## Panics
    /// Panics if the chunking pattern fails while matching;
    /// see [`Self::try_encode`].
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.try_encode(text).unwrap()
    }

    /// Encode text into tokens, returning an error if the chunking pattern fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn try_encode(
        &self,
        text: &str,
    ) -> TBResult<Vec<T>> {
        self.core.encode_ordinary(text)
    }

    /// Encode text into tokens, emitting special-token strings as their ids.
    ///
    /// ## Panics
    /// Panics if a pattern fails while matching;
    /// see [`Self::try_encode_with_special_tokens`].
    pub fn encode_with_special_tokens(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.try_encode_with_special_tokens(text).unwrap()
    }

    /// Encode text into tokens, emitting special-token strings as their ids;
    /// returning an error if a pattern fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn try_encode_with_special_tokens(
        &self,
        text: &str,
    ) -> TBResult<Vec<T>> {
        self.core.encode_with_special_tokens(text)
    }

    /// Count the tokens [`Self::try_encode`] would produce.
    pub fn count_tokens(
        &self,
        text: &str,
    ) -> TBResult<usize> {
        Ok(self.try_encode(text)?.len())
    }

    /// Encode a batch of text into tokens.
    ///
    /// Runs in parallel with the `rayon` feature.
    ///
    /// ## Panics
    /// Panics if any encoding fails.
    pub fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        self.try_encode_batch(batch).unwrap()
    }

    /// Encode a batch of text into tokens, in parallel; returning the first error.
    #[cfg(feature = "rayon")]
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn try_encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> TBResult<Vec<Vec<T>>> {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|s| self.try_encode(s.as_ref()))
            .collect()
    }

    /// Encode a batch of text into tokens, returning the first error.
    #[cfg(not(feature = "rayon"))]
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn try_encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> TBResult<Vec<Vec<T>>> {
        batch.iter().map(|s| self.try_encode(s.as_ref())).collect()
    }

    /// The bytes of one token, rank or special.
    pub fn token_bytes(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.core.token_bytes(token)
    }

    /// Decode tokens into bytes; unknown tokens are skipped.
    pub fn decode_bytes(
        &self,
        tokens: &[T],
    ) -> Vec<u8> {
        self.core.decode_bytes(tokens)
    }

    /// Decode tokens into text; unknown tokens are skipped,
    /// and invalid UTF-8 is replaced with `U+FFFD`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        self.core.decode(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pretrained::openai::{OA_R50K_BASE_PATTERN, OA_R50K_BASE_SPECIALS},
        regex::ConstRegexPattern,
        vocab::rank_table::testing::complete_rank_table,
    };

    fn tiny_encoding() -> Encoding<u32> {
        let ranks = complete_rank_table(&[("a", 0), ("b", 1), ("ab", 2), (" ab", 3)]);
        let specials = SpecialVocab::default().with_special_words([("<|eot|>", 300u32)]);
        Encoding::new("tiny", OA_R50K_BASE_PATTERN, ranks, specials).unwrap()
    }

    #[test]
    fn test_is_send_sync() {
        fn check<V: Send + Sync>() {}
        check::<Encoding<u32>>();
    }

    #[test]
    fn test_known_vector() {
        let ranks = complete_rank_table::<u32>(&[("a", 0), ("b", 1), ("ab", 2)]);
        let encoding = Encoding::new(
            "known",
            ConstRegexPattern::Basic(r"\p{L}+|."),
            ranks,
            SpecialVocab::default(),
        )
        .unwrap();

        assert_eq!(encoding.encode("ab"), vec![2]);
        assert_eq!(encoding.decode(&[2]), "ab");
    }

    #[test]
    fn test_encode_decode() {
        let encoding = tiny_encoding();
        assert_eq!(encoding.name(), "tiny");
        assert_eq!(encoding.vocab_size(), 301);

        assert_eq!(encoding.encode("ab ab"), vec![2, 3]);
        assert_eq!(encoding.count_tokens("ab ab").unwrap(), 2);
        assert_eq!(encoding.split_chunks("ab ab").unwrap(), vec!["ab", " ab"]);

        for text in ["ab ab", "", "baba\n\n  x", "ünïcödé ab"] {
            assert_eq!(encoding.decode(&encoding.encode(text)), text);
        }
    }

    #[test]
    fn test_special_tokens_are_opt_in() {
        let encoding = tiny_encoding();
        let text = "ab<|eot|>";

        assert!(!encoding.encode(text).contains(&300));
        assert_eq!(encoding.encode_with_special_tokens(text), vec![2, 300]);
        assert_eq!(encoding.decode(&[2, 300]), text);
        assert_eq!(encoding.token_bytes(300), Some(b"<|eot|>".as_slice()));
    }

    #[test]
    fn test_encode_batch() {
        let encoding = tiny_encoding();
        let batch = vec!["ab", "ab ab", "b"];
        let tokens = encoding.encode_batch(&batch);

        assert_eq!(tokens.len(), 3);
        for (text, toks) in batch.iter().zip(tokens.iter()) {
            assert_eq!(&encoding.encode(text), toks);
        }
    }

    #[test]
    fn test_from_descriptor() {
        let descriptor = VocabDescriptor {
            name: "tiny_desc",
            source: "unused",
            content_hash: None,
            explicit_vocab_size: Some(1),
            pattern: OA_R50K_BASE_PATTERN,
            specials: OA_R50K_BASE_SPECIALS,
        };
        let ranks = complete_rank_table::<u32>(&[("ab", 0)]);

        // The size mismatch only warns.
        let encoding = Encoding::from_descriptor(&descriptor, ranks).unwrap();
        assert_eq!(encoding.name(), "tiny_desc");
        assert_eq!(
            encoding.special_vocab().lookup_token(b"<|endoftext|>"),
            Some(50256)
        );
        assert_eq!(encoding.encode_with_special_tokens("<|endoftext|>"), vec![50256]);
    }
}
