//! # Core BPE
//!
//! Regex chunking plus per-chunk byte pair encoding, and decoding.

use crate::{
    bpe::byte_pair::byte_pair_encode,
    errors::{TBError, TBResult},
    regex::{RegexPattern, RegexWrapper},
    strings::string_from_utf8_lossy,
    types::TokenType,
    vocab::{InverseRankTable, RankTable, SpecialVocab, TokenSpanMap},
};

/// The compiled tokenizer state for one vocabulary.
///
/// All state is built once and read-only afterwards; a `CoreBpe` can be
/// shared across threads without synchronization.
#[derive(Debug, Clone)]
pub struct CoreBpe<T: TokenType> {
    ranks: RankTable<T>,
    inverse_ranks: InverseRankTable<T>,
    specials: SpecialVocab<T>,
    inverse_specials: TokenSpanMap<T>,
    split_re: RegexWrapper,
    special_re: Option<RegexWrapper>,
}

impl<T: TokenType> CoreBpe<T> {
    /// Build the engine.
    ///
    /// ## Arguments
    /// * `ranks` - the validated rank table.
    /// * `specials` - special tokens; ids must be disjoint from `ranks`.
    /// * `pattern` - the chunking pattern.
    pub fn new<P: Into<RegexPattern>>(
        ranks: RankTable<T>,
        specials: SpecialVocab<T>,
        pattern: P,
    ) -> TBResult<Self> {
        let split_re = pattern.into().compile()?;
        let inverse_ranks = ranks.inverse();

        specials.check_unique_tokens()?;
        for token in specials.tokens() {
            if inverse_ranks.get(token).is_some() {
                return Err(TBError::VocabConflict(format!(
                    "special token {token} collides with a rank"
                )));
            }
        }
        let inverse_specials = specials.inverse();
        let special_re = specials
            .special_pattern()
            .map(|p| p.compile())
            .transpose()?;

        Ok(Self {
            ranks,
            inverse_ranks,
            specials,
            inverse_specials,
            split_re,
            special_re,
        })
    }

    /// The rank table.
    pub fn ranks(&self) -> &RankTable<T> {
        &self.ranks
    }

    /// The special tokens.
    pub fn specials(&self) -> &SpecialVocab<T> {
        &self.specials
    }

    /// The compiled chunking pattern.
    pub fn split_regex(&self) -> &RegexWrapper {
        &self.split_re
    }

    /// Split `text` into the chunks merging is confined to.
    ///
    /// Text the pattern does not match is not part of any chunk.
    pub fn split_chunks<'a>(
        &self,
        text: &'a str,
    ) -> TBResult<Vec<&'a str>> {
        self.split_re
            .find_iter(text)
            .map(|m| m.map(|range| &text[range]).map_err(TBError::from))
            .collect()
    }

    /// Encode `text` without recognizing special tokens.
    pub fn encode_ordinary(
        &self,
        text: &str,
    ) -> TBResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(text.len() / 3 + 1);
        self.encode_ordinary_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode `text`, emitting literal special-token strings as their ids.
    pub fn encode_with_special_tokens(
        &self,
        text: &str,
    ) -> TBResult<Vec<T>> {
        let Some(special_re) = &self.special_re else {
            return self.encode_ordinary(text);
        };

        let mut tokens = Vec::with_capacity(text.len() / 3 + 1);
        let mut last = 0;
        for m in special_re.find_iter(text) {
            let range = m?;
            self.encode_ordinary_append(&text[last..range.start], &mut tokens)?;
            if let Some(token) = self.specials.lookup_token(&text.as_bytes()[range.clone()]) {
                tokens.push(token);
            }
            last = range.end;
        }
        self.encode_ordinary_append(&text[last..], &mut tokens)?;

        Ok(tokens)
    }

    fn encode_ordinary_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> TBResult<()> {
        for m in self.split_re.find_iter(text) {
            let chunk = &text.as_bytes()[m?];
            match self.ranks.get(chunk) {
                Some(token) => tokens.push(token),
                None => tokens.extend(byte_pair_encode(chunk, &self.ranks)),
            }
        }
        Ok(())
    }

    /// The bytes of `token`, from either table.
    pub fn token_bytes(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.inverse_ranks
            .get(token)
            .or_else(|| self.inverse_specials.get(&token).map(|s| s.as_slice()))
    }

    /// Concatenate the bytes of `tokens`; unknown tokens are skipped.
    pub fn decode_bytes(
        &self,
        tokens: &[T],
    ) -> Vec<u8> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        for &token in tokens {
            if let Some(bytes) = self.token_bytes(token) {
                buf.extend_from_slice(bytes);
            }
        }
        buf
    }

    /// Decode `tokens` to text, replacing invalid UTF-8 with `U+FFFD`.
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        string_from_utf8_lossy(self.decode_bytes(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{regex::ConstRegexPattern, vocab::rank_table::testing::complete_rank_table};

    const LETTERS_DIGITS: ConstRegexPattern = ConstRegexPattern::Basic(r"\p{L}+|\p{N}+|\s+|.");

    fn sample_bpe() -> CoreBpe<u32> {
        let ranks = complete_rank_table(&[
            ("ab", 0),
            ("bc", 1),
            ("abc", 2),
            ("12", 3),
            ("123", 4),
            ("c1", 5),
        ]);
        let specials =
            SpecialVocab::default().with_special_words([("<|end|>", 1000u32), ("<|x|>", 1001)]);
        CoreBpe::new(ranks, specials, LETTERS_DIGITS).unwrap()
    }

    #[test]
    fn test_whole_chunk_fast_path() {
        let bpe = sample_bpe();
        assert_eq!(bpe.encode_ordinary("abc").unwrap(), vec![2]);
        assert_eq!(bpe.encode_ordinary("123").unwrap(), vec![4]);
    }

    #[test]
    fn test_chunk_boundary() {
        let bpe = sample_bpe();

        assert_eq!(bpe.split_chunks("abc123").unwrap(), vec!["abc", "123"]);

        // "c1" has a rank, but never spans the letter/digit boundary.
        let tokens = bpe.encode_ordinary("abc123").unwrap();
        assert_eq!(tokens, vec![2, 4]);
        assert_eq!(bpe.decode(&tokens[..1]), "abc");
        assert_eq!(bpe.decode(&tokens[1..]), "123");
        assert_eq!(bpe.decode(&tokens), "abc123");
    }

    #[test]
    fn test_special_tokens() {
        let bpe = sample_bpe();
        let text = "ab<|end|>12<|x|>";

        let ordinary = bpe.encode_ordinary(text).unwrap();
        assert!(!ordinary.contains(&1000));
        assert_eq!(bpe.decode(&ordinary), text);

        let special = bpe.encode_with_special_tokens(text).unwrap();
        assert_eq!(special, vec![0, 1000, 3, 1001]);
        assert_eq!(bpe.decode(&special), text);
    }

    #[test]
    fn test_decode_skips_unknown() {
        let bpe = sample_bpe();
        assert_eq!(bpe.decode(&[0, 999_999, 3]), "ab12");
        assert_eq!(bpe.token_bytes(999_999), None);
        assert_eq!(bpe.token_bytes(1000), Some("<|end|>".as_bytes()));
    }

    #[test]
    fn test_decode_lossy() {
        let bpe = sample_bpe();
        let first = bpe.ranks().byte_rank(0xE2);
        assert_eq!(bpe.decode(&[first]), "\u{FFFD}");
        assert_eq!(bpe.decode_bytes(&[first]), vec![0xE2]);
    }

    #[test]
    fn test_roundtrip_non_ascii() {
        let bpe = sample_bpe();
        for text in ["héllo wörld", "日本語 123", "emoji \u{1f600}!", "", "  \n\t"] {
            let tokens = bpe.encode_ordinary(text).unwrap();
            assert_eq!(bpe.decode(&tokens), text);
        }
    }

    #[test]
    fn test_special_rank_collision() {
        let ranks = complete_rank_table::<u32>(&[("ab", 0)]);
        let specials = SpecialVocab::default().with_special_words([("<|end|>", 0u32)]);

        assert!(matches!(
            CoreBpe::new(ranks, specials, LETTERS_DIGITS),
            Err(TBError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_bad_pattern() {
        let ranks = complete_rank_table::<u32>(&[]);
        assert!(matches!(
            CoreBpe::new(ranks, SpecialVocab::default(), RegexPattern::Basic("(".to_string())),
            Err(TBError::Pattern(_))
        ));
    }
}
