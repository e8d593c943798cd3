//! # Rank File Formats

use std::io::BufReader;

use crate::{
    errors::TBResult,
    types::TokenType,
    vocab::{
        RankTable,
        io::{read_base64_span_map, read_datagym_span_map},
    },
};

/// The wire formats rank data is published in.
///
/// Each format decodes into the same canonical [`RankTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[non_exhaustive]
pub enum RankFileFormat {
    /// `<base64 span> <decimal rank>` per line.
    #[strum(serialize = "base64_ranks")]
    Base64Ranks,

    /// The GPT-2 "vocab.bpe" ordered merges list, in a byte-remapped alphabet.
    #[strum(serialize = "datagym_merges")]
    DataGymMerges,
}

impl RankFileFormat {
    /// Select the format a named vocabulary is published in.
    pub fn for_vocab_name(name: &str) -> Self {
        match name {
            "gpt2" => Self::DataGymMerges,
            _ => Self::Base64Ranks,
        }
    }

    /// Decode raw rank data into a validated [`RankTable`].
    pub fn decode<T: TokenType>(
        &self,
        bytes: &[u8],
    ) -> TBResult<RankTable<T>> {
        let reader = BufReader::new(bytes);
        let span_map = match self {
            Self::Base64Ranks => read_base64_span_map(reader)?,
            Self::DataGymMerges => read_datagym_span_map(reader)?,
        };
        RankTable::from_span_map(span_map)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::errors::TBError;

    #[test]
    fn test_for_vocab_name() {
        assert_eq!(
            RankFileFormat::for_vocab_name("gpt2"),
            RankFileFormat::DataGymMerges
        );
        assert_eq!(
            RankFileFormat::for_vocab_name("cl100k_base"),
            RankFileFormat::Base64Ranks
        );
        assert_eq!(
            RankFileFormat::from_str("datagym_merges").unwrap(),
            RankFileFormat::DataGymMerges
        );
        assert_eq!(RankFileFormat::Base64Ranks.to_string(), "base64_ranks");
    }

    #[test]
    fn test_decode_datagym() {
        let table: RankTable<u32> = RankFileFormat::DataGymMerges
            .decode("#version: 0.2\nh e\n".as_bytes())
            .unwrap();
        assert_eq!(table.len(), 257);
        assert_eq!(table.get(b"he"), Some(256));
    }

    #[test]
    fn test_decode_rejects_bad_content() {
        assert!(matches!(
            RankFileFormat::Base64Ranks.decode::<u32>(b""),
            Err(TBError::IncompleteByteRanks { missing: 256 })
        ));
        assert!(matches!(
            RankFileFormat::Base64Ranks.decode::<u32>(b"IQ== 0\nnot a rank line\n"),
            Err(TBError::Parse { line: 2, .. })
        ));
    }
}
