//! # `OpenAI` Patterns

use crate::{join_patterns, regex::ConstRegexPattern};

/// The "`r50k_base`" (and `gpt2`, `p50k_*`) chunking pattern.
pub const OA_R50K_BASE_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'s",
    r"'t",
    r"'re",
    r"'ve",
    r"'m",
    r"'ll",
    r"'d",
    r" ?\p{L}+",
    r" ?\p{N}+",
    r" ?[^\s\p{L}\p{N}]+",
    r"\s+(?!\S)",
    r"\s+",
));

/// The "`p50k_base`" chunking pattern.
pub const OA_P50K_BASE_PATTERN: ConstRegexPattern = OA_R50K_BASE_PATTERN;

/// The "`cl100k_base`" chunking pattern.
pub const OA_CL100K_BASE_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'(?i:[sdmt]|ll|ve|re)",
    r"[^\r\n\p{L}\p{N}]?+\p{L}+",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]++[\r\n]*",
    r"\s*[\r\n]",
    r"\s+(?!\S)",
    r"\s+",
));

/// The "`o200k_base`" chunking pattern.
pub const OA_O200K_BASE_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]+[\r\n/]*",
    r"\s*[\r\n]+",
    r"\s+(?!\S)",
    r"\s+",
));

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(
        pattern: ConstRegexPattern,
        text: &str,
    ) -> Vec<String> {
        let re = pattern.compile().unwrap();
        re.find_iter(text)
            .map(|m| text[m.unwrap()].to_string())
            .collect()
    }

    #[test]
    fn test_patterns_compile() {
        for pattern in [
            OA_R50K_BASE_PATTERN,
            OA_P50K_BASE_PATTERN,
            OA_CL100K_BASE_PATTERN,
            OA_O200K_BASE_PATTERN,
        ] {
            assert!(pattern.compile().unwrap().is_fancy());
        }
    }

    #[test]
    fn test_r50k_chunks() {
        assert_eq!(
            chunks(OA_R50K_BASE_PATTERN, "I'll pay 1234 now!  ok"),
            vec!["I", "'ll", " pay", " 1234", " now", "!", " ", " ok"]
        );
    }

    #[test]
    fn test_cl100k_chunks() {
        assert_eq!(
            chunks(OA_CL100K_BASE_PATTERN, "I'LL pay 12345\n\nok"),
            vec!["I", "'LL", " pay", " ", "123", "45", "\n\n", "ok"]
        );
    }

    #[test]
    fn test_o200k_chunks() {
        assert_eq!(
            chunks(OA_O200K_BASE_PATTERN, "HelloWorld don't 12345"),
            vec!["Hello", "World", " don't", " ", "123", "45"]
        );
    }
}
