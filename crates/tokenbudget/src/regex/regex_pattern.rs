//! # Labeled Regex Patterns

use crate::regex::{ErrorWrapper, RegexWrapper};

/// A `const`-friendly labeled pattern; used by static vocabulary descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstRegexPattern {
    /// A pattern for the `regex` crate.
    Basic(&'static str),

    /// A pattern which needs `fancy_regex` extensions (look-around, possessives).
    Fancy(&'static str),
}

impl ConstRegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
        }
    }

    /// Convert to an owned [`RegexPattern`].
    pub fn to_pattern(&self) -> RegexPattern {
        (*self).into()
    }

    /// Compile the pattern.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        self.to_pattern().compile()
    }
}

impl From<ConstRegexPattern> for RegexPattern {
    fn from(pattern: ConstRegexPattern) -> Self {
        match pattern {
            ConstRegexPattern::Basic(pattern) => RegexPattern::Basic(pattern.to_string()),
            ConstRegexPattern::Fancy(pattern) => RegexPattern::Fancy(pattern.to_string()),
        }
    }
}

/// Labeled, owned regex pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegexPattern {
    /// A pattern for the `regex` crate.
    Basic(String),

    /// A pattern which needs `fancy_regex` extensions.
    Fancy(String),

    /// Try `regex` first; fall back to `fancy_regex` if that fails to compile.
    Adaptive(String),
}

impl From<&str> for RegexPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the pattern into a [`RegexWrapper`].
    ///
    /// ## Returns
    /// The compiled wrapper, or the compile error of the last engine tried.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => Ok(regex::Regex::new(pattern)?.into()),
            Self::Fancy(pattern) => Ok(fancy_regex::Regex::new(pattern)?.into()),
            Self::Adaptive(pattern) => match regex::Regex::new(pattern) {
                Ok(re) => Ok(re.into()),
                Err(_) => Ok(fancy_regex::Regex::new(pattern)?.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join_patterns;

    const LOOKAHEAD_PATTERN: &str = join_patterns!(r" ?\p{L}+", r"\s+(?!\S)", r"\s+");

    #[test]
    fn test_const_pattern() {
        const BASIC: ConstRegexPattern = ConstRegexPattern::Basic("hello world");
        assert_eq!(BASIC.as_str(), "hello world");
        assert_eq!(
            BASIC.to_pattern(),
            RegexPattern::Basic("hello world".to_string())
        );

        let rw = BASIC.compile().unwrap();
        assert!(rw.is_basic());

        const FANCY: ConstRegexPattern = ConstRegexPattern::Fancy("hello");
        let rw = FANCY.compile().unwrap();
        assert!(rw.is_fancy());
        assert_eq!(rw.as_str(), "hello");
    }

    #[test]
    fn test_adaptive_pattern() {
        let pattern: RegexPattern = "hello world".into();
        assert!(matches!(pattern, RegexPattern::Adaptive(_)));
        assert!(pattern.compile().unwrap().is_basic());

        let pattern: RegexPattern = LOOKAHEAD_PATTERN.to_string().into();
        assert!(pattern.compile().unwrap().is_fancy());
    }

    #[test]
    fn test_compile_failures() {
        let err = RegexPattern::Basic(LOOKAHEAD_PATTERN.to_string())
            .compile()
            .unwrap_err();
        assert!(matches!(err, ErrorWrapper::Basic(_)));

        let err = RegexPattern::Fancy("[".to_string()).compile().unwrap_err();
        assert!(matches!(err, ErrorWrapper::Fancy(_)));

        let err = RegexPattern::Adaptive("(".to_string()).compile().unwrap_err();
        assert!(matches!(err, ErrorWrapper::Fancy(_)));
    }
}
