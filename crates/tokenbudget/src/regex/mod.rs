//! # Regex Utilities
//!
//! Split patterns mix plain `regex` patterns and `fancy_regex` patterns
//! (the pretrained patterns need look-ahead); these wrappers let the
//! engine hold either behind one type.

mod alt_choice;
mod pattern_tools;
mod regex_pattern;
mod regex_wrapper;

pub use alt_choice::alternate_choice_regex_pattern;
pub use regex_pattern::{ConstRegexPattern, RegexPattern};
pub use regex_wrapper::{ErrorWrapper, MatchesWrapper, RegexWrapper};
