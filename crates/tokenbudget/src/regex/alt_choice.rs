//! # Exact Match Union Patterns

use crate::regex::RegexPattern;

/// Create a union pattern of exact (escaped) literal matches.
///
/// Alternatives are ordered longest first, then lexically, so that when
/// one literal is a prefix of another the longer one wins and the pattern
/// text does not depend on the caller's (possibly hash-map) order.
///
/// ## Arguments
/// * `alts` - The literal alternatives.
///
/// ## Returns
/// A [`RegexPattern::Basic`] matching any one of the literals.
pub fn alternate_choice_regex_pattern<S: AsRef<str>>(alts: &[S]) -> RegexPattern {
    let mut alts: Vec<&str> = alts.iter().map(|s| s.as_ref()).collect();
    alts.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    alts.dedup();

    let parts: Vec<String> = alts.into_iter().map(regex::escape).collect();
    RegexPattern::Basic(format!("({})", parts.join("|")))
}
