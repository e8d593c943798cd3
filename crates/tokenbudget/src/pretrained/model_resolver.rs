//! # Model Name Resolution
//!
//! Maps model names to vocabulary names: an exact match against
//! [`MODEL_TO_VOCAB`] first, then the first matching prefix in
//! [`MODEL_PREFIX_TO_VOCAB`], in declared order.
//!
//! Unknown models resolve to `None`; that is an expected outcome,
//! not an error.

use crate::pretrained::{VocabDescriptor, vocab_by_name};

/// Exact model names.
pub const MODEL_TO_VOCAB: &[(&str, &str)] = &[
    // chat
    ("o1", "o200k_base"),
    ("o3", "o200k_base"),
    ("o4-mini", "o200k_base"),
    ("gpt-5", "o200k_base"),
    ("gpt-4.1", "o200k_base"),
    ("gpt-4o", "o200k_base"),
    ("gpt-4", "cl100k_base"),
    ("gpt-3.5-turbo", "cl100k_base"),
    ("gpt-3.5", "cl100k_base"),
    ("gpt-35-turbo", "cl100k_base"),
    // base
    ("davinci-002", "cl100k_base"),
    ("babbage-002", "cl100k_base"),
    // embeddings
    ("text-embedding-ada-002", "cl100k_base"),
    ("text-embedding-3-small", "cl100k_base"),
    ("text-embedding-3-large", "cl100k_base"),
    // legacy completions
    ("text-davinci-003", "p50k_base"),
    ("text-davinci-002", "p50k_base"),
    ("text-davinci-001", "r50k_base"),
    ("text-curie-001", "r50k_base"),
    ("text-babbage-001", "r50k_base"),
    ("text-ada-001", "r50k_base"),
    ("davinci", "r50k_base"),
    ("curie", "r50k_base"),
    ("babbage", "r50k_base"),
    ("ada", "r50k_base"),
    // legacy code
    ("code-davinci-002", "p50k_base"),
    ("code-davinci-001", "p50k_base"),
    ("code-cushman-002", "p50k_base"),
    ("code-cushman-001", "p50k_base"),
    ("davinci-codex", "p50k_base"),
    ("cushman-codex", "p50k_base"),
    // legacy edit
    ("text-davinci-edit-001", "p50k_edit"),
    ("code-davinci-edit-001", "p50k_edit"),
    // legacy embeddings
    ("text-similarity-davinci-001", "r50k_base"),
    ("text-similarity-curie-001", "r50k_base"),
    ("text-similarity-babbage-001", "r50k_base"),
    ("text-similarity-ada-001", "r50k_base"),
    ("text-search-davinci-doc-001", "r50k_base"),
    ("text-search-curie-doc-001", "r50k_base"),
    ("text-search-babbage-doc-001", "r50k_base"),
    ("text-search-ada-doc-001", "r50k_base"),
    ("code-search-babbage-code-001", "r50k_base"),
    ("code-search-ada-code-001", "r50k_base"),
    // open source
    ("gpt2", "gpt2"),
    ("gpt-2", "gpt2"),
];

/// Model name prefixes; the first match wins.
///
/// Longer prefixes sharing a stem come first (`ft:gpt-4o` before `ft:gpt-4`).
pub const MODEL_PREFIX_TO_VOCAB: &[(&str, &str)] = &[
    ("o1-", "o200k_base"),
    ("o3-", "o200k_base"),
    ("o4-mini-", "o200k_base"),
    ("gpt-5-", "o200k_base"),
    ("gpt-4.5-", "o200k_base"),
    ("gpt-4.1-", "o200k_base"),
    ("chatgpt-4o-", "o200k_base"),
    ("gpt-4o-", "o200k_base"),
    ("gpt-4-", "cl100k_base"),
    ("gpt-3.5-turbo-", "cl100k_base"),
    ("gpt-35-turbo-", "cl100k_base"),
    ("ft:gpt-4o", "o200k_base"),
    ("ft:gpt-4", "cl100k_base"),
    ("ft:gpt-3.5-turbo", "cl100k_base"),
    ("ft:davinci-002", "cl100k_base"),
    ("ft:babbage-002", "cl100k_base"),
];

/// Resolve a model name to a vocabulary name.
pub fn vocab_name_for_model(model: &str) -> Option<&'static str> {
    if let Some(&(_, vocab)) = MODEL_TO_VOCAB.iter().find(|(name, _)| *name == model) {
        return Some(vocab);
    }

    MODEL_PREFIX_TO_VOCAB
        .iter()
        .find(|(prefix, _)| model.starts_with(prefix))
        .map(|&(_, vocab)| vocab)
}

/// Resolve a model name to its vocabulary descriptor.
pub fn vocab_for_model(model: &str) -> Option<&'static VocabDescriptor> {
    vocab_name_for_model(model).and_then(vocab_by_name)
}
