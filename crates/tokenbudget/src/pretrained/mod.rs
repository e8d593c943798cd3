//! # Pretrained Vocabularies
//!
//! * [`VocabDescriptor`] - static descriptions of named vocabularies.
//! * [`openai`] - the public `OpenAI` catalog.
//! * [`model_resolver`] - model name to vocabulary resolution.
//! * [`EncodingRegistry`] - lazily loaded, shared [`Encoding`](crate::Encoding)s.
//!
//! ```rust,no_run
//! use tokenbudget::pretrained::EncodingRegistry;
//! use tokenbudget::resources::VocabResourceLoader;
//!
//! fn example() -> tokenbudget::TBResult<()> {
//!     let registry = EncodingRegistry::new(VocabResourceLoader::with_default_disk_cache()?);
//!     if let Some(encoding) = registry.encoding_for_model("gpt-4o")? {
//!         let tokens = encoding.encode("hello world");
//!         assert_eq!(encoding.decode(&tokens), "hello world");
//!     }
//!     Ok(())
//! }
//! ```

mod descriptor;
pub mod model_resolver;
pub mod openai;
mod registry;

pub use descriptor::VocabDescriptor;
#[cfg(feature = "download")]
pub use registry::encoding_for_model;
pub use registry::EncodingRegistry;

use crate::pretrained::openai::{
    OA_CL100K_BASE_VOCAB,
    OA_GPT2_VOCAB,
    OA_O200K_BASE_VOCAB,
    OA_P50K_BASE_VOCAB,
    OA_P50K_EDIT_VOCAB,
    OA_R50K_BASE_VOCAB,
};

/// Every cataloged vocabulary.
pub const VOCABULARIES: &[&VocabDescriptor] = &[
    &OA_GPT2_VOCAB,
    &OA_R50K_BASE_VOCAB,
    &OA_P50K_BASE_VOCAB,
    &OA_P50K_EDIT_VOCAB,
    &OA_CL100K_BASE_VOCAB,
    &OA_O200K_BASE_VOCAB,
];

/// Find a cataloged vocabulary by name.
pub fn vocab_by_name(name: &str) -> Option<&'static VocabDescriptor> {
    VOCABULARIES.iter().copied().find(|v| v.name == name)
}

/// List the cataloged vocabulary names.
pub fn list_vocabs() -> Vec<&'static str> {
    VOCABULARIES.iter().map(|v| v.name).collect()
}
