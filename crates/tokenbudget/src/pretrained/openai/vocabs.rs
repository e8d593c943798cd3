//! # `OpenAI` Vocabulary Catalog

use crate::pretrained::{
    VocabDescriptor,
    openai::{
        OA_CL100K_BASE_PATTERN,
        OA_CL100K_BASE_SPECIALS,
        OA_O200K_BASE_PATTERN,
        OA_O200K_BASE_SPECIALS,
        OA_P50K_BASE_PATTERN,
        OA_P50K_BASE_SPECIALS,
        OA_P50K_EDIT_SPECIALS,
        OA_R50K_BASE_PATTERN,
        OA_R50K_BASE_SPECIALS,
    },
};

/// The GPT-2 "`gpt2`" vocabulary; published as a data gym merges file.
pub const OA_GPT2_VOCAB: VocabDescriptor = VocabDescriptor {
    name: "gpt2",
    source: "https://openaipublic.blob.core.windows.net/gpt-2/encodings/main/vocab.bpe",
    content_hash: Some("1ce1664773c50f3e0cc8842619a93edc4624525b728b188a9e0be33b7726adc5"),
    explicit_vocab_size: Some(50257),
    pattern: OA_R50K_BASE_PATTERN,
    specials: OA_R50K_BASE_SPECIALS,
};

/// The "`r50k_base`" vocabulary.
pub const OA_R50K_BASE_VOCAB: VocabDescriptor = VocabDescriptor {
    name: "r50k_base",
    source: "https://openaipublic.blob.core.windows.net/encodings/r50k_base.tiktoken",
    content_hash: Some("306cd27f03c1a714eca7108e03d66b7dc042abe8c258b44c199a7ed9838dd930"),
    explicit_vocab_size: Some(50257),
    pattern: OA_R50K_BASE_PATTERN,
    specials: OA_R50K_BASE_SPECIALS,
};

/// The "`p50k_base`" vocabulary.
pub const OA_P50K_BASE_VOCAB: VocabDescriptor = VocabDescriptor {
    name: "p50k_base",
    source: "https://openaipublic.blob.core.windows.net/encodings/p50k_base.tiktoken",
    content_hash: Some("94b5ca7dff4d00767bc256fdd1b27e5b17361d7b8a5f968547f9f23eb70d2069"),
    explicit_vocab_size: Some(50281),
    pattern: OA_P50K_BASE_PATTERN,
    specials: OA_P50K_BASE_SPECIALS,
};

/// The "`p50k_edit`" vocabulary; `p50k_base` ranks with FIM specials.
pub const OA_P50K_EDIT_VOCAB: VocabDescriptor = VocabDescriptor {
    name: "p50k_edit",
    source: "https://openaipublic.blob.core.windows.net/encodings/p50k_base.tiktoken",
    content_hash: Some("94b5ca7dff4d00767bc256fdd1b27e5b17361d7b8a5f968547f9f23eb70d2069"),
    explicit_vocab_size: None,
    pattern: OA_P50K_BASE_PATTERN,
    specials: OA_P50K_EDIT_SPECIALS,
};

/// The "`cl100k_base`" vocabulary.
pub const OA_CL100K_BASE_VOCAB: VocabDescriptor = VocabDescriptor {
    name: "cl100k_base",
    source: "https://openaipublic.blob.core.windows.net/encodings/cl100k_base.tiktoken",
    content_hash: Some("223921b76ee99bde995b7ff738513eef100fb51d18c93597a113bcffe865b2a7"),
    explicit_vocab_size: None,
    pattern: OA_CL100K_BASE_PATTERN,
    specials: OA_CL100K_BASE_SPECIALS,
};

/// The "`o200k_base`" vocabulary.
pub const OA_O200K_BASE_VOCAB: VocabDescriptor = VocabDescriptor {
    name: "o200k_base",
    source: "https://openaipublic.blob.core.windows.net/encodings/o200k_base.tiktoken",
    content_hash: Some("446a9538cb6c348e3516120d7c08b09f57c36495e2acfffe59a5bf8b0cfb1a2d"),
    explicit_vocab_size: None,
    pattern: OA_O200K_BASE_PATTERN,
    specials: OA_O200K_BASE_SPECIALS,
};

/// `OpenAI` pretrained vocabularies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[non_exhaustive]
pub enum OAVocab {
    /// GPT-2 "`gpt2`" vocabulary.
    #[strum(serialize = "gpt2")]
    Gpt2,

    /// GPT-2 "`r50k_base`" vocabulary.
    #[strum(serialize = "r50k_base")]
    R50kBase,

    /// GPT-3 "`p50k_base`" vocabulary.
    #[strum(serialize = "p50k_base")]
    P50kBase,

    /// GPT-3 "`p50k_edit`" vocabulary.
    #[strum(serialize = "p50k_edit")]
    P50kEdit,

    /// GPT-3.5/4 "`cl100k_base`" vocabulary.
    #[strum(serialize = "cl100k_base")]
    Cl100kBase,

    /// GPT-4o/5 "`o200k_base`" vocabulary.
    #[strum(serialize = "o200k_base")]
    O200kBase,
}

impl OAVocab {
    /// Get the vocabulary descriptor.
    pub fn descriptor(&self) -> &'static VocabDescriptor {
        use OAVocab::*;
        match self {
            Gpt2 => &OA_GPT2_VOCAB,
            R50kBase => &OA_R50K_BASE_VOCAB,
            P50kBase => &OA_P50K_BASE_VOCAB,
            P50kEdit => &OA_P50K_EDIT_VOCAB,
            Cl100kBase => &OA_CL100K_BASE_VOCAB,
            O200kBase => &OA_O200K_BASE_VOCAB,
        }
    }
}
