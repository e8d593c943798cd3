#![allow(missing_docs)]
#![cfg(feature = "download")]

use tiktoken_rs::CoreBPE;
use tokenbudget::pretrained::{EncodingRegistry, openai::OAVocab};
use tokenbudget::resources::VocabResourceLoader;

const SAMPLES: &[&str] = &[
    "hello world",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "Don't forget: the temperature is 72 degrees!",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "12345678901234567890",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "Geburtstag 2024: Alles Gute!",
    "$$$!!!...---",
    " ",
    "a",
    "\t\ttabs\tand\tspaces ",
    "emoji: \u{1f600}\u{1f680}\u{1f4a1}",
    "mixed: hello\u{00a0}world\u{2003}wide",
];

fn registry() -> EncodingRegistry {
    EncodingRegistry::new(VocabResourceLoader::with_default_disk_cache().unwrap())
}

fn roundtrip_validation(vocab: OAVocab) {
    let encoding = registry()
        .encoding_for_vocab(vocab.descriptor())
        .unwrap();

    for text in SAMPLES {
        let tokens = encoding.encode(text);
        assert_eq!(
            &encoding.decode(&tokens),
            text,
            "Roundtrip mismatch for {vocab}: {text:?}"
        );
    }
}

fn tiktoken_validation(
    vocab: OAVocab,
    tiktoken_bpe: &CoreBPE,
) {
    let encoding = registry()
        .encoding_for_vocab(vocab.descriptor())
        .unwrap();

    for text in SAMPLES {
        let tb_tokens = encoding.encode(text);
        let tt_tokens: Vec<u32> = tiktoken_bpe
            .encode_ordinary(text)
            .into_iter()
            .map(|t| t as u32)
            .collect();

        assert_eq!(
            tb_tokens, tt_tokens,
            "Encode mismatch (tokenbudget vs tiktoken) for {vocab}: {text:?}"
        );
    }
}

#[test]
#[ignore]
fn gpt2_roundtrip() {
    roundtrip_validation(OAVocab::Gpt2);
}

#[test]
#[ignore]
fn cl100k_roundtrip() {
    roundtrip_validation(OAVocab::Cl100kBase);
}

#[test]
#[ignore]
fn o200k_roundtrip() {
    roundtrip_validation(OAVocab::O200kBase);
}

#[test]
#[ignore]
fn r50k_vs_tiktoken() {
    let bpe = tiktoken_rs::r50k_base().unwrap();
    tiktoken_validation(OAVocab::R50kBase, &bpe);
}

#[test]
#[ignore]
fn gpt2_matches_r50k() {
    let registry = registry();
    let gpt2 = registry.encoding_for_vocab(OAVocab::Gpt2.descriptor()).unwrap();
    let r50k = registry.encoding_for_vocab(OAVocab::R50kBase.descriptor()).unwrap();

    assert_eq!(gpt2.rank_table(), r50k.rank_table());
    for text in SAMPLES {
        assert_eq!(gpt2.encode(text), r50k.encode(text), "{text:?}");
    }
}

#[test]
#[ignore]
fn p50k_vs_tiktoken() {
    let bpe = tiktoken_rs::p50k_base().unwrap();
    tiktoken_validation(OAVocab::P50kBase, &bpe);
}

#[test]
#[ignore]
fn cl100k_vs_tiktoken() {
    let bpe = tiktoken_rs::cl100k_base().unwrap();
    tiktoken_validation(OAVocab::Cl100kBase, &bpe);
}

#[test]
#[ignore]
fn o200k_vs_tiktoken() {
    let bpe = tiktoken_rs::o200k_base().unwrap();
    tiktoken_validation(OAVocab::O200kBase, &bpe);
}

#[test]
#[ignore]
fn encoding_for_model_end_to_end() {
    let encoding = tokenbudget::encoding_for_model("gpt-4-0314")
        .unwrap()
        .unwrap();
    assert_eq!(encoding.name(), "cl100k_base");

    let text = "hello world";
    assert_eq!(encoding.decode(&encoding.encode(text)), text);
    assert!(tokenbudget::encoding_for_model("not-a-real-model").unwrap().is_none());
}
