#![allow(missing_docs)]

use std::sync::LazyLock;

use divan::{Bencher, black_box, counter::BytesCount};
use tokenbudget::{
    Encoding,
    bpe::byte_pair::byte_pair_encode,
    pretrained::openai::OA_CL100K_BASE_PATTERN,
    vocab::{RankTable, SpanTokenMap, SpecialVocab},
};

fn main() {
    divan::main();
}

/// Bytes, then every digit pair, and the powers-of-two runs of `1`.
fn bench_ranks() -> RankTable<u32> {
    let mut span_map: SpanTokenMap<u32> = (0..=255u8).map(|b| (vec![b], b as u32)).collect();
    let mut next = 256u32;
    for a in b'0'..=b'9' {
        for b in b'0'..=b'9' {
            span_map.insert(vec![a, b], next);
            next += 1;
        }
    }
    let mut run = 4;
    while run <= 64 {
        span_map.entry(vec![b'1'; run]).or_insert_with(|| {
            next += 1;
            next - 1
        });
        run *= 2;
    }
    for word in ["the", " the", "and", " and", "ing", "tion", " to", " of"] {
        span_map.entry(word.as_bytes().to_vec()).or_insert_with(|| {
            next += 1;
            next - 1
        });
    }
    RankTable::from_span_map(span_map).unwrap()
}

static RANKS: LazyLock<RankTable<u32>> = LazyLock::new(bench_ranks);

static ENCODING: LazyLock<Encoding<u32>> = LazyLock::new(|| {
    Encoding::new(
        "bench",
        OA_CL100K_BASE_PATTERN,
        bench_ranks(),
        SpecialVocab::default(),
    )
    .unwrap()
});

const PROSE: &str = "The quick brown fox jumps over the lazy dog, and then the dog \
    chased the fox to the edge of the forest; nothing interesting happened after that.\n";

#[divan::bench(args = [64, 1024, 16384])]
fn merge_unsplit_digit_run(
    bencher: Bencher,
    len: usize,
) {
    let piece = "1".repeat(len);
    bencher
        .counter(BytesCount::new(len))
        .bench(|| byte_pair_encode(black_box(piece.as_bytes()), &RANKS));
}

#[divan::bench(args = [64, 1024, 16384])]
fn merge_unsplit_mixed_digits(
    bencher: Bencher,
    len: usize,
) {
    let piece: String = (0..len)
        .map(|i| char::from(b'0' + ((i * 7 + i / 3) % 10) as u8))
        .collect();
    bencher
        .counter(BytesCount::new(len))
        .bench(|| byte_pair_encode(black_box(piece.as_bytes()), &RANKS));
}

#[divan::bench]
fn encode_prose(bencher: Bencher) {
    let text = PROSE.repeat(100);
    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| ENCODING.encode(black_box(&text)));
}

#[divan::bench]
fn decode_prose(bencher: Bencher) {
    let text = PROSE.repeat(100);
    let tokens = ENCODING.encode(&text);
    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| ENCODING.decode(black_box(&tokens)));
}
