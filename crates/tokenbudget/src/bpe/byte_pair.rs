//! # Byte Pair Merge
//!
//! Rank-priority merging of one chunk's bytes.
//!
//! The chunk is modeled as `n + 1` part boundaries; each boundary also
//! carries the rank of the span reaching from it across the next two
//! parts (`T::max_value()` when that span has no rank). Each round merges
//! the lowest-ranked pair, leftmost on ties, and then only re-ranks the
//! two pairs which touch the new part. Merging ends when no pair has a rank.

use core::ops::Range;

use crate::{types::TokenType, vocab::RankTable};

/// Merge `piece` and map each surviving part through `completion`.
///
/// ## Arguments
/// * `ranks` - the rank table.
/// * `piece` - the chunk bytes.
/// * `completion` - called once per final part byte range, left to right.
///
/// ## Returns
/// The completion results, in order; empty for an empty `piece`.
pub fn byte_pair_merge<T, R, F>(
    ranks: &RankTable<T>,
    piece: &[u8],
    mut completion: F,
) -> Vec<R>
where
    T: TokenType,
    F: FnMut(Range<usize>) -> R,
{
    match piece.len() {
        0 => return Vec::new(),
        1 => return vec![completion(0..1)],
        _ => {}
    }

    let sentinel = T::max_value();
    let rank_of = |range: Range<usize>| ranks.get(&piece[range]).unwrap_or(sentinel);

    // (boundary start, rank of the span from here across the next two parts)
    let mut parts: Vec<(usize, T)> = Vec::with_capacity(piece.len() + 1);
    let mut min_rank: (T, usize) = (sentinel, usize::MAX);
    for i in 0..piece.len() - 1 {
        let rank = rank_of(i..i + 2);
        if rank < min_rank.0 {
            min_rank = (rank, i);
        }
        parts.push((i, rank));
    }
    parts.push((piece.len() - 1, sentinel));
    parts.push((piece.len(), sentinel));

    let pair_rank = |parts: &[(usize, T)], i: usize| -> T {
        if i + 3 < parts.len() {
            rank_of(parts[i].0..parts[i + 3].0)
        } else {
            sentinel
        }
    };

    while min_rank.0 != sentinel {
        let i = min_rank.1;

        // Re-rank only the pairs which now include the merged part;
        // parts[i + 1] is still present, so the i + 3 lookahead spans the merge.
        if i > 0 {
            parts[i - 1].1 = pair_rank(&parts, i - 1);
        }
        parts[i].1 = pair_rank(&parts, i);
        parts.remove(i + 1);

        min_rank = (sentinel, usize::MAX);
        for (j, &(_, rank)) in parts[..parts.len() - 1].iter().enumerate() {
            if rank < min_rank.0 {
                min_rank = (rank, j);
            }
        }
    }

    parts
        .windows(2)
        .map(|w| completion(w[0].0..w[1].0))
        .collect()
}

/// Encode one chunk's bytes into ranks.
///
/// A single byte maps directly to its byte rank. Longer pieces are merged;
/// a surviving part with no rank (impossible for a validated table) yields `0`.
pub fn byte_pair_encode<T: TokenType>(
    piece: &[u8],
    ranks: &RankTable<T>,
) -> Vec<T> {
    if let [b] = piece {
        return vec![ranks.byte_rank(*b)];
    }
    byte_pair_merge(ranks, piece, |range| {
        ranks.get(&piece[range]).unwrap_or(T::zero())
    })
}

/// Split one chunk's bytes into the spans the merge would produce.
pub fn byte_pair_split<'a, T: TokenType>(
    piece: &'a [u8],
    ranks: &RankTable<T>,
) -> Vec<&'a [u8]> {
    byte_pair_merge(ranks, piece, |range| &piece[range])
}
