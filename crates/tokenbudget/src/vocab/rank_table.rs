//! # Rank Tables

use crate::{
    errors::{TBError, TBResult},
    types::{TBHashSet, TokenType, hash_map_with_capacity},
    vocab::{SpanTokenMap, TokenSpanMap, validators::U8_SIZE},
};

/// A validated bijection from byte spans to ranks.
///
/// Construction checks:
/// * every byte value `0..=255` is present as a length-1 span;
/// * no rank is assigned to two spans;
/// * no rank is `T::max_value()`.
///
/// Gaps in the rank sequence are tolerated, and logged at `debug`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable<T: TokenType> {
    span_map: SpanTokenMap<T>,
    byte_ranks: [T; U8_SIZE],
    max_rank: T,
}

impl<T: TokenType> TryFrom<SpanTokenMap<T>> for RankTable<T> {
    type Error = TBError;

    fn try_from(span_map: SpanTokenMap<T>) -> TBResult<Self> {
        Self::from_span_map(span_map)
    }
}

impl<T: TokenType> RankTable<T> {
    /// Build a validated [`RankTable`].
    ///
    /// ## Arguments
    /// * `span_map` - the span to rank mapping.
    ///
    /// ## Returns
    /// The table, or:
    /// * [`TBError::IncompleteByteRanks`] if any single byte lacks a rank;
    /// * [`TBError::VocabConflict`] if a rank is shared;
    /// * [`TBError::TokenOutOfRange`] if a rank is the `T::max_value()` sentinel.
    pub fn from_span_map(span_map: SpanTokenMap<T>) -> TBResult<Self> {
        let mut byte_ranks = [T::zero(); U8_SIZE];
        let mut seen_bytes = [false; U8_SIZE];
        let mut seen_ranks: TBHashSet<T> = TBHashSet::with_capacity(span_map.len());
        let mut max_rank = T::zero();

        for (span, &rank) in span_map.iter() {
            if rank == T::max_value() {
                return Err(TBError::TokenOutOfRange);
            }
            if !seen_ranks.insert(rank) {
                return Err(TBError::VocabConflict(format!(
                    "rank {rank} is assigned to more than one byte span"
                )));
            }
            if let [b] = span.as_slice() {
                byte_ranks[*b as usize] = rank;
                seen_bytes[*b as usize] = true;
            }
            max_rank = max_rank.max(rank);
        }

        let missing = seen_bytes.iter().filter(|&&seen| !seen).count();
        if missing > 0 {
            return Err(TBError::IncompleteByteRanks { missing });
        }

        let expected = max_rank.to_usize().map(|m| m + 1);
        if expected != Some(span_map.len()) {
            log::debug!(
                "rank table is not dense: {} spans, max rank {}",
                span_map.len(),
                max_rank
            );
        }

        Ok(Self {
            span_map,
            byte_ranks,
            max_rank,
        })
    }

    /// The number of spans in the table.
    pub fn len(&self) -> usize {
        self.span_map.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.span_map.is_empty()
    }

    /// The largest rank in the table.
    pub fn max_rank(&self) -> T {
        self.max_rank
    }

    /// Look up the rank of a span.
    pub fn get(
        &self,
        span: &[u8],
    ) -> Option<T> {
        self.span_map.get(span).copied()
    }

    /// The rank of a single byte; total by the completeness check.
    #[inline(always)]
    pub fn byte_rank(
        &self,
        byte: u8,
    ) -> T {
        self.byte_ranks[byte as usize]
    }

    /// Get the underlying span map.
    pub fn span_map(&self) -> &SpanTokenMap<T> {
        &self.span_map
    }

    /// Iterate over `(span, rank)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], T)> {
        self.span_map
            .iter()
            .map(|(span, &rank)| (span.as_slice(), rank))
    }

    /// Derive the rank to span table.
    pub fn inverse(&self) -> InverseRankTable<T> {
        let mut token_map: TokenSpanMap<T> = hash_map_with_capacity(self.span_map.len());
        token_map.extend(
            self.span_map
                .iter()
                .map(|(span, &rank)| (rank, span.clone())),
        );
        InverseRankTable { token_map }
    }
}

/// Read-only rank to span table; only built by [`RankTable::inverse`].
#[derive(Debug, Clone, PartialEq)]
pub struct InverseRankTable<T: TokenType> {
    token_map: TokenSpanMap<T>,
}

impl<T: TokenType> InverseRankTable<T> {
    /// Look up the span of a rank.
    pub fn get(
        &self,
        rank: T,
    ) -> Option<&[u8]> {
        self.token_map.get(&rank).map(|s| s.as_slice())
    }

    /// The number of ranks in the table.
    pub fn len(&self) -> usize {
        self.token_map.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.token_map.is_empty()
    }
}
