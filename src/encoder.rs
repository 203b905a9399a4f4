use crate::alphabet::Symbol;
use crate::table::CouponRankTable;
use log::{debug, trace};

/// Errors that can occur while encoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error("Rank {rank} is outside the encodable range 0..{max_rank}")]
    InvalidRank { rank: u64, max_rank: u64 },
}

// Encoder Algorithm
//
// Greedy digit extraction, most significant position first.
//
// budget = n
// for p = 0, ..., K-1
//     v = K-1-p
//     x = largest symbol index with value(x, v) <= budget
//     emit symbol x
//     budget = budget - value(x, v)
//
// value(0, v) is 0 for every v, so some x always qualifies. Each column
// strictly increases with x, which lets the search be a binary search.
impl<S: Symbol> CouponRankTable<S> {
    /// Encode a rank as a sequence of K symbols.
    ///
    /// The rank must be below [`max_rank`](Self::max_rank).
    pub fn rank_to_symbols(&self, rank: u64) -> Result<Vec<S>, EncodeError> {
        if rank >= self.max_rank() {
            debug!("Rejecting rank {rank}, max rank is {}", self.max_rank());
            return Err(EncodeError::InvalidRank {
                rank,
                max_rank: self.max_rank(),
            });
        }

        let mut budget = rank;
        let mut code = Vec::with_capacity(self.code_length());

        for position in (0..self.code_length()).rev() {
            let column = self.column(position);
            let symbol_index = column.partition_point(|&value| value <= budget) - 1;
            budget -= column[symbol_index];
            trace!("Position {position}: symbol index {symbol_index}, budget left {budget}");
            code.push(self.alphabet().symbol(symbol_index));
        }

        debug_assert_eq!(budget, 0);
        Ok(code)
    }

    /// Iterate over every valid code, in rank order.
    pub fn codes(&self) -> Codes<'_, S> {
        Codes {
            table: self,
            next_rank: 0,
        }
    }
}

impl CouponRankTable<char> {
    /// Encode a rank as a code string.
    pub fn rank_to_code(&self, rank: u64) -> Result<String, EncodeError> {
        Ok(self.rank_to_symbols(rank)?.into_iter().collect())
    }
}

/// Iterator returned by [`CouponRankTable::codes`].
pub struct Codes<'t, S: Symbol> {
    table: &'t CouponRankTable<S>,
    next_rank: u64,
}

impl<S: Symbol> Iterator for Codes<'_, S> {
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let code = self.table.rank_to_symbols(self.next_rank).ok()?;
        self.next_rank += 1;
        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.max_rank() - self.next_rank;
        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
