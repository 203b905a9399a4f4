use crate::alphabet::{Alphabet, AlphabetError, Symbol};
use log::debug;
use std::str::FromStr;

/// Errors that can occur while building a rank table
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TableError {
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
    #[error("Table value for symbol index {symbol_index} at position {position} does not fit in 64 bits")]
    Overflow { symbol_index: usize, position: usize },
}

/// Precomputed counts driving the mapping between ranks and codes.
///
/// A code is K symbols whose alphabet indices never increase from left to
/// right. The value for symbol index `i` with `v` positions after it is the
/// number of codes of length `v + 1` whose first index is below `i`:
///
///   value(i, 0) = i
///   value(0, v) = 0
///   value(i, v) = value(i, v - 1) + value(i - 1, v)
///
/// A code's rank is the sum of the values of its symbols.
#[derive(Debug, Clone)]
pub struct CouponRankTable<S: Symbol> {
    alphabet: Alphabet<S>,
    code_length: usize,
    /// Position-major: value(i, v) lives at `v * C + i`.
    values: Vec<u64>,
    max_rank: u64,
}

impl<S: Symbol> CouponRankTable<S> {
    /// Build the table for the given alphabet.
    pub fn new(alphabet: Alphabet<S>) -> Result<Self, TableError> {
        let size = alphabet.len();
        let code_length = alphabet.code_length();
        // Grown one column at a time so that an overflowing alphabet fails
        // before the whole C × K buffer is allocated.
        let mut values: Vec<u64> = Vec::new();

        for position in 0..code_length {
            values.reserve(size);
            for symbol_index in 0..size {
                let value = if position == 0 {
                    symbol_index as u64
                } else if symbol_index == 0 {
                    0
                } else {
                    let fewer_positions = values[(position - 1) * size + symbol_index];
                    let lower_symbol = values[position * size + symbol_index - 1];
                    fewer_positions
                        .checked_add(lower_symbol)
                        .ok_or(TableError::Overflow {
                            symbol_index,
                            position,
                        })?
                };
                values.push(value);
            }
        }

        // The last row sums to the rank of the code made only of the highest
        // symbol, so the rank space is one larger.
        let max_rank = if size == 0 {
            0
        } else {
            let mut largest: u64 = 0;
            for position in 0..code_length {
                largest = largest
                    .checked_add(values[position * size + size - 1])
                    .ok_or(TableError::Overflow {
                        symbol_index: size - 1,
                        position,
                    })?;
            }
            largest.checked_add(1).ok_or(TableError::Overflow {
                symbol_index: size - 1,
                position: code_length.saturating_sub(1),
            })?
        };

        debug!(
            "Built coupon rank table: {} symbols, code length {}, {} ranks",
            size, code_length, max_rank
        );

        Ok(Self {
            alphabet,
            code_length,
            values,
            max_rank,
        })
    }

    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// This is C.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet.len()
    }

    /// This is K.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// The number of valid codes. Every rank in `0..max_rank()` maps to
    /// exactly one code.
    pub fn max_rank(&self) -> u64 {
        self.max_rank
    }

    /// The table value for `symbol_index` with `position` positions
    /// remaining after it, or `None` if either is out of range.
    pub fn value(&self, symbol_index: usize, position: usize) -> Option<u64> {
        if symbol_index >= self.alphabet_size() || position >= self.code_length {
            return None;
        }
        Some(self.values[position * self.alphabet_size() + symbol_index])
    }

    /// Values for every symbol at a position with `position` positions
    /// remaining, in symbol index order.
    pub(crate) fn column(&self, position: usize) -> &[u64] {
        let size = self.alphabet_size();
        &self.values[position * size..(position + 1) * size]
    }
}

impl FromStr for CouponRankTable<char> {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CouponRankTable::new(s.parse()?)
    }
}

impl Default for CouponRankTable<char> {
    /// A copy of the table over [`DEFAULT_COUPONS`](crate::DEFAULT_COUPONS).
    fn default() -> Self {
        crate::default_table().clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn binomial(n: u64, k: u64) -> u64 {
        if k > n {
            return 0;
        }
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    fn table(alphabet: &str) -> CouponRankTable<char> {
        alphabet.parse().unwrap()
    }

    #[test_log::test]
    fn test_small_table() {
        let table = table("ABCD");
        assert_eq!(table.code_length(), 2);
        assert_eq!(table.column(0), &[0, 1, 2, 3]);
        assert_eq!(table.column(1), &[0, 1, 3, 6]);
        assert_eq!(table.max_rank(), 10);
    }

    #[test]
    fn test_base_cases() {
        let table = table("ABCDEFGHIJKLMNO");
        for symbol_index in 0..15 {
            assert_eq!(table.value(symbol_index, 0), Some(symbol_index as u64));
        }
        for position in 1..7 {
            assert_eq!(table.value(0, position), Some(0));
        }
    }

    #[test]
    fn test_values_are_binomials() {
        let table = table("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        for symbol_index in 0..26 {
            for position in 0..13 {
                assert_eq!(
                    table.value(symbol_index, position),
                    Some(binomial(
                        (symbol_index + position) as u64,
                        position as u64 + 1
                    )),
                    "value({symbol_index}, {position})"
                );
            }
        }
    }

    #[test]
    fn test_columns_strictly_increase() {
        let table = table("ABCDEFGHIJKLMNO");
        for position in 0..table.code_length() {
            let column = table.column(position);
            assert!(column.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_default_coupons_max_rank() {
        let table = table("ABCDEFGHIJKLMNO");
        assert_eq!(table.alphabet_size(), 15);
        assert_eq!(table.code_length(), 7);
        assert_eq!(table.max_rank(), binomial(21, 7));
    }

    #[test]
    fn test_degenerate_alphabets() {
        assert_eq!(table("").max_rank(), 0);
        assert_eq!(table("A").max_rank(), 1);
        assert_eq!(table("AB").max_rank(), 2);
        assert_eq!(table("ABC").max_rank(), 3);
        assert_eq!(table("A").value(0, 0), None);
    }

    #[test]
    fn test_value_out_of_range() {
        let table = table("ABCD");
        assert_eq!(table.value(4, 0), None);
        assert_eq!(table.value(0, 2), None);
    }

    #[test]
    fn test_large_alphabet_fits() {
        let table = CouponRankTable::new(Alphabet::new(0..40u8).unwrap()).unwrap();
        assert_eq!(table.code_length(), 20);
        assert_eq!(table.max_rank(), binomial(59, 20));
    }

    #[test]
    fn error_on_overflow() {
        let result = CouponRankTable::new(Alphabet::new(0..200u8).unwrap());
        assert!(matches!(result, Err(TableError::Overflow { .. })));
    }

    #[test]
    fn error_on_overflow_with_huge_alphabet() {
        let coupons: String = (0..200_000u32).filter_map(char::from_u32).collect();
        assert!(matches!(
            coupons.parse::<CouponRankTable<char>>(),
            Err(TableError::Overflow { position: 3, .. })
        ));
    }

    #[test]
    fn error_on_duplicate_symbol() {
        assert!(matches!(
            "ABA".parse::<CouponRankTable<char>>(),
            Err(TableError::Alphabet(AlphabetError::DuplicateSymbol { .. }))
        ));
    }
}
