use crate::alphabet::Symbol;
use crate::table::CouponRankTable;
use log::{debug, trace};

/// Errors that can occur while decoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("Code has {actual} symbols, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Symbol {symbol} at position {position} is not in the alphabet")]
    UnknownSymbol { symbol: String, position: usize },
    #[error("Symbol index {index} at position {position} is above the previous index {previous}")]
    OutOfOrder {
        position: usize,
        index: usize,
        previous: usize,
    },
}

impl<S: Symbol> CouponRankTable<S> {
    /// Decode a sequence of symbols to its rank.
    ///
    /// The code must be exactly K symbols from the alphabet, and the symbol
    /// indices must never increase from one position to the next.
    pub fn symbols_to_rank(&self, code: &[S]) -> Result<u64, DecodeError> {
        let code_length = self.code_length();
        if code.len() != code_length {
            debug!("Rejecting code of length {}, expected {code_length}", code.len());
            return Err(DecodeError::WrongLength {
                expected: code_length,
                actual: code.len(),
            });
        }

        let mut rank = 0;
        let mut previous: Option<usize> = None;

        for (position, symbol) in code.iter().enumerate() {
            let index = self
                .alphabet()
                .index_of(symbol)
                .ok_or_else(|| DecodeError::UnknownSymbol {
                    symbol: format!("{symbol:?}"),
                    position,
                })?;

            match previous {
                Some(previous) if index > previous => {
                    return Err(DecodeError::OutOfOrder {
                        position,
                        index,
                        previous,
                    });
                }
                _ => {}
            }

            let remaining = code_length - 1 - position;
            rank += self.column(remaining)[index];
            trace!("Position {position}: symbol index {index}, rank so far {rank}");
            previous = Some(index);
        }

        Ok(rank)
    }
}

impl CouponRankTable<char> {
    /// Decode a code string to its rank.
    pub fn code_to_rank(&self, code: &str) -> Result<u64, DecodeError> {
        let symbols: Vec<char> = code.chars().collect();
        self.symbols_to_rank(&symbols)
    }

    /// Whether `code` decodes successfully.
    pub fn is_valid_code(&self, code: &str) -> bool {
        self.code_to_rank(code).is_ok()
    }
}
