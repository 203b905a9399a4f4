use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

pub trait Symbol: Eq + Hash + Copy + Debug {}

impl Symbol for char {}

impl Symbol for u8 {}

/// Errors that can occur while building an alphabet
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AlphabetError {
    #[error("Symbol {symbol} appears at index {first} and again at index {second}")]
    DuplicateSymbol {
        symbol: String,
        first: usize,
        second: usize,
    },
}

/// An ordered set of distinct symbols. A symbol's index is its position in
/// the set, with index 0 being the lowest.
#[derive(Debug, Clone)]
pub struct Alphabet<S: Symbol> {
    symbols: Vec<S>,
    indices: HashMap<S, usize>,
}

impl<S: Symbol> Alphabet<S> {
    /// Create an alphabet from symbols in index order. Fails if any symbol
    /// appears more than once.
    pub fn new<I>(symbols: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = S>,
    {
        let symbols: Vec<S> = symbols.into_iter().collect();
        let mut indices = HashMap::with_capacity(symbols.len());

        for (index, &symbol) in symbols.iter().enumerate() {
            if let Some(&first) = indices.get(&symbol) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol: format!("{symbol:?}"),
                    first,
                    second: index,
                });
            }
            indices.insert(symbol, index);
        }

        Ok(Self { symbols, indices })
    }

    /// An iterator over the symbols in the alphabet, in index order.
    pub fn symbols(&self) -> impl Iterator<Item = &S> {
        self.symbols.iter()
    }

    /// This is C.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The number of symbols in every code over this alphabet.
    /// This is K = floor(C / 2).
    pub fn code_length(&self) -> usize {
        self.len() / 2
    }

    /// The index of `symbol`, or `None` if it is not part of the alphabet.
    pub fn index_of(&self, symbol: &S) -> Option<usize> {
        self.indices.get(symbol).copied()
    }

    pub fn symbol_at(&self, index: usize) -> Option<S> {
        self.symbols.get(index).copied()
    }

    /// The symbol at `index`. Panics if `index >= len()`.
    pub(crate) fn symbol(&self, index: usize) -> S {
        self.symbols[index]
    }
}

impl FromStr for Alphabet<char> {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s.chars())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_symbols() {
        let alphabet: Alphabet<char> = "ABCD".parse().unwrap();
        assert_eq!(
            alphabet.symbols().collect::<Vec<_>>(),
            vec![&'A', &'B', &'C', &'D']
        );
    }

    #[test]
    fn test_index_of() {
        let alphabet: Alphabet<char> = "XQZ".parse().unwrap();
        assert_eq!(alphabet.index_of(&'X'), Some(0));
        assert_eq!(alphabet.index_of(&'Q'), Some(1));
        assert_eq!(alphabet.index_of(&'Z'), Some(2));
        assert_eq!(alphabet.index_of(&'A'), None);
    }

    #[test]
    fn test_symbol_at() {
        let alphabet = Alphabet::new([b'a', b'b']).unwrap();
        assert_eq!(alphabet.symbol_at(1), Some(b'b'));
        assert_eq!(alphabet.symbol_at(2), None);
    }

    #[test]
    fn test_code_length() {
        let lengths: Vec<usize> = ["", "A", "AB", "ABC", "ABCDEFGHIJKLMNO"]
            .iter()
            .map(|s| s.parse::<Alphabet<char>>().unwrap().code_length())
            .collect();
        assert_eq!(lengths, vec![0, 0, 1, 1, 7]);
    }

    #[test]
    fn test_empty() {
        let alphabet: Alphabet<char> = "".parse().unwrap();
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.len(), 0);
    }

    #[test]
    fn error_on_duplicate_symbol() {
        assert_eq!(
            "ABCB".parse::<Alphabet<char>>().unwrap_err(),
            AlphabetError::DuplicateSymbol {
                symbol: "'B'".to_string(),
                first: 1,
                second: 3,
            }
        );
    }
}
