//! Bijective mapping between integer scores and fixed-length coupon codes.
//!
//! A code over an alphabet of C symbols is K = floor(C / 2) symbols long, and
//! its symbol indices never increase from left to right. Every rank in
//! `0..max_rank()` has exactly one code.
//!
//! ```
//! use score_coupons::CouponRankTable;
//!
//! let table: CouponRankTable<char> = "ABCD".parse().unwrap();
//! assert_eq!(table.rank_to_code(4).unwrap(), "CB");
//! assert_eq!(table.code_to_rank("CB").unwrap(), 4);
//! assert!(table.code_to_rank("BC").is_err());
//! ```

use std::sync::OnceLock;

pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod table;

pub use alphabet::{Alphabet, AlphabetError, Symbol};
pub use decoder::DecodeError;
pub use encoder::{Codes, EncodeError};
pub use table::{CouponRankTable, TableError};

/// The alphabet used when none is given: 15 symbols, 7-symbol codes.
pub const DEFAULT_COUPONS: &str = "ABCDEFGHIJKLMNO";

/// The table over [`DEFAULT_COUPONS`], built on first use and shared.
///
/// # Panics
///
/// Only if [`DEFAULT_COUPONS`] held a repeated symbol. It has 15 distinct
/// symbols and a largest rank of 116279.
pub fn default_table() -> &'static CouponRankTable<char> {
    static DEFAULT_TABLE: OnceLock<CouponRankTable<char>> = OnceLock::new();
    DEFAULT_TABLE.get_or_init(|| {
        DEFAULT_COUPONS
            .parse()
            .expect("default coupons are distinct and small enough for u64 ranks")
    })
}
