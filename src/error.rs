//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for tree construction, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A tree was requested for a frequency table with no symbols.
    #[error("empty frequency table")]
    EmptyInput,

    /// A symbol was given a weight of zero.
    #[error("zero weight for symbol {symbol}")]
    ZeroWeight {
        /// Debug rendering of the offending symbol.
        symbol: String,
    },

    /// The summed weights do not fit in a `u64`.
    #[error("total weight overflows u64")]
    WeightOverflow,

    /// `encode` met a symbol that has no code word.
    #[error("unknown symbol {symbol} at position {position}")]
    UnknownSymbol {
        /// Debug rendering of the offending symbol.
        symbol: String,
        /// Index of the symbol in the input sequence.
        position: usize,
    },

    /// `decode` input does not split into whole code words.
    #[error("malformed input at digit {position}: {reason}")]
    MalformedInput {
        /// Index of the digit where decoding went wrong.
        position: usize,
        /// What was wrong.
        reason: &'static str,
    },

    /// A textual digit string contained something other than '0' or '1'.
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The rejected character.
        digit: char,
        /// Character index in the input string.
        position: usize,
    },
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
