//! # Huffman Coding
//!
//! *Optimal prefix-free codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives the letter `E` a single dot because `E` is common, and `Q`
//! a long dash-dash-dot-dash because `Q` is rare. Huffman coding makes that
//! idea exact: given how often each symbol occurs, it assigns every symbol a
//! binary code word so that frequent symbols get short words, and no word is
//! the beginning of another. The second property means a stream of code
//! words needs no separators; a decoder can always tell where one word ends.
//!
//! ## The Problem
//!
//! A fixed-width code spends the same number of digits on every symbol. For a
//! skewed source that wastes space. We want the prefix-free code minimizing
//! the total encoded length `Σ weight(s) × len(code(s))`.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down splitting, not always optimal
//! 1952  Huffman     Bottom-up greedy merging, provably optimal prefix code
//! 1976  Rissanen    Arithmetic coding beats the integer-length limit
//! 1989  Katz        DEFLATE pairs LZ77 with (canonical) Huffman codes
//! ```
//!
//! ## Algorithm
//!
//! 1. Put one leaf per symbol into a min-priority queue keyed by weight.
//! 2. Pop the two lightest nodes `A` then `B`; join them under a new node of
//!    weight `A + B`, with `A` on the 0 edge and `B` on the 1 edge.
//! 3. Push the new node back; repeat until a single root remains.
//! 4. A symbol's code word is the sequence of edge labels on its root-to-leaf
//!    path.
//!
//! Every internal node has exactly two children, so the code words satisfy
//! Kraft's equality `Σ 2^-len(code(s)) = 1`.
//!
//! ## Complexity Analysis
//!
//! - **Construction**: $O(n \log n)$ for $n$ distinct symbols.
//! - **Encode / decode**: $O(m)$ for $m$ symbols (or digits), times the code
//!   length.
//!
//! ## Failure Modes
//!
//! 1. **Integer lengths**: each code word is a whole number of digits, so a
//!    symbol with probability close to 1 still costs one digit per occurrence.
//! 2. **Single-symbol alphabets**: the tree has no edges. This crate gives the
//!    lone symbol the one-digit word `0`.
//!
//! ## Usage
//!
//! ```
//! use huffman::{FrequencyTable, HuffmanCodec};
//!
//! let table = FrequencyTable::from_weights([
//!     ('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45),
//! ])?;
//! let codec = HuffmanCodec::new(&table)?;
//!
//! let bits = codec.encode("face".chars())?;
//! let text: String = codec.decode(&bits)?.into_iter().collect();
//! assert_eq!(text, "face");
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cormen, T. H., et al. *Introduction to Algorithms*, §16.3 "Huffman codes".

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod tree;

pub use code::{
    bits_to_string, build_codes, parse_bits, Bit, CodeMap, CodeWord, SINGLETON_CODE_BIT,
};
pub use codec::HuffmanCodec;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use tree::{build_tree, Node};
