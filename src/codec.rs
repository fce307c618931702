//! Huffman encoder/decoder.
//!
//! [`HuffmanCodec`] bundles a tree with its code map. Both are fixed at
//! construction and never mutated, so one codec can be shared freely
//! between threads and reused for any number of calls.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::code::{build_codes, Bit, CodeMap, CodeWord, SINGLETON_CODE_BIT};
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{build_tree, Node};

/// Prefix-code encoder and decoder built from symbol frequencies.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S> {
    root: Node<S>,
    codes: CodeMap<S>,
}

impl<S> HuffmanCodec<S>
where
    S: Eq + Hash + Clone + Debug,
{
    /// Build the tree and code map for a frequency table.
    pub fn new(frequencies: &FrequencyTable<S>) -> Result<Self> {
        let root = build_tree(frequencies)?;
        let codes = build_codes(&root);
        debug!(
            symbols = codes.len(),
            max_code_len = codes.max_len(),
            "huffman codec ready"
        );
        Ok(Self { root, codes })
    }

    /// Tally `symbols` and build a codec for exactly that alphabet.
    ///
    /// ```
    /// use huffman::HuffmanCodec;
    ///
    /// let text = "abracadabra";
    /// let codec = HuffmanCodec::from_symbols(text.chars()).unwrap();
    /// let bits = codec.encode(text.chars()).unwrap();
    /// let decoded: String = codec.decode(&bits).unwrap().into_iter().collect();
    /// assert_eq!(decoded, text);
    /// ```
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        Self::new(&FrequencyTable::from_symbols(symbols))
    }

    /// Root of the Huffman tree.
    pub fn tree(&self) -> &Node<S> {
        &self.root
    }

    /// Symbol to code word mapping.
    pub fn codes(&self) -> &CodeMap<S> {
        &self.codes
    }

    /// Code word for a single symbol.
    pub fn code(&self, symbol: &S) -> Option<&CodeWord> {
        self.codes.get(symbol)
    }

    /// Encode a symbol sequence into a digit sequence.
    ///
    /// Code words are concatenated with no separators. Fails on the first
    /// symbol outside the alphabet; nothing is returned in that case.
    pub fn encode<I, B>(&self, symbols: I) -> Result<Vec<Bit>>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<S>,
    {
        let mut bits = Vec::new();
        for (position, s) in symbols.into_iter().enumerate() {
            let s = s.borrow();
            let code = self.codes.get(s).ok_or_else(|| Error::UnknownSymbol {
                symbol: format!("{s:?}"),
                position,
            })?;
            bits.extend_from_slice(code.bits());
        }
        Ok(bits)
    }

    /// Decode a digit sequence produced by [`encode`](Self::encode) with the
    /// same tree.
    ///
    /// Fails if `bits` is empty, ends partway through a code word, or (for a
    /// single-symbol tree) contains a digit other than the singleton's.
    pub fn decode(&self, bits: &[Bit]) -> Result<Vec<S>> {
        if bits.is_empty() {
            return Err(Error::MalformedInput {
                position: 0,
                reason: "empty input",
            });
        }

        let root = &self.root;
        let mut out = Vec::new();

        if let Node::Leaf { symbol, .. } = root {
            for (position, &bit) in bits.iter().enumerate() {
                if bit != SINGLETON_CODE_BIT {
                    return Err(Error::MalformedInput {
                        position,
                        reason: "digit has no code word in a single-symbol tree",
                    });
                }
                out.push(symbol.clone());
            }
            return Ok(out);
        }

        // Index of the first digit of the code word being read.
        let mut start = 0;
        let mut curr = root;
        for (i, &bit) in bits.iter().enumerate() {
            if let Node::Internal { left, right, .. } = curr {
                curr = match bit {
                    Bit::Zero => left.as_ref(),
                    Bit::One => right.as_ref(),
                };
            }

            if let Node::Leaf { symbol, .. } = curr {
                out.push(symbol.clone());
                curr = root;
                start = i + 1;
            }
        }

        if start != bits.len() {
            return Err(Error::MalformedInput {
                position: start,
                reason: "input ends inside a code word",
            });
        }
        Ok(out)
    }
}
