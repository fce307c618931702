//! Code words and code maps.
//!
//! A [`CodeMap`] is derived from a finished tree by recording the path of
//! edge labels from the root to each leaf. Because every internal node has
//! exactly two children, no leaf path is a prefix of another, so the code is
//! prefix-free without any separate check.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::Node;

/// One binary digit of a code string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    /// Left edge.
    Zero,
    /// Right edge.
    One,
}

impl Bit {
    /// The digit as a character, `'0'` or `'1'`.
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Digit assigned to the only symbol of a single-leaf tree.
pub const SINGLETON_CODE_BIT: Bit = Bit::Zero;

/// Render digits as a string of `'0'` and `'1'`.
pub fn bits_to_string(bits: &[Bit]) -> String {
    bits.iter().map(|b| b.as_char()).collect()
}

/// Parse a string of `'0'` and `'1'` into digits.
///
/// ```
/// use huffman::{parse_bits, Bit};
///
/// assert_eq!(parse_bits("10").unwrap(), vec![Bit::One, Bit::Zero]);
/// assert!(parse_bits("12").is_err());
/// ```
pub fn parse_bits(s: &str) -> Result<Vec<Bit>> {
    s.chars()
        .enumerate()
        .map(|(position, digit)| match digit {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            _ => Err(Error::InvalidDigit { digit, position }),
        })
        .collect()
}

/// The code word of one symbol. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeWord(Vec<Bit>);

impl CodeWord {
    /// The digits of this code word.
    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the word has no digits; never the case for words from
    /// [`build_codes`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `self` is a prefix of `other` (including equality).
    pub fn is_prefix_of(&self, other: &CodeWord) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for CodeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bits_to_string(&self.0))
    }
}

/// Mapping from symbol to code word, derived from one tree.
#[derive(Debug, Clone)]
pub struct CodeMap<S> {
    codes: HashMap<S, CodeWord>,
}

impl<S> CodeMap<S>
where
    S: Eq + Hash + Clone,
{
    /// Code word for `symbol`, if it is part of the alphabet.
    pub fn get(&self, symbol: &S) -> Option<&CodeWord> {
        self.codes.get(symbol)
    }

    /// Number of symbols with a code word.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the map holds no code words.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All `(symbol, code word)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &CodeWord)> + '_ {
        self.codes.iter()
    }

    /// Length of the longest code word.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(CodeWord::len).max().unwrap_or(0)
    }

    /// Kraft sum `Σ 2^-len` over all code words.
    ///
    /// Summed level by level from the deepest code word up, so a complete
    /// code gives exactly 1.0 at any depth; a lone leaf gives 0.5.
    pub fn kraft_sum(&self) -> f64 {
        self.length_counts()
            .iter()
            .skip(1)
            .rev()
            .fold(0.0, |acc, &n| (acc + n as f64) / 2.0)
    }

    /// Exact check of Kraft's equality `Σ 2^-len = 1`.
    ///
    /// Holds for every tree with at least two leaves.
    pub fn satisfies_kraft_equality(&self) -> bool {
        let counts = self.length_counts();
        let mut carry = 0usize;
        for &n in counts.iter().skip(1).rev() {
            let units = n + carry;
            if units % 2 != 0 {
                return false;
            }
            carry = units / 2;
        }
        carry == 1
    }

    /// Number of digits needed to encode a source with the given
    /// frequencies, `Σ weight × len`. Symbols absent from the map are
    /// skipped.
    pub fn encoded_len(&self, frequencies: &FrequencyTable<S>) -> Result<u64>
    where
        S: fmt::Debug,
    {
        frequencies.iter().try_fold(0u64, |acc, (s, w)| {
            let Some(code) = self.codes.get(s) else {
                return Ok(acc);
            };
            w.checked_mul(code.len() as u64)
                .and_then(|n| acc.checked_add(n))
                .ok_or(Error::WeightOverflow)
        })
    }

    // counts[len] = number of code words of that length.
    fn length_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.max_len() + 1];
        for code in self.codes.values() {
            counts[code.len()] += 1;
        }
        counts
    }
}

/// Derive the code map of a tree.
///
/// Traversal is iterative, so deep trees over large alphabets do not
/// exhaust the call stack.
pub fn build_codes<S>(root: &Node<S>) -> CodeMap<S>
where
    S: Eq + Hash + Clone,
{
    let mut codes = HashMap::new();

    if let Node::Leaf { symbol, .. } = root {
        codes.insert(symbol.clone(), CodeWord(vec![SINGLETON_CODE_BIT]));
        return CodeMap { codes };
    }

    let mut stack = vec![(root, Vec::new())];
    while let Some((node, prefix)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(symbol.clone(), CodeWord(prefix));
            }
            Node::Internal { left, right, .. } => {
                let mut right_prefix = prefix.clone();
                right_prefix.push(Bit::One);
                stack.push((right.as_ref(), right_prefix));

                let mut left_prefix = prefix;
                left_prefix.push(Bit::Zero);
                stack.push((left.as_ref(), left_prefix));
            }
        }
    }
    trace!(symbols = codes.len(), "derived code map");

    CodeMap { codes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;

    fn codes_for(weights: &[(char, u64)]) -> CodeMap<char> {
        let table = FrequencyTable::from_weights(weights.iter().copied()).unwrap();
        build_codes(&build_tree(&table).unwrap())
    }

    #[test]
    fn test_classic_codes() {
        let codes = codes_for(&[
            ('a', 5),
            ('b', 9),
            ('c', 12),
            ('d', 13),
            ('e', 16),
            ('f', 45),
        ]);
        // No weight ties, so the code words are fully determined.
        let expect = [
            ('f', "0"),
            ('c', "100"),
            ('d', "101"),
            ('a', "1100"),
            ('b', "1101"),
            ('e', "111"),
        ];
        for (symbol, code) in expect {
            assert_eq!(codes.get(&symbol).unwrap().to_string(), code, "{symbol}");
        }
        assert_eq!(codes.kraft_sum(), 1.0);
        assert!(codes.satisfies_kraft_equality());
        assert_eq!(codes.max_len(), 4);
    }

    #[test]
    fn test_singleton_code() {
        let codes = codes_for(&[('a', 5)]);
        assert_eq!(codes.get(&'a').unwrap().bits(), &[Bit::Zero]);
        assert_eq!(codes.kraft_sum(), 0.5);
        assert!(!codes.satisfies_kraft_equality());
    }

    #[test]
    fn test_kraft_exact_for_deep_tree() {
        // Fibonacci weights force a caterpillar tree of height 79.
        let mut fib = vec![1u64, 1];
        while fib.len() < 80 {
            fib.push(fib[fib.len() - 1] + fib[fib.len() - 2]);
        }
        let table = FrequencyTable::from_weights(fib.into_iter().enumerate()).unwrap();
        let codes = build_codes(&build_tree(&table).unwrap());
        assert_eq!(codes.max_len(), 79);
        assert!(codes.satisfies_kraft_equality());
        assert_eq!(codes.kraft_sum(), 1.0);
    }

    #[test]
    fn test_prefix_free() {
        let codes = codes_for(&[('a', 1), ('b', 1), ('c', 2), ('d', 3), ('e', 5), ('f', 8)]);
        for (a, ca) in codes.iter() {
            for (b, cb) in codes.iter() {
                if a != b {
                    assert!(!ca.is_prefix_of(cb), "{a}={ca} prefixes {b}={cb}");
                }
            }
        }
    }

    #[test]
    fn test_encoded_len() {
        let table = FrequencyTable::from_symbols("aaab".chars());
        let codes = build_codes(&build_tree(&table).unwrap());
        assert_eq!(codes.encoded_len(&table), Ok(4));
    }

    #[test]
    fn test_encoded_len_overflow() {
        let codes = codes_for(&[('a', 1), ('b', 1)]);
        let table = FrequencyTable::from_weights([('a', u64::MAX), ('b', 1)]).unwrap();
        assert_eq!(codes.encoded_len(&table), Err(Error::WeightOverflow));
    }

    #[test]
    fn test_parse_bits_rejects_garbage() {
        assert_eq!(
            parse_bits("01x"),
            Err(Error::InvalidDigit {
                digit: 'x',
                position: 2
            })
        );
        let bits = parse_bits("0110").unwrap();
        assert_eq!(bits_to_string(&bits), "0110");
    }
}
