//! Symbol frequency tables.
//!
//! A [`FrequencyTable`] maps each distinct symbol to a positive weight. Entries
//! remember the order in which symbols were first seen; tree construction uses
//! that order to break ties between equal weights.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Mapping from symbol to a positive occurrence count.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    index: HashMap<S, usize>,
}

impl<S> FrequencyTable<S>
where
    S: Eq + Hash + Clone + Debug,
{
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Tally every symbol of a sequence.
    ///
    /// ```
    /// use huffman::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_symbols("abracadabra".chars());
    /// assert_eq!(table.get(&'a'), Some(5));
    /// assert_eq!(table.len(), 5);
    /// ```
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut table = Self::new();
        for symbol in symbols {
            table.bump(symbol, 1);
        }
        table
    }

    /// Build a table from explicit `(symbol, weight)` pairs.
    ///
    /// Repeated symbols keep the last weight given.
    pub fn from_weights<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut table = Self::new();
        for (symbol, weight) in weights {
            table.insert(symbol, weight)?;
        }
        Ok(table)
    }

    /// Set the weight of `symbol`, replacing any previous weight.
    ///
    /// A replaced symbol keeps its original position in the table.
    pub fn insert(&mut self, symbol: S, weight: u64) -> Result<()> {
        if weight == 0 {
            return Err(Error::ZeroWeight {
                symbol: format!("{symbol:?}"),
            });
        }
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 = weight,
            None => self.push(symbol, weight),
        }
        Ok(())
    }

    /// Add `count` occurrences of `symbol`.
    pub fn add(&mut self, symbol: S, count: u64) -> Result<()> {
        if count == 0 {
            return Err(Error::ZeroWeight {
                symbol: format!("{symbol:?}"),
            });
        }
        if let Some(&i) = self.index.get(&symbol) {
            let slot = &mut self.entries[i].1;
            *slot = slot.checked_add(count).ok_or(Error::WeightOverflow)?;
        } else {
            self.push(symbol, count);
        }
        Ok(())
    }

    /// Weight of `symbol`, if present.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Whether `symbol` has an entry.
    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no symbol has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |acc, (_, w)| {
            acc.checked_add(*w).ok_or(Error::WeightOverflow)
        })
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.entries.iter().map(|(s, w)| (s, *w))
    }

    // Tally path saturates rather than failing.
    fn bump(&mut self, symbol: S, count: u64) {
        if let Some(&i) = self.index.get(&symbol) {
            let slot = &mut self.entries[i].1;
            *slot = slot.saturating_add(count);
        } else {
            self.push(symbol, count);
        }
    }

    fn push(&mut self, symbol: S, weight: u64) {
        self.index.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol, weight));
    }
}

impl<S> Default for FrequencyTable<S>
where
    S: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromIterator<S> for FrequencyTable<S>
where
    S: Eq + Hash + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_and_order() {
        let table = FrequencyTable::from_symbols("hello".chars());
        assert_eq!(table.get(&'l'), Some(2));
        assert_eq!(table.get(&'z'), None);
        let order: Vec<char> = table.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, vec!['h', 'e', 'l', 'o']);
        assert_eq!(table.total().unwrap(), 5);
    }

    #[test]
    fn test_insert_rejects_zero() {
        let mut table = FrequencyTable::new();
        let err = table.insert('x', 0).unwrap_err();
        assert_eq!(
            err,
            Error::ZeroWeight {
                symbol: "'x'".to_string()
            }
        );
        assert!(table.is_empty());
        assert!(table.add('x', 0).is_err());
        assert!(table.is_empty());
        assert!(FrequencyTable::from_weights([('a', 2), ('b', 0)]).is_err());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table = FrequencyTable::from_weights([('a', 3), ('b', 4)]).unwrap();
        table.insert('a', 10).unwrap();
        let entries: Vec<(char, u64)> = table.iter().map(|(s, w)| (*s, w)).collect();
        assert_eq!(entries, vec![('a', 10), ('b', 4)]);
    }

    #[test]
    fn test_add_overflow() {
        let mut table = FrequencyTable::new();
        table.insert(1u8, u64::MAX).unwrap();
        assert_eq!(table.add(1u8, 1), Err(Error::WeightOverflow));
        table.insert(2u8, 1).unwrap();
        assert_eq!(table.total(), Err(Error::WeightOverflow));
    }
}
