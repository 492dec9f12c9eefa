//! Insertion-ordered grouping
//!
//! Group-by transforms emit their groups in order of first occurrence. A
//! `HashMap` would scramble that order, so groups are kept in a `Vec` with a
//! side index from key to slot.

use std::collections::HashMap;

/// Ordered mapping from group key to accumulator
#[derive(Debug, Clone)]
pub struct OrderedGroups<A> {
    index: HashMap<String, usize>,
    groups: Vec<(String, A)>,
}

impl<A> Default for OrderedGroups<A> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<A: Default> OrderedGroups<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator for `key`, created on first sight
    pub fn entry(&mut self, key: &str) -> &mut A {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.index.insert(key.to_string(), slot);
                self.groups.push((key.to_string(), A::default()));
                slot
            }
        };
        &mut self.groups[slot].1
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&A> {
        self.index.get(key).map(|&slot| &self.groups[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.groups.iter().map(|(key, acc)| (key.as_str(), acc))
    }
}

impl<A> IntoIterator for OrderedGroups<A> {
    type Item = (String, A);
    type IntoIter = std::vec::IntoIter<(String, A)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Count and running sum, the accumulator most breakdowns need
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CountSum {
    pub count: usize,
    pub sum: f64,
}

impl CountSum {
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
    }

    /// Mean of the accumulated values, zero when nothing was added
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}
