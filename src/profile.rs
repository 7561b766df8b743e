use std::ops::Range;

use serde::{Deserialize, Serialize};

/// `L(k)` for every multiplicity `k`, with a witness occurrence per entry.
///
/// `lengths[k - 1]` is the length of the longest substring occurring at least
/// `k` times. When it is positive, `witnesses[k - 1]` is a start position of
/// one such substring.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RepeatProfile {
    lengths: Vec<usize>,
    witnesses: Vec<Option<usize>>,
}

impl RepeatProfile {
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn into_lengths(self) -> Vec<usize> {
        self.lengths
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// `L(k)`, 1-based.
    pub fn get(&self, k: usize) -> Option<usize> {
        k.checked_sub(1).and_then(|i| self.lengths.get(i)).copied()
    }

    /// Where the substring behind `L(k)` occurs, if `L(k) > 0`.
    pub fn witness(&self, k: usize) -> Option<Range<usize>> {
        let i = k.checked_sub(1)?;
        let start = (*self.witnesses.get(i)?)?;
        Some(start..start + self.lengths[i])
    }

    /// Largest `k` with `L(k) > 0`.
    pub fn max_multiplicity(&self) -> usize {
        self.lengths.iter().take_while(|&&l| l > 0).count()
    }

    pub fn total(&self) -> u64 {
        self.lengths.iter().map(|&l| l as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.lengths.iter().enumerate().map(|(i, &l)| (i + 1, l))
    }

    /// Smallest `k` whose length or witness differs from `other`; `None` iff
    /// the profiles are equal.
    pub fn first_difference(&self, other: &RepeatProfile) -> Option<usize> {
        let differs = |i: usize| {
            self.lengths.get(i) != other.lengths.get(i) || self.witnesses.get(i) != other.witnesses.get(i)
        };
        (0..self.len().max(other.len())).find(|&i| differs(i)).map(|i| i + 1)
    }
}

/// A profile under construction: entries the sweep has not reached are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialProfile {
    lengths: Vec<Option<usize>>,
    witnesses: Vec<Option<usize>>,
}

impl PartialProfile {
    /// Empty profile for a text of `n` symbols, with `L(1) = n` already fixed.
    pub fn new(n: usize) -> Self {
        let mut partial = Self {
            lengths: vec![None; n],
            witnesses: vec![None; n],
        };
        if n > 0 {
            partial.set(1, n, 0);
        }
        partial
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn set(&mut self, k: usize, length: usize, witness: usize) {
        self.lengths[k - 1] = Some(length);
        self.witnesses[k - 1] = (length > 0).then_some(witness);
    }

    pub fn get(&self, k: usize) -> Option<usize> {
        self.lengths[k - 1]
    }

    /// Every unset `L(k)` takes the value of `L(k + 1)`; past the last
    /// multiplicity the value is 0.
    pub fn fill_gaps(&mut self) {
        let mut below = (0, None);
        for i in (0..self.lengths.len()).rev() {
            match self.lengths[i] {
                Some(length) => below = (length, self.witnesses[i]),
                None => {
                    self.lengths[i] = Some(below.0);
                    self.witnesses[i] = below.1;
                }
            }
        }
    }

    pub fn assemble(mut self) -> RepeatProfile {
        self.fill_gaps();
        RepeatProfile {
            lengths: self.lengths.into_iter().map(|l| l.unwrap_or(0)).collect(),
            witnesses: self.witnesses,
        }
    }
}
