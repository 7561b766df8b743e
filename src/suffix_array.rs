use std::cmp::Ordering;
use std::ops::Index;

use clap::ValueEnum;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::alphabet::Text;
use crate::error::{RepeatError, Result};

/// How the suffix array gets built. Both produce the same permutation.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Prefix doubling with two-pass counting sorts, O(n log n).
    #[default]
    Doubling,
    /// SA-IS from the `suffix_array` crate; byte-sized alphabets only.
    External,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::Doubling => "doubling",
            Backend::External => "external",
        }
    }
}

/// All `n + 1` suffixes of a [`Text`] (the sentinel suffix included) in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray<'a> {
    text: &'a Text,
    array: Vec<usize>,
}

fn compare_node(i: usize, j: usize, k: usize, rank: &[usize]) -> Ordering {
    (rank[i], rank.get(i + k)).cmp(&(rank[j], rank.get(j + k)))
}

/// Stable counting sort of `order` by `key[i]`, with keys in `0..buckets`.
fn counting_sort(order: &[usize], key: &[usize], buckets: usize) -> Vec<usize> {
    let mut start = vec![0; buckets + 1];
    for &i in order {
        start[key[i] + 1] += 1;
    }
    for b in 1..=buckets {
        start[b] += start[b - 1];
    }
    let mut sorted = vec![0; order.len()];
    for &i in order {
        sorted[start[key[i]]] = i;
        start[key[i]] += 1;
    }
    sorted
}

fn prefix_doubling(codes: &[u32], sigma: usize) -> Vec<usize> {
    let len = codes.len();
    let mut rank: Vec<usize> = codes.iter().map(|&c| c as usize).collect();
    let identity: Vec<usize> = (0..len).collect();
    let mut array = counting_sort(&identity, &rank, sigma);

    let mut classes = sigma;
    let mut next = vec![0; len];
    let mut k = 1;
    while classes < len && k < len {
        // Second key first: suffixes running past the end compare as -1.
        let mut by_second = Vec::with_capacity(len);
        by_second.extend(len - k..len);
        by_second.extend(array.iter().filter(|&&i| i >= k).map(|&i| i - k));
        array = counting_sort(&by_second, &rank, classes);

        next[array[0]] = 0;
        for t in 1..len {
            let d = match compare_node(array[t - 1], array[t], k, &rank) {
                Ordering::Less => 1,
                _ => 0,
            };
            next[array[t]] = next[array[t - 1]] + d;
        }
        std::mem::swap(&mut rank, &mut next);
        classes = rank[array[len - 1]] + 1;
        trace!("doubling round k={k}: {classes} of {len} suffixes distinguished");
        k *= 2;
    }
    array
}

fn external(text: &Text) -> Result<Vec<usize>> {
    let bytes = text.to_bytes().ok_or(RepeatError::UnsupportedAlphabet {
        backend: Backend::External.name(),
        alphabet_size: text.sigma() - 1,
    })?;
    let limit = u32::MAX as usize - 1;
    if bytes.len() > limit {
        return Err(RepeatError::InputTooLong {
            len: bytes.len(),
            limit,
        });
    }
    let (_, sa) = ::suffix_array::SuffixArray::new(&bytes).into_parts();
    let mut array: Vec<usize> = sa.into_iter().map(|i| i as usize).collect();
    if array.len() == bytes.len() {
        array.insert(0, bytes.len());
    }
    Ok(array)
}

/// `rank[sa[i]] == i`.
pub fn inverse(sa: &[usize]) -> Vec<usize> {
    let mut rank = vec![0; sa.len()];
    for (i, &pos) in sa.iter().enumerate() {
        rank[pos] = i;
    }
    rank
}

impl<'a> SuffixArray<'a> {
    pub fn new(text: &'a Text) -> SuffixArray<'a> {
        let array = prefix_doubling(text.codes(), text.sigma());
        SuffixArray { text, array }
    }

    pub fn build(text: &'a Text, backend: Backend) -> Result<SuffixArray<'a>> {
        let sa = match backend {
            Backend::Doubling => SuffixArray::new(text),
            Backend::External => SuffixArray {
                text,
                array: external(text)?,
            },
        };
        debug_assert_eq!(sa.len(), text.codes().len());
        Ok(sa)
    }

    pub fn text(&self) -> &'a Text {
        self.text
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.array
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn rank(&self) -> Vec<usize> {
        inverse(&self.array)
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.array
    }

    pub fn contains(&self, t: &[u32]) -> bool {
        self.count(t) > 0
    }

    /// Number of (possibly overlapping) occurrences of the code pattern `t`.
    pub fn count(&self, t: &[u32]) -> usize {
        self.upper_bound(t) - self.lower_bound(t)
    }

    fn binary_search<F>(&self, pattern: &[u32], f: F) -> usize
    where
        F: Fn(&[u32], &[u32]) -> bool,
    {
        let s = &self.text.codes()[..self.text.len()];
        let (mut ng, mut ok) = (-1, self.array.len() as isize);
        while ok - ng > 1 {
            let pos = (ng + ok) / 2;
            let start = self.array[pos as usize];
            let end = (start + pattern.len()).min(s.len());
            let substring = &s[start..end];
            if f(substring, pattern) {
                ng = pos;
            } else {
                ok = pos;
            }
        }
        ok as usize
    }

    pub fn lower_bound(&self, t: &[u32]) -> usize {
        self.binary_search(t, |sub, s| sub.cmp(s) == Ordering::Less)
    }

    pub fn upper_bound(&self, t: &[u32]) -> usize {
        self.binary_search(t, |sub, s| sub.cmp(s) != Ordering::Greater)
    }
}

impl Index<usize> for SuffixArray<'_> {
    type Output = usize;
    fn index(&self, i: usize) -> &usize {
        &self.array[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive;

    #[test]
    fn sanity_check() {
        let text = Text::from_bytes(b"abracadabra");
        let sa = SuffixArray::new(&text);
        assert_eq!(sa.as_slice(), [11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
    }

    #[test]
    fn empty_text_has_only_the_sentinel_suffix() {
        let text = Text::from_bytes(b"");
        let sa = SuffixArray::new(&text);
        assert_eq!(sa.as_slice(), [0]);
        assert_eq!(sa.rank(), [0]);
    }

    #[test]
    fn runs_need_every_round() {
        let text = Text::from_bytes(&[b'7'; 100]);
        let sa = SuffixArray::new(&text);
        let expected: Vec<usize> = (0..=100).rev().collect();
        assert_eq!(sa.as_slice(), expected);
    }

    #[test]
    fn rank_is_the_inverse() {
        let text = Text::from_bytes(b"mississippi");
        let sa = SuffixArray::new(&text);
        let rank = sa.rank();
        for i in 0..sa.len() {
            assert_eq!(rank[sa[i]], i);
            assert_eq!(sa[rank[i]], i);
        }
    }

    #[test]
    fn matches_naive_sort() {
        for s in [&b"banana"[..], b"abcabcabc", b"0110100110010110", b"zyxwv"] {
            let text = Text::from_bytes(s);
            assert_eq!(SuffixArray::new(&text).as_slice(), naive::suffix_array(s));
        }
    }

    #[test]
    fn doubling_build_is_new() {
        let text = Text::from_bytes(b"0110100110010110");
        let built = SuffixArray::build(&text, Backend::Doubling).unwrap();
        assert_eq!(built, SuffixArray::new(&text));
    }

    #[test]
    fn backends_agree() {
        let text = Text::from_bytes(b"31415926535897932384626433832795");
        let doubling = SuffixArray::build(&text, Backend::Doubling).unwrap();
        let external = SuffixArray::build(&text, Backend::External).unwrap();
        assert_eq!(doubling, external);
    }

    #[test]
    fn external_rejects_wide_alphabets() {
        let wide: Vec<u32> = (0..300).collect();
        let text = Text::from_symbols(&wide, 300).unwrap();
        assert!(matches!(
            SuffixArray::build(&text, Backend::External),
            Err(RepeatError::UnsupportedAlphabet { alphabet_size: 300, .. })
        ));
        assert_eq!(SuffixArray::build(&text, Backend::Doubling).unwrap().len(), 301);
    }

    #[test]
    fn counts_overlapping_occurrences() {
        let text = Text::from_bytes(b"aaaa");
        let sa = SuffixArray::new(&text);
        let a = text.codes()[0];
        assert_eq!(sa.count(&[a]), 4);
        assert_eq!(sa.count(&[a, a]), 3);
        assert_eq!(sa.count(&[a; 4]), 1);
        assert_eq!(sa.count(&[a; 5]), 0);
        assert_eq!(sa.count(&[]), 5);
        assert!(!sa.contains(&[a + 1]));
    }
}
