//! Quadratic and cubic reference implementations, for cross-checking.

use std::collections::HashMap;
use std::hash::Hash;

/// Suffix array by comparison sort; the empty suffix comes first.
pub fn suffix_array<T: Ord>(s: &[T]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..=s.len()).collect();
    sa.sort_by(|&i, &j| s[i..].cmp(&s[j..]));
    sa
}

/// LCP of neighbours in `sa`, slot 0 fixed at 0.
pub fn lcp<T: Eq>(s: &[T], sa: &[usize]) -> Vec<usize> {
    let mut lcp = vec![0; sa.len()];
    for i in 1..sa.len() {
        lcp[i] = s[sa[i - 1]..]
            .iter()
            .zip(&s[sa[i]..])
            .take_while(|(a, b)| a == b)
            .count();
    }
    lcp
}

/// For every `k`, the longest substring with at least `k` occurrences.
pub fn longest_repeats<T: Hash + Eq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut best = vec![0; n];
    for len in (1..=n).rev() {
        let mut count: HashMap<&[T], usize> = HashMap::new();
        for w in s.windows(len) {
            *count.entry(w).or_default() += 1;
        }
        let most = count.values().copied().max().unwrap_or(0);
        for k in 1..=most {
            if best[k - 1] == 0 {
                best[k - 1] = len;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_scenarios() {
        assert_eq!(longest_repeats(b"aaaa"), [4, 3, 2, 1]);
        assert_eq!(longest_repeats(b"abcabc"), [6, 3, 0, 0, 0, 0]);
        assert_eq!(longest_repeats(b"abcdef"), [6, 0, 0, 0, 0, 0]);
        assert_eq!(longest_repeats::<u8>(&[]), Vec::<usize>::new());
    }
}
