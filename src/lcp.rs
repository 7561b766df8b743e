use std::ops::Index;

use crate::suffix_array::SuffixArray;

/// Longest common prefixes of neighbouring suffixes.
///
/// Slot `i` (for `1..=n`) holds the LCP of `sa[i - 1]` and `sa[i]`; slot 0 has
/// no predecessor and stays 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcp(Vec<usize>);

impl Lcp {
    /// Kasai's algorithm. `rank` must be the inverse of `sa`.
    pub fn kasai(sa: &SuffixArray<'_>, rank: &[usize]) -> Lcp {
        let s = sa.text().codes();
        let len = s.len();
        debug_assert_eq!(rank.len(), len);
        let mut lcp = vec![0; len];

        let mut height = 0;
        for i in 0..len {
            if rank[i] == 0 {
                height = 0;
                continue;
            }
            let j = sa[rank[i] - 1];
            while i + height < len && j + height < len && s[i + height] == s[j + height] {
                height += 1;
            }
            lcp[rank[i]] = height;
            height = height.saturating_sub(1);
        }

        Lcp(lcp)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn max(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

impl Index<usize> for Lcp {
    type Output = usize;
    fn index(&self, i: usize) -> &usize {
        &self.0[i]
    }
}
