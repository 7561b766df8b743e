//! Offline sweep over LCP thresholds.
//!
//! Boundaries between neighbouring suffixes are activated from the largest LCP
//! value down to 1. Activating boundary `i` at threshold `v` merges suffix
//! array slots `i - 1` and `i`; a component of size `s` then certifies a
//! substring of length `v` occurring at least `s` times. Because thresholds
//! only decrease, the first time the largest component reaches `m` fixes
//! `L(m) = v`.

use std::cmp::Reverse;

use clap::ValueEnum;
use log::debug;
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};

use crate::lcp::Lcp;
use crate::profile::PartialProfile;
use crate::union_find::UnionFind;

/// How boundaries are grouped by LCP value before activation.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bucketing {
    /// One counting sort of all boundaries up front.
    #[default]
    Counting,
    /// Max-priority queue popped in decreasing LCP order.
    Heap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub thresholds: usize,
    pub activated: usize,
    pub unions: usize,
    pub live_slots: usize,
    pub max_component: usize,
}

struct Sweep<'a> {
    sa: &'a [usize],
    uf: UnionFind,
    active: Vec<bool>,
    max_size: usize,
    last_threshold: Option<usize>,
    partial: PartialProfile,
    stats: SweepStats,
}

impl<'a> Sweep<'a> {
    fn new(sa: &'a [usize]) -> Self {
        let n = sa.len().saturating_sub(1);
        Sweep {
            sa,
            uf: UnionFind::new(sa.len()),
            active: vec![false; sa.len()],
            max_size: 1,
            last_threshold: None,
            partial: PartialProfile::new(n),
            stats: SweepStats::default(),
        }
    }

    /// Every multiplicity has a value once one component holds all `n` real suffixes.
    fn done(&self) -> bool {
        self.max_size >= self.partial.len()
    }

    fn activate(&mut self, i: usize, v: usize) {
        if self.last_threshold != Some(v) {
            self.last_threshold = Some(v);
            self.stats.thresholds += 1;
        }
        self.stats.activated += 1;
        self.active[i - 1] = true;
        self.active[i] = true;

        let Some(root) = self.uf.union(i - 1, i) else {
            return;
        };
        self.stats.unions += 1;
        let size = self.uf.size(root);
        if size > self.max_size {
            for m in self.max_size + 1..=size {
                self.partial.set(m, v, self.sa[i]);
            }
            self.max_size = size;
        }
    }

    fn finish(mut self) -> (PartialProfile, SweepStats) {
        self.stats.live_slots = self.active.iter().filter(|&&a| a).count();
        self.stats.max_component = self.max_size;
        debug!("sweep finished: {:?}", self.stats);
        (self.partial, self.stats)
    }
}

fn counting_buckets(lcp: &[usize], max: usize) -> Vec<Vec<usize>> {
    let mut buckets = vec![Vec::new(); max + 1];
    for (i, &v) in lcp.iter().enumerate().skip(1) {
        if v > 0 {
            buckets[v].push(i);
        }
    }
    buckets
}

/// Runs the sweep for a suffix array and its LCP array. The returned profile
/// still has `None` for multiplicities above the largest component.
pub fn sweep(sa: &[usize], lcp: &Lcp, bucketing: Bucketing) -> (PartialProfile, SweepStats) {
    debug_assert_eq!(sa.len(), lcp.len());
    let mut state = Sweep::new(sa);

    match bucketing {
        Bucketing::Counting => {
            let buckets = counting_buckets(lcp.as_slice(), lcp.max());
            'outer: for v in (1..buckets.len()).rev() {
                for &i in &buckets[v] {
                    if state.done() {
                        break 'outer;
                    }
                    state.activate(i, v);
                }
            }
        }
        Bucketing::Heap => {
            let mut pq: PriorityQueue<usize, (usize, Reverse<usize>)> = PriorityQueue::new();
            pq.extend(
                (1..lcp.len())
                    .filter(|&i| lcp[i] > 0)
                    .map(|i| (i, (lcp[i], Reverse(i)))),
            );
            while let Some((i, (v, _))) = pq.pop() {
                if state.done() {
                    break;
                }
                state.activate(i, v);
            }
        }
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Text;
    use crate::suffix_array::SuffixArray;

    fn run(s: &[u8], bucketing: Bucketing) -> (Vec<usize>, SweepStats) {
        let text = Text::from_bytes(s);
        let sa = SuffixArray::new(&text);
        let lcp = Lcp::kasai(&sa, &sa.rank());
        let (partial, stats) = sweep(sa.as_slice(), &lcp, bucketing);
        (partial.assemble().into_lengths(), stats)
    }

    #[test]
    fn run_of_one_symbol() {
        let (lengths, stats) = run(b"aaaa", Bucketing::Counting);
        assert_eq!(lengths, [4, 3, 2, 1]);
        assert_eq!(stats.thresholds, 3);
        assert_eq!(stats.unions, 3);
        assert_eq!(stats.live_slots, 4);
        assert_eq!(stats.max_component, 4);
    }

    #[test]
    fn repeated_block() {
        let (lengths, _) = run(b"abcabc", Bucketing::Counting);
        assert_eq!(lengths, [6, 3, 0, 0, 0, 0]);
    }

    #[test]
    fn distinct_symbols_never_repeat() {
        let (lengths, stats) = run(b"abcdef", Bucketing::Counting);
        assert_eq!(lengths, [6, 0, 0, 0, 0, 0]);
        assert_eq!(stats.activated, 0);
        assert_eq!(stats.max_component, 1);
    }

    #[test]
    fn stops_once_every_suffix_is_joined() {
        let (lengths, stats) = run(b"bbbbbbbb", Bucketing::Counting);
        assert_eq!(lengths, [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(stats.unions, 7);
    }

    #[test]
    fn bucketings_agree() {
        for s in [&b"mississippi"[..], b"abracadabra", b"0110100110010110100101100110", b""] {
            assert_eq!(run(s, Bucketing::Counting).0, run(s, Bucketing::Heap).0);
        }
    }
}
