//! Longest repeated substring for every multiplicity at once.
//!
//! For a text `S` of length `n`, [`Engine`] computes `L(k)` for `k = 1..=n`:
//! the length of the longest substring occurring at least `k` times, counting
//! overlapping occurrences separately. The pipeline is a suffix array (prefix
//! doubling), its inverse, Kasai's LCP array and a decreasing sweep over LCP
//! thresholds that merges neighbouring suffixes with a union-find.
//!
//! ```
//! let lengths = multirep::longest_repeats(b"abcabc").unwrap();
//! assert_eq!(lengths, [6, 3, 0, 0, 0, 0]);
//! ```

pub mod alphabet;
pub mod batch;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod lcp;
pub mod naive;
pub mod profile;
pub mod report;
pub mod suffix_array;
pub mod sweep;
pub mod union_find;

pub use alphabet::Text;
pub use engine::{Engine, EngineConfig};
pub use error::{RepeatError, Result};
pub use profile::RepeatProfile;
pub use self::suffix_array::{Backend, SuffixArray};
pub use sweep::Bucketing;

/// `L(k)` for `k = 1..=n` with the default configuration.
pub fn longest_repeats(text: &[u8]) -> Result<Vec<usize>> {
    Ok(Engine::default().analyze_bytes(text)?.into_lengths())
}
