use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::alphabet::Text;
use crate::error::{RepeatError, Result};
use crate::lcp::Lcp;
use crate::naive;
use crate::profile::RepeatProfile;
use crate::suffix_array::{Backend, SuffixArray};
use crate::sweep::{sweep, Bucketing};

pub const DEFAULT_CHECK_LIMIT: usize = 512;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub backend: Backend,
    pub bucketing: Bucketing,
    /// Longest input `Engine::check` compares against the cubic reference.
    pub check_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            bucketing: Bucketing::default(),
            check_limit: DEFAULT_CHECK_LIMIT,
        }
    }
}

/// Suffix array, rank, LCP, threshold sweep and assembly, run in sequence.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyze(&self, text: &Text) -> Result<RepeatProfile> {
        if text.is_empty() {
            return Err(RepeatError::EmptyInput);
        }
        let start = Instant::now();

        let sa = SuffixArray::build(text, self.config.backend)?;
        let sa_time = start.elapsed();
        let rank = sa.rank();
        let lcp = Lcp::kasai(&sa, &rank);
        let lcp_time = start.elapsed() - sa_time;
        let (partial, _) = sweep(sa.as_slice(), &lcp, self.config.bucketing);
        let profile = partial.assemble();
        let sweep_time = start.elapsed() - sa_time - lcp_time;

        debug!(
            "suffix array ({}): {:?}, lcp: {:?}, sweep ({:?}): {:?}",
            self.config.backend.name(),
            sa_time,
            lcp_time,
            self.config.bucketing,
            sweep_time
        );
        info!(
            "analyzed {} symbols (alphabet {}): longest repeat {}, max multiplicity {}",
            text.len(),
            text.sigma() - 1,
            profile.get(2).unwrap_or(0),
            profile.max_multiplicity()
        );
        Ok(profile)
    }

    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<RepeatProfile> {
        self.analyze(&Text::from_bytes(bytes))
    }

    pub fn analyze_symbols(&self, symbols: &[u32], alphabet_size: usize) -> Result<RepeatProfile> {
        self.analyze(&Text::from_symbols(symbols, alphabet_size)?)
    }

    /// Compares `profile` with the cubic reference. Returns `Ok(false)` when
    /// the input is longer than the configured limit and nothing was checked.
    pub fn check(&self, bytes: &[u8], profile: &RepeatProfile) -> Result<bool> {
        if bytes.len() > self.config.check_limit {
            debug!(
                "skipping cross-check: {} symbols exceeds limit {}",
                bytes.len(),
                self.config.check_limit
            );
            return Ok(false);
        }
        let reference = naive::longest_repeats(bytes);
        for (k, (&engine, &reference)) in profile.lengths().iter().zip(&reference).enumerate() {
            if engine != reference {
                return Err(RepeatError::Mismatch {
                    multiplicity: k + 1,
                    engine,
                    reference,
                });
            }
        }
        if profile.len() != reference.len() {
            return Err(RepeatError::Mismatch {
                multiplicity: profile.len().min(reference.len()) + 1,
                engine: profile.len(),
                reference: reference.len(),
            });
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(Engine::default().analyze_bytes(b""), Err(RepeatError::EmptyInput)));
    }

    #[test]
    fn literal_scenarios() {
        let engine = Engine::default();
        assert_eq!(engine.analyze_bytes(b"aaaa").unwrap().lengths(), [4, 3, 2, 1]);
        let p = engine.analyze_bytes(b"abcabc").unwrap();
        assert_eq!(p.get(1), Some(6));
        assert_eq!(p.get(2), Some(3));
        let p = engine.analyze_bytes(b"abcdef").unwrap();
        assert_eq!(p.lengths(), [6, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn digit_symbols() {
        let engine = Engine::default();
        let digits = [1, 4, 1, 4, 2, 1, 3, 5, 6, 2, 3, 7, 3, 0, 9, 5];
        let profile = engine.analyze_symbols(&digits, 10).unwrap();
        let bytes: Vec<u8> = digits.iter().map(|&d| b'0' + d as u8).collect();
        assert!(engine.check(&bytes, &profile).unwrap());
        assert!(engine.analyze_symbols(&[1, 10], 10).is_err());
    }

    #[test]
    fn check_reports_the_first_mismatch() {
        let engine = Engine::default();
        let wrong = engine.analyze_bytes(b"abab").unwrap();
        match engine.check(b"abba", &wrong) {
            Err(RepeatError::Mismatch {
                multiplicity,
                engine,
                reference,
            }) => assert_eq!((multiplicity, engine, reference), (2, 2, 1)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn check_skips_long_inputs() {
        let engine = Engine::new(EngineConfig {
            check_limit: 4,
            ..EngineConfig::default()
        });
        let profile = engine.analyze_bytes(b"abcabc").unwrap();
        assert!(!engine.check(b"abcabc", &profile).unwrap());
    }

    #[test]
    fn every_configuration_agrees() {
        let s = b"3141592653589793238462643383279502884197169399375105820974944592";
        let expected = Engine::default().analyze_bytes(s).unwrap();
        for backend in [Backend::Doubling, Backend::External] {
            for bucketing in [Bucketing::Counting, Bucketing::Heap] {
                let engine = Engine::new(EngineConfig {
                    backend,
                    bucketing,
                    ..EngineConfig::default()
                });
                assert_eq!(engine.analyze_bytes(s).unwrap(), expected);
            }
        }
    }
}
