use clap::Parser;

use multirep::engine::DEFAULT_CHECK_LIMIT;
use multirep::{Backend, Bucketing, EngineConfig};

/// Longest repeated substring for every multiplicity
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Analyze the file, or every file in the directory, at the given path
    #[arg(short, long)]
    pub input: Option<String>,

    /// Analyze the given text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Print a report previously written with --output
    #[arg(short, long)]
    pub load: Option<String>,

    /// Time every backend and bucketing on the input at the given path
    #[arg(short, long)]
    pub benchmark: Option<String>,

    /// Write the report to the given file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print L(k) and a witness for every k instead of the total
    #[arg(long)]
    pub full: bool,

    /// Suffix array construction
    #[arg(long, value_enum, default_value_t = Backend::Doubling)]
    pub backend: Backend,

    /// Grouping of LCP boundaries during the sweep
    #[arg(long, value_enum, default_value_t = Bucketing::Counting)]
    pub bucketing: Bucketing,

    /// Cross-check results against the brute-force reference
    #[arg(long)]
    pub check: bool,

    /// Longest input the cross-check accepts
    #[arg(long, default_value_t = DEFAULT_CHECK_LIMIT)]
    pub check_limit: usize,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            backend: self.backend,
            bucketing: self.bucketing,
            check_limit: self.check_limit,
        }
    }
}
