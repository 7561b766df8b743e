use indicatif::{ParallelProgressIterator, ProgressBar};
use log::info;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::corpus::Document;
use crate::engine::Engine;
use crate::error::Result;
use crate::report::Entry;

/// Analyzes every document in parallel. Each analysis is sequential on its
/// own, and results come back in input order. Documents must be non-empty;
/// `corpus::read_from_disk` already leaves empty files out.
pub fn analyze_all(engine: &Engine, documents: &[Document], progress: bool) -> Result<Vec<Entry>> {
    let bar = if progress {
        ProgressBar::new(documents.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    let entries = documents
        .par_iter()
        .progress_with(bar)
        .map(|document| -> Result<Entry> {
            let profile = engine.analyze_bytes(&document.content)?;
            Ok(Entry {
                name: document.name.clone(),
                profile,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    info!("analyzed {} documents", entries.len());
    Ok(entries)
}
