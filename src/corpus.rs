use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{RepeatError, Result};

/// One input to analyze: a file's content, named by its path relative to the
/// root that was read.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Document {
    pub name: String,
    pub content: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Document {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Reads a file, or every file below a directory, sorted by name. Empty
/// files have nothing to analyze and are left out.
pub fn read_from_disk(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let full_path = fs::canonicalize(path)?;
    let root_name = file_name(&full_path)?;

    let mut documents = Vec::new();
    if full_path.is_file() {
        documents.push(Document::new(root_name, fs::read(&full_path)?));
    } else {
        collect(&full_path, "", &mut documents)?;
    }
    documents.retain(|document| {
        if document.content.is_empty() {
            warn!("skipping empty file {}", document.name);
        }
        !document.content.is_empty()
    });
    documents.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("read {} documents from {}", documents.len(), path.display());
    Ok(documents)
}

fn collect(dir: &Path, prefix: &str, documents: &mut Vec<Document>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let name = format!("{}{}", prefix, file_name(&path)?);
        if path.is_dir() {
            collect(&path, &format!("{}/", name), documents)?;
        } else {
            documents.push(Document::new(name, fs::read(&path)?));
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| RepeatError::InvalidPath(path.display().to_string()))
}
