use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::error::Result;
use crate::profile::RepeatProfile;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub profile: RepeatProfile,
}

/// Profiles of a batch run together with the configuration that produced them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub config: EngineConfig,
    pub entries: Vec<Entry>,
}

impl Report {
    pub fn serialize(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self)?)
    }

    pub fn deserialize(input: &[u8]) -> Result<Report> {
        Ok(bincode::deserialize(input)?)
    }

    pub fn write_to_disk(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.serialize()?)?;
        Ok(())
    }

    pub fn read_from_disk(path: impl AsRef<Path>) -> Result<Report> {
        Report::deserialize(&fs::read(path)?)
    }
}
