//! Address/location records and the fixed dataset they are searched in.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BUNDLED_JSON: &str = include_str!("../../data/addresses.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub address: String,
    pub location: String,
}

impl Record {
    pub fn new(address: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            location: location.into(),
        }
    }
}

#[derive(Debug)]
pub enum DatasetError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { origin: String, source: serde_json::Error },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io { path, source } => {
                write!(f, "failed to read dataset {}: {}", path.display(), source)
            }
            DatasetError::Parse { origin, source } => {
                write!(f, "invalid dataset {}: {}", origin, source)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } => Some(source),
            DatasetError::Parse { source, .. } => Some(source),
        }
    }
}

/// Ordered, immutable collection of records for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
    /// Lower-cased addresses, index-aligned with `records`.
    addresses_lc: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        let addresses_lc = records.iter().map(|r| r.address.to_lowercase()).collect();
        Self {
            records,
            addresses_lc,
        }
    }

    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED_JSON, "<bundled>")
    }

    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, DatasetError> {
        let records: Vec<Record> =
            serde_json::from_str(json).map_err(|source| DatasetError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self::new(records))
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, &path.display().to_string())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Indices of records whose address contains `query`, ignoring case.
    ///
    /// Dataset order is preserved. An empty query matches every record;
    /// whether anything is shown for it is the caller's decision.
    pub fn filter_indices(&self, query: &str) -> Vec<usize> {
        let query_lc = query.to_lowercase();
        let mut matches = Vec::with_capacity(self.records.len());
        for (i, address_lc) in self.addresses_lc.iter().enumerate() {
            if address_lc.contains(&query_lc) {
                matches.push(i);
            }
        }
        matches
    }

    pub fn filter(&self, query: &str) -> Vec<&Record> {
        self.filter_indices(query)
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// Distinct locations in order of first appearance.
    pub fn available_locations(&self) -> Vec<String> {
        let mut seen = rustc_hash::FxHashSet::default();
        let mut out = Vec::new();
        for record in &self.records {
            if seen.insert(record.location.as_str()) {
                out.push(record.location.clone());
            }
        }
        out
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dataset.rs"]
mod tests;
