use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::CatalogError;
use super::types::InvestorRecord;

/// Read-only supplier of investor records.
pub trait InvestorSource {
    fn load(&self) -> Result<Vec<InvestorRecord>, CatalogError>;
}

impl InvestorSource for Vec<InvestorRecord> {
    fn load(&self) -> Result<Vec<InvestorRecord>, CatalogError> {
        Ok(self.clone())
    }
}

/// Reads `{"investors": [...]}` from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonInvestorSource {
    path: PathBuf,
}

#[derive(Deserialize)]
struct InvestorFile {
    investors: Vec<InvestorRecord>,
}

impl JsonInvestorSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InvestorSource for JsonInvestorSource {
    fn load(&self) -> Result<Vec<InvestorRecord>, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| CatalogError::SourceRead {
            path: self.path.clone(),
            source: e,
        })?;

        let file: InvestorFile =
            serde_json::from_str(&raw).map_err(|e| CatalogError::SourceParse {
                path: self.path.clone(),
                source: e,
            })?;

        Ok(file.investors)
    }
}
