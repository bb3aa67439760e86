use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::problem::Problem;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read problem dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed problem dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable, ordered set of problems loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    problems: Vec<Problem>,
}

impl Catalog {
    pub fn from_problems(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let problems: Vec<Problem> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { problems })
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn get(&self, index: usize) -> Option<&Problem> {
        self.problems.get(index)
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Indices of every problem, in catalog order.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.problems.len()).collect()
    }
}
