mod parser;

use super::pool::{CandidatePool, CandidatePoolError};
use parser::{parse_postings, RowError};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum CandidatePoolImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, message: String },
    Pool(CandidatePoolError),
}

impl std::fmt::Display for CandidatePoolImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidatePoolImportError::Io(err) => {
                write!(f, "failed to read candidate export: {}", err)
            }
            CandidatePoolImportError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
            CandidatePoolImportError::InvalidRow { line, message } => {
                write!(f, "invalid candidate on line {}: {}", line, message)
            }
            CandidatePoolImportError::Pool(err) => {
                write!(f, "candidate export rejected: {}", err)
            }
        }
    }
}

impl std::error::Error for CandidatePoolImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidatePoolImportError::Io(err) => Some(err),
            CandidatePoolImportError::Csv(err) => Some(err),
            CandidatePoolImportError::InvalidRow { .. } => None,
            CandidatePoolImportError::Pool(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CandidatePoolImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<CandidatePoolError> for CandidatePoolImportError {
    fn from(err: CandidatePoolError) -> Self {
        Self::Pool(err)
    }
}

impl From<RowError> for CandidatePoolImportError {
    fn from(err: RowError) -> Self {
        match err {
            RowError::Csv(err) => Self::Csv(err),
            RowError::Field { line, message } => Self::InvalidRow { line, message },
        }
    }
}

/// Loads a replacement candidate pool from a local CSV export.
pub struct CandidatePoolImporter;

impl CandidatePoolImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CandidatePool, CandidatePoolImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<CandidatePool, CandidatePoolImportError> {
        let postings = parse_postings(reader)?;
        let pool = CandidatePool::new(postings)?;
        tracing::debug!(postings = pool.len(), "imported candidate pool");
        Ok(pool)
    }
}
