//! CSV import of loan applications for batch scoring.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::workflows::loans::LoanApplicationInput;

#[derive(Debug)]
pub enum LoanImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for LoanImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanImportError::Io(err) => write!(f, "failed to read application file: {}", err),
            LoanImportError::Csv(err) => write!(f, "invalid application CSV data: {}", err),
        }
    }
}

impl std::error::Error for LoanImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoanImportError::Io(err) => Some(err),
            LoanImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoanImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LoanImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads `credit_score,income,employment_years,amount,purpose` rows.
pub struct LoanApplicationImporter;

impl LoanApplicationImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LoanApplicationInput>, LoanImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LoanApplicationInput>, LoanImportError> {
        Ok(parser::parse_applications(reader)?)
    }
}
