pub mod csv;
pub mod json;
pub mod xml;

use crate::error::{EtlError, Result};
use crate::record::{Dataset, Record};
use crate::scanner::{SourceFile, SourceFormat};
use std::fs;
use std::path::Path;

/// Failure raised by a format parser before the owning file path is attached.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Each parser is a pure function from file content to rows; the extractor
/// owns the I/O and the format dispatch.
pub type ParseResult = std::result::Result<Vec<Record>, ParseError>;

#[derive(Debug, Default)]
pub struct Extractor;

impl Extractor {
    pub fn new() -> Self {
        Self
    }

    /// Parses every discovered source file in order and concatenates the rows
    /// into one dataset. No merging or deduplication; zero sources yield an
    /// empty dataset.
    pub fn extract_all(&self, sources: &[SourceFile]) -> Result<Dataset> {
        let mut dataset = Dataset::new();

        for source in sources {
            let rows = self.extract_file(&source.path, source.format)?;
            dataset.append(rows);
        }

        Ok(dataset)
    }

    pub fn extract_file(&self, path: &Path, format: SourceFormat) -> Result<Vec<Record>> {
        let content = fs::read_to_string(path)?;

        let parsed = match format {
            SourceFormat::Csv => csv::parse(&content),
            SourceFormat::Json => json::parse(&content),
            SourceFormat::Xml => xml::parse(&content),
        };

        parsed.map_err(|e| EtlError::file_format(path, e.to_string()))
    }
}
