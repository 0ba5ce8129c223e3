use crate::config::SourceConfig;
use crate::scanner::source_scanner::SourceFormat;
use regex::Regex;
use std::path::Path;

pub struct SourceFilter {
    target_file: String,
    exclude_patterns: Vec<Regex>,
}

impl SourceFilter {
    pub fn new(config: &SourceConfig, target_file: &str) -> Self {
        let exclude_patterns = config
            .exclude_patterns
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        Self {
            target_file: target_file.to_string(),
            exclude_patterns,
        }
    }

    /// Maps a path to its source format, or `None` when the file is not a
    /// recognized source. A prior run's output file matches `*.csv`, so it is
    /// excluded by name to keep the pipeline from re-ingesting its own rows.
    pub fn classify(&self, path: &Path) -> Option<SourceFormat> {
        let filename = path.file_name().and_then(|n| n.to_str())?;

        if self.is_excluded(filename) {
            return None;
        }

        let extension = path.extension().and_then(|e| e.to_str())?;
        SourceFormat::from_extension(extension)
    }

    pub fn is_excluded(&self, filename: &str) -> bool {
        if filename == self.target_file {
            return true;
        }

        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.is_match(filename))
    }

    pub fn target_file(&self) -> &str {
        &self.target_file
    }
}
