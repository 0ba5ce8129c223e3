use crate::config::SourceConfig;
use crate::error::{EtlError, Result};
use crate::scanner::file_filter::SourceFilter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The three recognized source formats, in merge order: csv rows land in the
/// dataset first, then json, then xml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Csv,
    Json,
    Xml,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 3] = [SourceFormat::Csv, SourceFormat::Json, SourceFormat::Xml];

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "csv" => Some(SourceFormat::Csv),
            "json" => Some(SourceFormat::Json),
            "xml" => Some(SourceFormat::Xml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Json => "json",
            SourceFormat::Xml => "xml",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub filename: String,
    pub format: SourceFormat,
    pub size: u64,
}

impl SourceFile {
    pub fn new(path: PathBuf, format: SourceFormat, size: u64) -> Self {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        Self {
            path,
            filename,
            format,
            size,
        }
    }
}

pub struct SourceScanner {
    filter: SourceFilter,
}

impl SourceScanner {
    pub fn new(config: &SourceConfig, target_file: &str) -> Self {
        Self {
            filter: SourceFilter::new(config, target_file),
        }
    }

    /// Collects every recognized source file directly inside `root`, grouped
    /// csv → json → xml and sorted by filename within each group, so the
    /// merge order never depends on directory-iteration order.
    pub fn scan_directory<P: AsRef<Path>>(&self, root: P) -> Result<Vec<SourceFile>> {
        let root_path = root.as_ref();

        if !root_path.exists() {
            return Err(EtlError::InvalidPath {
                path: root_path.display().to_string(),
            });
        }

        if !root_path.is_dir() {
            return Err(EtlError::InvalidPath {
                path: format!("{} is not a directory", root_path.display()),
            });
        }

        let mut discovered = Vec::new();

        let walker = WalkDir::new(root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            let entry = entry.map_err(|e| EtlError::Io(e.into()))?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(format) = self.filter.classify(entry.path()) else {
                continue;
            };

            let metadata = entry.metadata().map_err(|e| EtlError::Io(e.into()))?;
            discovered.push(SourceFile::new(
                entry.path().to_path_buf(),
                format,
                metadata.len(),
            ));
        }

        let mut ordered = Vec::with_capacity(discovered.len());
        for format in SourceFormat::ALL {
            let mut group: Vec<SourceFile> = discovered
                .iter()
                .filter(|s| s.format == format)
                .cloned()
                .collect();
            group.sort_by(|a, b| a.filename.cmp(&b.filename));
            ordered.extend(group);
        }

        Ok(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scanner() -> SourceScanner {
        SourceScanner::new(&SourceConfig::default(), "transformed_data.csv")
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_extension("csv"), Some(SourceFormat::Csv));
        assert_eq!(SourceFormat::from_extension("JSON"), Some(SourceFormat::Json));
        assert_eq!(SourceFormat::from_extension("Xml"), Some(SourceFormat::Xml));
        assert_eq!(SourceFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_scan_groups_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("b.xml"), "<people/>").unwrap();
        fs::write(root.join("a.json"), "[]").unwrap();
        fs::write(root.join("z.csv"), "name,height,weight\n").unwrap();
        fs::write(root.join("a.csv"), "name,height,weight\n").unwrap();
        fs::write(root.join("notes.txt"), "ignored").unwrap();

        let sources = scanner().scan_directory(root).unwrap();
        let filenames: Vec<&str> = sources.iter().map(|s| s.filename.as_str()).collect();

        assert_eq!(filenames, vec!["a.csv", "z.csv", "a.json", "b.xml"]);
    }

    #[test]
    fn test_scan_excludes_target_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("source1.csv"), "name,height,weight\n").unwrap();
        fs::write(root.join("transformed_data.csv"), ",name,height,weight\n").unwrap();

        let sources = scanner().scan_directory(root).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].filename, "source1.csv");
    }

    #[test]
    fn test_scan_ignores_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested").join("deep.csv"), "name,height,weight\n").unwrap();
        fs::write(root.join("top.csv"), "name,height,weight\n").unwrap();

        let sources = scanner().scan_directory(root).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].filename, "top.csv");
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let sources = scanner().scan_directory(temp_dir.path()).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_scan_rejects_missing_directory() {
        let result = scanner().scan_directory("/nonexistent/source/dir");
        assert!(matches!(result, Err(EtlError::InvalidPath { .. })));
    }

    #[test]
    fn test_scan_honors_exclude_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("scratch_old.csv"), "name,height,weight\n").unwrap();
        fs::write(root.join("people.csv"), "name,height,weight\n").unwrap();

        let config = SourceConfig {
            exclude_patterns: vec![r"^scratch_.*".to_string()],
        };
        let scanner = SourceScanner::new(&config, "transformed_data.csv");
        let sources = scanner.scan_directory(root).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].filename, "people.csv");
    }
}
