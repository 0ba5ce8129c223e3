use crate::error::{EtlError, Result};
use crate::record::Dataset;
use csv::Writer;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct Loader {
    target_path: PathBuf,
}

impl Loader {
    pub fn new<P: Into<PathBuf>>(target_path: P) -> Self {
        Self {
            target_path: target_path.into(),
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Serializes the dataset as comma-separated text with a leading
    /// row-index column (blank header cell, counting from 0) followed by the
    /// record fields. Creates or overwrites the target file; an empty dataset
    /// still gets the header row. No atomic-write guarantee.
    pub fn write(&self, dataset: &Dataset) -> Result<()> {
        let file = File::create(&self.target_path)?;
        let mut writer = Writer::from_writer(file);

        writer
            .write_record(["", "name", "height", "weight"])
            .map_err(csv_error)?;

        for (index, record) in dataset.iter().enumerate() {
            writer
                .write_record([
                    index.to_string(),
                    record.name.clone(),
                    record.height.to_string(),
                    record.weight.to_string(),
                ])
                .map_err(csv_error)?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn csv_error(error: csv::Error) -> EtlError {
    match error.into_kind() {
        csv::ErrorKind::Io(io_error) => EtlError::Io(io_error),
        other => EtlError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("CSV write failed: {:?}", other),
        )),
    }
}
