//! JSON series-document writer.
//!
//! Serializes a plot model into a versioned JSON document the external
//! rendering layer consumes.

use crate::plot::SeriesPlotModel;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Versioned wrapper around a plot model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesDocument {
    pub version: String,
    pub generated_at: String,
    #[serde(flatten)]
    pub model: SeriesPlotModel,
}

impl SeriesDocument {
    pub fn new(model: SeriesPlotModel) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            model,
        }
    }
}

/// Write a series document to a JSON file
///
/// Parent directories are created on demand.
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path or existing directory
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_series(document: &SeriesDocument, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing series document to: {}", output_path.display());
    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, document).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a series document back (validation and tests)
pub fn read_series(input_path: impl AsRef<Path>) -> Result<SeriesDocument, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading series document from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let document: SeriesDocument =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(document)
}

fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::LineStyleKind;
    use tempfile::NamedTempFile;

    fn test_document() -> SeriesDocument {
        let mut model = SeriesPlotModel::new(vec![0.0, 0.5]).with_title("test");
        model
            .add_series("Mean", vec![4.0, 5.0])
            .resolve_styles(LineStyleKind::Colorful);
        SeriesDocument::new(model)
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let document = test_document();
        let file = NamedTempFile::new().unwrap();

        write_series(&document, file.path()).unwrap();
        let loaded = read_series(file.path()).unwrap();

        assert_eq!(loaded.version, document.version);
        assert_eq!(loaded.model.xdata, document.model.xdata);
        assert_eq!(loaded.model.series[0].label, "Mean");
        assert_eq!(loaded.model.styles.len(), 1);
    }

    #[test]
    fn test_write_empty_path_fails() {
        let document = test_document();
        assert!(write_series(&document, "").is_err());
    }

    #[test]
    fn test_write_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let document = test_document();
        assert!(write_series(&document, dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested/out/series.json");

        write_series(&test_document(), &nested).unwrap();
        assert!(nested.exists());
    }
}
