//! JSON export of the rows a page is currently showing.

use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ExportError;

/// Writes exports as timestamped JSON files under one directory.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    dir: PathBuf,
}

impl JsonExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `rows` as a pretty JSON array to `<dir>/<stem>-<timestamp>.json`.
    pub fn export<T: Serialize>(&self, stem: &str, rows: &[T]) -> Result<PathBuf, ExportError> {
        self.export_at(stem, rows, Utc::now())
    }

    /// Same as [`Self::export`] with an explicit timestamp.
    pub fn export_at<T: Serialize>(
        &self,
        stem: &str,
        rows: &[T],
        at: DateTime<Utc>,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir).map_err(|err| ExportError::io(&self.dir, err))?;

        let path = self.dir.join(file_name(stem, at));
        let file = File::create(&path).map_err(|err| ExportError::io(&path, err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, rows)?;
        writer
            .flush()
            .map_err(|err| ExportError::io(&path, err))?;

        log::info!("exported {} rows to {}", rows.len(), path.display());
        Ok(path)
    }
}

fn file_name(stem: &str, at: DateTime<Utc>) -> String {
    format!("{stem}-{}.json", at.format("%Y%m%dT%H%M%SZ"))
}
