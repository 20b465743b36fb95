// Hash report module
// Writes one text report per hashed file into an output directory

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::compute::HashResult;
use super::error::HashUtilityError;

/// Timestamp format used in report file names
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes hash reports into a fixed directory
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write a report for `result` stamped with the current local time
    pub fn write(&self, result: &HashResult) -> Result<PathBuf, HashUtilityError> {
        self.write_at(result, Local::now())
    }

    /// Write a report for `result` stamped with `timestamp`
    ///
    /// The output directory is created if it does not exist. An existing report
    /// with the same name is overwritten.
    pub fn write_at(
        &self,
        result: &HashResult,
        timestamp: DateTime<Local>,
    ) -> Result<PathBuf, HashUtilityError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| HashUtilityError::ReportWriteError {
            path: self.output_dir.clone(),
            reason: format!("cannot create output directory: {}", e),
        })?;

        let report_path = self
            .output_dir
            .join(report_file_name(&result.file_path, timestamp));

        let write_err = |e: std::io::Error| HashUtilityError::ReportWriteError {
            path: report_path.clone(),
            reason: e.to_string(),
        };

        let file = File::create(&report_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "File path: {}", result.file_path.display()).map_err(write_err)?;
        writeln!(writer, "Generated hash: {}", result.hash).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        log::info!("wrote hash report {}", report_path.display());
        Ok(report_path)
    }
}

/// Report file name for `source`: `hash_<stem>_<YYYYmmdd_HHMMSS>.txt`
pub fn report_file_name(source: &Path, timestamp: DateTime<Local>) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    format!("hash_{}_{}.txt", stem, timestamp.format(TIMESTAMP_FORMAT))
}

