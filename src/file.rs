// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use log::info;

use crate::config::options::ExportOptions;
use crate::csv::{read_rows, write_rows};
use crate::error::{Result, ScrapeError};
use crate::store::{ResultSet, RunContext};

/// Write the whole result set to `<out_dir>/<source>_job_data_<date>.csv`.
/// An existing file from earlier the same day is overwritten.
/// Returns the final path written to.
pub fn export(export: &ExportOptions, ctx: &RunContext, set: &ResultSet) -> Result<PathBuf> {
    let path = export.out_path(ctx.started_at());
    write_export(&path, set)?;
    info!("Wrote {} records to {}", set.len(), path.display());
    Ok(path)
}

/// Create parents, truncate, write header + rows.
pub fn write_export(path: &Path, set: &ResultSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path).map_err(|e| ScrapeError::export(path, e))?;
    write_rows(BufWriter::new(file), set).map_err(|e| ScrapeError::export(path, e))
}

/// Header and data rows of a previously exported file.
pub fn read_export(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let file = File::open(path).map_err(|e| ScrapeError::export(path, e))?;
    read_rows(file).map_err(|e| ScrapeError::export(path, e))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::export(dir, "path exists but is not a directory"));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::export(dir, e))?;
    }
    Ok(())
}
