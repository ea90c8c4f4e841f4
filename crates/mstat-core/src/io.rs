//! File helpers for [`Table`]s.
//!
//! Reads are CSV only. Writes auto-detect by extension: `.json` produces a
//! pretty JSON array of records, anything else (including no extension)
//! produces CSV. Parent directories are created on write.

use crate::Table;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Output encodings understood by [`write_table_auto`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed JSON array of row objects.
    Json,
}

impl OutputFormat {
    /// Pick the format from a path's extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match ext_lower(path).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Ensure the parent directory for a file exists (no-op if none).
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Read a whole text file.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    fs::read_to_string(path_ref).with_context(|| format!("read {}", display(path_ref)))
}

/// Read a CSV file into a [`Table`].
pub fn read_table_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path_ref = path.as_ref();
    let text = read_text(path_ref)?;
    let table = Table::from_csv_str(&text)
        .with_context(|| format!("parse CSV {}", display(path_ref)))?;
    debug!(path = %path_ref.display(), rows = table.len(), cols = table.headers().len(), "read table");
    Ok(table)
}

/// Write a [`Table`] as CSV.
pub fn write_table_csv<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let path_ref = path.as_ref();
    ensure_parent_dir(path_ref)?;
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    w.write_all(table.to_csv_string().as_bytes())
        .with_context(|| format!("write CSV {}", display(path_ref)))?;
    w.flush().with_context(|| "flush CSV writer")?;
    Ok(())
}

/// Write a [`Table`] as pretty JSON records.
pub fn write_table_json<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let path_ref = path.as_ref();
    ensure_parent_dir(path_ref)?;
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &table.to_json_records())
        .with_context(|| "serialize JSON table")?;
    w.write_all(b"\n")?;
    w.flush().with_context(|| "flush JSON writer")?;
    Ok(())
}

/// Auto-detect write by extension (defaults to **CSV**).
pub fn write_table_auto<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let path_ref = path.as_ref();
    match OutputFormat::from_path(path_ref) {
        OutputFormat::Json => write_table_json(path_ref, table),
        OutputFormat::Csv => write_table_csv(path_ref, table),
    }
}

/// Return the lowercase extension (without dot) if present.
fn ext_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// Human-friendly path display for error messages.
fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path(name: &str, ext: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        p.push(format!("mstat_core_io_{name}_{nanos}.{ext}"));
        p
    }

    fn sample() -> Table {
        let mut t = Table::new(["Statistic", "File1"]);
        t.push_row(vec!["Mean".into(), "1.5".into()]).unwrap();
        t.push_row(vec!["Std Dev".into(), String::new()]).unwrap();
        t
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a.JSON")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("a.csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), OutputFormat::Csv);
    }

    #[test]
    fn csv_write_then_read() {
        let path = tmp_path("table", "csv");
        write_table_auto(&path, &sample()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Statistic,File1\nMean,1.5\nStd Dev,\n");
        let back = read_table_csv(&path).unwrap();
        assert_eq!(back, sample());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn json_write_is_records() {
        let path = tmp_path("table", "json");
        write_table_auto(&path, &sample()).unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v[0]["Statistic"], "Mean");
        assert_eq!(v[0]["File1"], 1.5);
        assert!(v[1]["File1"].is_null());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn nested_output_dir_is_created() {
        let mut dir = tmp_path("nested", "d");
        dir.push("inner");
        let path = dir.join("out.csv");
        write_table_csv(&path, &sample()).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }
}
