//! Read a massif report from disk and write the parsed table.

use crate::format::SnapshotTable;
use crate::parse::parse;
use anyhow::{Context, Result};
use mstat_core::io::{read_text, write_table_auto};
use std::path::Path;

/// Read a massif report and parse it.
///
/// I/O failures and [`FormatError`](crate::FormatError)s both surface as
/// `anyhow` errors carrying the path; the typed error is preserved as the
/// source and can be recovered with `downcast_ref`.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SnapshotTable> {
    let path_ref = path.as_ref();
    let text = read_text(path_ref)?;
    parse(&text).with_context(|| format!("parse massif report {}", path_ref.display()))
}

/// Write snapshots as CSV (default) or JSON (`.json` extension).
pub fn write_snapshots_auto<P: AsRef<Path>>(path: P, table: &SnapshotTable) -> Result<()> {
    write_table_auto(path, &table.to_table()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;

    fn tmp_path(name: &str, ext: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        p.push(format!("mstat_massif_io_{name}_{nanos}.{ext}"));
        p
    }

    #[test]
    fn file_to_csv() {
        let input = tmp_path("report", "txt");
        let output = tmp_path("snapshots", "csv");
        std::fs::write(&input, "cmd: ./a.out\n 0 0 0 0 0 0\n 1 10 2,048 2,000 48 0\n").unwrap();

        let table = parse_file(&input).unwrap();
        write_snapshots_auto(&output, &table).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            text,
            "n,time(i),total(B),useful-heap(B),extra-heap(B),stacks(B)\n0,0,0,0,0,0\n1,10,2048,2000,48,0\n"
        );
        let _ = std::fs::remove_file(input);
        let _ = std::fs::remove_file(output);
    }

    #[test]
    fn format_error_is_recoverable_from_anyhow() {
        let input = tmp_path("bad", "txt");
        std::fs::write(&input, "1 2 3\n").unwrap();
        let err = parse_file(&input).unwrap_err();
        let fe = err.downcast_ref::<FormatError>().unwrap();
        assert!(matches!(fe, FormatError::UnexpectedTokenCount { count: 3, .. }));
        let _ = std::fs::remove_file(input);
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = parse_file("/definitely/not/here.massif").unwrap_err();
        assert!(format!("{err:#}").contains("here.massif"));
    }
}
