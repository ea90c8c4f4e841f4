//! In-memory CSV table.
//!
//! A [`Table`] keeps the header and every row as text; numeric views are
//! produced per column on demand. Blank cells and the usual NA spellings
//! (`NA`, `N/A`, `null`, `None`, `nan`, ...) are missing values: numeric views
//! skip them, so statistics ignore them the way a dataframe would.
//!
//! Reader rules:
//! - the first non-blank record is the header,
//! - fields may be double-quoted, with `""` as an escaped quote, and may span
//!   lines while quoted,
//! - `\r\n` and `\n` both end a record; blank lines are skipped,
//! - rows shorter than the header are padded with empty cells; longer rows
//!   are rejected.

use crate::error::{Result, TableError};
use crate::types::{is_missing, Number};
use serde::Serialize;
use serde_json::{Map, Value};

/// Header plus text rows, all rows exactly as wide as the header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Empty table with the given header.
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Parse CSV text. The first record is the header.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut records = parse_records(text)?.into_iter();
        let headers = records.next().ok_or(TableError::MissingHeader)?;
        let width = headers.len();

        let mut rows = Vec::new();
        for (i, mut rec) in records.enumerate() {
            if rec.len() > width {
                return Err(TableError::RaggedRow {
                    row: i + 1,
                    expected: width,
                    found: rec.len(),
                });
            }
            rec.resize(width, String::new());
            rows.push(rec);
        }
        Ok(Self { headers, rows })
    }

    /// Append a row; its width must match the header.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(TableError::WidthMismatch {
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names in order.
    #[inline]
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in order.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a column with this exact name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_owned()))
    }

    /// Per-row numeric view of a column: `None` for missing cells.
    pub fn optional_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let idx = self.require(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| numeric_cell(name, i + 1, &row[idx]))
            .collect()
    }

    /// Numeric values of a column with missing cells dropped.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self.optional_column(name)?.into_iter().flatten().collect())
    }

    /// Every numeric column, in header order.
    ///
    /// A column is numeric when it has at least one non-empty cell and every
    /// non-empty cell coerces. Other columns are left out.
    #[must_use]
    pub fn numeric_columns(&self) -> Vec<(String, Vec<f64>)> {
        self.headers
            .iter()
            .filter_map(|h| {
                let cells = self.optional_column(h).ok()?;
                if cells.iter().all(Option::is_none) {
                    return None;
                }
                Some((h.clone(), cells.into_iter().flatten().collect()))
            })
            .collect()
    }

    /// Group the numeric values of `value` by the text of `key`.
    ///
    /// Groups come back in order of first appearance. Rows whose key is
    /// missing (blank, an NA spelling, or any other `NaN` literal) are
    /// dropped; missing value cells are skipped within their group.
    pub fn group_by(&self, key: &str, value: &str) -> Result<Vec<(String, Vec<f64>)>> {
        let key_idx = self.require(key)?;
        let values = self.optional_column(value)?;

        let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
        for (row, v) in self.rows.iter().zip(values) {
            let k = row[key_idx].trim();
            if is_missing(k) || Number::parse(k).is_some_and(|n| n.as_f64().is_nan()) {
                continue;
            }
            let slot = match groups.iter().position(|(g, _)| g == k) {
                Some(pos) => pos,
                None => {
                    groups.push((k.to_owned(), Vec::new()));
                    groups.len() - 1
                }
            };
            if let Some(v) = v {
                groups[slot].1.push(v);
            }
        }
        Ok(groups)
    }

    /// Render as CSV text with a header row and no index column.
    #[must_use]
    pub fn to_csv_string(&self) -> String {
        let mut out = String::new();
        write_record(&mut out, &self.headers);
        for row in &self.rows {
            write_record(&mut out, row);
        }
        out
    }

    /// Render as a JSON array of objects keyed by header, in column order.
    ///
    /// Numeric cells become JSON numbers and empty cells become `null`.
    #[must_use]
    pub fn to_json_records(&self) -> Value {
        let records = self
            .rows
            .iter()
            .map(|row| {
                let obj: Map<String, Value> = self
                    .headers
                    .iter()
                    .zip(row)
                    .map(|(h, cell)| (h.clone(), json_cell(cell)))
                    .collect();
                Value::Object(obj)
            })
            .collect();
        Value::Array(records)
    }
}

fn numeric_cell(column: &str, row: usize, cell: &str) -> Result<Option<f64>> {
    if is_missing(cell) {
        return Ok(None);
    }
    Number::parse(cell)
        .map(|n| Some(n.as_f64()).filter(|v| !v.is_nan()))
        .ok_or_else(|| TableError::NonNumericCell {
            column: column.to_owned(),
            row,
            cell: cell.to_owned(),
        })
}

fn json_cell(cell: &str) -> Value {
    if is_missing(cell) {
        return Value::Null;
    }
    match Number::parse(cell) {
        Some(Number::Int(i)) => Value::from(i),
        Some(Number::Float(f)) => {
            serde_json::Number::from_f64(f).map_or_else(|| Value::String(cell.to_owned()), Value::Number)
        }
        None => Value::String(cell.to_owned()),
    }
}

fn write_record(out: &mut String, fields: &[String]) {
    for (i, f) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if f.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&f.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(f);
        }
    }
    out.push('\n');
}

/// Split CSV text into records of fields. Blank lines produce no record.
fn parse_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_line = 0usize;
    let mut line = 1usize;
    // Whether the current record has seen any content (blank-line detection).
    let mut dirty = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                quote_line = line;
                dirty = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                dirty = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                line += 1;
                if dirty {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                dirty = false;
            }
            _ => {
                field.push(c);
                dirty = true;
            }
        }
    }

    if in_quotes {
        return Err(TableError::UnterminatedQuote { line: quote_line });
    }
    if dirty {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}
