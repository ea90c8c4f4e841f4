//! Snapshot record and table types.
//!
//! The output schema is a constant of the tool; header lines in a report are
//! never consulted for column names.

use mstat_core::{Number, Table, TableError};
use serde::{Deserialize, Serialize};

/// Output column names, in order.
pub const COLUMNS: [&str; 6] = [
    "n",
    "time(i)",
    "total(B)",
    "useful-heap(B)",
    "extra-heap(B)",
    "stacks(B)",
];

/// One massif snapshot row.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SnapshotRecord {
    /// Snapshot sequence number.
    pub n: Number,
    /// Time index at which the snapshot was taken.
    pub time_i: Number,
    /// Total heap + stack bytes.
    pub total_bytes: Number,
    /// Bytes in live heap allocations.
    pub useful_heap_bytes: Number,
    /// Heap bookkeeping/fragmentation overhead.
    pub extra_heap_bytes: Number,
    /// Stack bytes.
    pub stacks_bytes: Number,
}

impl SnapshotRecord {
    /// Bind six values positionally, in [`COLUMNS`] order.
    #[inline]
    #[must_use]
    pub const fn from_fields(f: [Number; 6]) -> Self {
        Self {
            n: f[0],
            time_i: f[1],
            total_bytes: f[2],
            useful_heap_bytes: f[3],
            extra_heap_bytes: f[4],
            stacks_bytes: f[5],
        }
    }

    /// Fields in [`COLUMNS`] order.
    #[inline]
    #[must_use]
    pub const fn fields(&self) -> [Number; 6] {
        [
            self.n,
            self.time_i,
            self.total_bytes,
            self.useful_heap_bytes,
            self.extra_heap_bytes,
            self.stacks_bytes,
        ]
    }
}

/// Ordered snapshot records, in source line order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SnapshotTable {
    /// Records in the order their lines appeared.
    pub records: Vec<SnapshotRecord>,
}

impl SnapshotTable {
    /// Number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no snapshot lines were found.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SnapshotRecord> {
        self.records.iter()
    }

    /// Convert to a text [`Table`] with the fixed [`COLUMNS`] header.
    ///
    /// A column holding any float is written as floats throughout (`2048`
    /// becomes `2048.0`); all-integer columns stay integral.
    pub fn to_table(&self) -> Result<Table, TableError> {
        let mut float_cols = [false; 6];
        for r in &self.records {
            for (flag, v) in float_cols.iter_mut().zip(r.fields()) {
                *flag |= !v.is_int();
            }
        }

        let mut t = Table::new(COLUMNS);
        for r in &self.records {
            let row = r
                .fields()
                .into_iter()
                .zip(float_cols)
                .map(|(v, as_float)| if as_float { float_cell(v.as_f64()) } else { v.to_string() })
                .collect();
            t.push_row(row)?;
        }
        Ok(t)
    }
}

/// Float cell text: always carries a fractional part or exponent.
fn float_cell(v: f64) -> String {
    if v.is_nan() {
        String::new()
    } else {
        format!("{v:?}")
    }
}

impl<'a> IntoIterator for &'a SnapshotTable {
    type Item = &'a SnapshotRecord;
    type IntoIter = std::slice::Iter<'a, SnapshotRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_fixed_header_and_no_index() {
        let st = SnapshotTable {
            records: vec![SnapshotRecord::from_fields([
                Number::Int(1),
                Number::Int(1234),
                Number::Int(2048),
                Number::Int(2000),
                Number::Int(48),
                Number::Float(0.5),
            ])],
        };
        assert_eq!(
            st.to_table().unwrap().to_csv_string(),
            "n,time(i),total(B),useful-heap(B),extra-heap(B),stacks(B)\n1,1234,2048,2000,48,0.5\n"
        );
    }

    #[test]
    fn mixed_column_is_written_as_floats() {
        let st = SnapshotTable {
            records: vec![
                SnapshotRecord::from_fields([0, 0, 1, 0, 0, 0].map(Number::Int)),
                SnapshotRecord::from_fields([
                    Number::Int(1),
                    Number::Float(1.5),
                    Number::Int(2),
                    Number::Int(0),
                    Number::Int(0),
                    Number::Int(0),
                ]),
            ],
        };
        let csv = st.to_table().unwrap().to_csv_string();
        assert_eq!(
            csv,
            "n,time(i),total(B),useful-heap(B),extra-heap(B),stacks(B)\n0,0.0,1,0,0,0\n1,1.5,2,0,0,0\n"
        );
    }
}
