//! Rectangular tables produced by flattening EDGAR documents.
//!
//! A [`Table`] is a list of column names plus rows of [`Cell`]s. Every row has
//! exactly one cell per column; a value the source document left out is stored as
//! [`Cell::Null`] rather than shortening the row, so a table can always be written
//! out as CSV or a list of JSON records without any column bookkeeping.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Number;
use std::fmt;

#[cfg(feature = "csv")]
use super::error::{EdgarError, Result};

/// A single table value.
///
/// Numbers keep the exact `serde_json::Number` they were parsed from, so an integer
/// reported by the SEC never takes a detour through `f64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Cell::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Number(value.into())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value.into())
    }
}

impl From<Number> for Cell {
    fn from(value: Number) -> Self {
        Cell::Number(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

/// Renders the cell the way it appears in a CSV field. `Null` is empty.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(columns: Vec<String>, rows: usize) -> Self {
        Self {
            columns,
            rows: Vec::with_capacity(rows),
        }
    }

    pub(crate) fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(
            row.len(),
            self.columns.len(),
            "row width must match the column count"
        );
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, top to bottom. `None` if there is no such column.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Cell> + use<'a>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            columns: &self.columns,
            cells,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.rows.iter().map(|cells| Row {
            columns: &self.columns,
            cells,
        })
    }
}

/// A borrowed view of one table row that can look cells up by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.cells.get(idx)
    }

    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

/// Serializes as a list of records, one object per row, keys in column order.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in self.iter() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

#[cfg(feature = "csv")]
impl Table {
    /// Writes the header and every row as CSV. `Null` cells become empty fields.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(Cell::to_string))?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| {
            EdgarError::FileError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    pub fn save_csv(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["cik", "ticker", "val"]);
        table.push_row(vec![
            Cell::from("CIK0000320193"),
            Cell::from("AAPL"),
            Cell::from(1000u64),
        ]);
        table.push_row(vec![Cell::from("CIK0000789019"), Cell::from("MSFT"), Cell::Null]);
        table
    }

    #[test]
    fn test_lookup_by_column() {
        let table = sample();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_index("ticker"), Some(1));
        assert_eq!(table.get(0, "val").and_then(Cell::as_u64), Some(1000));
        assert!(table.get(1, "val").unwrap().is_null());
        assert!(table.get(2, "val").is_none());
        assert!(table.column("missing").is_none());

        let tickers: Vec<_> = table
            .column("ticker")
            .unwrap()
            .filter_map(Cell::as_str)
            .collect();
        assert_eq!(tickers, ["AAPL", "MSFT"]);
    }

    #[test]
    fn test_row_view() {
        let table = sample();
        let row = table.row(1).unwrap();
        assert_eq!(row.get("ticker").and_then(Cell::as_str), Some("MSFT"));
        assert_eq!(row.cells().len(), 3);
        assert!(row.get("nope").is_none());
    }

    #[test]
    fn test_serialize_as_records() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"[{"cik":"CIK0000320193","ticker":"AAPL","val":1000},{"cik":"CIK0000789019","ticker":"MSFT","val":null}]"#
        );
    }

    #[test]
    fn test_option_into_cell() {
        assert_eq!(Cell::from(None::<String>), Cell::Null);
        assert_eq!(Cell::from(Some(2023i64)).as_i64(), Some(2023));
        assert_eq!(Cell::Null.to_string(), "");
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_csv_export() {
        let csv = sample().to_csv_string().unwrap();
        assert_eq!(
            csv,
            "cik,ticker,val\nCIK0000320193,AAPL,1000\nCIK0000789019,MSFT,\n"
        );
    }
}
