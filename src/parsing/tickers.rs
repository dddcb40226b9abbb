//! The `company_tickers.json` ticker list.
//!
//! The SEC publishes the ticker ↔ CIK mapping as an object keyed by a stringified
//! integer index:
//!
//! ```json
//! {"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}, ...}
//! ```

use serde::Serialize;
use serde_json::Value;

use super::fields::{Fields, as_object};
use crate::cik::Cik;
use crate::error::{EdgarError, Result};
use crate::table::{Cell, Table};

pub const TICKER_COLUMNS: [&str; 3] = ["cik", "ticker", "title"];

/// One exchange-listed entity from the ticker list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerRecord {
    /// Position key the record was listed under.
    pub index: u64,
    pub cik: u64,
    pub ticker: String,
    pub title: String,
}

/// The full ticker list, ordered by ascending index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyTickers {
    pub records: Vec<TickerRecord>,
}

impl CompanyTickers {
    /// Parses the ticker list. Any malformed entry fails the whole list.
    pub fn from_value(value: &Value) -> Result<Self> {
        let entries = as_object(value, "")?;

        let mut records = entries
            .iter()
            .map(|(key, entry)| -> Result<TickerRecord> {
                let index = key.parse::<u64>().map_err(|_| EdgarError::TypeMismatch {
                    path: key.clone(),
                    expected: "integer index",
                    found: "string",
                })?;
                let fields = Fields::new(entry, key.as_str())?;
                Ok(TickerRecord {
                    index,
                    cik: fields.u64("cik_str")?,
                    ticker: fields.string("ticker")?,
                    title: fields.string("title")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        records.sort_by_key(|r| r.index);
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a ticker up case-insensitively.
    pub fn find(&self, ticker: &str) -> Option<&TickerRecord> {
        self.records
            .iter()
            .find(|r| r.ticker.eq_ignore_ascii_case(ticker))
    }

    /// Flattens into `cik, ticker, title` rows.
    ///
    /// With `parse_cik` the CIK column holds the canonical `CIK##########` text,
    /// otherwise the bare integer.
    pub fn to_table(&self, parse_cik: bool) -> Table {
        let mut table = Table::with_capacity(
            TICKER_COLUMNS.iter().map(|c| c.to_string()).collect(),
            self.records.len(),
        );
        for record in &self.records {
            let cik = if parse_cik {
                Cell::Text(Cik::new(record.cik).to_string())
            } else {
                Cell::from(record.cik)
            };
            table.push_row(vec![
                cik,
                Cell::from(record.ticker.as_str()),
                Cell::from(record.title.as_str()),
            ]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_cik_renders_prefixed() {
        let value = json!({"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}});
        let table = CompanyTickers::from_value(&value).unwrap().to_table(true);

        assert_eq!(table.columns(), TICKER_COLUMNS);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.rows()[0],
            vec![
                Cell::from("CIK0000320193"),
                Cell::from("AAPL"),
                Cell::from("Apple Inc.")
            ]
        );
    }

    #[test]
    fn test_raw_cik_kept_as_integer() {
        let value = json!({"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}});
        let table = CompanyTickers::from_value(&value).unwrap().to_table(false);
        assert_eq!(table.get(0, "cik").and_then(Cell::as_u64), Some(320193));
    }

    #[test]
    fn test_rows_follow_numeric_index_order() {
        let value = json!({
            "10": {"cik_str": 3, "ticker": "CCC", "title": "C"},
            "2": {"cik_str": 2, "ticker": "BBB", "title": "B"},
            "0": {"cik_str": 1, "ticker": "AAA", "title": "A"}
        });
        let tickers = CompanyTickers::from_value(&value).unwrap();
        let order: Vec<_> = tickers.records.iter().map(|r| r.index).collect();
        assert_eq!(order, [0, 2, 10]);
        assert_eq!(tickers.find("bbb").map(|r| r.cik), Some(2));
    }

    #[test]
    fn test_missing_field_fails_whole_list() {
        let value = json!({
            "0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."},
            "1": {"cik_str": 789019, "ticker": "MSFT"}
        });
        let err = CompanyTickers::from_value(&value).unwrap_err();
        assert!(matches!(err, EdgarError::MalformedRecord { ref path } if path == "1.title"));
    }

    #[test]
    fn test_textual_cik_is_type_mismatch() {
        let value = json!({"0": {"cik_str": "320193", "ticker": "AAPL", "title": "Apple Inc."}});
        let err = CompanyTickers::from_value(&value).unwrap_err();
        assert!(matches!(err, EdgarError::TypeMismatch { ref path, .. } if path == "0.cik_str"));
    }

    #[test]
    fn test_non_integer_key_rejected() {
        let value = json!({"first": {"cik_str": 1, "ticker": "A", "title": "A"}});
        let err = CompanyTickers::from_value(&value).unwrap_err();
        assert!(matches!(err, EdgarError::TypeMismatch { expected: "integer index", .. }));
    }
}
