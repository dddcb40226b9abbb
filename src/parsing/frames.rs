//! XBRL frames (`/api/xbrl/frames/{taxonomy}/{tag}/{unit}/{period}.json`).
//!
//! A frame is a cross-sectional snapshot: the one fact each reporting entity last
//! filed that best fits the requested calendrical period. The taxonomy, tag, unit
//! of measure (`uom`) and calendrical period (`ccp`) are stated once at the top of
//! the document and repeated on every flattened row.

use serde::Serialize;
use serde_json::{Number, Value};

use super::fields::{Fields, index_path};
use crate::error::Result;
use crate::table::{Cell, Table};

pub const FRAME_COLUMNS: [&str; 13] = [
    "taxonomy",
    "tag",
    "ccp",
    "uom",
    "label",
    "description",
    "accn",
    "cik",
    "entityName",
    "loc",
    "start",
    "end",
    "val",
];

/// One entity's value within a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameEntry {
    pub accn: String,
    pub cik: u64,
    pub entity_name: String,
    pub loc: Option<String>,
    /// Only set for duration frames (`CY2019`, `CY2019Q1`).
    pub start: Option<String>,
    pub end: String,
    pub val: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub taxonomy: String,
    pub tag: String,
    pub ccp: String,
    pub uom: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub entries: Vec<FrameEntry>,
}

impl Frame {
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = Fields::new(value, "")?;

        let entries = root
            .array("data")?
            .iter()
            .enumerate()
            .map(|(i, entry)| -> Result<FrameEntry> {
                let entry = Fields::new(entry, index_path("data", i))?;
                Ok(FrameEntry {
                    accn: entry.string("accn")?,
                    cik: entry.u64("cik")?,
                    entity_name: entry.string("entityName")?,
                    loc: entry.opt_string("loc")?,
                    start: entry.opt_string("start")?,
                    end: entry.string("end")?,
                    val: entry.number("val")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            taxonomy: root.string("taxonomy")?,
            tag: root.string("tag")?,
            ccp: root.string("ccp")?,
            uom: root.string("uom")?,
            label: root.opt_string("label")?,
            description: root.opt_string("description")?,
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_table(&self) -> Table {
        let context = [
            Cell::from(self.taxonomy.as_str()),
            Cell::from(self.tag.as_str()),
            Cell::from(self.ccp.as_str()),
            Cell::from(self.uom.as_str()),
            Cell::from(self.label.clone()),
            Cell::from(self.description.clone()),
        ];

        let mut table = Table::with_capacity(
            FRAME_COLUMNS.iter().map(|c| c.to_string()).collect(),
            self.entries.len(),
        );
        for entry in &self.entries {
            let mut row = context.to_vec();
            row.extend([
                Cell::from(entry.accn.as_str()),
                Cell::from(entry.cik),
                Cell::from(entry.entity_name.as_str()),
                Cell::from(entry.loc.clone()),
                Cell::from(entry.start.clone()),
                Cell::from(entry.end.as_str()),
                Cell::from(entry.val.clone()),
            ]);
            table.push_row(row);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdgarError;
    use serde_json::json;

    fn frame() -> Value {
        json!({
            "taxonomy": "us-gaap",
            "tag": "AccountsPayableCurrent",
            "ccp": "CY2019Q1I",
            "uom": "USD",
            "label": "Accounts Payable, Current",
            "description": "Carrying value as of the balance sheet date.",
            "pts": 2,
            "data": [
                {"accn": "0001104659-19-016320", "cik": 1750, "entityName": "AAR CORP.",
                 "loc": "US-IL", "end": "2019-02-28", "val": 218600000},
                {"accn": "0000849399-19-000007", "cik": 1800, "entityName": "ABBOTT LABORATORIES",
                 "loc": "US-IL", "end": "2019-03-31", "val": 3280000000u64}
            ]
        })
    }

    #[test]
    fn test_context_repeated_on_every_row() {
        let table = Frame::from_value(&frame()).unwrap().to_table();
        assert_eq!(table.columns(), FRAME_COLUMNS);
        assert_eq!(table.len(), 2);
        for row in table.iter() {
            assert_eq!(row.get("taxonomy").and_then(Cell::as_str), Some("us-gaap"));
            assert_eq!(row.get("tag").and_then(Cell::as_str), Some("AccountsPayableCurrent"));
            assert_eq!(row.get("ccp").and_then(Cell::as_str), Some("CY2019Q1I"));
            assert_eq!(row.get("uom").and_then(Cell::as_str), Some("USD"));
            assert!(row.get("start").unwrap().is_null());
        }
        assert_eq!(table.get(1, "cik").and_then(Cell::as_u64), Some(1800));
        assert_eq!(table.get(0, "val").and_then(Cell::as_u64), Some(218600000));
    }

    #[test]
    fn test_entry_missing_cik() {
        let mut value = frame();
        value["data"][1].as_object_mut().unwrap().remove("cik");
        assert!(matches!(
            Frame::from_value(&value),
            Err(EdgarError::MalformedRecord { ref path }) if path == "data[1].cik"
        ));
    }

    #[test]
    fn test_empty_frame() {
        let mut value = frame();
        value["data"] = json!([]);
        let parsed = Frame::from_value(&value).unwrap();
        assert!(parsed.is_empty());
        let table = parsed.to_table();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), FRAME_COLUMNS.len());
    }
}
