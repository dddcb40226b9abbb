//! Submission history (`/submissions/CIK##########.json`).
//!
//! The SEC ships filing history column-wise: `filings.recent` is an object of
//! parallel arrays, one per filing attribute, where position `i` of every array
//! describes the same filing. There is no per-filing identifier tying the arrays
//! together, so every array must have the same length before rows are built.
//!
//! Histories longer than the `recent` window are paginated into extra documents
//! listed under `filings.files`; those pages carry the same parallel arrays at
//! their top level and are parsed with [`SubmissionPage::from_value`].

use serde::Serialize;
use serde_json::{Map, Value};

use super::fields::{Fields, as_object, index_path, join_path, type_mismatch};
use crate::error::{EdgarError, Result};
use crate::table::{Cell, Table};

/// Entity columns prepended to every submission history row.
pub const ENTITY_COLUMNS: [&str; 4] = ["cik", "name", "sic", "sicDescription"];

const REQUIRED_SEQUENCES: [&str; 2] = ["accessionNumber", "form"];

/// Element type a known parallel array is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementType {
    Text,
    Integer,
    /// Arrays this crate has no declaration for; any JSON scalar is kept as-is.
    Scalar,
}

fn declared_type(field: &str) -> ElementType {
    match field {
        "accessionNumber" | "filingDate" | "reportDate" | "acceptanceDateTime" | "act"
        | "form" | "fileNumber" | "filmNumber" | "items" | "core_type" | "primaryDocument"
        | "primaryDocDescription" => ElementType::Text,
        "size" | "isXBRL" | "isInlineXBRL" => ElementType::Integer,
        _ => ElementType::Scalar,
    }
}

fn element_cell(kind: ElementType, value: &Value, path: impl FnOnce() -> String) -> Result<Cell> {
    match (kind, value) {
        (_, Value::Null) => Ok(Cell::Null),
        (ElementType::Text | ElementType::Scalar, Value::String(s)) => Ok(Cell::Text(s.clone())),
        (ElementType::Integer, Value::Number(n)) if n.is_i64() || n.is_u64() => {
            Ok(Cell::Number(n.clone()))
        }
        (ElementType::Scalar, Value::Number(n)) => Ok(Cell::Number(n.clone())),
        (ElementType::Scalar, Value::Bool(b)) => Ok(Cell::Bool(*b)),
        (ElementType::Text, other) => Err(type_mismatch(path(), "string", other)),
        (ElementType::Integer, other) => Err(type_mismatch(path(), "integer", other)),
        (ElementType::Scalar, other) => Err(type_mismatch(path(), "scalar", other)),
    }
}

/// Entity-level metadata of a submission history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityInfo {
    pub cik: String,
    pub name: String,
    pub sic: Option<String>,
    pub sic_description: Option<String>,
}

impl EntityInfo {
    fn cells(&self) -> [Cell; 4] {
        [
            Cell::from(self.cik.as_str()),
            Cell::from(self.name.as_str()),
            Cell::from(self.sic.clone()),
            Cell::from(self.sic_description.clone()),
        ]
    }
}

/// One filing event.
///
/// The commonly used attributes are broken out; `values` holds every attribute of
/// the source payload, aligned with [`SubmissionPage::fields`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub accession_number: String,
    pub form: String,
    pub filing_date: Option<String>,
    pub report_date: Option<String>,
    pub values: Vec<Cell>,
}

/// A block of filings decoded from parallel arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPage {
    /// Attribute names in document order.
    pub fields: Vec<String>,
    pub records: Vec<SubmissionRecord>,
}

/// Pointer to an older page of a long submission history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionFile {
    pub name: String,
    pub filing_count: u64,
    pub filing_from: String,
    pub filing_to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionHistory {
    pub entity: EntityInfo,
    pub recent: SubmissionPage,
    pub files: Vec<SubmissionFile>,
}

impl SubmissionPage {
    /// Parses a standalone page, i.e. parallel arrays at the document root.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_object(as_object(value, "")?, "")
    }

    fn from_object(object: &Map<String, Value>, path: &str) -> Result<Self> {
        let fields = Fields::new_object(object, path);
        let [accession, forms] = REQUIRED_SEQUENCES.map(|field| text_sequence(&fields, field));
        let (accession, forms) = (accession?, forms?);

        let mut names = Vec::with_capacity(object.len());
        let mut columns = Vec::with_capacity(object.len());
        let mut reference: Option<(String, usize)> = None;

        for (name, value) in object {
            let field_path = join_path(path, name);
            let sequence = value
                .as_array()
                .ok_or_else(|| type_mismatch(field_path.clone(), "array", value))?;

            if let Some((reference_path, expected)) = &reference {
                if *expected != sequence.len() {
                    return Err(EdgarError::ShapeMismatch {
                        path: field_path,
                        reference: reference_path.clone(),
                        expected: *expected,
                        found: sequence.len(),
                    });
                }
            } else {
                reference = Some((field_path.clone(), sequence.len()));
            }

            let kind = declared_type(name);
            let cells = sequence
                .iter()
                .enumerate()
                .map(|(i, element)| element_cell(kind, element, || index_path(&field_path, i)))
                .collect::<Result<Vec<_>>>()?;

            names.push(name.clone());
            columns.push(cells);
        }

        let filing_idx = names.iter().position(|n| n == "filingDate");
        let report_idx = names.iter().position(|n| n == "reportDate");
        let len = reference.map_or(0, |(_, len)| len);
        let mut column_iters: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();

        let records = accession
            .into_iter()
            .zip(forms)
            .take(len)
            .map(|(accession_number, form)| {
                let values: Vec<Cell> = column_iters
                    .iter_mut()
                    .map(|column| column.next().unwrap_or(Cell::Null))
                    .collect();
                let text_at =
                    |idx: Option<usize>| idx.and_then(|i| values[i].as_str()).map(String::from);
                let filing_date = text_at(filing_idx);
                let report_date = text_at(report_idx);
                SubmissionRecord {
                    accession_number,
                    form,
                    filing_date,
                    report_date,
                    values,
                }
            })
            .collect();

        Ok(Self {
            fields: names,
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Value of `field` for the filing at position `row`.
    pub fn get(&self, row: usize, field: &str) -> Option<&Cell> {
        let idx = self.fields.iter().position(|f| f == field)?;
        self.records.get(row).map(|r| &r.values[idx])
    }

    /// Flattens into one row per filing, columns in document order.
    pub fn to_table(&self) -> Table {
        let mut table = Table::with_capacity(self.fields.clone(), self.records.len());
        for record in &self.records {
            table.push_row(record.values.clone());
        }
        table
    }
}

/// Reads a required array whose elements must all be strings.
fn text_sequence(fields: &Fields<'_>, field: &str) -> Result<Vec<String>> {
    fields
        .array(field)?
        .iter()
        .enumerate()
        .map(|(i, element)| {
            element
                .as_str()
                .map(String::from)
                .ok_or_else(|| type_mismatch(index_path(&fields.path_of(field), i), "string", element))
        })
        .collect()
}

impl SubmissionHistory {
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = Fields::new(value, "")?;
        let entity = EntityInfo {
            cik: root.string("cik")?,
            name: root.string("name")?,
            sic: root.opt_string("sic")?,
            sic_description: root.opt_string("sicDescription")?,
        };

        let filings = Fields::new_object(root.object("filings")?, "filings");
        let recent = SubmissionPage::from_object(filings.object("recent")?, "filings.recent")?;

        let files = filings
            .opt_array("files")?
            .map(|files| {
                files
                    .iter()
                    .enumerate()
                    .map(|(i, file)| -> Result<SubmissionFile> {
                        let file = Fields::new(file, index_path("filings.files", i))?;
                        Ok(SubmissionFile {
                            name: file.string("name")?,
                            filing_count: file.u64("filingCount")?,
                            filing_from: file.string("filingFrom")?,
                            filing_to: file.string("filingTo")?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            entity,
            recent,
            files,
        })
    }

    /// Flattens the recent filings, repeating the entity columns on every row.
    pub fn to_table(&self) -> Table {
        let columns = ENTITY_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(self.recent.fields.iter().cloned())
            .collect();
        let entity = self.entity.cells();

        let mut table = Table::with_capacity(columns, self.recent.records.len());
        for record in &self.recent.records {
            let mut row = Vec::with_capacity(entity.len() + record.values.len());
            row.extend(entity.iter().cloned());
            row.extend(record.values.iter().cloned());
            table.push_row(row);
        }
        table
    }
}
