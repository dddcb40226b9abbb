//! XBRL company concept and company facts documents.
//!
//! Both endpoints nest reported facts as `unit → [fact, ...]`; company facts adds
//! two more levels on top (`taxonomy → tag → {label, description, units}`), while
//! company concept is already fixed to one taxonomy and tag. Facts never repeat the
//! keys they are nested under, so flattening injects taxonomy, tag and unit as
//! columns.
//!
//! Iteration follows the order of the source document; nothing is re-sorted.

use serde::Serialize;
use serde_json::{Map, Number, Value};

use super::fields::{Fields, as_object, index_path, join_path, type_mismatch};
use crate::error::Result;
use crate::table::{Cell, Table};

/// Columns shared by company concept and company facts tables.
pub const FACT_COLUMNS: [&str; 16] = [
    "cik",
    "entityName",
    "taxonomy",
    "tag",
    "label",
    "description",
    "unit",
    "start",
    "end",
    "val",
    "accn",
    "fy",
    "fp",
    "form",
    "filed",
    "frame",
];

/// One reported value for a concept.
///
/// Instant facts (balance sheet items) have no `start`. `fy`/`fp` are sometimes
/// `null` in SEC data and `frame` is only set on facts the SEC assigned to a
/// calendrical frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptFact {
    pub unit: String,
    pub start: Option<String>,
    pub end: String,
    pub val: Number,
    pub accn: String,
    pub fy: Option<i64>,
    pub fp: Option<String>,
    pub form: String,
    pub filed: String,
    pub frame: Option<String>,
}

impl ConceptFact {
    fn from_value(unit: &str, value: &Value, path: String) -> Result<Self> {
        let fields = Fields::new(value, path)?;
        Ok(Self {
            unit: unit.to_string(),
            start: fields.opt_string("start")?,
            end: fields.string("end")?,
            val: fields.number("val")?,
            accn: fields.string("accn")?,
            fy: fields.opt_i64("fy")?,
            fp: fields.opt_string("fp")?,
            form: fields.string("form")?,
            filed: fields.string("filed")?,
            frame: fields.opt_string("frame")?,
        })
    }
}

/// All facts reported for one taxonomy/tag pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Concept {
    pub taxonomy: String,
    pub tag: String,
    pub label: Option<String>,
    pub description: Option<String>,
    /// Facts in unit order, then in array order within a unit.
    pub facts: Vec<ConceptFact>,
}

impl Concept {
    /// Parses the `label`/`description`/`units` block found under a tag.
    fn from_fields(taxonomy: String, tag: String, fields: &Fields<'_>) -> Result<Self> {
        let units = fields.object("units")?;
        Ok(Self {
            taxonomy,
            tag,
            label: fields.opt_string("label")?,
            description: fields.opt_string("description")?,
            facts: parse_units(units, &fields.path_of("units"))?,
        })
    }
}

fn parse_units(units: &Map<String, Value>, path: &str) -> Result<Vec<ConceptFact>> {
    let mut facts = Vec::new();
    for (unit, values) in units {
        let unit_path = join_path(path, unit);
        let values = values
            .as_array()
            .ok_or_else(|| type_mismatch(unit_path.clone(), "array", values))?;
        for (i, value) in values.iter().enumerate() {
            facts.push(ConceptFact::from_value(unit, value, index_path(&unit_path, i))?);
        }
    }
    Ok(facts)
}

/// `/api/xbrl/companyconcept/CIK##########/{taxonomy}/{tag}.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyConcept {
    pub cik: u64,
    pub entity_name: String,
    pub concept: Concept,
}

impl CompanyConcept {
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = Fields::new(value, "")?;
        let cik = root.u64("cik")?;
        let entity_name = root.string("entityName")?;
        let concept = Concept::from_fields(root.string("taxonomy")?, root.string("tag")?, &root)?;
        Ok(Self {
            cik,
            entity_name,
            concept,
        })
    }

    pub fn to_table(&self) -> Table {
        let mut table = fact_table(self.concept.facts.len());
        push_concept(&mut table, self.cik, &self.entity_name, &self.concept);
        table
    }
}

/// `/api/xbrl/companyfacts/CIK##########.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyFacts {
    pub cik: u64,
    pub entity_name: String,
    /// Concepts in document order: taxonomy by taxonomy, tag by tag.
    pub concepts: Vec<Concept>,
}

impl CompanyFacts {
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = Fields::new(value, "")?;
        let cik = root.u64("cik")?;
        let entity_name = root.string("entityName")?;

        let mut concepts = Vec::new();
        for (taxonomy, tags) in root.object("facts")? {
            let taxonomy_path = join_path("facts", taxonomy);
            for (tag, body) in as_object(tags, &taxonomy_path)? {
                let fields = Fields::new(body, join_path(&taxonomy_path, tag))?;
                concepts.push(Concept::from_fields(taxonomy.clone(), tag.clone(), &fields)?);
            }
        }

        Ok(Self {
            cik,
            entity_name,
            concepts,
        })
    }

    pub fn concept(&self, taxonomy: &str, tag: &str) -> Option<&Concept> {
        self.concepts
            .iter()
            .find(|c| c.taxonomy == taxonomy && c.tag == tag)
    }

    pub fn fact_count(&self) -> usize {
        self.concepts.iter().map(|c| c.facts.len()).sum()
    }

    pub fn to_table(&self) -> Table {
        let mut table = fact_table(self.fact_count());
        for concept in &self.concepts {
            push_concept(&mut table, self.cik, &self.entity_name, concept);
        }
        table
    }
}

fn fact_table(rows: usize) -> Table {
    Table::with_capacity(FACT_COLUMNS.iter().map(|c| c.to_string()).collect(), rows)
}

fn push_concept(table: &mut Table, cik: u64, entity_name: &str, concept: &Concept) {
    for fact in &concept.facts {
        table.push_row(vec![
            Cell::from(cik),
            Cell::from(entity_name),
            Cell::from(concept.taxonomy.as_str()),
            Cell::from(concept.tag.as_str()),
            Cell::from(concept.label.clone()),
            Cell::from(concept.description.clone()),
            Cell::from(fact.unit.as_str()),
            Cell::from(fact.start.clone()),
            Cell::from(fact.end.as_str()),
            Cell::from(fact.val.clone()),
            Cell::from(fact.accn.as_str()),
            Cell::from(fact.fy),
            Cell::from(fact.fp.clone()),
            Cell::from(fact.form.as_str()),
            Cell::from(fact.filed.as_str()),
            Cell::from(fact.frame.clone()),
        ]);
    }
}
