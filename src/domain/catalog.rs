//! The loaded record set and its tag universe.

use std::collections::{BTreeSet, HashSet};

use serde_json::Value;

use crate::domain::record::json_kind;
use crate::domain::{FilterState, LoadError, MalformedRecord, Record, RecordId};

/// Ordered, immutable record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

/// Result of validating a catalog document.
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub catalog: Catalog,
    /// Elements left out because they failed validation.
    pub skipped: Vec<MalformedRecord>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse and validate a JSON catalog document.
    pub fn parse(text: &str) -> Result<ParsedCatalog, LoadError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Validate an already-parsed document.
    ///
    /// The top level must be an array. Elements that fail validation, or that
    /// repeat an earlier id, are skipped and reported in `skipped`.
    pub fn from_value(value: Value) -> Result<ParsedCatalog, LoadError> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(LoadError::NotAnArray(json_kind(&other))),
        };

        let mut seen: HashSet<RecordId> = HashSet::with_capacity(items.len());
        let mut records = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();

        for (index, item) in items.iter().enumerate() {
            match Record::from_value(index, item) {
                Ok(record) if !seen.insert(record.id.clone()) => {
                    skipped.push(MalformedRecord {
                        index,
                        reason: format!("duplicate id '{}'", record.id),
                    });
                }
                Ok(record) => records.push(record),
                Err(malformed) => skipped.push(malformed),
            }
        }

        Ok(ParsedCatalog { catalog: Self { records }, skipped })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, duplicate-free union of every record's tags.
    pub fn tag_universe(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|r| r.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Positions of the records matching `filter`, in catalog order.
    pub fn matching_indices(&self, filter: &FilterState) -> Vec<usize> {
        let matcher = filter.matcher();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| matcher.matches(record))
            .map(|(index, _)| index)
            .collect()
    }
}
