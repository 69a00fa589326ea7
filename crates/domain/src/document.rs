//! The structured monster document (header + ordered record collection).
//!
//! Body entries are kept as ordered YAML mappings rather than typed
//! records so that keys the converter does not know about survive a
//! load/upsert/save cycle untouched.

use serde_yaml::{Mapping, Value};

/// Fixed document type tag.
pub const DOCUMENT_TYPE: &str = "MOB_DB";
/// Fixed document schema version.
pub const DOCUMENT_VERSION: i64 = 2;

/// An in-memory monster document.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterDocument {
    pub header: Value,
    pub body: Vec<Value>,
}

impl MonsterDocument {
    /// A fresh document: default header, empty record collection.
    pub fn empty() -> Self {
        Self {
            header: Self::default_header(),
            body: Vec::new(),
        }
    }

    /// The canonical `Type`/`Version` header.
    pub fn default_header() -> Value {
        let mut header = Mapping::new();
        header.insert(Value::from("Type"), Value::from(DOCUMENT_TYPE));
        header.insert(Value::from("Version"), Value::from(DOCUMENT_VERSION));
        Value::Mapping(header)
    }

    /// Rebuilds a document from a parsed YAML root, defaulting the missing
    /// sub-structures without discarding existing records. A root that is
    /// not a mapping is treated as an empty document.
    pub fn from_value(root: &Value) -> Self {
        if !root.is_mapping() {
            tracing::warn!("monster document root is not a mapping, treating as empty");
            return Self::empty();
        }

        let header = root
            .get("Header")
            .cloned()
            .unwrap_or_else(Self::default_header);

        let body = match root.get("Body") {
            Some(Value::Sequence(entries)) => entries.clone(),
            Some(_) => {
                tracing::warn!("monster document Body is not a list, treating as empty");
                Vec::new()
            }
            None => Vec::new(),
        };

        Self { header, body }
    }

    /// The full document as a YAML value, key order preserved.
    pub fn to_value(&self) -> Value {
        let mut root = Mapping::new();
        root.insert(Value::from("Header"), self.header.clone());
        root.insert(Value::from("Body"), Value::Sequence(self.body.clone()));
        Value::Mapping(root)
    }

    /// Merges one record into the collection, keyed by `Id`: replaces in
    /// place on a match (preserving position), appends otherwise.
    ///
    /// Returns `true` when an existing record was updated.
    pub fn upsert(&mut self, entry: Value) -> bool {
        let id = entry.get("Id").cloned();

        for existing in &mut self.body {
            if existing.get("Id") == id.as_ref() {
                *existing = entry;
                return true;
            }
        }

        self.body.push(entry);
        false
    }
}
