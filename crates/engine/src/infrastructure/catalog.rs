//! Item catalog backed by rAthena item_db YAML files.
//!
//! The catalog owns a per-file cache: each configured file is parsed at
//! most once, on the first lookup that reaches it, and the parse result
//! (including a failed one) is kept for the lifetime of the catalog. One
//! catalog instance lives for one batch run.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use mobforge_domain::ItemCatalog;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "Body", default)]
    body: Vec<CatalogItem>,
}

#[derive(Debug, Deserialize)]
struct CatalogItem {
    #[serde(rename = "Id", default)]
    id: Option<i64>,
    #[serde(rename = "AegisName", default)]
    aegis_name: Option<String>,
}

/// Lazily-loaded, multi-file item catalog. Files are searched in the
/// configured order; the first match wins.
pub struct YamlItemCatalog {
    paths: Vec<PathBuf>,
    cache: HashMap<PathBuf, Option<CatalogFile>>,
}

impl YamlItemCatalog {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            cache: HashMap::new(),
        }
    }

    fn load(path: &PathBuf) -> Option<CatalogFile> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "item catalog file not readable");
                return None;
            }
        };

        match serde_yaml::from_str::<CatalogFile>(&raw) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse item catalog file");
                None
            }
        }
    }
}

impl ItemCatalog for YamlItemCatalog {
    fn lookup(&mut self, item_id: i64) -> Option<String> {
        for path in &self.paths {
            let file = self
                .cache
                .entry(path.clone())
                .or_insert_with(|| Self::load(path));

            let Some(file) = file else { continue };

            let hit = file
                .body
                .iter()
                .find(|item| item.id == Some(item_id))
                .and_then(|item| item.aegis_name.clone());
            if hit.is_some() {
                return hit;
            }
        }

        None
    }
}
