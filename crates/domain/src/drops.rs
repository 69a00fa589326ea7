//! Drop-table resolution against the item catalog.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::{json_truthy, to_int};

/// Read-only lookup of item display names keyed by item identifier.
///
/// Implementations are expected to cache whatever backing files they load;
/// lookups take `&mut self` so the cache can populate lazily. One catalog
/// instance lives for one batch run.
pub trait ItemCatalog {
    /// Returns the `AegisName` for the item, or `None` when no configured
    /// catalog file knows the identifier.
    fn lookup(&mut self, item_id: i64) -> Option<String>;
}

/// One resolved drop entry of the target schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEntry {
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Rate")]
    pub rate: i64,
    #[serde(rename = "StealProtected")]
    pub steal_protected: bool,
}

/// Resolves raw Divine-Pride drop entries into target-schema drops.
///
/// Entries with an absent or non-numeric `itemId`, and entries whose item
/// cannot be found in any catalog file, are skipped with a warning; the
/// remaining drops keep their input order. A non-positive or unparseable
/// `chance` becomes the default rate of 10.
pub fn resolve_drops(items: &[Value], catalog: &mut dyn ItemCatalog) -> Vec<DropEntry> {
    let mut drops = Vec::new();

    for item in items {
        let raw_id = item.get("itemId");
        if !json_truthy(raw_id, false) {
            continue;
        }

        let item_id = to_int(raw_id, 0);
        if item_id == 0 {
            tracing::warn!(item_id = ?raw_id, "invalid itemId in drop entry");
            continue;
        }

        let Some(aegis_name) = catalog.lookup(item_id) else {
            tracing::warn!(item_id, "item not found in any catalog file");
            continue;
        };

        let mut rate = to_int(item.get("chance"), 10);
        if rate <= 0 {
            rate = 10;
        }

        drops.push(DropEntry {
            item: aegis_name,
            rate,
            steal_protected: json_truthy(item.get("stealProtected"), false),
        });
    }

    drops
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    struct FakeCatalog(HashMap<i64, String>);

    impl ItemCatalog for FakeCatalog {
        fn lookup(&mut self, item_id: i64) -> Option<String> {
            self.0.get(&item_id).cloned()
        }
    }

    fn catalog() -> FakeCatalog {
        FakeCatalog(HashMap::from([
            (7321, "Crystal_Fragment".to_string()),
            (501, "Red_Potion".to_string()),
        ]))
    }

    #[test]
    fn test_resolves_known_items_in_order() {
        let items = [
            json!({"itemId": 501, "chance": 1500, "stealProtected": true}),
            json!({"itemId": 7321, "chance": 25}),
        ];
        let drops = resolve_drops(&items, &mut catalog());

        assert_eq!(
            drops,
            vec![
                DropEntry {
                    item: "Red_Potion".to_string(),
                    rate: 1500,
                    steal_protected: true,
                },
                DropEntry {
                    item: "Crystal_Fragment".to_string(),
                    rate: 25,
                    steal_protected: false,
                },
            ]
        );
    }

    #[test]
    fn test_skips_unknown_and_invalid_item_ids() {
        let items = [
            json!({"itemId": 9999, "chance": 10}),
            json!({"chance": 10}),
            json!({"itemId": "junk"}),
            json!({"itemId": 501}),
        ];
        let drops = resolve_drops(&items, &mut catalog());

        assert_eq!(drops.len(), 1);
        assert_eq!(drops[0].item, "Red_Potion");
    }

    #[test]
    fn test_non_positive_rate_becomes_default() {
        let items = [
            json!({"itemId": 501, "chance": 0}),
            json!({"itemId": 501, "chance": -5}),
            json!({"itemId": 501, "chance": "bad"}),
        ];
        let drops = resolve_drops(&items, &mut catalog());

        assert!(drops.iter().all(|d| d.rate == 10));
    }
}
