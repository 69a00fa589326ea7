//! The raw Divine-Pride monster payload.
//!
//! The API enforces no schema, so every field is kept as a raw JSON value
//! and interpreted through the coercion helpers at the point of use.

use serde::Deserialize;
use serde_json::Value;

/// One monster record as returned by the Divine-Pride Monster endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceMonster {
    pub id: Value,
    pub dbname: Value,
    pub sprite: Value,
    pub stats: Value,
    pub drops: Value,
    pub mvpdrops: Value,
    pub skill: Value,
    pub spawn: Value,
}

impl SourceMonster {
    /// Looks up a field of the nested `stats` mapping.
    pub fn stat(&self, key: &str) -> Option<&Value> {
        self.stats.get(key)
    }

    pub fn drops(&self) -> &[Value] {
        as_array_or_empty(&self.drops)
    }

    pub fn mvp_drops(&self) -> &[Value] {
        as_array_or_empty(&self.mvpdrops)
    }

    pub fn skills(&self) -> &[Value] {
        as_array_or_empty(&self.skill)
    }

    pub fn spawns(&self) -> &[Value] {
        as_array_or_empty(&self.spawn)
    }
}

fn as_array_or_empty(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or(&[])
}
