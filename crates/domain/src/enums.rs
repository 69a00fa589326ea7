//! Closed enumerations for the Divine-Pride numeric code tables.
//!
//! Each mapper is a tagged enum with an explicit `from_code` returning
//! `Option<Self>` (known or unknown) and a `resolve` that applies the
//! table's documented default on a miss. The raw lookup tables this
//! replaces were open string/index maps; the closed variants give
//! exhaustiveness checking while keeping the same default-on-miss
//! behavior.

use serde::{Deserialize, Serialize};

/// Monster hitbox size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Small),
            1 => Some(Self::Medium),
            2 => Some(Self::Large),
            _ => None,
        }
    }

    /// Maps a raw scale code, defaulting to `Medium` for anything outside
    /// the table.
    pub fn resolve(code: i64) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, "invalid size code, defaulting to Medium");
            Self::Medium
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// Monster race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Race {
    Formless,
    Undead,
    Brute,
    Plant,
    Insect,
    Fish,
    Demon,
    DemiHuman,
    Angel,
    Dragon,
}

impl Race {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Formless),
            1 => Some(Self::Undead),
            2 => Some(Self::Brute),
            3 => Some(Self::Plant),
            4 => Some(Self::Insect),
            5 => Some(Self::Fish),
            6 => Some(Self::Demon),
            7 => Some(Self::DemiHuman),
            8 => Some(Self::Angel),
            9 => Some(Self::Dragon),
            _ => None,
        }
    }

    /// Maps a raw race code, defaulting to `Formless` for anything outside
    /// the table.
    pub fn resolve(code: i64) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, "invalid race code, defaulting to Formless");
            Self::Formless
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Formless => "Formless",
            Self::Undead => "Undead",
            Self::Brute => "Brute",
            Self::Plant => "Plant",
            Self::Insect => "Insect",
            Self::Fish => "Fish",
            Self::Demon => "Demon",
            Self::DemiHuman => "DemiHuman",
            Self::Angel => "Angel",
            Self::Dragon => "Dragon",
        }
    }
}

/// Monster elemental attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Neutral,
    Water,
    Earth,
    Fire,
    Wind,
    Poison,
    Holy,
    Dark,
    Ghost,
    Undead,
}

impl Element {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Neutral),
            1 => Some(Self::Water),
            2 => Some(Self::Earth),
            3 => Some(Self::Fire),
            4 => Some(Self::Wind),
            5 => Some(Self::Poison),
            6 => Some(Self::Holy),
            7 => Some(Self::Dark),
            8 => Some(Self::Ghost),
            9 => Some(Self::Undead),
            _ => None,
        }
    }

    /// Maps a pre-split base element code, defaulting to `Neutral` for
    /// anything outside the table.
    pub fn resolve(code: i64) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, "invalid element code, defaulting to Neutral");
            Self::Neutral
        })
    }

    /// Splits the raw Divine-Pride element field into the base element code
    /// and the element tier. The raw value packs both: base is `code mod 20`
    /// and tier is `code div 20`, with tier never below 1.
    pub fn split_raw(raw: i64) -> (i64, i64) {
        if raw == 0 {
            return (0, 1);
        }
        let base = (raw % 20).abs();
        let tier = (raw / 20).abs().max(1);
        (base, tier)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Water => "Water",
            Self::Earth => "Earth",
            Self::Fire => "Fire",
            Self::Wind => "Wind",
            Self::Poison => "Poison",
            Self::Holy => "Holy",
            Self::Dark => "Dark",
            Self::Ghost => "Ghost",
            Self::Undead => "Undead",
        }
    }
}

/// Target-schema monster classification.
///
/// Divine-Pride uses a finer-grained class code than the target's 3-way
/// scheme, so mapping is two-stage: the raw code indexes a bucket table
/// whose result indexes the final name list. A miss at either stage
/// resolves to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterClass {
    Normal,
    Boss,
    Guardian,
}

impl MonsterClass {
    /// Raw class code -> target bucket. Index is the Divine-Pride code.
    const BUCKETS: [i64; 6] = [0, 1, 1, 2, 0, 3];

    pub fn from_code(code: i64) -> Option<Self> {
        let bucket = usize::try_from(code)
            .ok()
            .and_then(|i| Self::BUCKETS.get(i).copied())?;
        match bucket {
            0 => Some(Self::Normal),
            1 => Some(Self::Boss),
            2 => Some(Self::Guardian),
            _ => None,
        }
    }

    /// Maps a raw class code, defaulting to `Normal` when either lookup
    /// stage falls outside its table.
    pub fn resolve(code: i64) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, "invalid class code, defaulting to Normal");
            Self::Normal
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Boss => "Boss",
            Self::Guardian => "Guardian",
        }
    }
}
