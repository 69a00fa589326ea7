//! Target-schema monster records and the record assembler.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::{resolve_numeric, to_int, to_positive_int, to_trimmed_string};
use crate::drops::{resolve_drops, DropEntry, ItemCatalog};
use crate::enums::{Element, MonsterClass, Race, Size};
use crate::name::normalize_db_name;
use crate::source::SourceMonster;

/// Mode flags of a monster record. Only the MVP marker is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modes {
    #[serde(rename = "Mvp")]
    pub mvp: bool,
}

/// One monster record of the target document schema.
///
/// Field order is the declared output order; the document writer preserves
/// it verbatim. Optional blocks are omitted keys when empty, never empty
/// lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonsterEntry {
    pub id: i64,
    pub aegis_name: String,
    pub name: String,

    pub level: i64,
    pub hp: i64,
    pub sp: i64,

    pub base_exp: i64,
    pub job_exp: i64,

    pub attack: i64,
    pub attack2: i64,

    pub defense: i64,
    pub magic_defense: i64,

    pub resistance: i64,
    pub magic_resistance: i64,

    #[serde(rename = "Str")]
    pub strength: i64,
    pub agi: i64,
    pub vit: i64,
    #[serde(rename = "Int")]
    pub intelligence: i64,
    pub dex: i64,
    pub luk: i64,

    pub attack_range: i64,
    pub skill_range: i64,
    pub chase_range: i64,

    pub size: Size,
    pub race: Race,

    pub element: Element,
    pub element_level: i64,

    pub walk_speed: i64,
    pub attack_delay: i64,
    pub attack_motion: i64,
    pub client_attack_motion: i64,
    pub damage_motion: i64,

    pub damage_taken: i64,
    pub ai: i64,

    // The original exporter emits this key in lowercase
    #[serde(rename = "class")]
    pub class: MonsterClass,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modes: Option<Modes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mvp_drops: Option<Vec<DropEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drops: Option<Vec<DropEntry>>,
}

/// Extracts the numeric AI code from the stats `ai` token: the last
/// underscore-separated segment of e.g. `MONSTER_TYPE_21`.
fn ai_code(raw: Option<&Value>) -> i64 {
    let token = to_trimmed_string(raw);
    let token = if token.is_empty() {
        "MONSTER_TYPE_21"
    } else {
        token.as_str()
    };
    let segment = token.rsplit('_').next().unwrap_or(token);
    segment.trim().parse::<i64>().map(i64::saturating_abs).unwrap_or(0)
}

/// Assembles a full target-schema record from one source payload.
///
/// Returns `None` when the source identifier does not coerce to a positive,
/// non-zero integer; callers must skip such records entirely. Every other
/// field has a deterministic default, so assembly cannot otherwise fail.
pub fn build_monster_entry(
    source: &SourceMonster,
    mvp_damage_taken: i64,
    catalog: &mut dyn ItemCatalog,
) -> Option<MonsterEntry> {
    let id = to_int(Some(&source.id), 0);
    if id <= 0 {
        return None;
    }

    let is_mvp = to_int(source.stat("mvp"), 0) == 1;

    let aegis_name = {
        let sprite = to_trimmed_string(Some(&source.sprite));
        if sprite.is_empty() {
            format!("MOB_{id}")
        } else {
            sprite
        }
    };

    let (element_code, element_level) = Element::split_raw(to_int(source.stat("element"), 0));

    let mut entry = MonsterEntry {
        id,
        aegis_name,
        name: normalize_db_name(&to_trimmed_string(Some(&source.dbname))),

        level: resolve_numeric(source.stat("level"), 250),
        hp: resolve_numeric(source.stat("health"), 2_500_000),
        sp: resolve_numeric(source.stat("sp"), 10_000),

        base_exp: resolve_numeric(source.stat("baseExperience"), 3_000_000),
        job_exp: resolve_numeric(source.stat("jobExperience"), 3_000_000),

        attack: resolve_numeric(source.stat("atk1"), 500),
        attack2: resolve_numeric(source.stat("atk2"), 300),

        defense: resolve_numeric(source.stat("defense"), 1000),
        magic_defense: resolve_numeric(source.stat("magicDefense"), 600),

        resistance: resolve_numeric(source.stat("res"), 500),
        magic_resistance: resolve_numeric(source.stat("mres"), 300),

        strength: resolve_numeric(source.stat("str"), 200),
        agi: resolve_numeric(source.stat("agi"), 200),
        vit: resolve_numeric(source.stat("vit"), 200),
        intelligence: resolve_numeric(source.stat("int"), 200),
        dex: resolve_numeric(source.stat("dex"), 200),
        luk: resolve_numeric(source.stat("luk"), 200),

        attack_range: resolve_numeric(source.stat("attackRange"), 1),
        skill_range: resolve_numeric(source.stat("skillRange"), 10),
        chase_range: resolve_numeric(source.stat("aggroRange"), 12),

        size: Size::resolve(to_positive_int(source.stat("scale"))),
        race: Race::resolve(to_positive_int(source.stat("race"))),

        element: Element::resolve(element_code),
        element_level,

        walk_speed: resolve_numeric(source.stat("movementSpeed"), 100),
        attack_delay: resolve_numeric(source.stat("attackSpeed"), 500),
        attack_motion: resolve_numeric(source.stat("attackedSpeed"), 700),
        client_attack_motion: resolve_numeric(source.stat("attackedSpeed"), 700),
        damage_motion: resolve_numeric(source.stat("attackedSpeed"), 700),

        damage_taken: if is_mvp { mvp_damage_taken } else { 100 },
        ai: ai_code(source.stat("ai")),

        class: MonsterClass::resolve(to_int(source.stat("class"), 0)),

        modes: None,
        mvp_drops: None,
        drops: None,
    };

    if is_mvp {
        entry.modes = Some(Modes { mvp: true });

        let mvp_drops = resolve_drops(source.mvp_drops(), catalog);
        if !mvp_drops.is_empty() {
            entry.mvp_drops = Some(mvp_drops);
        }
    }

    let drops = resolve_drops(source.drops(), catalog);
    if !drops.is_empty() {
        entry.drops = Some(drops);
    }

    Some(entry)
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
        FakeCatalog(HashMap::from([(7321, "Crystal_Fragment".to_string())]))
    }

    fn source(payload: Value) -> SourceMonster {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_invalid_id_yields_no_record() {
        for id in [json!(null), json!(0), json!("abc"), json!(-4)] {
            let monster = source(json!({"id": id, "dbname": "SCORPION"}));
            assert!(build_monster_entry(&monster, 10, &mut catalog()).is_none());
        }
    }

    #[test]
    fn test_core_fields_with_observed_stats() {
        let monster = source(json!({
            "id": 1001,
            "dbname": "SCORPION",
            "sprite": "SCORPION",
            "stats": {
                "level": 24,
                "health": 1109,
                "atk1": 100,
                "defense": 30,
                "scale": 0,
                "race": 4,
                "element": 45,
                "ai": "MONSTER_TYPE_07",
                "class": 0
            }
        }));

        let entry = build_monster_entry(&monster, 10, &mut catalog()).unwrap();
        assert_eq!(entry.id, 1001);
        assert_eq!(entry.aegis_name, "SCORPION");
        assert_eq!(entry.name, "Scorpion");
        assert_eq!(entry.level, 24);
        assert_eq!(entry.hp, 1109);
        assert_eq!(entry.attack, 100);
        assert_eq!(entry.defense, 30);
        assert_eq!(entry.size, Size::Small);
        assert_eq!(entry.race, Race::Insect);
        assert_eq!(entry.element, Element::Poison);
        assert_eq!(entry.element_level, 2);
        assert_eq!(entry.ai, 7);
        assert_eq!(entry.class, MonsterClass::Normal);
        assert_eq!(entry.damage_taken, 100);
        assert!(entry.modes.is_none());
        assert!(entry.drops.is_none());
    }

    #[test]
    fn test_fallbacks_for_missing_stats() {
        let monster = source(json!({"id": 22399, "dbname": "HOLY_FRUS"}));
        let entry = build_monster_entry(&monster, 10, &mut catalog()).unwrap();

        assert_eq!(entry.name, "Holy Frus");
        assert_eq!(entry.aegis_name, "MOB_22399");
        assert_eq!(entry.level, 250);
        assert_eq!(entry.hp, 2_500_000);
        assert_eq!(entry.attack_range, 1);
        assert_eq!(entry.element, Element::Neutral);
        assert_eq!(entry.element_level, 1);
        assert_eq!(entry.ai, 21);
        assert_eq!(entry.walk_speed, 100);
    }

    #[test]
    fn test_mvp_gets_modes_and_damage_multiplier() {
        let monster = source(json!({
            "id": 1086,
            "dbname": "GOLDEN_BUG",
            "stats": {"mvp": 1, "class": 1}
        }));

        let entry = build_monster_entry(&monster, 10, &mut catalog()).unwrap();
        assert_eq!(entry.modes, Some(Modes { mvp: true }));
        assert_eq!(entry.damage_taken, 10);
        assert_eq!(entry.class, MonsterClass::Boss);
        // No resolvable MVP drops: the block must be absent, not empty
        assert!(entry.mvp_drops.is_none());
    }

    #[test]
    fn test_mvp_drops_block_present_when_drops_resolve() {
        let monster = source(json!({
            "id": 1086,
            "dbname": "GOLDEN_BUG",
            "stats": {"mvp": 1},
            "mvpdrops": [{"itemId": 7321, "chance": 5000}],
            "drops": [{"itemId": 9999}]
        }));

        let entry = build_monster_entry(&monster, 10, &mut catalog()).unwrap();
        let mvp_drops = entry.mvp_drops.unwrap();
        assert_eq!(mvp_drops.len(), 1);
        assert_eq!(mvp_drops[0].item, "Crystal_Fragment");
        // The ordinary drop did not resolve, so the key is absent entirely
        assert!(entry.drops.is_none());
    }

    #[test]
    fn test_unresolved_drop_does_not_abort_record() {
        let monster = source(json!({
            "id": 1001,
            "dbname": "SCORPION",
            "drops": [{"itemId": 424242, "chance": 100}]
        }));

        let entry = build_monster_entry(&monster, 10, &mut catalog()).unwrap();
        assert_eq!(entry.id, 1001);
        assert!(entry.drops.is_none());
    }

    #[test]
    fn test_serialized_key_order_and_names() {
        let monster = source(json!({"id": 1001, "dbname": "SCORPION"}));
        let entry = build_monster_entry(&monster, 10, &mut catalog()).unwrap();

        let value = serde_yaml::to_value(&entry).unwrap();
        let keys: Vec<String> = value
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str().unwrap().to_string())
            .collect();

        assert_eq!(keys.first().map(String::as_str), Some("Id"));
        assert_eq!(keys[1], "AegisName");
        assert_eq!(keys[2], "Name");
        assert!(keys.contains(&"Str".to_string()));
        assert!(keys.contains(&"Int".to_string()));
        assert_eq!(keys.last().map(String::as_str), Some("class"));
        // Optional blocks are skipped when absent
        assert!(!keys.contains(&"Modes".to_string()));
        assert!(!keys.contains(&"Drops".to_string()));
    }
}
