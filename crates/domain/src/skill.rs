//! Skill-behavior line conversion.
//!
//! Translates one Divine-Pride skill block into one mob_skill_db line:
//! 19 comma-separated positional fields. Three lookup stages apply per
//! entry: condition mapping, a whitelist pass against the condition types
//! the target engine actually recognizes, and cast-target resolution.

use serde_json::Value;

use crate::coerce::{json_truthy, to_int, to_trimmed_string};

/// Fields the converter knows how to map. Anything else in a skill block
/// is reported once per field as a diagnostic.
const EXPECTED_SKILL_FIELDS: [&str; 13] = [
    "idx",
    "skillId",
    "status",
    "level",
    "chance",
    "casttime",
    "delay",
    "interruptable",
    "changeTo",
    "condition",
    "conditionValue",
    "sendType",
    "sendValue",
];

/// Condition types the target engine's behavior parser accepts. A mapped
/// condition outside this set is cleared rather than emitted; the source
/// vocabulary has drifted from the engine more than once.
const ENGINE_CONDITION_TYPES: [&str; 21] = [
    "always",
    "onspawn",
    "myhpltmaxrate",
    "myhpinrate",
    "mystatuson",
    "mystatusoff",
    "friendhpltmaxrate",
    "friendhpinrate",
    "friendstatuson",
    "friendstatusoff",
    "attackpcgt",
    "attackpcge",
    "slavelt",
    "slavele",
    "closedattacked",
    "longrangeattacked",
    "skillused",
    "afterskill",
    "casttargeted",
    "rudeattacked",
    "alchemist",
];

/// Logical cast target carried by the condition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastTarget {
    Caster,
    Enemy,
    Target,
}

impl CastTarget {
    /// The literal the engine expects in the target column. The engine
    /// rejects an empty target, so everything that is not the caster
    /// resolves to "target".
    pub fn as_engine_str(self) -> &'static str {
        match self {
            Self::Caster => "self",
            Self::Enemy | Self::Target => "target",
        }
    }
}

/// Known Divine-Pride skill trigger conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCondition {
    HpBelowRate,
    MonstersAround,
    EnemyCount,
    RudeAttacked,
    RangeAttacked,
    MagicLocked,
    GroundAttacked,
    SkillUsed,
    SlaveCount,
    JobCheck,
}

impl SkillCondition {
    /// Case-insensitive lookup of the raw condition code.
    pub fn from_source(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "IF_HP" => Some(Self::HpBelowRate),
            "IF_MONSTERCOUNT" => Some(Self::MonstersAround),
            "IF_ENEMYCOUNT" => Some(Self::EnemyCount),
            "IF_RUDEATTACK" => Some(Self::RudeAttacked),
            "IF_RANGEATTACKED" => Some(Self::RangeAttacked),
            "IF_MAGICLOCKED" => Some(Self::MagicLocked),
            "IF_GROUNDATTACKCHECK" => Some(Self::GroundAttacked),
            "IF_SKILLUSE" => Some(Self::SkillUsed),
            "IF_SLAVENUM" => Some(Self::SlaveCount),
            "IF_JOBCHECK" => Some(Self::JobCheck),
            _ => None,
        }
    }

    /// The condition-type literal this condition maps to.
    pub fn condition_type(self) -> &'static str {
        match self {
            Self::HpBelowRate => "myhpltmaxrate",
            Self::MonstersAround => "monstersaround",
            Self::EnemyCount => "enemycount",
            Self::RudeAttacked => "rudeattacked",
            Self::RangeAttacked => "farerangeattacked",
            Self::MagicLocked => "magiclocked",
            Self::GroundAttacked => "groundattacked",
            Self::SkillUsed => "skillused",
            Self::SlaveCount => "slavereqgt",
            Self::JobCheck => "job",
        }
    }

    pub fn cast_target(self) -> CastTarget {
        match self {
            Self::HpBelowRate
            | Self::MonstersAround
            | Self::MagicLocked
            | Self::GroundAttacked
            | Self::SlaveCount => CastTarget::Caster,
            Self::EnemyCount | Self::RudeAttacked | Self::RangeAttacked | Self::SkillUsed | Self::JobCheck => {
                CastTarget::Enemy
            }
        }
    }

    /// Whether the mapped condition type survives the engine whitelist.
    pub fn is_engine_recognized(self) -> bool {
        ENGINE_CONDITION_TYPES.contains(&self.condition_type())
    }
}

/// Known notification ("send") types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendType {
    Emoticon,
}

impl SendType {
    pub fn from_source(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "SEND_EMOTICON" => Some(Self::Emoticon),
            _ => None,
        }
    }
}

/// Resolves the condition triplet (type, value, target) for a skill block.
///
/// Unknown conditions warn and resolve to empty values; a mapped condition
/// whose type the engine does not recognize is cleared the same way. The
/// slave-count condition defaults its value to "1" when absent.
fn map_condition(raw_condition: Option<&Value>, raw_value: Option<&Value>) -> (String, String, Option<CastTarget>) {
    let code = to_trimmed_string(raw_condition);
    if code.is_empty() {
        return (String::new(), String::new(), None);
    }

    let Some(condition) = SkillCondition::from_source(&code) else {
        tracing::warn!(condition = %code, "unmapped skill condition");
        return (String::new(), String::new(), None);
    };

    let mut value = if json_truthy(raw_value, false) {
        to_trimmed_string(raw_value)
    } else {
        String::new()
    };

    if condition == SkillCondition::SlaveCount && value.is_empty() {
        value = "1".to_string();
    }

    if !condition.is_engine_recognized() {
        tracing::warn!(
            condition = %code,
            condition_type = condition.condition_type(),
            "condition type not recognized by the engine, clearing"
        );
        return (String::new(), String::new(), Some(condition.cast_target()));
    }

    (condition.condition_type().to_string(), value, Some(condition.cast_target()))
}

/// Resolves the emotion/chat/sound notification slots.
fn map_send(raw_type: Option<&Value>, raw_value: Option<&Value>) -> (String, String, String) {
    let code = to_trimmed_string(raw_type);
    if code.is_empty() {
        return (String::new(), String::new(), String::new());
    }

    match SendType::from_source(&code) {
        Some(SendType::Emoticon) => {
            let emotion = if json_truthy(raw_value, false) {
                to_trimmed_string(raw_value)
            } else {
                "0".to_string()
            };
            (emotion, String::new(), String::new())
        }
        None => {
            tracing::warn!(send_type = %code, "unmapped sendType");
            (String::new(), String::new(), String::new())
        }
    }
}

/// Converts one Divine-Pride skill block into a mob_skill_db line.
///
/// Output example:
///
/// ```text
/// 20595,Mineral@RUSH_ST,attack,28,5,2000,0,3000,yes,target,myhpltmaxrate,90,,,,,,,
/// ```
pub fn build_skill_line(mob_id: i64, display_name: &str, skill: &Value) -> String {
    // Per-field diagnostic for source keys the converter does not map
    if let Some(object) = skill.as_object() {
        for field in object.keys() {
            if !EXPECTED_SKILL_FIELDS.contains(&field.as_str()) {
                tracing::warn!(mob_id, field = %field, "unmapped skill field");
            }
        }
    }

    let status = if json_truthy(skill.get("status"), false) {
        to_trimmed_string(skill.get("status"))
    } else {
        "IDLE_ST".to_string()
    };
    let state = format!("{display_name}@{status}");

    let skill_id = to_int(skill.get("skillId"), 0);
    let level = to_int(skill.get("level"), 1);
    let chance = to_int(skill.get("chance"), 100);
    let cast_time = to_int(skill.get("casttime"), 0);
    let delay = to_int(skill.get("delay"), 0);

    let cancelable = if json_truthy(skill.get("interruptable"), true) {
        "yes"
    } else {
        "no"
    };

    let (condition_type, condition_value, cast_target) =
        map_condition(skill.get("condition"), skill.get("conditionValue"));
    let target = cast_target.unwrap_or(CastTarget::Target).as_engine_str();

    let val1 = if json_truthy(skill.get("idx"), false) {
        to_trimmed_string(skill.get("idx"))
    } else {
        String::new()
    };
    let val2 = if json_truthy(skill.get("changeTo"), false) {
        to_trimmed_string(skill.get("changeTo"))
    } else {
        String::new()
    };

    let (emotion, chat, sound) = map_send(skill.get("sendType"), skill.get("sendValue"));

    [
        mob_id.to_string(),
        state,
        "attack".to_string(),
        skill_id.to_string(),
        level.to_string(),
        chance.to_string(),
        cast_time.to_string(),
        delay.to_string(),
        cancelable.to_string(),
        target.to_string(),
        condition_type,
        condition_value,
        val1,
        val2,
        String::new(),
        String::new(),
        emotion,
        chat,
        sound,
    ]
    .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_line_with_recognized_condition() {
        let skill = json!({
            "skillId": 28,
            "status": "RUSH_ST",
            "level": 5,
            "chance": 2000,
            "casttime": 0,
            "delay": 3000,
            "interruptable": true,
            "condition": "IF_HP",
            "conditionValue": 90
        });

        let line = build_skill_line(20595, "Mineral", &skill);
        assert_eq!(
            line,
            "20595,Mineral@RUSH_ST,attack,28,5,2000,0,3000,yes,self,myhpltmaxrate,90,,,,,,,"
        );
    }

    #[test]
    fn test_line_has_19_fields() {
        let line = build_skill_line(1001, "Scorpion", &json!({}));
        assert_eq!(line.split(',').count(), 19);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let line = build_skill_line(1001, "Scorpion", &json!({}));
        assert_eq!(
            line,
            "1001,Scorpion@IDLE_ST,attack,0,1,100,0,0,yes,target,,,,,,,,,"
        );
    }

    #[test]
    fn test_unmapped_condition_clears_and_targets_default() {
        let skill = json!({"condition": "IF_SOMETHING_NEW", "conditionValue": 3});
        let line = build_skill_line(1001, "Scorpion", &skill);
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields[9], "target");
        assert_eq!(fields[10], "");
        assert_eq!(fields[11], "");
    }

    #[test]
    fn test_whitelist_clears_unrecognized_condition_type() {
        // IF_JOBCHECK maps to "job", which the engine does not accept
        let skill = json!({"condition": "IF_JOBCHECK", "conditionValue": 12});
        let line = build_skill_line(1001, "Scorpion", &skill);
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields[10], "");
        assert_eq!(fields[11], "");
        // The logical target still resolves
        assert_eq!(fields[9], "target");
    }

    #[test]
    fn test_enemy_logical_target_maps_to_target_literal() {
        let skill = json!({"condition": "IF_SKILLUSE"});
        let line = build_skill_line(1001, "Scorpion", &skill);
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields[9], "target");
        assert_eq!(fields[10], "skillused");
    }

    #[test]
    fn test_slave_count_value_defaults_to_one() {
        let skill = json!({"condition": "if_slavenum"});
        let (condition_type, value, target) = map_condition(skill.get("condition"), skill.get("conditionValue"));

        // slavereqgt is outside the engine whitelist, so the pair clears,
        // but the slave-count default applies before the whitelist pass
        assert_eq!(condition_type, "");
        assert_eq!(value, "");
        assert_eq!(target, Some(CastTarget::Caster));

        let recognized = SkillCondition::from_source("IF_SLAVENUM").unwrap();
        assert!(!recognized.is_engine_recognized());
    }

    #[test]
    fn test_not_interruptable_is_no() {
        let skill = json!({"interruptable": false});
        let line = build_skill_line(1001, "Scorpion", &skill);
        assert!(line.contains(",no,"));
    }

    #[test]
    fn test_emoticon_send_type_fills_emotion_slot() {
        let skill = json!({"sendType": "SEND_EMOTICON", "sendValue": 7});
        let line = build_skill_line(1001, "Scorpion", &skill);
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields[16], "7");
        assert_eq!(fields[17], "");
        assert_eq!(fields[18], "");
    }

    #[test]
    fn test_emoticon_value_defaults_to_zero() {
        let skill = json!({"sendType": "SEND_EMOTICON"});
        let line = build_skill_line(1001, "Scorpion", &skill);
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields[16], "0");
    }

    #[test]
    fn test_unknown_send_type_leaves_slots_empty() {
        let skill = json!({"sendType": "SEND_CHAT", "sendValue": "hi"});
        let line = build_skill_line(1001, "Scorpion", &skill);
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(&fields[16..19], ["", "", ""]);
    }

    #[test]
    fn test_internal_value_slots() {
        let skill = json!({"idx": 3, "changeTo": "ANGRY_ST"});
        let line = build_skill_line(1001, "Scorpion", &skill);
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields[12], "3");
        assert_eq!(fields[13], "ANGRY_ST");
        assert_eq!(fields[14], "");
        assert_eq!(fields[15], "");
    }
}
