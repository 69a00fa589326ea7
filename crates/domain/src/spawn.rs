//! Spawn-line formatting.

use serde_json::Value;

use crate::coerce::{to_int, to_trimmed_string};

/// Builds one spawn line for the target engine's script parser:
///
/// ```text
/// abbey01,0,0\tmonster\tFlame Skull\t1869,21,5000
/// ```
///
/// The tabs are structurally required by the consuming parser. All numeric
/// fields coerce with per-field defaults (x=0, y=0, id=0, amount=1,
/// delay=5000); map and monster names are sanitized to trimmed strings.
pub fn build_spawn_line(
    map_name: Option<&Value>,
    x: Option<&Value>,
    y: Option<&Value>,
    monster_name: &str,
    mob_id: i64,
    amount: Option<&Value>,
    delay: Option<&Value>,
) -> String {
    let map_name = to_trimmed_string(map_name);
    let x = to_int(x, 0);
    let y = to_int(y, 0);
    let amount = to_int(amount, 1);
    let delay = to_int(delay, 5000);

    format!("{map_name},{x},{y}\tmonster\t{monster_name}\t{mob_id},{amount},{delay}")
}
