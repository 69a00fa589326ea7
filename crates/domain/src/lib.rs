//! Mobforge domain - the pure mapping core.
//!
//! Everything in this crate is a deterministic transformation from
//! loosely-typed Divine-Pride JSON values into rAthena-schema records.
//! No I/O happens here; the one external collaborator (the item catalog)
//! is abstracted behind the [`ItemCatalog`] trait and implemented by the
//! engine crate.

pub mod coerce;
pub mod document;
pub mod drops;
pub mod enums;
pub mod name;
pub mod record;
pub mod skill;
pub mod source;
pub mod spawn;

pub use coerce::{json_truthy, resolve_numeric, to_int, to_positive_int, to_trimmed_string};
pub use document::MonsterDocument;
pub use drops::{resolve_drops, DropEntry, ItemCatalog};
pub use enums::{Element, MonsterClass, Race, Size};
pub use name::normalize_db_name;
pub use record::{build_monster_entry, Modes, MonsterEntry};
pub use skill::build_skill_line;
pub use source::SourceMonster;
pub use spawn::build_spawn_line;
