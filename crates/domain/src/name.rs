//! Display-name normalization.

/// Converts a raw DB name token such as `HOLY_FRUS` or `holy_frus` into a
/// display name such as `Holy Frus`.
///
/// Empty input yields "". Otherwise the name is trimmed, split on
/// underscores when present, and each fragment is title-cased.
pub fn normalize_db_name(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    raw.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_underscored_name() {
        assert_eq!(normalize_db_name("HOLY_FRUS"), "Holy Frus");
        assert_eq!(normalize_db_name("holy_frus"), "Holy Frus");
    }

    #[test]
    fn test_normalize_single_token() {
        assert_eq!(normalize_db_name("scorpion"), "Scorpion");
        assert_eq!(normalize_db_name("SCORPION"), "Scorpion");
    }

    #[test]
    fn test_normalize_empty_and_whitespace() {
        assert_eq!(normalize_db_name(""), "");
        assert_eq!(normalize_db_name("   "), "");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_db_name("  FLAME_SKULL  "), "Flame Skull");
    }
}
