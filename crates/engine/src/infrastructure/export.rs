//! YAML writer for the monster document.
//!
//! The target engine's database files indent block-sequence entries under
//! their key:
//!
//! ```text
//! Body:
//!   - Id: 1001
//!     AegisName: SCORPION
//! ```
//!
//! The ecosystem serializer emits indentless sequences, so the store
//! carries its own writer: declared key order, two-space offsets, plain
//! scalars wherever the value is unambiguous.

use serde_yaml::Value;

use mobforge_domain::MonsterDocument;

/// Renders a document in the engine's expected indentation style.
pub fn write_document(doc: &MonsterDocument) -> String {
    let mut out = String::new();
    if let Value::Mapping(root) = doc.to_value() {
        emit_mapping(&mut out, &root, 0);
    }
    out
}

fn emit_pair(out: &mut String, key: &Value, value: &Value, indent: usize) {
    let key = format_scalar(key);
    match value {
        Value::Mapping(map) if !map.is_empty() => {
            out.push_str(&format!("{key}:\n"));
            emit_mapping(out, map, indent + 2);
        }
        Value::Mapping(_) => out.push_str(&format!("{key}: {{}}\n")),
        Value::Sequence(seq) if !seq.is_empty() => {
            out.push_str(&format!("{key}:\n"));
            emit_sequence(out, seq, indent + 2);
        }
        Value::Sequence(_) => out.push_str(&format!("{key}: []\n")),
        scalar => out.push_str(&format!("{key}: {}\n", format_scalar(scalar))),
    }
}

fn emit_mapping(out: &mut String, map: &serde_yaml::Mapping, indent: usize) {
    for (key, value) in map {
        out.push_str(&" ".repeat(indent));
        emit_pair(out, key, value, indent);
    }
}

fn emit_sequence(out: &mut String, seq: &[Value], indent: usize) {
    for item in seq {
        out.push_str(&" ".repeat(indent));
        out.push_str("- ");
        match item {
            Value::Mapping(map) if !map.is_empty() => {
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push_str(&" ".repeat(indent + 2));
                    }
                    emit_pair(out, key, value, indent + 2);
                }
            }
            Value::Sequence(nested) if !nested.is_empty() => {
                out.push('\n');
                emit_sequence(out, nested, indent + 2);
            }
            other => {
                out.push_str(&format_scalar(other));
                out.push('\n');
            }
        }
    }
}

fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if needs_quoting(s) {
                quote(s)
            } else {
                s.clone()
            }
        }
        Value::Tagged(tagged) => format_scalar(&tagged.value),
        // Containers are handled by the emit functions; an empty marker is
        // the safe fallback
        Value::Mapping(_) => "{}".to_string(),
        Value::Sequence(_) => "[]".to_string(),
    }
}

fn needs_quoting(s: &str) -> bool {
    if s.is_empty() || s.trim() != s {
        return true;
    }
    if s.parse::<i64>().is_ok() || s.parse::<f64>().is_ok() {
        return true;
    }
    let lowered = s.to_ascii_lowercase();
    if matches!(
        lowered.as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "null" | "~"
    ) {
        return true;
    }
    if s.starts_with([
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@',
        '`',
    ]) {
        return true;
    }
    s.contains(": ") || s.ends_with(':') || s.contains(" #") || s.contains(['\n', '\t'])
}

fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
