//! Field parsing and classification for declaration bodies.
//!
//! The interior of a declaration's first balanced `{...}` span is split
//! into candidate entries at top-level `;`/newline boundaries, so a field
//! whose type is an inline object literal stays one field. Each entry is
//! then classified in a single pass: a plain field, a subtype slot
//! (constructor-typed), or skipped.

use indexmap::IndexMap;

use crate::base::constants::SUBTYPE_SLOT_MARKER;
use crate::text::{balanced_span, collapse_whitespace, leading_identifier};

/// One declared field of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyInfo {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
    pub optional: bool,
}

/// Classification of one field-candidate entry.
#[derive(Debug, PartialEq, Eq)]
enum FieldEntry {
    /// An ordinary `name?: type` field
    Plain(PropertyInfo),
    /// A constructor-typed field denoting a nested subtype slot
    SubtypeSlot(PropertyInfo),
    /// Blank, comment, or a shape we do not recognize
    Skipped,
}

/// Parse the fields of a cleaned definition string.
///
/// Locates the first balanced `{...}` span and parses its interior;
/// returns an empty map when there is no such span. Field names are
/// unique, last write wins.
pub fn parse_fields(def: &str) -> IndexMap<String, PropertyInfo> {
    let mut fields = IndexMap::new();

    let Some(span) = balanced_span(def, 0) else {
        return fields;
    };
    let interior = strip_comment_lines(span.interior(def));

    for entry in split_entries(&interior) {
        match classify_entry(entry) {
            FieldEntry::Plain(prop) | FieldEntry::SubtypeSlot(prop) => {
                fields.insert(prop.name.clone(), prop);
            }
            FieldEntry::Skipped => {}
        }
    }
    fields
}

/// Drop lines that are pure `//` comments, keeping the rest verbatim.
fn strip_comment_lines(interior: &str) -> String {
    interior
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split the field-span interior into entries at depth-0 boundaries.
///
/// `;` and newlines only separate entries outside nested braces, so an
/// inline object literal stays inside a single entry.
fn split_entries(interior: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, c) in interior.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ';' | '\n' if depth == 0 => {
                entries.push(&interior[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    entries.push(&interior[start..]);
    entries
}

fn classify_entry(entry: &str) -> FieldEntry {
    let entry = entry.trim();
    if entry.is_empty() {
        return FieldEntry::Skipped;
    }
    if entry.contains(SUBTYPE_SLOT_MARKER) {
        return classify_subtype_slot(entry);
    }

    // Plain field: `<name><'?'?> : <type>`
    let Some(name) = leading_identifier(entry) else {
        return FieldEntry::Skipped;
    };
    let mut rest = entry[name.len()..].trim_start();
    let optional = rest.starts_with('?');
    if optional {
        rest = rest[1..].trim_start();
    }
    let Some(ty) = rest.strip_prefix(':') else {
        return FieldEntry::Skipped;
    };
    let ty = collapse_whitespace(ty.trim().trim_end_matches(';').trim_end());
    if ty.is_empty() {
        return FieldEntry::Skipped;
    }

    FieldEntry::Plain(PropertyInfo {
        name: name.to_string(),
        ty,
        optional,
    })
}

/// Recognize `name: TypeConstructor<Target>` and re-emit it as a typed
/// field with the synthesized marker form, so the subtype relationship
/// stays visible in the properties view.
fn classify_subtype_slot(entry: &str) -> FieldEntry {
    let Some(name) = leading_identifier(entry) else {
        return FieldEntry::Skipped;
    };
    let rest = entry[name.len()..].trim_start();
    let Some(rest) = rest.strip_prefix(':') else {
        return FieldEntry::Skipped;
    };
    let Some(rest) = rest.trim_start().strip_prefix(SUBTYPE_SLOT_MARKER) else {
        return FieldEntry::Skipped;
    };
    let Some(rest) = rest.strip_prefix('<') else {
        return FieldEntry::Skipped;
    };
    let Some(target) = leading_identifier(rest) else {
        return FieldEntry::Skipped;
    };
    if !rest[target.len()..].starts_with('>') {
        return FieldEntry::Skipped;
    }

    FieldEntry::SubtypeSlot(PropertyInfo {
        name: name.to_string(),
        ty: format!("{SUBTYPE_SLOT_MARKER}<{target}>"),
        optional: false,
    })
}
