//! Declaration extraction from generated type sources.
//!
//! Recovers `export type Name = ...` declarations from a text blob without
//! parsing the source language. Declaration bodies are isolated by brace
//! counting (starting at the `=` on the header line), inheritance is
//! detected as a leading `Parent &` intersection, and fields are parsed
//! from the first balanced `{...}` span.
//!
//! Extraction is best-effort by contract: malformed field lines are
//! skipped, unterminated declarations are dropped, and no input ever
//! produces an error.

mod fields;

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::base::Location;
use crate::text::leading_identifier;

pub use fields::PropertyInfo;

/// One parsed type declaration, before hierarchy linking.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationRecord {
    /// Declared type name
    pub name: String,
    /// Single declared ancestor, if the definition is `Parent & {...}`
    pub parent_name: Option<String>,
    /// Declared fields, keyed by field name (last write wins)
    pub fields: IndexMap<String, PropertyInfo>,
    /// Where the declaration's opening keyword sits
    pub location: Location,
}

impl DeclarationRecord {
    /// A record with no parent and no fields, as produced by the fallback
    /// source scan (presence detection only).
    pub fn bare(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            parent_name: None,
            fields: IndexMap::new(),
            location,
        }
    }
}

/// Extract all type declarations from `source`.
///
/// Returns one record per matched header, keyed by type name; a
/// re-declaration of the same name overwrites the earlier record. `file`
/// is recorded as provenance only, the text itself is not re-read.
///
/// Never fails: declarations whose braces do not balance before the end
/// of input are silently dropped.
pub fn extract_declarations(source: &str, file: &Path) -> IndexMap<String, DeclarationRecord> {
    let mut records = IndexMap::new();
    let lines: Vec<&str> = source.lines().collect();

    let mut i = 0;
    while i < lines.len() {
        let Some((name, eq_idx)) = declaration_header(lines[i]) else {
            i += 1;
            continue;
        };
        let start_line = i;

        // Accumulate lines until the outermost braces close. Counting only
        // starts after the `=` on the header line, so braces in a generic
        // parameter list before the assignment are ignored.
        let mut body = String::new();
        let mut depth = 0i32;
        let mut entered = false;
        let mut closed = false;
        while i < lines.len() && !closed {
            let current = lines[i];
            body.push_str(current);
            body.push('\n');

            let scan_from = if i == start_line { eq_idx + 1 } else { 0 };
            for c in current[scan_from.min(current.len())..].chars() {
                match c {
                    '{' => {
                        depth += 1;
                        entered = true;
                    }
                    '}' => {
                        depth -= 1;
                        if entered && depth == 0 {
                            closed = true;
                            break;
                        }
                    }
                    _ => {}
                }
            }
            i += 1;
        }

        if !closed {
            trace!("dropping unterminated declaration '{name}' at line {}", start_line + 1);
            continue;
        }

        // Strip the `export type Name =` prefix and a trailing terminator.
        let mut def = body[eq_idx + 1..].trim();
        if let Some(stripped) = def.strip_suffix(';') {
            def = stripped.trim_end();
        }

        let parent_name = parse_parent(def);
        let fields = fields::parse_fields(def);

        trace!(
            "declaration '{name}': parent={parent_name:?}, {} field(s)",
            fields.len()
        );
        records.insert(
            name.to_string(),
            DeclarationRecord {
                name: name.to_string(),
                parent_name,
                fields,
                location: Location::new(file, start_line + 1, 0),
            },
        );
    }

    debug!(
        "extracted {} declaration(s) from {}",
        records.len(),
        file.display()
    );
    records
}

/// Match a declaration header: `export type <Ident> =`.
///
/// Returns the declared name and the byte offset of the `=` in `line`.
fn declaration_header(line: &str) -> Option<(&str, usize)> {
    let rest = line.trim_start();
    let rest = rest.strip_prefix("export")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix("type")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let name = leading_identifier(rest)?;
    let after = rest[name.len()..].trim_start();
    if !after.starts_with('=') {
        return None;
    }
    // All slices above are suffixes of `line`, so offsets fall out directly.
    Some((name, line.len() - after.len()))
}

/// Detect single direct inheritance: a definition of the form `Parent & ...`.
///
/// Richer intersection expressions are not recognized.
fn parse_parent(def: &str) -> Option<String> {
    let name = leading_identifier(def)?;
    let rest = def[name.len()..].trim_start();
    rest.starts_with('&').then(|| name.to_string())
}
