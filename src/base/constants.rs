//! Domain constants shared across the pipeline.

/// Workspace-relative path of the generated types file.
pub const GENERATED_TYPES_FILE: &str = ".typeatlas/types.ts";

/// Directory scanned for definition-call markers in fallback mode.
pub const FALLBACK_SCAN_DIR: &str = "src";

/// File extension considered during the fallback scan.
pub const SOURCE_EXTENSION: &str = "ts";

/// Naming convention for root types: a declaration with no inheritance
/// clause is a root only if its name carries this suffix.
pub const ROOT_SUFFIX: &str = "Instance";

/// Marker identifying a constructor-typed field (a nested subtype slot).
pub const SUBTYPE_SLOT_MARKER: &str = "TypeConstructor";

/// Call marker matched during the fallback source scan.
pub const DEFINE_MARKER: &str = "define(";
