use std::path::PathBuf;

/// Source location of a type declaration.
///
/// Carried unchanged from extraction through graph conversion so the
/// consuming UI can jump back to the declaration. `line` is 1-based,
/// `column` is 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Location {
    /// Path of the file the declaration was found in
    #[cfg_attr(feature = "serde", serde(rename = "fileName"))]
    pub file: PathBuf,
    /// 1-based line of the declaration's opening keyword
    pub line: usize,
    /// 0-based column
    pub column: usize,
}

impl Location {
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}
