//! Foundation types for the typeatlas pipeline.
//!
//! This module provides the types shared by every later stage:
//! - [`Location`] - file/line/column provenance for "jump to definition"
//! - Domain constants (generated-file path, root suffix, markers)
//!
//! This module has NO dependencies on other typeatlas modules.

pub mod constants;
mod location;

pub use location::Location;
