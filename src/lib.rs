//! metadecode - front matter and data file decoding
//!
//! Detects and decodes the structured text (JSON, YAML, TOML) a static-site
//! build reads from front matter and data files, and loads the sync tool's
//! configuration.
//!
//! - [`format`]: resolve a [`Format`] from an extension, a front matter delimiter or raw content
//! - [`decoder`]: decode bytes into string-keyed [`serde_json::Value`] trees
//! - [`frontmatter`]: split content files into front matter and body
//! - [`cast`]: permissive string-to-scalar conversions
//! - [`config`]: the sync tool's [`SyncConfig`]

pub mod cast;
pub mod config;
pub mod decoder;
pub mod error;
pub mod format;
pub mod frontmatter;

pub use config::SyncConfig;
pub use decoder::{Decoder, Mapping, TargetKind, TypedValue};
pub use error::{MetaError, Result};
pub use format::{Format, FrontMatterKind};
