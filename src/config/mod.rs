//! Configuration file handling for metadecode
//!
//! This module contains data structures for:
//! - `config.json` / `config.yaml` - Sync tool configuration

pub mod sync;

pub use sync::{CONFIG_FILE_NAMES, SyncConfig};
