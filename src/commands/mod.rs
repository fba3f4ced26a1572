//! Command implementations for the metadecode CLI

pub mod completions;
pub mod config;
pub mod decode;
pub mod detect;
pub mod front_matter;
mod helpers;
pub mod typed;
pub mod version;
