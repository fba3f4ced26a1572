//! Version command implementation

use metadecode::{Format, FrontMatterKind, Result};

const FORMATS: [Format; 3] = [Format::Json, Format::Toml, Format::Yaml];

const FRONT_MATTER_KINDS: [FrontMatterKind; 4] = [
    FrontMatterKind::Yaml,
    FrontMatterKind::Toml,
    FrontMatterKind::Json,
    FrontMatterKind::Org,
];

/// Run version command
pub fn run() -> Result<()> {
    println!("metadecode {}", env!("CARGO_PKG_VERSION"));
    println!("Formats: {}", format_names());
    println!("Front matter: {}", front_matter_markers());
    Ok(())
}

fn format_names() -> String {
    FORMATS.map(Format::name).join(", ")
}

fn front_matter_markers() -> String {
    FRONT_MATTER_KINDS.map(FrontMatterKind::marker).join(" ")
}
