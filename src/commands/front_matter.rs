//! Front matter command implementation

use serde_json::Value;

use metadecode::{Decoder, Result, frontmatter};

use super::helpers::{print_json, read_to_string};
use crate::cli::FrontMatterArgs;

/// Run front-matter command
pub fn run(args: &FrontMatterArgs) -> Result<()> {
    let content = read_to_string(&args.path)?;
    let (mapping, body) = frontmatter::parse(&content, &Decoder::default())?;

    print_json(&Value::Object(mapping))?;
    if args.body {
        println!();
        print!("{body}");
    }
    Ok(())
}
