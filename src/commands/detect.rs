//! Detect command implementation

use metadecode::{Format, Result};

use crate::cli::DetectArgs;

/// Run detect command
pub fn run(args: &DetectArgs) -> Result<()> {
    println!("{}", resolve(args));
    Ok(())
}

fn resolve(args: &DetectArgs) -> Format {
    match (&args.content, &args.name) {
        (Some(content), _) => Format::from_content(content),
        (None, Some(name)) => Format::from_extension(name),
        (None, None) => Format::Unspecified,
    }
}
