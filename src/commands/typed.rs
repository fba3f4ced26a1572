//! Typed command implementation

use serde_json::Value;

use metadecode::{Decoder, Result, TargetKind, TypedValue};

use super::helpers::print_json;
use crate::cli::TypedArgs;

/// Run typed command
///
/// Strings are printed as they are; every other shape is printed as JSON.
pub fn run(args: &TypedArgs) -> Result<()> {
    let target: TargetKind = args.kind.parse()?;
    match Decoder::default().decode_typed(&args.text, target)? {
        TypedValue::String(s) => println!("{s}"),
        other => print_json(&Value::from(other))?,
    }
    Ok(())
}
