//! Decode command implementation

use serde_json::Value;
use tracing::debug;

use metadecode::error::fs::unknown_format;
use metadecode::{Decoder, Format, Result};

use super::helpers::{print_json, read_file};
use crate::cli::DecodeArgs;

/// Run decode command
pub fn run(args: &DecodeArgs) -> Result<()> {
    let value = decode_path(args)?;
    print_json(&value)
}

/// An explicit `--format` wins over the file extension, even when it names no known format.
fn resolve_format(args: &DecodeArgs) -> Result<Format> {
    if let Some(name) = &args.format {
        return Ok(Format::from_extension(name));
    }

    let format = Format::from_extension(&args.path.to_string_lossy());
    if format.is_specified() {
        Ok(format)
    } else {
        Err(unknown_format(args.path.display().to_string()))
    }
}

fn decode_path(args: &DecodeArgs) -> Result<Value> {
    let format = resolve_format(args)?;
    let data = read_file(&args.path)?;
    debug!(path = %args.path.display(), %format, "decoding");

    let decoder = Decoder::default();
    if args.value {
        decoder.decode_to_value(&data, format)
    } else {
        decoder.decode_to_mapping(&data, format).map(Value::Object)
    }
}
