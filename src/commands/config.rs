//! Config command implementation

use metadecode::{Result, SyncConfig};

use super::helpers::resolve_dir;
use crate::cli::ConfigArgs;

const MASKED_TOKEN: &str = "********";

/// Run config command
pub fn run(args: ConfigArgs) -> Result<()> {
    let dir = resolve_dir(args.dir)?;
    let config = SyncConfig::load(&dir)?;

    print!("{}", masked(&config).to_yaml()?);
    println!("# namespace: {}", config.namespace());
    Ok(())
}

/// Copy of `config` safe to print.
fn masked(config: &SyncConfig) -> SyncConfig {
    let mut shown = config.clone();
    if !shown.token.is_empty() {
        shown.token = MASKED_TOKEN.to_string();
    }
    shown
}
