//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// metadecode - front matter and data file decoder
///
/// Detect and decode JSON, YAML and TOML used as front matter and data files.
#[derive(Parser, Debug)]
#[command(
    name = "metadecode",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Detect and decode JSON, YAML and TOML front matter and data files",
    after_help = "Examples:\n    \
                  metadecode detect data/menu.yml\n    \
                  metadecode detect --content 'title = \"x\"'\n    \
                  metadecode decode data/authors.toml\n    \
                  metadecode front-matter content/post.md\n    \
                  metadecode typed ' 42 ' --as int\n    \
                  metadecode config --dir ."
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the format of a file name or a piece of content
    Detect(DetectArgs),

    /// Decode a data file and print it as JSON
    Decode(DecodeArgs),

    /// Decode a string into a requested shape
    Typed(TypedArgs),

    /// Print the decoded front matter of a content file
    FrontMatter(FrontMatterArgs),

    /// Show the effective sync configuration
    Config(ConfigArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the detect command
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["name", "content"])))]
#[command(after_help = "EXAMPLES:\n  \
                  From a file name:\n    metadecode detect config.TOML\n\n\
                  From content:\n    metadecode detect --content 'a: 1'")]
pub struct DetectArgs {
    /// File name or bare extension
    pub name: Option<String>,

    /// Sniff the format of this text instead
    #[arg(long)]
    pub content: Option<String>,
}

/// Arguments for the decode command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Decode by extension:\n    metadecode decode data/menu.yaml\n\n\
                  Force a format:\n    metadecode decode params.txt --format toml\n\n\
                  Allow a top-level list:\n    metadecode decode data/list.json --value")]
pub struct DecodeArgs {
    /// File to decode
    pub path: PathBuf,

    /// Format to decode with (json, toml, yaml); defaults to the file extension
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Accept any top-level value, not only a mapping
    #[arg(long)]
    pub value: bool,
}

/// Arguments for the typed command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Integer:\n    metadecode typed ' 42 ' --as int\n\n\
                  Mapping (format is sniffed):\n    metadecode typed 'a = 1' --as map\n\n\
                  Sequence (always YAML):\n    metadecode typed '[a, b]' --as slice")]
pub struct TypedArgs {
    /// Text to decode
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Target shape: string, map, slice, bool, int, int64, float
    #[arg(long = "as", value_name = "KIND")]
    pub kind: String,
}

/// Arguments for the front-matter command
#[derive(Parser, Debug)]
pub struct FrontMatterArgs {
    /// Content file to read
    pub path: PathBuf,

    /// Also print the body after the front matter
    #[arg(long)]
    pub body: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Directory holding config.json or config.yaml (defaults to current directory)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    metadecode completions --shell bash > ~/.bash_completion.d/metadecode\n\n\
                  Generate zsh completions:\n    metadecode completions --shell zsh > ~/.zfunc/_metadecode")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
