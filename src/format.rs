//! Format resolution for front matter and data files
//!
//! A [`Format`] can be resolved from three kinds of evidence:
//! - a file name or bare extension ([`Format::from_extension`])
//! - the delimiter that opened a front matter block ([`Format::from_front_matter`])
//! - the raw text itself ([`Format::from_content`]), a cheap sniff that never parses
//!
//! None of these fail; an unrecognized input resolves to [`Format::Unspecified`].

use std::fmt;
use std::str::FromStr;

/// Structured text formats understood by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    Json,
    Toml,
    Yaml,
    /// No format could be resolved.
    #[default]
    Unspecified,
}

impl Format {
    /// Resolve a format from a bare extension (`"yml"`) or a file name (`"data/site.YAML"`).
    ///
    /// Matching is case-insensitive. Input containing a `.` is treated as a file name and
    /// only the extension of its last path component is considered.
    pub fn from_extension(name: &str) -> Self {
        let lower = name.to_lowercase();
        let ext = if lower.contains('.') {
            file_extension(&lower)
        } else {
            lower.as_str()
        };

        match ext {
            "yaml" | "yml" => Format::Yaml,
            "json" => Format::Json,
            "toml" => Format::Toml,
            _ => Format::Unspecified,
        }
    }

    /// Map a front matter delimiter kind to the format of its block.
    pub fn from_front_matter(kind: FrontMatterKind) -> Self {
        match kind {
            FrontMatterKind::Json => Format::Json,
            FrontMatterKind::Toml => Format::Toml,
            FrontMatterKind::Yaml => Format::Yaml,
            FrontMatterKind::Org => Format::Unspecified,
        }
    }

    /// Guess the format of `data` from the first occurrence of `{`, `:` and `=`.
    ///
    /// The marker found at the lowest offset wins, with ties and absences resolved as
    /// JSON over YAML over TOML. This is a heuristic: a YAML document whose first value
    /// is an inline `{...}` mapping sniffs as JSON, and errors in the winning format only
    /// surface when the content is decoded.
    pub fn from_content(data: &str) -> Self {
        let json_idx = data.find('{');
        let yaml_idx = data.find(':');
        let toml_idx = data.find('=');

        if is_lower_index_than(json_idx, &[yaml_idx, toml_idx]) {
            return Format::Json;
        }

        if is_lower_index_than(yaml_idx, &[toml_idx]) {
            return Format::Yaml;
        }

        if toml_idx.is_some() {
            return Format::Toml;
        }

        Format::Unspecified
    }

    /// Returns `false` for [`Format::Unspecified`].
    pub fn is_specified(self) -> bool {
        self != Format::Unspecified
    }

    /// The lower-case format name, as used in file extensions and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
            Format::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Format::from_extension(s))
    }
}

/// The delimiter style that opened a front matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontMatterKind {
    /// `---` fenced YAML
    Yaml,
    /// `+++` fenced TOML
    Toml,
    /// A leading `{ ... }` JSON object
    Json,
    /// Leading `#+KEY: value` lines
    Org,
}

impl FrontMatterKind {
    /// Look up the kind for a literal front matter marker.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "---" => Some(FrontMatterKind::Yaml),
            "+++" => Some(FrontMatterKind::Toml),
            "{" => Some(FrontMatterKind::Json),
            "#+" => Some(FrontMatterKind::Org),
            _ => None,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            FrontMatterKind::Yaml => "---",
            FrontMatterKind::Toml => "+++",
            FrontMatterKind::Json => "{",
            FrontMatterKind::Org => "#+",
        }
    }
}

/// Extension of the last path component, without the dot. Empty when there is none.
fn file_extension(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file.rfind('.') {
        Some(idx) => &file[idx + 1..],
        None => "",
    }
}

/// `first` is present and no present index in `others` precedes it.
fn is_lower_index_than(first: Option<usize>, others: &[Option<usize>]) -> bool {
    let Some(first) = first else {
        return false;
    };
    others.iter().flatten().all(|&other| other >= first)
}
