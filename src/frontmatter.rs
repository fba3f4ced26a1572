//! Split content files into front matter and body.
//!
//! Four front matter styles are recognized at the very start of a file:
//! `---` fenced YAML, `+++` fenced TOML, a leading `{ ... }` JSON object and
//! leading `#+KEY: value` Org lines. The block is decoded with the format its
//! delimiter implies.

use serde_json::Value;
use tracing::debug;

use crate::decoder::{Decoder, Mapping};
use crate::error::Result;
use crate::format::{Format, FrontMatterKind};

/// A front matter block and the body that follows it, borrowed from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub kind: FrontMatterKind,
    /// Block text without its delimiters. JSON blocks keep their braces.
    pub raw: &'a str,
    pub body: &'a str,
}

impl FrontMatter<'_> {
    pub fn format(&self) -> Format {
        Format::from_front_matter(self.kind)
    }

    /// Decode the block into a mapping.
    ///
    /// # Errors
    ///
    /// Returns the decoder's parse errors for the block's format.
    pub fn decode(&self, decoder: &Decoder) -> Result<Mapping> {
        match self.kind {
            FrontMatterKind::Org => Ok(parse_org(self.raw)),
            _ => decoder.decode_to_mapping(self.raw.as_bytes(), self.format()),
        }
    }
}

/// Find the front matter at the start of `content`.
///
/// Returns `None` when the content does not open with a recognized delimiter
/// or a fenced block is never closed.
pub fn split(content: &str) -> Option<FrontMatter<'_>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let first_line = content.lines().next()?.trim_end();

    let front_matter = match first_line {
        "---" => split_fenced(content, FrontMatterKind::Yaml),
        "+++" => split_fenced(content, FrontMatterKind::Toml),
        line if line.starts_with('{') => split_json(content),
        line if line.starts_with("#+") => split_org(content),
        _ => None,
    };

    if let Some(fm) = &front_matter {
        debug!(kind = fm.kind.marker(), "found front matter");
    }
    front_matter
}

/// Split and decode in one step. Content without front matter yields an empty
/// mapping and the whole content as body.
///
/// # Errors
///
/// Returns the decoder's parse errors for the block's format.
pub fn parse<'a>(content: &'a str, decoder: &Decoder) -> Result<(Mapping, &'a str)> {
    match split(content) {
        Some(fm) => Ok((fm.decode(decoder)?, fm.body)),
        None => Ok((Mapping::new(), content)),
    }
}

/// Get a top-level scalar from decoded front matter, rendered as a string.
pub fn get_str(mapping: &Mapping, key: &str) -> Option<String> {
    match mapping.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Lines with their byte offset, line terminators included.
fn lines_with_offsets(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

fn split_fenced(content: &str, kind: FrontMatterKind) -> Option<FrontMatter<'_>> {
    let marker = kind.marker();
    let mut lines = lines_with_offsets(content);
    let (_, opening) = lines.next()?;
    let block_start = opening.len();

    let (close_start, closing) = lines.find(|(_, line)| line.trim_end() == marker)?;
    Some(FrontMatter {
        kind,
        raw: &content[block_start..close_start],
        body: &content[close_start + closing.len()..],
    })
}

/// The block runs to the brace that balances the opening one; the rest of
/// that line is dropped.
fn split_json(content: &str) -> Option<FrontMatter<'_>> {
    let end = closing_brace(content)?;
    let after = &content[end + 1..];
    let body_start = after.find('\n').map_or(content.len(), |i| end + 1 + i + 1);
    Some(FrontMatter {
        kind: FrontMatterKind::Json,
        raw: &content[..=end],
        body: &content[body_start..],
    })
}

fn closing_brace(content: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, byte) in content.bytes().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

fn split_org(content: &str) -> Option<FrontMatter<'_>> {
    let body_start = lines_with_offsets(content)
        .find(|(_, line)| !line.starts_with("#+"))
        .map_or(content.len(), |(start, _)| start);
    Some(FrontMatter {
        kind: FrontMatterKind::Org,
        raw: &content[..body_start],
        body: &content[body_start..],
    })
}

/// `#+TITLE: Hello` becomes `"title": "Hello"`. Lines without a colon are skipped.
fn parse_org(raw: &str) -> Mapping {
    raw.lines()
        .filter_map(|line| line.strip_prefix("#+"))
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| {
            (
                key.trim().to_lowercase(),
                Value::String(value.trim().to_string()),
            )
        })
        .collect()
}
