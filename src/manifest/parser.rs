//! Brewfile-style manifest parsing.
//!
//! Each non-blank line is one directive: a keyword, a quoted name, and an
//! optional comma-separated list of `key: value` (or `:key => value`)
//! options.
//!
//! ```text
//! tap "homebrew/cask-fonts"
//! brew "postgresql@16", restart_service: :changed
//! cask "firefox"
//! mas "Xcode", id: 497799835
//! ```

use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{BundleError, Result};

use super::entry::Entry;

/// Keyword, quoted name, and whatever follows the closing quote.
static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?P<keyword>[a-z_]+)\s*\(?\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')(?P<rest>.*)$"#)
        .expect("DIRECTIVE_REGEX must compile")
});

/// One `key: value` or `:key => value` option. Values are strings, symbols,
/// integers, booleans, `nil`, or flat arrays/hashes.
static OPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:(?P<key>[a-z_]+):|:(?P<rocket_key>[a-z_]+)\s*=>)\s*(?P<value>"[^"]*"|'[^']*'|:[a-z_]+|\d+|true|false|nil|\[[^\]]*\]|\{[^}]*\})"#,
    )
    .expect("OPTION_REGEX must compile")
});

/// Directives that may appear in a bundle manifest but have no drift check.
const IGNORED_KEYWORDS: &[&str] = &[
    "cask_args",
    "vscode",
    "whalebrew",
    "go",
    "cargo",
    "uv",
    "flatpak",
];

/// Parse manifest text into entries.
///
/// `path` is only used for error locations.
pub fn parse_manifest(content: &str, path: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let parse_err = |message: String| BundleError::ManifestParse {
            path: path.to_path_buf(),
            line: line_no,
            message,
        };

        let keyword = line
            .split(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or_default();
        if IGNORED_KEYWORDS.contains(&keyword) {
            tracing::debug!("Ignoring `{}` directive on line {}", keyword, line_no);
            continue;
        }

        let Some(caps) = DIRECTIVE_REGEX.captures(line) else {
            return Err(parse_err(format!("could not parse `{}`", line)));
        };

        let name = caps
            .name("dq")
            .or_else(|| caps.name("sq"))
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        if name.is_empty() {
            return Err(parse_err(format!("`{}` requires a name", &caps["keyword"])));
        }

        let rest = caps
            .name("rest")
            .map(|m| m.as_str().trim().trim_end_matches(')').trim())
            .unwrap_or_default();
        if !rest.is_empty() && !rest.starts_with(',') {
            return Err(parse_err(format!("unexpected `{}` after name", rest)));
        }
        let options = parse_options(rest);

        let entry = match &caps["keyword"] {
            "tap" => Entry::tap(name),
            "brew" => Entry::Package {
                name: name.to_string(),
                start_service: option_is_set(&options, "start_service"),
                restart_service: option_is_set(&options, "restart_service"),
            },
            "cask" => Entry::cask(name),
            "mas" => {
                let id = options
                    .get("id")
                    .and_then(|v| v.parse::<u64>().ok())
                    .ok_or_else(|| parse_err(format!("mas `{}` requires a numeric id", name)))?;
                Entry::app(name, id)
            }
            other => return Err(parse_err(format!("unknown directive `{}`", other))),
        };
        entries.push(entry);
    }

    Ok(entries)
}

fn parse_options(rest: &str) -> HashMap<String, String> {
    OPTION_REGEX
        .captures_iter(rest)
        .filter_map(|caps| {
            let key = caps.name("key").or_else(|| caps.name("rocket_key"))?;
            Some((key.as_str().to_string(), caps["value"].to_string()))
        })
        .collect()
}

/// Any value other than `false`/`nil` turns a flag on, so `:changed` counts.
fn option_is_set(options: &HashMap<String, String>, key: &str) -> bool {
    options
        .get(key)
        .is_some_and(|v| !matches!(v.as_str(), "false" | "nil"))
}

/// Drop a trailing `#` comment that is not inside a quoted string.
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    for (i, c) in line.char_indices() {
        match (quote, c) {
            (None, '#') => return &line[..i],
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            _ => {}
        }
    }
    line
}
