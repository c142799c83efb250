use std::collections::HashSet;

use thiserror::Error;

/// A boolean command option, written `--name` or `-s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Switch {
    pub name: &'static str,
    pub shortcut: char,
}

/// Switches and free text parsed from a command's arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwitchArgs {
    enabled: HashSet<&'static str>,
    /// Non-switch text in order. Runs of words keep their original spacing;
    /// runs separated by a removed switch are joined by a single space.
    pub rest: Option<String>,
}

impl SwitchArgs {
    /// Whether the switch with this long name was given.
    pub fn has(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Parse switch options out of a raw argument string.
///
/// Switches may appear anywhere and shortcuts may be combined (`-iu`).
/// A bare `--` stops option parsing. Words such as `-` or `-5` are text.
pub fn parse_switches(raw: Option<&str>, switches: &[Switch]) -> Result<SwitchArgs, ArgsError> {
    let raw = raw.unwrap_or("");
    let mut parsed = SwitchArgs::default();
    let mut segments: Vec<&str> = Vec::new();
    let mut segment: Option<(usize, usize)> = None;
    let mut options_done = false;

    for (start, word) in word_spans(raw) {
        let end = start + word.len();

        if options_done || !looks_like_option(word) {
            segment = Some(segment.map_or((start, end), |(open, _)| (open, end)));
            continue;
        }

        if let Some((open, close)) = segment.take() {
            segments.push(&raw[open..close]);
        }

        if word == "--" {
            options_done = true;
            continue;
        }

        if let Some(long) = word.strip_prefix("--") {
            let switch = switches
                .iter()
                .find(|switch| switch.name.eq_ignore_ascii_case(long))
                .ok_or_else(|| ArgsError::UnknownOption(word.to_owned()))?;
            parsed.enabled.insert(switch.name);
            continue;
        }

        for shortcut in word.chars().skip(1) {
            let switch = switches
                .iter()
                .find(|switch| switch.shortcut == shortcut)
                .ok_or_else(|| ArgsError::UnknownOption(format!("-{shortcut}")))?;
            parsed.enabled.insert(switch.name);
        }
    }

    if let Some((open, close)) = segment {
        segments.push(&raw[open..close]);
    }

    if !segments.is_empty() {
        parsed.rest = Some(segments.join(" "));
    }

    Ok(parsed)
}

/// Whitespace-separated words with their byte offsets into `raw`.
fn word_spans(raw: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;

    for (index, c) in raw.char_indices() {
        match (c.is_whitespace(), word_start) {
            (true, Some(start)) => {
                spans.push((start, &raw[start..index]));
                word_start = None;
            }
            (false, None) => word_start = Some(index),
            _ => {}
        }
    }

    if let Some(start) = word_start {
        spans.push((start, &raw[start..]));
    }

    spans
}

fn looks_like_option(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next() == Some('-') && chars.next().is_some_and(|next| !next.is_ascii_digit())
}
