//! Helpers behind the `kbcombo` command-line tool

use anyhow::{bail, Context, Result};
use kbhelper_core::descriptor;
use kbhelper_core::{Combination, KeyCode, ModifierSet, Platform};
use log::debug;
use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

/// One descriptor line from a shortcut list
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedLine {
    /// 1-based line number
    pub line: usize,
    pub descriptor: String,
    pub result: kbhelper_core::Result<Combination>,
    /// Earlier line with the same combination, which this line replaces
    pub replaces: Option<usize>,
}

impl CheckedLine {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Validate a shortcut list: one descriptor per line, blank lines and
/// lines starting with `#` skipped. Every line is checked; errors do not stop
/// the scan.
pub fn check_descriptors(text: &str) -> Vec<CheckedLine> {
    let mut seen: HashMap<Combination, usize> = HashMap::new();
    let mut checked = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let descriptor = raw.trim_end_matches('\r');
        if descriptor.trim().is_empty() || descriptor.trim_start().starts_with('#') {
            continue;
        }

        let result = descriptor::parse(descriptor);
        let replaces = match &result {
            Ok(combination) => seen.insert(*combination, line),
            Err(_) => None,
        };
        debug!("line {}: {:?} -> {:?}", line, descriptor, result);

        checked.push(CheckedLine {
            line,
            descriptor: descriptor.to_string(),
            result,
            replaces,
        });
    }

    checked
}

/// Read and validate a shortcut list file
pub fn check_file(path: &Path) -> Result<Vec<CheckedLine>> {
    let text = read_to_string(path)
        .with_context(|| format!("failed to read shortcut list {}", path.display()))?;
    Ok(check_descriptors(&text))
}

/// Parse a string made only of modifier tags, e.g. `"<Command><Shift>"`
pub fn parse_modifier_tags(tags: &str) -> Result<ModifierSet> {
    let (modifiers, rest) = descriptor::strip_modifiers(tags);
    if !rest.is_empty() {
        bail!("unrecognized text in modifier tags: {:?}", rest);
    }
    Ok(modifiers)
}

/// One row of the key table listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    pub code: KeyCode,
    pub raw: u16,
    /// Display token with no modifiers held
    pub token: String,
}

/// Keys of `platform` in ascending raw order, optionally only F1..F24
pub fn key_table(platform: Platform, functions_only: bool) -> Vec<KeyRow> {
    platform
        .keys()
        .filter(|code| !functions_only || code.is_function_key())
        .map(|code| KeyRow {
            code,
            raw: code.raw(),
            token: code.description(ModifierSet::empty()),
        })
        .collect()
}
