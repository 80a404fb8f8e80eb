// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization and terminal rendering for CLI output.

use crate::registry::KeyedIter;
use crate::types::Language;
use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use serde_json::{Map, Value};

/// Machine-readable output formats for the `--format` flag.
///
/// Without the flag the CLI renders colored text; with it, records are
/// serialized whole so the output can be piped into other tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Collect keyed-iteration pairs into a map for `--index-by` export.
/// Keys are unique for the code fields; a duplicated name keeps the
/// earliest record, mirroring lookup semantics.
pub fn indexed_map(pairs: KeyedIter<'_>) -> Value {
    let mut map = Map::new();
    for (key, language) in pairs {
        map.entry(key.to_string())
            .or_insert_with(|| serde_json::json!(language));
    }
    Value::Object(map)
}

/// Render one record as a labeled block.
pub fn print_language(language: &Language) {
    println!("{}", language.name.bold());
    println!("  {}   {}", "639-1".dimmed(), language.alpha2);
    println!("  {} {}", "639-2/T".dimmed(), language.terminology);
    println!("  {} {}", "639-2/B".dimmed(), language.bibliographic);
}

/// Render the full table as aligned columns, widest name first so the
/// code columns line up.
pub fn print_table(languages: &[Language]) {
    let name_width = languages
        .iter()
        .map(|language| language.name.chars().count())
        .max()
        .unwrap_or(0);

    // Pad before coloring: ANSI escapes would otherwise count toward the width.
    let header = format!("{:<name_width$}  {:<5}  {:<7}  {:<7}", "NAME", "639-1", "639-2/T", "639-2/B");
    println!("{}", header.bold());
    for language in languages {
        println!(
            "{:<name_width$}  {:<5}  {:<7}  {:<7}",
            language.name, language.alpha2, language.terminology, language.bibliographic,
        );
    }
}
