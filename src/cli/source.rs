use std::fs;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use rustpager::{PagerError, Result};

/// Read the collection to browse: one item per non-empty line, or one item
/// per element when the file holds a JSON array.
pub fn load_items(path: &Path, json: bool) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)?;
    if json {
        parse_json_items(&raw)
    } else {
        Ok(parse_lines(&raw))
    }
}

pub fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_json_items(raw: &str) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let serde_json::Value::Array(elements) = value else {
        return Err(PagerError::InvalidInput(
            "expected a JSON array at the top level".to_string(),
        ));
    };

    Ok(elements
        .into_iter()
        .map(|element| match element {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        })
        .collect())
}

/// Generated stock rows used when no input file is given.
pub fn demo_items() -> Vec<String> {
    const MATERIALS: [&str; 8] = [
        "Cement OPC 53 (50kg bag)",
        "TMT bar 12mm",
        "River sand (cft)",
        "Aggregate 20mm (cft)",
        "PVC conduit 25mm",
        "Copper wire 2.5 sq mm",
        "Ceramic floor tile 600x600",
        "Waterproofing compound (20L)",
    ];
    const STORES: [&str; 3] = ["Main store", "Site A", "Site B"];

    (0..237)
        .map(|n| {
            let material = MATERIALS[n % MATERIALS.len()];
            let store = STORES[(n / MATERIALS.len()) % STORES.len()];
            let quantity = (n * 37 + 11) % 500;
            format!("MAT-{:04}  {:<30} {:>4} units  {}", n + 1, material, quantity, store)
        })
        .collect()
}

/// Case-insensitive match against each item.
#[derive(Debug, Clone)]
pub enum Filter {
    All,
    Substring(String),
    Pattern(Regex),
}

impl Filter {
    pub fn new(text: &str, use_regex: bool) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Filter::All);
        }

        if use_regex {
            let pattern = RegexBuilder::new(text).case_insensitive(true).build()?;
            Ok(Filter::Pattern(pattern))
        } else {
            Ok(Filter::Substring(text.to_lowercase()))
        }
    }

    pub fn matches(&self, item: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Substring(needle) => item.to_lowercase().contains(needle.as_str()),
            Filter::Pattern(pattern) => pattern.is_match(item),
        }
    }

    pub fn apply(&self, items: &[String]) -> Vec<String> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}
