//! Pattern-based entity recognizer.
//!
//! Extracts labeled spans with regular expressions: a built-in pattern set
//! plus optional custom patterns loaded from a JSONL file at startup.
//! Custom patterns are inserted ahead of the built-ins so their matches
//! take priority, and pattern order resolves overlapping matches
//! (first pattern wins). Spans carry character offsets and are returned in
//! source-text order.

use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use sentiq_analysis::EntitySpan;

/// Built-in pattern set. Labels follow the upstream NER convention of
/// uppercase type names.
const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("EMAIL", r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}"),
    ("URL", r"https?://[^\s]+"),
    ("MONEY", r"\$\d+(?:,\d{3})*(?:\.\d+)?"),
    ("DATE", r"\b\d{4}-\d{2}-\d{2}\b"),
];

/// One compiled recognizer pattern.
#[derive(Debug)]
struct EntityPattern {
    label: String,
    regex: Regex,
}

/// A single line of the custom-patterns JSONL file.
#[derive(Debug, Deserialize)]
struct CustomPatternSpec {
    label: String,
    pattern: String,
}

/// Outcome of the best-effort custom-pattern load. Logged at startup,
/// never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomPatternLoad {
    /// No custom-patterns file was configured.
    NotConfigured,
    /// The configured file does not exist.
    Absent,
    /// The file loaded; count of patterns accepted.
    Loaded(usize),
    /// The file exists but could not be read.
    Failed(String),
}

/// Regex-backed entity recognizer.
#[derive(Debug)]
pub struct PatternRecognizer {
    patterns: Vec<EntityPattern>,
}

impl PatternRecognizer {
    /// Build the recognizer from the built-in set plus the optional custom
    /// JSONL file. Invalid lines and unparseable regexes are skipped with a
    /// warning; a missing or unreadable file degrades to built-ins only.
    #[must_use]
    pub fn from_config(custom_file: Option<&Path>) -> (Self, CustomPatternLoad) {
        let mut patterns = Vec::new();
        let outcome = match custom_file {
            None => CustomPatternLoad::NotConfigured,
            Some(path) => load_custom_patterns(path, &mut patterns),
        };

        patterns.extend(builtin_patterns());
        (Self { patterns }, outcome)
    }

    /// Extract entity spans from the text, in source-text order.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<EntitySpan> {
        // Byte-offset candidates first; earlier patterns claim their spans
        // before later ones are considered.
        let mut accepted: Vec<(usize, usize, &str, &str)> = Vec::new();
        for pattern in &self.patterns {
            for found in pattern.regex.find_iter(text) {
                let overlaps = accepted
                    .iter()
                    .any(|&(start, end, _, _)| found.start() < end && start < found.end());
                if !overlaps {
                    accepted.push((
                        found.start(),
                        found.end(),
                        pattern.label.as_str(),
                        found.as_str(),
                    ));
                }
            }
        }

        accepted.sort_unstable_by_key(|&(start, end, _, _)| (start, end));
        accepted
            .into_iter()
            .map(|(start, end, label, matched)| EntitySpan {
                text: matched.to_string(),
                label: label.to_string(),
                start: char_offset(text, start),
                end: char_offset(text, end),
            })
            .collect()
    }
}

fn builtin_patterns() -> Vec<EntityPattern> {
    BUILTIN_PATTERNS
        .iter()
        .filter_map(|&(label, pattern)| match Regex::new(pattern) {
            Ok(regex) => Some(EntityPattern {
                label: label.to_string(),
                regex,
            }),
            Err(e) => {
                tracing::warn!(label, error = %e, "builtin entity pattern failed to compile");
                None
            }
        })
        .collect()
}

fn load_custom_patterns(path: &Path, patterns: &mut Vec<EntityPattern>) -> CustomPatternLoad {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "custom entities file not found");
        return CustomPatternLoad::Absent;
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read custom entities file");
            return CustomPatternLoad::Failed(e.to_string());
        }
    };

    let mut loaded = 0_usize;
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let spec: CustomPatternSpec = match serde_json::from_str(line) {
            Ok(spec) => spec,
            Err(_) => {
                tracing::warn!(path = %path.display(), "skipping invalid JSONL line");
                continue;
            }
        };
        match Regex::new(&spec.pattern) {
            Ok(regex) => {
                patterns.push(EntityPattern {
                    label: spec.label,
                    regex,
                });
                loaded += 1;
            }
            Err(e) => {
                tracing::warn!(label = %spec.label, error = %e, "skipping unparseable custom pattern");
            }
        }
    }

    if loaded == 0 {
        tracing::warn!(path = %path.display(), "no valid patterns found in custom entities file");
    } else {
        tracing::info!(count = loaded, path = %path.display(), "loaded custom entity patterns");
    }
    CustomPatternLoad::Loaded(loaded)
}

/// Convert a byte index into a character offset.
fn char_offset(text: &str, byte_index: usize) -> usize {
    text[..byte_index].chars().count()
}
