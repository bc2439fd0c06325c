// ABOUTME: Markdown lint pass applied alongside slide rendering
// ABOUTME: Implements a small recommended rule set; findings never block output

use std::collections::{BTreeMap, BTreeSet};

/// A single lint finding within one slide's text.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// 1-based line within the slide text.
    pub line: usize,
    pub rule: &'static str,
    pub message: String,
}

/// Run the recommended rule set over one slide's raw text.
pub fn check(text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    check_hard_break_spaces(text, &mut findings);
    check_reference_definitions(text, &mut findings);
    findings
}

/// A hard break takes two trailing spaces; three or more is usually an
/// editing accident.
fn check_hard_break_spaces(text: &str, findings: &mut Vec<Finding>) {
    for (idx, line) in text.lines().enumerate() {
        let trailing = line.len() - line.trim_end_matches(' ').len();
        if trailing >= 3 {
            findings.push(Finding {
                line: idx + 1,
                rule: "hard-break-spaces",
                message: format!("{} trailing spaces where a hard break takes two", trailing),
            });
        }
    }
}

/// Flags duplicate link-reference definitions, references to labels nothing
/// defines, and definitions nothing references. Labels compare
/// case-insensitively.
fn check_reference_definitions(text: &str, findings: &mut Vec<Finding>) {
    let mut definitions: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    let mut references: Vec<(usize, String)> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if let Some(label) = definition_label(line) {
            let entry = definitions.entry(label.to_lowercase()).or_insert((idx + 1, 0));
            entry.1 += 1;
            continue;
        }
        for label in scan_references(line) {
            references.push((idx + 1, label));
        }
    }

    for (label, (line, count)) in &definitions {
        if *count > 1 {
            findings.push(Finding {
                line: *line,
                rule: "no-duplicate-definitions",
                message: format!("definition for [{label}] appears {count} times"),
            });
        }
    }

    for (line, label) in &references {
        if !definitions.contains_key(label) {
            findings.push(Finding {
                line: *line,
                rule: "no-undefined-references",
                message: format!("reference to undefined definition [{label}]"),
            });
        }
    }

    let referenced: BTreeSet<&String> = references.iter().map(|(_, label)| label).collect();
    for (label, (line, _)) in &definitions {
        if !referenced.contains(label) {
            findings.push(Finding {
                line: *line,
                rule: "no-unused-definitions",
                message: format!("definition for [{label}] is never referenced"),
            });
        }
    }
}

/// Label of a link-reference definition line (`[label]: destination`), if the
/// line is one. Up to three leading spaces are allowed.
fn definition_label(line: &str) -> Option<&str> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let rest = trimmed.strip_prefix('[')?;
    let close = rest.find(']')?;
    if !rest[close + 1..].starts_with(':') {
        return None;
    }
    let label = rest[..close].trim();
    if label.is_empty() {
        return None;
    }
    Some(label)
}

/// Reference labels used on one line: `[text][label]`, collapsed `[label][]`
/// and shortcut `[label]` forms. Inline links (`[text](url)`) are not
/// references.
fn scan_references(line: &str) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut refs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }
        let Some(close) = line[i + 1..].find(']') else {
            break;
        };
        let label = &line[i + 1..i + 1 + close];
        let after = &line[i + close + 2..];

        if after.starts_with('(') {
            // Inline link destination follows
            i += close + 2;
            continue;
        }
        if let Some(second) = after.strip_prefix('[') {
            if let Some(end) = second.find(']') {
                let explicit = &second[..end];
                let used = if explicit.is_empty() { label } else { explicit };
                refs.push(used.to_lowercase());
                i += close + end + 4;
                continue;
            }
        }
        if !after.starts_with(':') && !label.is_empty() {
            refs.push(label.to_lowercase());
        }
        i += close + 2;
    }
    refs
}
