//! Common regex patterns for pattern envelope extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::catalog::{COMPANIES, FABRICS};

lazy_static! {
    // Any whitespace run, including newlines and tabs
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Company catalog, one exact-phrase pattern per entry, in catalog order
    pub static ref COMPANY_PATTERNS: Vec<(&'static str, Regex)> = COMPANIES
        .iter()
        .map(|name| (*name, Regex::new(&company_pattern(name)).unwrap()))
        .collect();

    // Pattern number shapes, highest priority first
    pub static ref PATTERN_NUMBER_SHAPES: Vec<Regex> = vec![
        // Optional leading letter + 4-5 digits: "8234", "B6453", "M7890"
        Regex::new(r"(?i)\b[A-Z]?\d{4,5}\b").unwrap(),
        // 3-4 digits + optional trailing letter: "123", "1234A"
        Regex::new(r"(?i)\b\d{3,4}[A-Z]?\b").unwrap(),
        // Labeled code: "Pattern # K3402", "No. 118"
        Regex::new(r"(?i)(?:\bpattern\s*#|\bno\.)\s*[A-Z0-9]+").unwrap(),
    ];

    pub static ref PATTERN_NUMBER_LABEL: Regex = Regex::new(
        r"(?i)^(?:pattern\s*#|no\.)\s*"
    ).unwrap();

    // Pattern name label: "Pattern: ...", "Design: ..."
    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?i)\b(?:pattern|design)\s*:\s*"
    ).unwrap();

    pub static ref NAME_LABEL_PREFIX: Regex = Regex::new(
        r"(?i)^(?:pattern|design)\s*:\s*"
    ).unwrap();

    // Size and audience qualifiers that are not part of a pattern's name
    pub static ref NAME_QUALIFIERS: Regex = Regex::new(
        r"(?i)\b(?:misses|women|men|children|kids|girls|boys)(?:['’]s)?\b"
    ).unwrap();

    // Size ranges, highest priority first. Bare letter codes are
    // case-sensitive so ordinary words and possessive "s" do not read as
    // sizes; after a "Size(s):" label any case is accepted.
    pub static ref SIZE_SHAPES: Vec<Regex> = vec![
        Regex::new(r"\b(?:XXL|XL|XS|S|M|L)\b").unwrap(),
        Regex::new(r"\b\d{1,2}\s*[-–]\s*\d{1,2}\b").unwrap(),
        Regex::new(
            r"(?i)\bsizes?\s*:\s*(?:\d{1,2}|XXL|XL|XS|S|M|L)\b(?:(?:\s*[-–/,]\s*|\s+)(?:\d{1,2}|XXL|XL|XS|S|M|L)\b)*"
        ).unwrap(),
    ];

    pub static ref SIZE_LABEL: Regex = Regex::new(r"(?i)^sizes?\s*:\s*").unwrap();

    // Fabric catalog, one whole-word pattern per entry, in catalog order
    pub static ref FABRIC_PATTERNS: Vec<(&'static str, Regex)> = FABRICS
        .iter()
        .map(|fabric| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(fabric));
            (*fabric, Regex::new(&pattern).unwrap())
        })
        .collect();

    // "Fabrics:", "Suggested Fabrics:", "Recommended Fabric:" and the span after
    pub static ref FABRIC_LABEL: Regex = Regex::new(
        r"(?i)\b(?:(?:suggested|recommended)\s+)?fabrics?\s*:\s*(.{5,30})"
    ).unwrap();

    // Difficulty words, "Level N" and "Skill Level: ..." labels
    pub static ref DIFFICULTY: Regex = Regex::new(
        r"(?i)\b(?:skill\s+level\s*:\s*\w+|beginner|easy|intermediate|advanced|expert|level\s+[1-4])\b"
    ).unwrap();
}

/// Build the exact-phrase pattern for a catalog company name.
///
/// Words may be separated by any amount of whitespace. A possessive suffix is
/// optional on the last word, and a name spelled with "'s" also matches with
/// the apostrophe dropped, a typographic apostrophe, or no suffix at all.
pub fn company_pattern(name: &str) -> String {
    let words: Vec<String> = name
        .split_whitespace()
        .map(|word| match word.strip_suffix("'s") {
            Some(base) => format!("{}(?:['’]?s)?", regex::escape(base)),
            None => regex::escape(word),
        })
        .collect();

    let mut pattern = words.join(r"\s*");
    if !name.ends_with("'s") {
        pattern.push_str("(?:['’]s)?");
    }

    format!(r"(?i)\b{}\b", pattern)
}
