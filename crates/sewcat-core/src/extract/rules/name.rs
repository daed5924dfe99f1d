//! Pattern name extraction.
//!
//! Names are read from runs of plain words: a run ends at a number, at
//! punctuation, at a label ("Size:", "Fabrics:") or at a known label keyword
//! such as "Pattern" or "Size".

use super::patterns::{NAME_LABEL, NAME_LABEL_PREFIX, NAME_QUALIFIERS, WHITESPACE};
use super::{char_len, FieldExtractor};

const MIN_LEN: usize = 5;
const MAX_LEN: usize = 50;

/// Minimum length of an unlabeled span: a capital letter followed by at
/// least ten more characters.
const MIN_SPAN_LEN: usize = 11;

/// Label keywords that never belong to a pattern name.
const STOP_WORDS: &[&str] = &[
    "pattern",
    "design",
    "size",
    "sizes",
    "fabric",
    "fabrics",
    "suggested",
    "recommended",
    "skill",
    "level",
];

/// Pattern name field extractor.
///
/// Two ordered strategies: the words after a "Pattern:"/"Design:" label,
/// else the first capitalized span longer than ten characters. Only the
/// first match is cleaned; if it does not end up 5-50 characters long
/// there is no name, even when a later span would qualify.
#[derive(Default)]
pub struct PatternNameExtractor<'a> {
    company: Option<&'a str>,
}

impl<'a> PatternNameExtractor<'a> {
    /// Create a new pattern name extractor.
    pub fn new() -> Self {
        Self { company: None }
    }

    /// Strip this company name from candidates.
    pub fn with_company(mut self, company: Option<&'a str>) -> Self {
        self.company = company;
        self
    }

    /// Every candidate, labeled ones first.
    fn candidates(&self, text: &str) -> Vec<String> {
        let labeled = NAME_LABEL
            .find_iter(text)
            .filter_map(|m| leading_run(&text[m.end()..]));

        labeled.chain(spans(text)).collect()
    }

    /// The candidate from whichever strategy matches first.
    fn first_candidate(&self, text: &str) -> Option<String> {
        match NAME_LABEL.find(text) {
            Some(label) => leading_run(&text[label.end()..]),
            None => spans(text).next(),
        }
    }

    /// Strip the label, audience qualifiers and the exact company name.
    ///
    /// Only the company itself is removed, so connectives around it stay:
    /// "Wrap Dress by Simplicity" cleans to "Wrap Dress by".
    fn clean(&self, candidate: &str) -> Option<String> {
        let name = NAME_LABEL_PREFIX.replace(candidate, "");
        let mut name = NAME_QUALIFIERS.replace_all(&name, "").into_owned();

        if let Some(company) = self.company {
            name = name.replace(company, "");
        }

        let name = WHITESPACE.replace_all(&name, " ");
        let name = name.trim_matches(|c: char| !c.is_alphanumeric());

        if (MIN_LEN..=MAX_LEN).contains(&char_len(name)) {
            Some(name.to_string())
        } else {
            None
        }
    }
}

impl FieldExtractor for PatternNameExtractor<'_> {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.first_candidate(text)
            .and_then(|candidate| self.clean(&candidate))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.candidates(text)
            .iter()
            .filter_map(|candidate| self.clean(candidate))
            .collect()
    }
}

fn spans(text: &str) -> impl Iterator<Item = String> {
    capitalized_runs(text)
        .into_iter()
        .filter(|span| char_len(span) >= MIN_SPAN_LEN)
}

/// A token of normalized text as seen by the run scanner.
enum Token<'t> {
    /// A plain word. `closes` is set when trailing punctuation ends the run.
    Word { word: &'t str, closes: bool },
    /// Anything that ends the current run and is not part of it.
    Break,
}

fn classify(token: &str) -> Token<'_> {
    if token.ends_with(':') {
        return Token::Break;
    }

    let word = token.trim_end_matches([',', ';', '.', '!', '?']);
    let closes = word.len() != token.len();

    let plain = !word.is_empty()
        && word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '\'' | '’' | '&' | '-'));

    if plain && !STOP_WORDS.contains(&word.to_lowercase().as_str()) {
        Token::Word { word, closes }
    } else {
        Token::Break
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// The run of plain words at the very start of `text`, if any.
fn leading_run(text: &str) -> Option<String> {
    let mut words = Vec::new();

    for token in text.split_whitespace() {
        match classify(token) {
            Token::Word { word, closes } => {
                words.push(word);
                if closes {
                    break;
                }
            }
            Token::Break => break,
        }
    }

    (!words.is_empty()).then(|| words.join(" "))
}

/// Every maximal run of plain words that starts with a capital letter.
fn capitalized_runs(text: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in text.split_whitespace() {
        match classify(token) {
            Token::Word { word, closes } => {
                if !current.is_empty() || starts_uppercase(word) {
                    current.push(word);
                }
                if closes && !current.is_empty() {
                    runs.push(current.join(" "));
                    current.clear();
                }
            }
            Token::Break => {
                if !current.is_empty() {
                    runs.push(current.join(" "));
                    current.clear();
                }
            }
        }
    }

    if !current.is_empty() {
        runs.push(current.join(" "));
    }

    runs
}

/// Extract the pattern name from normalized text.
pub fn extract_pattern_name(text: &str, company: Option<&str>) -> Option<String> {
    PatternNameExtractor::new().with_company(company).extract(text)
}
