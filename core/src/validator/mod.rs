pub mod rules;

use crate::patterns::model::OutputEntry;
use rules::Rule;
use std::collections::HashMap;
use thiserror::Error;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Use `type: simple` for single entries with one category: {}", .phrases.join(", "))]
    CategoryCount { phrases: Vec<String> },

    #[error(
        "Refrain from using dashes inside inconsiderate terms: they'll be stripped when looking for words: {}",
        .phrases.join(", ")
    )]
    Hyphen { phrases: Vec<String> },

    #[error(
        "Refrain from using apostrophes inside inconsiderate terms, they'll be stripped when looking for words (or use `apostrophe: true`): {}",
        .phrases.join(", ")
    )]
    Apostrophe { phrases: Vec<String> },

    #[error("Refrain from multiple entries:\n  {}", .phrases.join(", "))]
    DuplicatePhrase { phrases: Vec<String> },
}

impl ValidationError {
    pub fn rule(&self) -> Rule {
        match self {
            ValidationError::CategoryCount { .. } => Rule::CATEGORY_COUNT,
            ValidationError::Hyphen { .. } => Rule::HYPHEN,
            ValidationError::Apostrophe { .. } => Rule::APOSTROPHE,
            ValidationError::DuplicatePhrase { .. } => Rule::DUPLICATE_PHRASE,
        }
    }

    /// Offending phrases: the entry's inconsiderate phrases for per-entry rules,
    /// the duplicated phrases for the corpus-wide rule.
    pub fn phrases(&self) -> &[String] {
        match self {
            ValidationError::CategoryCount { phrases }
            | ValidationError::Hyphen { phrases }
            | ValidationError::Apostrophe { phrases }
            | ValidationError::DuplicatePhrase { phrases } => phrases,
        }
    }
}

/// Check the whole corpus, stopping at the first violation.
///
/// Per-entry rules run in corpus order first; duplicate detection runs once over
/// the full corpus afterwards.
pub fn validate(entries: &[OutputEntry]) -> Result<(), ValidationError> {
    for entry in entries {
        check_entry(entry)?;
    }

    let duplicates = find_duplicate_phrases(entries);
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicatePhrase {
            phrases: duplicates,
        });
    }
    Ok(())
}

pub fn check_entry(entry: &OutputEntry) -> Result<(), ValidationError> {
    if !entry.is_simple() && entry.categories.len() < 2 {
        return Err(ValidationError::CategoryCount {
            phrases: phrase_list(entry),
        });
    }

    for phrase in entry.inconsiderate.keys() {
        if phrase.contains('-') {
            return Err(ValidationError::Hyphen {
                phrases: phrase_list(entry),
            });
        }
        if phrase.contains(APOSTROPHES) && !entry.allows_apostrophe() {
            return Err(ValidationError::Apostrophe {
                phrases: phrase_list(entry),
            });
        }
    }
    Ok(())
}

/// Inconsiderate phrases that occur more than once across all entries, in order
/// of first occurrence.
pub fn find_duplicate_phrases(entries: &[OutputEntry]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for phrase in entries.iter().flat_map(|e| e.inconsiderate.keys()) {
        let count = counts.entry(phrase.as_str()).or_insert(0);
        if *count == 0 {
            order.push(phrase.as_str());
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter(|p| counts.get(p).copied().unwrap_or(0) > 1)
        .map(str::to_string)
        .collect()
}

fn phrase_list(entry: &OutputEntry) -> Vec<String> {
    entry
        .inconsiderate_phrases()
        .into_iter()
        .map(str::to_string)
        .collect()
}
