//! Lenient answer grading.
//!
//! Exact matches always pass. Otherwise an answer longer than two characters
//! passes when it contains, or is contained in, a known translation, so
//! "Haus" is accepted for "das Haus". Short answers never match by substring.

use lexis_types::{HistoryEntry, UNKNOWN_TRANSLATION};

const MIN_FUZZY_LEN: usize = 2;

/// Known translations of an entry, lowercased and trimmed
pub fn accepted_answers(entry: &HistoryEntry) -> Vec<String> {
    let mut answers: Vec<String> = Vec::new();
    let candidates = std::iter::once(&entry.main_translation).chain(entry.translations.iter());
    for candidate in candidates {
        let candidate = candidate.trim().to_lowercase();
        if candidate.is_empty() || candidate == UNKNOWN_TRANSLATION {
            continue;
        }
        if !answers.contains(&candidate) {
            answers.push(candidate);
        }
    }
    answers
}

pub fn is_correct(answer: &str, entry: &HistoryEntry) -> bool {
    let answer = answer.trim().to_lowercase();
    let accepted = accepted_answers(entry);

    if accepted.iter().any(|a| *a == answer) {
        return true;
    }
    if answer.chars().count() <= MIN_FUZZY_LEN {
        return false;
    }
    accepted
        .iter()
        .any(|a| a.contains(&answer) || answer.contains(a.as_str()))
}

/// Masked form of the expected answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub masked: String,
    pub letters: usize,
}

/// The translation a hint or a reveal is built from
pub fn expected_answer(entry: &HistoryEntry) -> Option<&str> {
    let main = entry.main_translation.trim();
    if !main.is_empty() && main != UNKNOWN_TRANSLATION {
        return Some(main);
    }
    entry
        .translations
        .iter()
        .map(|t| t.trim())
        .find(|t| !t.is_empty())
}

/// First letter, underscores, and the last letter when the word is long enough
pub fn hint(entry: &HistoryEntry) -> Option<Hint> {
    let expected = expected_answer(entry)?;
    let chars: Vec<char> = expected.chars().collect();
    let (first, rest) = chars.split_first()?;

    let mut masked = first.to_string();
    if chars.len() > 2 {
        masked.push_str(&"_".repeat(chars.len() - 2));
        masked.extend(rest.last());
    }

    Some(Hint {
        masked,
        letters: chars.len(),
    })
}
