pub mod grading;
pub mod schedule;
pub mod selection;
pub mod session;

pub use grading::{Hint, hint, is_correct};
pub use schedule::{INTERVAL_DAYS, apply_answer};
pub use selection::select_cards;
pub use session::{Command, ReviewSession, SessionSummary, Verdict, parse_command};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Review needs at least {need} words in history, found {have}")]
    NotEnoughWords { have: usize, need: usize },
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{DateTime, Utc};
    use lexis_types::HistoryEntry;

    pub fn card(word: &str, translations: &[&str], score: u8, due: DateTime<Utc>) -> HistoryEntry {
        HistoryEntry {
            word: word.to_string(),
            main_translation: translations.first().copied().unwrap_or_default().to_string(),
            translations: translations.iter().map(|t| t.to_string()).collect(),
            senses: vec![],
            synonyms: vec![],
            examples: vec![],
            phrases: vec![],
            src_lang: "de".into(),
            tgt_lang: "fr".into(),
            date_added: due,
            last_lookup: due,
            lookup_count: 1,
            revision_score: score,
            next_revision: due,
            times_correct: 0,
            times_incorrect: 0,
        }
    }
}
