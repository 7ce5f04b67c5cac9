use chrono::{DateTime, Utc};
use lexis_config::review::ReviewConfig;
use lexis_types::{HistoryEntry, SessionStats};
use rand::Rng;

use crate::ReviewError;
use crate::grading::is_correct;
use crate::schedule::apply_answer;
use crate::selection::select_cards;

/// What the user typed at a review prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Skip,
    Hint,
    Answer(&'a str),
}

pub fn parse_command(input: &str) -> Command<'_> {
    let input = input.trim();
    match input {
        "?" => Command::Hint,
        _ if input.eq_ignore_ascii_case("q") => Command::Quit,
        _ if input.eq_ignore_ascii_case("s") => Command::Skip,
        _ => Command::Answer(input),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub score: u8,
    pub next_revision: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    /// Graded answers, skips excluded
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub skipped: u32,
    /// `None` when nothing was graded
    pub percent: Option<f64>,
}

/// One pass over a selected batch of cards
#[derive(Debug)]
pub struct ReviewSession {
    cards: Vec<usize>,
    correct: u32,
    incorrect: u32,
    skipped: u32,
}

impl ReviewSession {
    /// Select the session's cards, refusing when history is too small
    pub fn start<R>(
        entries: &[HistoryEntry],
        now: DateTime<Utc>,
        config: &ReviewConfig,
        rng: &mut R,
    ) -> Result<Self, ReviewError>
    where
        R: Rng + ?Sized,
    {
        if entries.len() < config.min_history {
            return Err(ReviewError::NotEnoughWords {
                have: entries.len(),
                need: config.min_history,
            });
        }

        let cards = select_cards(entries, now, config, rng);
        tracing::info!("Review session started with {} cards", cards.len());
        Ok(Self::with_cards(cards))
    }

    pub fn with_cards(cards: Vec<usize>) -> Self {
        Self {
            cards,
            correct: 0,
            incorrect: 0,
            skipped: 0,
        }
    }

    /// Indices into the history the session was started from
    pub fn cards(&self) -> &[usize] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Grade an answer and reschedule the card
    pub fn answer(&mut self, entry: &mut HistoryEntry, text: &str, now: DateTime<Utc>) -> Verdict {
        let correct = is_correct(text, entry);
        apply_answer(entry, correct, now);
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
        tracing::debug!(
            "'{}' answered {}, score now {}",
            entry.word,
            if correct { "correctly" } else { "incorrectly" },
            entry.revision_score
        );
        Verdict {
            correct,
            score: entry.revision_score,
            next_revision: entry.next_revision,
        }
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn summary(&self) -> SessionSummary {
        let total = self.correct + self.incorrect;
        SessionSummary {
            total,
            correct: self.correct,
            incorrect: self.incorrect,
            skipped: self.skipped,
            percent: (total > 0).then(|| self.correct as f64 * 100.0 / total as f64),
        }
    }

    /// Fold the session into the persisted statistics
    pub fn finish(self, stats: &mut SessionStats, now: DateTime<Utc>) -> SessionSummary {
        let summary = self.summary();
        stats.record_session(summary.correct, summary.incorrect, now);
        tracing::info!(
            "Review session finished: {}/{} correct",
            summary.correct,
            summary.total
        );
        summary
    }
}
