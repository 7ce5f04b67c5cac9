use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::LanguageCode;
use crate::translation::{Example, Phrase, Sense};

/// Highest mastery level a history entry can reach
pub const MAX_REVISION_SCORE: u8 = 5;

fn default_lookup_count() -> u32 {
    1
}

/// Hand-edited files may carry any non-negative level; keep it within 0..=5
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = u64::deserialize(deserializer)?;
    Ok(raw.min(MAX_REVISION_SCORE as u64) as u8)
}

/// Persisted vocabulary record, unique per (word, source language)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    #[serde(default)]
    pub main_translation: String,
    #[serde(default)]
    pub translations: Vec<String>,
    #[serde(default)]
    pub senses: Vec<Sense>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    pub src_lang: LanguageCode,
    pub tgt_lang: LanguageCode,
    #[serde(default = "chrono::Utc::now")]
    pub date_added: DateTime<Utc>,
    #[serde(default = "chrono::Utc::now")]
    pub last_lookup: DateTime<Utc>,
    #[serde(default = "default_lookup_count")]
    pub lookup_count: u32,
    /// Mastery level, 0..=5
    #[serde(default, deserialize_with = "deserialize_score")]
    pub revision_score: u8,
    #[serde(default = "chrono::Utc::now")]
    pub next_revision: DateTime<Utc>,
    #[serde(default)]
    pub times_correct: u32,
    #[serde(default)]
    pub times_incorrect: u32,
}

impl HistoryEntry {
    /// Identity check: case-insensitive word, exact source language
    pub fn matches(&self, word: &str, src_lang: &str) -> bool {
        self.src_lang == src_lang && self.word.to_lowercase() == word.to_lowercase()
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_revision <= now
    }

    /// Mastery rendered as five stars
    pub fn stars(&self) -> String {
        let filled = self.revision_score.min(MAX_REVISION_SCORE) as usize;
        format!(
            "{}{}",
            "★".repeat(filled),
            "☆".repeat(MAX_REVISION_SCORE as usize - filled)
        )
    }

    /// The translation shown to the user: main one, else the first of the list
    pub fn display_translation(&self) -> &str {
        if !self.main_translation.is_empty() {
            return &self.main_translation;
        }
        self.translations.first().map(String::as_str).unwrap_or("?")
    }
}

/// Process-wide review statistics, persisted across runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStats {
    pub total_sessions: u32,
    pub total_words_reviewed: u32,
    pub total_correct: u32,
    pub total_incorrect: u32,
    pub streak_days: u32,
    pub last_session: Option<DateTime<Utc>>,
}

impl SessionStats {
    /// Fold one finished review session into the totals
    pub fn record_session(&mut self, correct: u32, incorrect: u32, now: DateTime<Utc>) {
        self.streak_days = next_streak(self.streak_days, self.last_session, now.date_naive());
        self.total_sessions += 1;
        self.total_words_reviewed += correct + incorrect;
        self.total_correct += correct;
        self.total_incorrect += incorrect;
        self.last_session = Some(now);
    }

    /// Share of correct answers over all sessions, in percent
    pub fn success_rate(&self) -> Option<f64> {
        let answered = self.total_correct + self.total_incorrect;
        if answered == 0 {
            return None;
        }
        Some(self.total_correct as f64 * 100.0 / answered as f64)
    }
}

fn next_streak(current: u32, last: Option<DateTime<Utc>>, today: NaiveDate) -> u32 {
    let Some(last) = last else {
        return 1;
    };
    let last_day = last.date_naive();
    if last_day == today {
        current.max(1)
    } else if last_day.succ_opt() == Some(today) {
        current + 1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn entry(word: &str, src: &str) -> HistoryEntry {
        let now = Utc::now();
        HistoryEntry {
            word: word.to_string(),
            main_translation: "maison".into(),
            translations: vec!["maison".into()],
            senses: vec![],
            synonyms: vec![],
            examples: vec![],
            phrases: vec![],
            src_lang: src.to_string(),
            tgt_lang: if src == "de" { "fr".into() } else { "de".into() },
            date_added: now,
            last_lookup: now,
            lookup_count: 1,
            revision_score: 0,
            next_revision: now,
            times_correct: 0,
            times_incorrect: 0,
        }
    }

    #[test]
    fn test_identity_ignores_case_but_not_language() {
        let e = entry("Haus", "de");
        assert!(e.matches("haus", "de"));
        assert!(e.matches("HAUS", "de"));
        assert!(!e.matches("Haus", "fr"));
    }

    #[test]
    fn test_stars() {
        let mut e = entry("Haus", "de");
        e.revision_score = 2;
        assert_eq!(e.stars(), "★★☆☆☆");
        e.revision_score = 5;
        assert_eq!(e.stars(), "★★★★★");
    }

    #[test]
    fn test_partial_entry_loads_with_defaults() {
        let json = r#"{"word":"Haus","src_lang":"de","tgt_lang":"fr"}"#;
        let e: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.lookup_count, 1);
        assert_eq!(e.revision_score, 0);
        assert!(e.translations.is_empty());
        assert_eq!(e.display_translation(), "?");
    }

    #[test]
    fn test_hand_edited_score_is_clamped_on_load() {
        for raw in [9, 255, 1000] {
            let json = format!(
                r#"{{"word":"Haus","src_lang":"de","tgt_lang":"fr","revision_score":{raw}}}"#
            );
            let e: HistoryEntry = serde_json::from_str(&json).unwrap();
            assert_eq!(e.revision_score, MAX_REVISION_SCORE);
        }
    }

    #[test]
    fn test_record_session_updates_totals() {
        let mut stats = SessionStats::default();
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        stats.record_session(3, 1, now);

        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.total_words_reviewed, 4);
        assert_eq!(stats.total_correct, 3);
        assert_eq!(stats.total_incorrect, 1);
        assert_eq!(stats.last_session, Some(now));
        assert_eq!(stats.success_rate(), Some(75.0));
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let mut stats = SessionStats::default();
        let day1 = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        stats.record_session(1, 0, day1);
        assert_eq!(stats.streak_days, 1);

        stats.record_session(1, 0, day1 + Duration::hours(2));
        assert_eq!(stats.streak_days, 1);

        stats.record_session(1, 0, day1 + Duration::days(1));
        assert_eq!(stats.streak_days, 2);

        stats.record_session(1, 0, day1 + Duration::days(5));
        assert_eq!(stats.streak_days, 1);
    }

    #[test]
    fn test_success_rate_without_answers() {
        assert_eq!(SessionStats::default().success_rate(), None);
    }
}
