use lexis_types::history::MAX_REVISION_SCORE;
use lexis_types::{HistoryEntry, SessionStats};
use serde::Serialize;

const TOP_LOOKUPS: usize = 5;
const DIFFICULT_SHOWN: usize = 5;
const MASTERED_SCORE: u8 = 4;

/// Per-word line of the statistics report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordSummary {
    pub word: String,
    pub translation: String,
    pub src_lang: String,
    pub lookup_count: u32,
    pub revision_score: u8,
    pub times_correct: u32,
    pub times_incorrect: u32,
}

impl From<&HistoryEntry> for WordSummary {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            word: entry.word.clone(),
            translation: entry.display_translation().to_string(),
            src_lang: entry.src_lang.clone(),
            lookup_count: entry.lookup_count,
            revision_score: entry.revision_score,
            times_correct: entry.times_correct,
            times_incorrect: entry.times_incorrect,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsReport {
    pub stats: SessionStats,
    /// Percent of correct answers, `None` before the first answer
    pub success_rate: Option<f64>,
    pub total_words: usize,
    /// Word count per mastery level 0..=5
    pub level_distribution: [usize; MAX_REVISION_SCORE as usize + 1],
    pub top_lookups: Vec<WordSummary>,
    /// Words answered wrong more often than right
    pub difficult: Vec<WordSummary>,
    pub mastered: Vec<WordSummary>,
}

impl StatisticsReport {
    pub fn build(entries: &[HistoryEntry], stats: &SessionStats) -> Self {
        let mut level_distribution = [0; MAX_REVISION_SCORE as usize + 1];
        for entry in entries {
            level_distribution[entry.revision_score.min(MAX_REVISION_SCORE) as usize] += 1;
        }

        let mut by_lookups: Vec<&HistoryEntry> = entries.iter().collect();
        // stable: ties keep history order
        by_lookups.sort_by(|a, b| b.lookup_count.cmp(&a.lookup_count));

        Self {
            stats: stats.clone(),
            success_rate: stats.success_rate(),
            total_words: entries.len(),
            level_distribution,
            top_lookups: by_lookups
                .into_iter()
                .take(TOP_LOOKUPS)
                .map(WordSummary::from)
                .collect(),
            difficult: entries
                .iter()
                .filter(|e| e.times_incorrect > e.times_correct)
                .take(DIFFICULT_SHOWN)
                .map(WordSummary::from)
                .collect(),
            mastered: entries
                .iter()
                .filter(|e| e.revision_score >= MASTERED_SCORE)
                .map(WordSummary::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use lexis_types::TranslationResult;

    use super::*;
    use crate::HistoryStore;

    fn entries() -> Vec<HistoryEntry> {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::load(dir.path().join("history.json"));
        let limits = lexis_config::lookup::LookupConfig::default();
        for word in ["Haus", "Bahnhof", "Baum", "Hund", "Katze", "Tisch"] {
            let mut r = TranslationResult::empty(word, "de", "fr");
            r.main_translation = format!("{word}-fr");
            store.record_lookup(&r, Utc::now(), &limits);
        }
        let entries = store.entries_mut();
        entries[1].lookup_count = 4;
        entries[3].lookup_count = 2;
        entries[2].revision_score = 5;
        entries[4].revision_score = 4;
        entries[5].times_incorrect = 3;
        entries[5].times_correct = 1;
        entries[0].times_incorrect = 1;
        entries[0].times_correct = 1;
        entries.to_vec()
    }

    #[test]
    fn test_report_aggregates() {
        let mut stats = SessionStats::default();
        stats.record_session(3, 1, Utc::now());

        let report = StatisticsReport::build(&entries(), &stats);

        assert_eq!(report.total_words, 6);
        assert_eq!(report.success_rate, Some(75.0));
        assert_eq!(report.level_distribution, [4, 0, 0, 0, 1, 1]);

        let top: Vec<_> = report.top_lookups.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(top, vec!["Bahnhof", "Hund", "Haus", "Baum", "Katze"]);

        let difficult: Vec<_> = report.difficult.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(difficult, vec!["Tisch"]);

        let mastered: Vec<_> = report.mastered.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(mastered, vec!["Baum", "Katze"]);
    }

    #[test]
    fn test_empty_report() {
        let report = StatisticsReport::build(&[], &SessionStats::default());
        assert_eq!(report.total_words, 0);
        assert_eq!(report.success_rate, None);
        assert!(report.top_lookups.is_empty());
    }
}
