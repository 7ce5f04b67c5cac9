use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lexis_config::lookup::LookupConfig;
use lexis_types::{HistoryEntry, TranslationResult};

use crate::{Result, persist};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Created,
    Updated { lookup_count: u32 },
}

/// Ordered vocabulary history backed by a single JSON file
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries: Vec<HistoryEntry> = persist::load_or_default(&path);
        tracing::debug!("Loaded {} history entries from {}", entries.len(), path.display());
        Self { path, entries }
    }

    pub fn save(&self) -> Result<()> {
        persist::save(&self.path, &self.entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a new entry for this lookup or bump the existing one.
    ///
    /// A repeat lookup only touches `lookup_count` and `last_lookup`;
    /// the stored translations stay as first recorded.
    pub fn record_lookup(
        &mut self,
        result: &TranslationResult,
        now: DateTime<Utc>,
        limits: &LookupConfig,
    ) -> RecordOutcome {
        if let Some(entry) = self.find_mut(&result.word, &result.src) {
            entry.lookup_count += 1;
            entry.last_lookup = now;
            return RecordOutcome::Updated {
                lookup_count: entry.lookup_count,
            };
        }

        let mut synonyms = result.synonyms.clone();
        synonyms.extend(result.alternatives().iter().cloned());

        self.entries.push(HistoryEntry {
            word: result.word.clone(),
            main_translation: result.main_translation.clone(),
            translations: result.translations.clone(),
            senses: result.senses.clone(),
            synonyms,
            examples: result
                .examples
                .iter()
                .take(limits.max_examples_stored)
                .cloned()
                .collect(),
            phrases: result
                .phrases
                .iter()
                .take(limits.max_phrases_stored)
                .cloned()
                .collect(),
            src_lang: result.src.clone(),
            tgt_lang: result.tgt.clone(),
            date_added: now,
            last_lookup: now,
            lookup_count: 1,
            revision_score: 0,
            next_revision: now,
            times_correct: 0,
            times_incorrect: 0,
        });
        RecordOutcome::Created
    }

    pub fn find(&self, word: &str, src_lang: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.matches(word, src_lang))
    }

    pub fn find_mut(&mut self, word: &str, src_lang: &str) -> Option<&mut HistoryEntry> {
        self.entries.iter_mut().find(|e| e.matches(word, src_lang))
    }

    /// Case-insensitive substring search over words and their translations
    pub fn search(&self, query: &str) -> Vec<&HistoryEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| {
                e.word.to_lowercase().contains(&query)
                    || e.main_translation.to_lowercase().contains(&query)
                    || e.translations
                        .iter()
                        .any(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// The last `n` entries, newest first
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [HistoryEntry] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::Duration;
    use lexis_types::{Example, Phrase};

    use super::*;

    fn result(word: &str, src: &str, tgt: &str, main: &str) -> TranslationResult {
        let mut r = TranslationResult::empty(word, src, tgt);
        r.main_translation = main.to_string();
        r.translations = vec![main.to_string(), "domicile".to_string()];
        r
    }

    #[test]
    fn test_repeat_lookup_bumps_count_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::load(dir.path().join("history.json"));
        let limits = LookupConfig::default();
        let t0 = Utc::now();
        let t1 = t0 + Duration::minutes(5);

        assert_eq!(
            store.record_lookup(&result("Haus", "de", "fr", "maison"), t0, &limits),
            RecordOutcome::Created
        );
        assert_eq!(
            store.record_lookup(&result("haus", "de", "fr", "autre"), t1, &limits),
            RecordOutcome::Updated { lookup_count: 2 }
        );

        assert_eq!(store.len(), 1);
        let entry = store.find("HAUS", "de").unwrap();
        assert_eq!(entry.word, "Haus");
        assert_eq!(entry.main_translation, "maison");
        assert_eq!(entry.date_added, t0);
        assert_eq!(entry.last_lookup, t1);
        assert_eq!(entry.next_revision, t0);
    }

    #[test]
    fn test_other_direction_is_a_distinct_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::load(dir.path().join("history.json"));
        let limits = LookupConfig::default();
        let now = Utc::now();

        store.record_lookup(&result("Haus", "de", "fr", "maison"), now, &limits);
        let outcome = store.record_lookup(&result("Haus", "fr", "de", "Haus"), now, &limits);

        assert_eq!(outcome, RecordOutcome::Created);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_new_entry_truncates_examples_and_phrases() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::load(dir.path().join("history.json"));
        let limits = LookupConfig::default();

        let mut r = result("Haus", "de", "fr", "maison");
        r.examples = (0..12)
            .map(|i| Example {
                original: format!("Satz {i}"),
                translation: format!("phrase {i}"),
            })
            .collect();
        r.phrases = (0..9)
            .map(|i| Phrase {
                phrase: format!("Wendung {i}"),
                translation: format!("tournure {i}"),
            })
            .collect();
        r.synonyms = vec!["Heim".to_string()];
        store.record_lookup(&r, Utc::now(), &limits);

        let entry = &store.entries()[0];
        assert_eq!(entry.examples.len(), 8);
        assert_eq!(entry.phrases.len(), 6);
        assert_eq!(entry.revision_score, 0);
        assert_eq!(entry.synonyms, vec!["Heim", "domicile"]);
    }

    #[test]
    fn test_save_and_reload_preserves_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let mut store = HistoryStore::load(&path);
        store.record_lookup(
            &result("Bahnhof", "de", "fr", "gare"),
            Utc::now(),
            &LookupConfig::default(),
        );
        store.record_lookup(
            &result("Größe", "de", "fr", "taille"),
            Utc::now(),
            &LookupConfig::default(),
        );
        store.save().unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Größe"));

        let reloaded = HistoryStore::load(&path);
        assert_eq!(reloaded.entries(), store.entries());
    }

    #[test]
    fn test_corrupt_file_loads_empty_and_is_kept_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        let store = HistoryStore::load(&path);
        assert!(store.is_empty());
        assert!(dir.path().join("history.json.corrupt").exists());
    }

    #[test]
    fn test_search_and_recent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::load(dir.path().join("history.json"));
        let limits = LookupConfig::default();
        let now = Utc::now();
        store.record_lookup(&result("Haus", "de", "fr", "maison"), now, &limits);
        store.record_lookup(&result("Bahnhof", "de", "fr", "gare"), now, &limits);
        store.record_lookup(&result("Hausaufgabe", "de", "fr", "devoir"), now, &limits);

        let words: Vec<_> = store.search("HAUS").iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["Haus", "Hausaufgabe"]);

        let words: Vec<_> = store.search("gare").iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["Bahnhof"]);

        assert!(store.search("  ").is_empty());

        let recent: Vec<_> = store.recent(2).iter().map(|e| e.word.as_str()).collect();
        assert_eq!(recent, vec!["Hausaufgabe", "Bahnhof"]);
    }
}
