use std::io::Cursor;
use std::path::Path;

use chrono::{Duration, Utc};
use lexis_config::lookup::LookupConfig;
use lexis_config::review::ReviewConfig;
use lexis_history::{HistoryStore, StatsStore};
use lexis_types::TranslationResult;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::review::run_session;

/// Three due words that all translate to "maison", so card order does not matter
fn stores(dir: &Path, words: &[&str]) -> (HistoryStore, StatsStore) {
    let mut history = HistoryStore::load(dir.join("history.json"));
    let past = Utc::now() - Duration::hours(1);
    for word in words {
        let mut result = TranslationResult::empty(word, "de", "fr");
        result.main_translation = "maison".into();
        result.translations = vec!["maison".into(), "logis".into()];
        history.record_lookup(&result, past, &LookupConfig::default());
    }
    let stats = StatsStore::load(dir.join("review_stats.json"));
    (history, stats)
}

fn run(
    history: &mut HistoryStore,
    stats: &mut StatsStore,
    input: &str,
) -> (Option<lexis_review::SessionSummary>, String) {
    let mut output = Vec::new();
    let summary = run_session(
        history,
        stats,
        &ReviewConfig::default(),
        &mut Cursor::new(input.as_bytes()),
        &mut output,
        &mut StdRng::seed_from_u64(42),
    )
    .unwrap();
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn test_all_correct_session_is_saved() {
    let dir = tempfile::tempdir().unwrap();
    let (mut history, mut stats) = stores(dir.path(), &["Haus", "Heim", "Gebäude"]);

    let (summary, output) = run(&mut history, &mut stats, "maison\nMaison\nlogis\n");

    let summary = summary.unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.correct, 3);
    assert_eq!(summary.percent, Some(100.0));
    assert!(output.contains("REVIEW  -  3 words"));
    assert!(output.contains("Perfect!"));

    for entry in history.entries() {
        assert_eq!(entry.revision_score, 1);
        assert_eq!(entry.times_correct, 1);
        assert!(entry.next_revision > Utc::now());
    }

    let saved = HistoryStore::load(dir.path().join("history.json"));
    assert_eq!(saved.entries(), history.entries());
    let saved = StatsStore::load(dir.path().join("review_stats.json"));
    assert_eq!(saved.stats().total_sessions, 1);
    assert_eq!(saved.stats().total_correct, 3);
}

#[test]
fn test_hint_then_skip_then_quit() {
    let dir = tempfile::tempdir().unwrap();
    let (mut history, mut stats) = stores(dir.path(), &["Haus", "Heim", "Gebäude"]);

    let (summary, output) = run(&mut history, &mut stats, "?\ns\nq\n");

    let summary = summary.unwrap();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.skipped, 1);
    assert!(output.contains("💡 m____n  (6 letters)"));
    assert!(output.contains("Answer: maison"));
    assert!(output.contains("No answers this session."));
    assert!(history.entries().iter().all(|e| e.revision_score == 0));
    assert_eq!(stats.stats().total_sessions, 1);
}

#[test]
fn test_wrong_answer_shows_solution() {
    let dir = tempfile::tempdir().unwrap();
    let (mut history, mut stats) = stores(dir.path(), &["Haus", "Heim", "Gebäude"]);

    let (summary, output) = run(&mut history, &mut stats, "voiture\n");

    let summary = summary.unwrap();
    assert_eq!(summary.incorrect, 1);
    assert!(output.contains("❌ The answer was: maison"));
    let missed: Vec<_> = history
        .entries()
        .iter()
        .filter(|e| e.times_incorrect == 1)
        .collect();
    assert_eq!(missed.len(), 1);
    assert_eq!(missed[0].revision_score, 0);
}

#[test]
fn test_small_history_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let (mut history, mut stats) = stores(dir.path(), &["Haus", "Heim"]);

    let (summary, output) = run(&mut history, &mut stats, "maison\n");

    assert!(summary.is_none());
    assert!(output.contains("at least 3 words"));
    assert_eq!(stats.stats().total_sessions, 0);
    assert!(!dir.path().join("review_stats.json").exists());
}
