//! Plain-text rendering for the terminal. Every function returns the text
//! so the callers decide where it goes.

use std::fmt::Write as _;

use lexis_core::language::{display_name, flag};
use lexis_history::{RecordOutcome, StatisticsReport};
use lexis_review::{Hint, SessionSummary, Verdict};
use lexis_types::{HistoryEntry, SentenceResult, TranslationResult};

const WIDTH: usize = 62;

fn heavy_rule() -> String {
    "━".repeat(WIDTH)
}

fn section(out: &mut String, title: &str) {
    let bar = "─".repeat(title.chars().count() + 2);
    let _ = writeln!(out, "\n┌{bar}┐\n│ {title} │\n└{bar}┘");
}

pub fn word_result(result: &TranslationResult, sources: &[String]) -> String {
    let mut out = String::new();
    let (sf, tf) = (flag(&result.src), flag(&result.tgt));

    let _ = writeln!(out, "\n{}", heavy_rule());
    let _ = writeln!(
        out,
        "  {sf}  {}  →  {tf}  {}",
        result.word, result.main_translation
    );
    let _ = writeln!(out, "{}", heavy_rule());

    if !result.translations.is_empty() {
        section(&mut out, &format!("Translations ({})", display_name(&result.tgt)));
        for (i, t) in result.translations.iter().take(12).enumerate() {
            let marker = if i == 0 { "●" } else { "○" };
            let _ = writeln!(out, "    {marker} {t}");
        }
    }

    if !result.senses.is_empty() {
        section(&mut out, "Senses");
        for sense in result.senses.iter().take(10) {
            let _ = writeln!(out, "    {}\n      → {}", sense.meaning, sense.translation);
        }
    }

    if !result.definitions.is_empty() {
        section(&mut out, "Definitions");
        for def in result.definitions.iter().take(6) {
            let _ = writeln!(out, "    [{}] {}", def.kind, def.definition);
        }
    }

    if !result.synonyms.is_empty() {
        section(
            &mut out,
            &format!("Related words ({})", display_name(&result.src)),
        );
        for s in result.synonyms.iter().take(6) {
            let _ = writeln!(out, "    ≈ {s}");
        }
    }

    let alternatives = result.alternatives();
    if !alternatives.is_empty() {
        section(&mut out, &format!("Synonyms ({})", display_name(&result.tgt)));
        for s in alternatives.iter().take(8) {
            let _ = writeln!(out, "    ≈ {s}");
        }
    }

    if !result.phrases.is_empty() {
        section(&mut out, "Phrases");
        for p in result.phrases.iter().take(10) {
            let _ = writeln!(out, "    {sf} {}\n       {tf} {}", p.phrase, p.translation);
        }
    }

    if !result.examples.is_empty() {
        section(&mut out, "Examples");
        for (i, ex) in result.examples.iter().take(10).enumerate() {
            let _ = writeln!(
                out,
                "\n    ({}) {sf}  {}\n        {tf}  {}",
                i + 1,
                ex.original,
                ex.translation
            );
        }
    }

    let _ = writeln!(out, "\n{}", "─".repeat(WIDTH));
    let _ = writeln!(out, "  Sources: {}", sources.join(" • "));
    let _ = writeln!(out, "{}", heavy_rule());
    out
}

pub fn sentence_result(result: &SentenceResult) -> String {
    let mut out = String::new();
    let translation = result.translation.as_deref().unwrap_or("?");

    let _ = writeln!(out, "\n{}\n  SENTENCE\n{}", heavy_rule(), heavy_rule());
    let _ = writeln!(out, "\n  {}  {}", flag(&result.src), result.original);
    let _ = writeln!(out, "\n  {}  {}", flag(&result.tgt), translation);

    if !result.word_by_word.is_empty() {
        section(&mut out, "Word by word");
        let width = result
            .word_by_word
            .keys()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0);
        for (word, gloss) in &result.word_by_word {
            let _ = writeln!(out, "    {word:<width$}  →  {gloss}");
        }
    }

    let _ = writeln!(out, "\n{}", heavy_rule());
    out
}

pub fn recorded(outcome: RecordOutcome) -> String {
    match outcome {
        RecordOutcome::Created => "  Saved to history.".to_string(),
        RecordOutcome::Updated { lookup_count } => {
            format!("  Already in history, looked up {lookup_count}×.")
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

pub fn history_table(entries: &[&HistoryEntry], total: usize) -> String {
    if entries.is_empty() {
        return "\n  History is empty.".to_string();
    }

    let mut out = String::new();
    section(&mut out, &format!("History ({total} words)"));
    let _ = writeln!(
        out,
        "\n  {:<4} {:<20} {:<20} {:<8} {:<4} Level",
        "#", "Word", "Translation", "Dir.", "×"
    );
    let _ = writeln!(out, "  {}", "─".repeat(WIDTH));

    for (i, entry) in entries.iter().enumerate() {
        let direction = format!("{}→{}", flag(&entry.src_lang), flag(&entry.tgt_lang));
        let _ = writeln!(
            out,
            "  {:<4} {:<20} {:<20} {:<8} {:<4} {}",
            i + 1,
            truncate(&entry.word, 20),
            truncate(entry.display_translation(), 18),
            direction,
            entry.lookup_count,
            entry.stars()
        );
    }
    out
}

pub fn search_results(query: &str, entries: &[&HistoryEntry]) -> String {
    if entries.is_empty() {
        return format!("\n  No results for « {query} ».");
    }

    let mut out = format!("\n  {} result(s):\n\n", entries.len());
    for entry in entries {
        let _ = writeln!(
            out,
            "    {} {} → {} {}",
            flag(&entry.src_lang),
            entry.word,
            flag(&entry.tgt_lang),
            entry.display_translation()
        );
        for sense in entry.senses.iter().take(2) {
            let _ = writeln!(out, "       {} : {}", sense.meaning, sense.translation);
        }
        if let Some(example) = entry.examples.first() {
            let _ = writeln!(out, "       💬 {}", example.original);
        }
        out.push('\n');
    }
    out
}

pub fn statistics(report: &StatisticsReport) -> String {
    let stats = &report.stats;
    let mut out = String::new();

    section(&mut out, "Statistics");
    let _ = writeln!(out, "\n  Review sessions       : {}", stats.total_sessions);
    let _ = writeln!(out, "  Words reviewed        : {}", stats.total_words_reviewed);
    let _ = writeln!(out, "  Correct answers       : {}", stats.total_correct);
    let _ = writeln!(out, "  Incorrect answers     : {}", stats.total_incorrect);
    if let Some(rate) = report.success_rate {
        let _ = writeln!(out, "  Success rate          : {rate:.1}%");
    }
    let _ = writeln!(out, "  Streak                : {} day(s)", stats.streak_days);
    let _ = writeln!(out, "\n  Words in history      : {}", report.total_words);
    if let Some(last) = stats.last_session {
        let _ = writeln!(
            out,
            "  Last session          : {}",
            last.format("%Y-%m-%d %H:%M UTC")
        );
    }

    if report.total_words > 0 {
        let _ = writeln!(out, "\n  Levels:");
        for (level, count) in report.level_distribution.iter().enumerate() {
            let _ = writeln!(out, "    {level} {}", "█".repeat(*count));
        }
    }

    if !report.top_lookups.is_empty() {
        let _ = writeln!(out, "\n  Most looked up:");
        for (i, word) in report.top_lookups.iter().enumerate() {
            let _ = writeln!(out, "    {}. {} ({}×)", i + 1, word.word, word.lookup_count);
        }
    }

    if !report.difficult.is_empty() {
        let _ = writeln!(out, "\n  Needs work:");
        for word in &report.difficult {
            let _ = writeln!(
                out,
                "    • {} (✗{} / ✓{})",
                word.word, word.times_incorrect, word.times_correct
            );
        }
    }

    if !report.mastered.is_empty() {
        let _ = writeln!(out, "\n  Mastered ({}):", report.mastered.len());
        for word in report.mastered.iter().take(8) {
            let _ = writeln!(out, "    ✓ {}", word.word);
        }
    }
    out
}

pub fn review_header(cards: usize) -> String {
    format!(
        "\n{}\n  REVIEW  -  {cards} words\n{}\n\n  Translate each word. Commands: ? = hint | s = skip | q = quit\n",
        "═".repeat(WIDTH),
        "═".repeat(WIDTH)
    )
}

pub fn review_prompt(position: usize, total: usize, entry: &HistoryEntry) -> String {
    let mut out = format!(
        "\n  [{position}/{total}]  Level: {}\n  {}  How do you say « {} » in {}?\n",
        entry.stars(),
        flag(&entry.src_lang),
        entry.word,
        display_name(&entry.tgt_lang)
    );
    if let Some(sense) = entry.senses.first().filter(|s| !s.meaning.is_empty()) {
        let _ = writeln!(out, "     (sense: {})", sense.meaning);
    }
    out
}

pub fn hint(hint: Option<&Hint>) -> String {
    match hint {
        Some(hint) => format!("  💡 {}  ({} letters)\n", hint.masked, hint.letters),
        None => "  No hint available.\n".to_string(),
    }
}

pub fn skipped(entry: &HistoryEntry) -> String {
    let mut out = format!("  ⏭  Answer: {}\n", entry.display_translation());
    let extras: Vec<&str> = entry.translations.iter().take(3).map(String::as_str).collect();
    if !extras.is_empty() {
        let _ = writeln!(out, "     Also: {}", extras.join(", "));
    }
    out
}

pub fn verdict(entry: &HistoryEntry, verdict: &Verdict, answer: &str) -> String {
    let mut out = String::new();
    if verdict.correct {
        let _ = writeln!(out, "  ✅ Correct!");
        let answer = answer.trim().to_lowercase();
        let others: Vec<&str> = entry
            .translations
            .iter()
            .take(4)
            .filter(|t| t.to_lowercase() != answer)
            .map(String::as_str)
            .collect();
        if !others.is_empty() {
            let _ = writeln!(out, "     Others: {}", others.join(", "));
        }
    } else {
        let _ = writeln!(out, "  ❌ The answer was: {}", entry.display_translation());
        let extras: Vec<&str> = entry.translations.iter().take(3).map(String::as_str).collect();
        if !extras.is_empty() {
            let _ = writeln!(out, "     Also: {}", extras.join(", "));
        }
    }
    out
}

pub fn example(entry: &HistoryEntry, pick: usize) -> String {
    if entry.examples.is_empty() {
        return String::new();
    }
    let example = &entry.examples[pick % entry.examples.len()];
    format!("     💬 {}\n        {}\n", example.original, example.translation)
}

pub fn summary(summary: &SessionSummary) -> String {
    let mut out = format!(
        "\n{}\n  SESSION SUMMARY\n{}\n",
        "═".repeat(WIDTH),
        "═".repeat(WIDTH)
    );
    let Some(percent) = summary.percent else {
        out.push_str("\n  No answers this session.\n");
        return out;
    };

    let filled = (30 * summary.correct / summary.total.max(1)) as usize;
    let _ = writeln!(out, "\n  Words reviewed : {}", summary.total);
    let _ = writeln!(out, "  ✅ Correct     : {}", summary.correct);
    let _ = writeln!(out, "  ❌ Incorrect   : {}", summary.incorrect);
    let _ = writeln!(
        out,
        "\n    [{}{}] {percent:.0}%",
        "█".repeat(filled),
        "░".repeat(30 - filled)
    );

    let message = if percent >= 100.0 {
        "Perfect!"
    } else if percent >= 70.0 {
        "Well done!"
    } else if percent >= 50.0 {
        "Keep going, you are improving."
    } else {
        "Review regularly, it will stick."
    };
    let _ = writeln!(out, "\n  {message}");
    out
}
