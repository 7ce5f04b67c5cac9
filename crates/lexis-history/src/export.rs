//! Plain-text vocabulary export

use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lexis_core::language::display_name;
use lexis_types::HistoryEntry;

use crate::Result;

const RULE_WIDTH: usize = 60;
const SECTION_WIDTH: usize = 40;

/// Render the history grouped by language direction, in first-seen order
pub fn render(entries: &[HistoryEntry], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut out, entries, now);
    out
}

/// Write the export into `dir` and return the created file
pub fn write_export(dir: &Path, entries: &[HistoryEntry], now: DateTime<Utc>) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name(now));
    fs::write(&path, render(entries, now))?;
    tracing::info!("Exported {} words to {}", entries.len(), path.display());
    Ok(path)
}

pub fn file_name(now: DateTime<Utc>) -> String {
    format!("vocabulary_export_{}.txt", now.format("%Y%m%d_%H%M"))
}

fn directions(entries: &[HistoryEntry]) -> Vec<(String, String)> {
    let mut seen: Vec<(String, String)> = Vec::new();
    for entry in entries {
        if !seen
            .iter()
            .any(|(s, t)| *s == entry.src_lang && *t == entry.tgt_lang)
        {
            seen.push((entry.src_lang.clone(), entry.tgt_lang.clone()));
        }
    }
    seen
}

fn write_report(out: &mut impl Write, entries: &[HistoryEntry], now: DateTime<Utc>) -> fmt::Result {
    let rule = "═".repeat(RULE_WIDTH);
    let section_rule = "─".repeat(SECTION_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "   VOCABULARY")?;
    writeln!(out, "   Exported on {}", now.format("%Y-%m-%d at %H:%M UTC"))?;
    writeln!(out, "{rule}\n")?;

    for (src, tgt) in directions(entries) {
        writeln!(
            out,
            "{section_rule}\n  {} → {}\n{section_rule}\n",
            display_name(&src).to_uppercase(),
            display_name(&tgt).to_uppercase()
        )?;

        for entry in entries
            .iter()
            .filter(|e| e.src_lang == src && e.tgt_lang == tgt)
        {
            write_entry(out, entry)?;
        }
    }

    writeln!(out, "\nTotal: {} words", entries.len())
}

fn write_entry(out: &mut impl Write, entry: &HistoryEntry) -> fmt::Result {
    let main = entry.display_translation();
    writeln!(out, "  ● {}  →  {}", entry.word, main)?;

    for sense in entry.senses.iter().take(3) {
        writeln!(out, "      {} : {}", sense.meaning, sense.translation)?;
    }

    let others: Vec<&str> = entry
        .translations
        .iter()
        .take(5)
        .map(String::as_str)
        .filter(|t| *t != main)
        .collect();
    if !others.is_empty() {
        writeln!(out, "      Also: {}", others.join(", "))?;
    }

    for phrase in entry.phrases.iter().take(2) {
        writeln!(out, "      → {} = {}", phrase.phrase, phrase.translation)?;
    }

    for example in entry.examples.iter().take(2) {
        writeln!(out, "      💬 {}", example.original)?;
        writeln!(out, "         {}", example.translation)?;
    }

    writeln!(
        out,
        "      Level: {}  (looked up {}×)\n",
        entry.stars(),
        entry.lookup_count
    )
}
