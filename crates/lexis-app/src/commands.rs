//! Actions shared by the subcommands and the interactive menu. Each returns
//! the text to show.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use lexis_history::{StatisticsReport, export};
use lexis_types::Lookup;

use crate::display;
use crate::review::run_session;
use crate::state::{AppState, LookupMode};

pub async fn lookup(
    state: &AppState,
    text: &str,
    src: Option<&str>,
    tgt: Option<&str>,
    mode: LookupMode,
) -> anyhow::Result<String> {
    let report = state.lookup(text, src, tgt, mode).await?;

    let mut out = match &report.lookup {
        Lookup::Word(result) => display::word_result(result, &state.aggregator.source_names()),
        Lookup::Sentence(result) => display::sentence_result(result),
    };
    if let Some(outcome) = report.recorded {
        out.push_str(&display::recorded(outcome));
        out.push('\n');
    }
    Ok(out)
}

pub async fn history(state: &AppState, limit: usize) -> String {
    let history = state.history.lock().await;
    display::history_table(&history.recent(limit), history.len())
}

pub async fn search(state: &AppState, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return String::new();
    }
    let history = state.history.lock().await;
    display::search_results(query, &history.search(query))
}

pub async fn statistics(state: &AppState) -> String {
    let history = state.history.lock().await;
    let stats = state.stats.lock().await;
    display::statistics(&StatisticsReport::build(history.entries(), stats.stats()))
}

/// Write the export, by default next to the history file
pub async fn export(state: &AppState, dir: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    let history = state.history.lock().await;
    if history.is_empty() {
        return Ok(None);
    }
    let dir = dir.unwrap_or(state.config.storage.data_dir.as_path());
    let path = export::write_export(dir, history.entries(), Utc::now())
        .with_context(|| format!("Failed to export into {}", dir.display()))?;
    Ok(Some(path))
}

pub fn export_message(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("\n  ✅ Exported to {}", path.display()),
        None => "\n  History is empty, nothing to export.".to_string(),
    }
}

pub async fn review<R: BufRead, W: Write>(
    state: &AppState,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let mut history = state.history.lock().await;
    let mut stats = state.stats.lock().await;
    run_session(
        &mut history,
        &mut stats,
        &state.config.review,
        input,
        output,
        &mut rand::thread_rng(),
    )?;
    Ok(())
}
