use std::io::{BufRead, Write};

use anyhow::Context;
use chrono::Utc;
use lexis_config::review::ReviewConfig;
use lexis_history::{HistoryStore, StatsStore};
use lexis_review::{Command, ReviewError, ReviewSession, SessionSummary, hint, parse_command};
use rand::Rng;

use crate::display;

/// Next input line without its newline, `None` on end of input
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub(crate) fn prompt<W: Write>(output: &mut W) -> anyhow::Result<()> {
    write!(output, "\n  → ")?;
    output.flush()?;
    Ok(())
}

/// Run one flashcard session over `input`/`output`.
///
/// Returns `None` when history is too small to review. End of input behaves
/// like `q`: answers given so far are kept and the session is recorded.
pub fn run_session<R, W, G>(
    history: &mut HistoryStore,
    stats: &mut StatsStore,
    config: &ReviewConfig,
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> anyhow::Result<Option<SessionSummary>>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut session = match ReviewSession::start(history.entries(), Utc::now(), config, rng) {
        Ok(session) => session,
        Err(e @ ReviewError::NotEnoughWords { .. }) => {
            writeln!(output, "\n  ⚠ {e}")?;
            return Ok(None);
        }
    };

    write!(output, "{}", display::review_header(session.len()))?;

    let cards = session.cards().to_vec();
    'cards: for (position, &index) in cards.iter().enumerate() {
        let entries = history.entries_mut();
        let entry = &mut entries[index];
        write!(
            output,
            "{}",
            display::review_prompt(position + 1, cards.len(), entry)
        )?;

        loop {
            prompt(output)?;
            let Some(line) = read_line(input)? else {
                break 'cards;
            };

            match parse_command(&line) {
                Command::Quit => break 'cards,
                Command::Skip => {
                    session.skip();
                    write!(output, "{}", display::skipped(entry))?;
                    continue 'cards;
                }
                Command::Hint => {
                    write!(output, "{}", display::hint(hint(entry).as_ref()))?;
                }
                Command::Answer(answer) => {
                    let verdict = session.answer(entry, answer, Utc::now());
                    write!(output, "{}", display::verdict(entry, &verdict, answer))?;
                    let pick = rng.gen_range(0..entry.examples.len().max(1));
                    write!(output, "{}", display::example(entry, pick))?;
                    break;
                }
            }
        }
    }

    history.save().context("Failed to save history")?;
    let summary = session.finish(stats.stats_mut(), Utc::now());
    stats.save().context("Failed to save review statistics")?;

    write!(output, "{}", display::summary(&summary))?;
    output.flush()?;
    Ok(Some(summary))
}
