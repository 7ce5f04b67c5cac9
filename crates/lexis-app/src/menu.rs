use std::io::{BufRead, Write};

use lexis_core::language::{LANGUAGES, display_name};

use crate::commands;
use crate::review::read_line;
use crate::state::{AppState, LookupMode};

const HISTORY_SHOWN: usize = 50;

const MENU: &str = "
╔══════════════════════════════════════════════════╗
║  [1]  Translate a word (detailed)                ║
║  [2]  Translate a sentence                       ║
║  [3]  History                                    ║
║  [4]  Review (flashcards)                        ║
║  [5]  Statistics                                 ║
║  [6]  Export vocabulary                          ║
║  [7]  Search history                             ║
║  [0]  Quit                                       ║
╚══════════════════════════════════════════════════╝";

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> anyhow::Result<Option<String>> {
    write!(output, "\n  {question} ")?;
    output.flush()?;
    Ok(read_line(input)?.map(|line| line.trim().to_string()))
}

/// Every ordered pair of supported languages, numbered from 1
fn directions() -> Vec<(&'static str, &'static str)> {
    LANGUAGES
        .iter()
        .flat_map(|src| {
            LANGUAGES
                .iter()
                .filter(move |tgt| tgt.code != src.code)
                .map(move |tgt| (src.code, tgt.code))
        })
        .collect()
}

fn ask_direction<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<(&'static str, &'static str)>> {
    let options = directions();
    writeln!(output, "\n  Direction:")?;
    for (i, &(src, tgt)) in options.iter().enumerate() {
        writeln!(
            output,
            "  [{}] {} → {}",
            i + 1,
            display_name(src),
            display_name(tgt)
        )?;
    }

    let Some(choice) = ask(input, output, &format!("Choice (1-{}):", options.len()))? else {
        return Ok(None);
    };
    let picked = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| options.get(n.checked_sub(1)?))
        .or(options.first());
    Ok(picked.copied())
}

/// Numbered menu loop, left on `0` or end of input
pub async fn run<R: BufRead, W: Write>(
    state: &AppState,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    writeln!(output, "\n  lexis  -  {}", state.aggregator.source_names().join(" • "))?;

    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = ask(input, output, "▶ Choice:")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some((src, tgt)) = ask_direction(input, output)? else {
                    break;
                };
                let Some(word) = ask(input, output, "Word:")? else {
                    break;
                };
                if word.is_empty() {
                    continue;
                }
                match commands::lookup(state, &word, Some(src), Some(tgt), LookupMode::Word).await {
                    Ok(text) => writeln!(output, "{text}")?,
                    Err(e) => writeln!(output, "\n  ❌ {e}")?,
                }
            }
            "2" => {
                writeln!(output, "\n  (language is detected automatically)")?;
                let Some(sentence) = ask(input, output, "Sentence:")? else {
                    break;
                };
                if sentence.is_empty() {
                    continue;
                }
                match commands::lookup(state, &sentence, None, None, LookupMode::Sentence).await {
                    Ok(text) => writeln!(output, "{text}")?,
                    Err(e) => writeln!(output, "\n  ❌ {e}")?,
                }
            }
            "3" => writeln!(output, "{}", commands::history(state, HISTORY_SHOWN).await)?,
            "4" => {
                if let Err(e) = commands::review(state, input, output).await {
                    writeln!(output, "\n  ❌ {e:#}")?;
                }
            }
            "5" => writeln!(output, "{}", commands::statistics(state).await)?,
            "6" => match commands::export(state, None).await {
                Ok(path) => writeln!(output, "{}", commands::export_message(path.as_deref()))?,
                Err(e) => writeln!(output, "\n  ❌ {e:#}")?,
            },
            "7" => {
                let Some(query) = ask(input, output, "Search:")? else {
                    break;
                };
                writeln!(output, "{}", commands::search(state, &query).await)?;
            }
            "0" => {
                writeln!(output, "\n  Auf Wiedersehen! Au revoir!\n")?;
                break;
            }
            _ => writeln!(output, "\n  ❌ Invalid choice.")?,
        }
    }

    Ok(())
}
