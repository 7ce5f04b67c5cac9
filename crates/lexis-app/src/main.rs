use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod display;
pub mod menu;
pub mod profile;
pub mod review;
pub mod server;
pub mod state;


use self::state::{AppState, LookupMode};

#[derive(Debug, Parser)]
#[command(name = "lexis", version, about = "German ⇄ French dictionary with spaced-repetition review")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Interactive menu when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Detailed lookup of a word, saved to history
    Word {
        #[arg(required = true, num_args = 1..)]
        word: Vec<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Translate a sentence with a word-by-word gloss
    Sentence {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Latest history entries
    History {
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    Search {
        query: String,
    },
    /// Flashcard session
    Review,
    Stats,
    /// Write the vocabulary to a text file
    Export {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Start the web API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lexis=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(Command::Serve { host, port }) = &cli.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }

    let state = Arc::new(AppState::new(config)?);
    run(state, cli.command).await
}

async fn run(state: Arc<AppState>, command: Option<Command>) -> anyhow::Result<()> {
    let mut out = io::stdout();

    match command {
        None => {
            let stdin = io::stdin();
            menu::run(&state, &mut stdin.lock(), &mut out).await?;
        }
        Some(Command::Word { word, from, to }) => {
            let text = commands::lookup(
                &state,
                &word.join(" "),
                from.as_deref(),
                to.as_deref(),
                LookupMode::Word,
            )
            .await?;
            writeln!(out, "{text}")?;
        }
        Some(Command::Sentence { text, from, to }) => {
            let text = commands::lookup(
                &state,
                &text.join(" "),
                from.as_deref(),
                to.as_deref(),
                LookupMode::Sentence,
            )
            .await?;
            writeln!(out, "{text}")?;
        }
        Some(Command::History { limit }) => {
            writeln!(out, "{}", commands::history(&state, limit).await)?;
        }
        Some(Command::Search { query }) => {
            writeln!(out, "{}", commands::search(&state, &query).await)?;
        }
        Some(Command::Review) => {
            let stdin = io::stdin();
            commands::review(&state, &mut stdin.lock(), &mut out).await?;
        }
        Some(Command::Stats) => {
            writeln!(out, "{}", commands::statistics(&state).await)?;
        }
        Some(Command::Export { dir }) => {
            let path = commands::export(&state, dir.as_deref()).await?;
            writeln!(out, "{}", commands::export_message(path.as_deref()))?;
        }
        Some(Command::Serve { .. }) => {
            let addr = state.config.server.bind_addr();
            let shutdown = async {
                signal::ctrl_c().await.expect("failed to listen for ctrl+c");
                tracing::info!("Shutdown requested");
            };
            server::serve(Arc::clone(&state), &addr, shutdown).await?;
        }
    }

    Ok(())
}
