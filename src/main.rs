use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use conndeck::app::Action;
use conndeck::app::controller::ConnectionsDialog;
use conndeck::app::outcome::Operation;
use conndeck::app::page::Page;
use conndeck::error;
use conndeck::infra::adapters::{InMemoryConnectionRepository, TracingNotifier};
use conndeck::infra::config::{ConfigFile, default_config_path};
use conndeck::repl::{self, describe, execute, parse_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/conndeck/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page shown when the dialog opens: list, add or edit
    #[arg(long)]
    initial_page: Option<Page>,
}

enum Input {
    Line(Option<String>),
    Completion(Action),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    error::install_hooks()?;

    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = ConfigFile::load_or_default(&config_path)?;
    let mut dialog_config = config.dialog_config();
    if let Some(page) = args.initial_page {
        dialog_config.initial_page = page;
    }
    info!(path = %config_path.display(), page = %dialog_config.initial_page, "starting");

    let repository = Arc::new(InMemoryConnectionRepository::new(config.connection_types()));
    let notifier = Arc::new(TracingNotifier);
    let mut dialog = ConnectionsDialog::new(dialog_config, repository, notifier.clone(), notifier);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let stdout = std::io::stdout();

    writeln!(stdout.lock(), "conndeck: type `open` to start, `help` for commands")?;

    loop {
        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line?),
            action = dialog.next_completion() => Input::Completion(action),
        };

        let reply = match input {
            Input::Line(None) => break,
            Input::Line(Some(line)) => execute(&mut dialog, parse_command(&line)).await,
            Input::Completion(action) => {
                let reindex_done = matches!(
                    action,
                    Action::ReindexCompleted { .. } | Action::ReindexFailed { .. }
                );
                dialog.dispatch(action);
                let mut reply = repl::Reply::default();
                if reindex_done
                    && let Some(outcome) = dialog.state().outcomes.get(Operation::Reindex)
                {
                    reply.lines.push(describe(Operation::Reindex, outcome));
                }
                reply
            }
        };

        let mut out = stdout.lock();
        for line in &reply.lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        if reply.quit {
            break;
        }
    }

    dialog.settle().await;
    Ok(())
}
