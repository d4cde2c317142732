use anyhow::Context;
use clap::Parser;

use roundstats::analysis::ErrorPolicy;
use roundstats::{Config, FileStore, LogSource};

#[derive(Parser)]
#[command(version, about = "Reconstructs round winners and team rosters from server logs")]
struct Cli {
    /// YAML config file, defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List the logs in the logs directory
    List,
    /// Print the rounds of one log, one JSON record per line
    Parse {
        log: String,
        #[arg(long)]
        pretty: bool,
        #[arg(long)]
        skip_malformed: bool,
    },
    /// Analyse every log, one JSON record per log
    All {
        #[arg(long)]
        skip_malformed: bool,
    },
}

fn policy(skip_malformed: bool) -> ErrorPolicy {
    if skip_malformed {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_ref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    roundstats::logging::init(&config.logging).context("setting up logging")?;

    tracing::info!(logs_dir = %config.logs_dir.display(), "Starting...");

    let store = FileStore::new(config.logs_dir.clone());

    match cli.command {
        Commands::List => {
            for name in store.list(&config.extension)? {
                println!("{}", name);
            }
        }
        Commands::Parse {
            log,
            pretty,
            skip_malformed,
        } => {
            let lines = store.load(&log)?;
            let record = roundstats::analysis::analyse(&log, lines, policy(skip_malformed))?;

            if pretty {
                println!("{}", serde_json::to_string_pretty(&record.rounds)?);
            } else {
                for round in record.rounds.iter() {
                    println!("{}", serde_json::to_string(round)?);
                }
            }
        }
        Commands::All { skip_malformed } => {
            let names = store.list(&config.extension)?;
            tracing::info!(logs = names.len(), "Analysing logs");

            let handles: Vec<_> = names
                .into_iter()
                .map(|name| {
                    let store = store.duplicate();
                    tokio::task::spawn_blocking(move || -> anyhow::Result<_> {
                        let lines = store.load(&name)?;
                        roundstats::analysis::analyse(&name, lines, policy(skip_malformed))
                    })
                })
                .collect();

            for handle in handles {
                let record = handle.await??;
                println!("{}", serde_json::to_string(&record)?);
            }
        }
    };

    Ok(())
}
