use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexiquest::dictionary::{CachedDictionary, DictionaryClient};
use lexiquest::progress::JsonFileStore;
use lexiquest::quiz::{Round, SelectionRequest, Submission};
use lexiquest::wordlist::{DirectoryWordlists, WordlistProvider};
use lexiquest::{Config, QuizError, QuizService};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lexiquest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the data directory holding progress and wordlists
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every category and its wordlists
    Lists,
    /// Print the words of a wordlist
    Show {
        category: String,
        filename: String,
    },
    /// Pick the next batch of words to practice
    Select {
        category: String,
        filename: String,
        /// Number of words (non-positive means the configured default)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
        /// Word shown last, kept out of the first slot
        #[arg(long)]
        last: Option<String>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Record practiced words
    Submit {
        category: Option<String>,
        filename: Option<String>,
        /// Practiced words, in order
        words: Vec<String>,
        /// Read a {"category","filename","results"} payload from stdin instead
        #[arg(long)]
        json: bool,
    },
    /// Run an interactive quiz round
    Practice {
        category: String,
        filename: String,
        /// Number of words (non-positive means the configured default)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Print all recorded progress
    Progress,
    /// Forget the progress of a wordlist
    Reset {
        category: String,
        filename: String,
    },
    /// Look a word up in the dictionary
    Define {
        word: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexiquest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            // Storage faults are ours; everything else the caller can fix
            match e.downcast_ref::<QuizError>() {
                Some(err) if err.is_server_fault() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => Config::data_dir()?,
    };

    let service = QuizService::new(
        JsonFileStore::new(Config::progress_path(&data_dir)),
        DirectoryWordlists::new(config.resolved_wordlist_dir(&data_dir)),
        config.default_limit,
    );

    match cli.command {
        Commands::Lists => print_json(&service.wordlists().catalog()?),
        Commands::Show { category, filename } => {
            print_json(&service.wordlist(&category, &filename)?)
        }
        Commands::Select { category, filename, limit, last, seed } => {
            let request = SelectionRequest { category, filename, limit, exclude: last };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let batch = service.select(&request, &mut rng)?;
            if batch.is_exhausted() {
                tracing::info!(
                    "Only {} distinct words available ({} requested)",
                    batch.words.len(),
                    batch.requested
                );
            }
            print_json(&batch.words)
        }
        Commands::Submit { category, filename, words, json } => {
            let submission = if json {
                let mut payload = String::new();
                io::stdin().read_to_string(&mut payload).context("Failed to read stdin")?;
                Submission::from_json(&payload)?
            } else {
                Submission::new(category.unwrap_or_default(), filename.unwrap_or_default(), words)
            };
            print_json(&service.submit(&submission)?)
        }
        Commands::Practice { category, filename, limit } => {
            practice(&service, category, filename, limit)
        }
        Commands::Progress => print_json(&service.progress()?),
        Commands::Reset { category, filename } => {
            service.delete_progress(&category, &filename)?;
            println!("Progress for {}/{} deleted", category, filename);
            Ok(())
        }
        Commands::Define { word } => {
            let client =
                DictionaryClient::new(Duration::from_secs(config.dictionary_timeout_secs))?;
            // One lookup per process, so the cache only bounds memory here
            let dictionary = CachedDictionary::new(client, config.dictionary_cache_capacity);
            match dictionary.lookup(&word).await {
                Ok(entry) => print_json(&entry),
                Err(e) => {
                    if e.is_recoverable() {
                        tracing::warn!("Dictionary lookup failed, try again later: {}", e);
                    }
                    Err(e.into())
                }
            }
        }
    }
}

/// Ask each selected word on the terminal, then record the round
fn practice(
    service: &QuizService<JsonFileStore, DirectoryWordlists>,
    category: String,
    filename: String,
    limit: Option<i64>,
) -> Result<()> {
    let request = SelectionRequest { category, filename, limit, exclude: None };
    let batch = service.select(&request, &mut StdRng::from_os_rng())?;
    let mut round = Round::new(request.category, request.filename, batch);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while let Some(record) = round.current() {
        print!("{} ({}): ", record.word, record.kind);
        io::stdout().flush()?;
        let expected = record.translation.clone();

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        if round.answer(&line?) == Some(true) {
            println!("  correct");
        } else {
            println!("  -> {}", expected);
        }
    }

    println!("{}/{} correct", round.correct(), round.answered());
    if round.answered() > 0 {
        service.submit(&round.into_submission())?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
