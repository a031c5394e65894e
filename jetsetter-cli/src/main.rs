use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use futures_util::future::join_all;
use jetsetter_booking::{Config, MockBookingService, SubmissionState, SubmissionWorkflow, SubmitOutcome};
use jetsetter_cli::console::search_summary;
use jetsetter_cli::input::{read_form, read_search};
use jetsetter_cli::ConsoleNavigator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "jetsetter", version)]
struct Args {
    /// Directory holding default.toml and friends
    #[arg(long, default_value = "config", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a saved booking form against the mock booking provider
    Book {
        /// JSON form with a "product" of FLIGHT, HOTEL or PACKAGE
        form: PathBuf,

        /// Concurrent submit taps, to exercise the in-flight guard
        #[arg(long, default_value_t = 1)]
        taps: usize,

        /// Print the full confirmation payload
        #[arg(short, long)]
        verbose: bool,
    },
    /// Check saved hotel search parameters
    Search {
        /// JSON hotel search form
        params: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jetsetter=info,jetsetter_booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    match args.command {
        Command::Book { form, taps, verbose } => book(&args.config_dir, &form, taps, verbose).await,
        Command::Search { params } => search(&params),
    }
}

fn search(path: &Path) -> anyhow::Result<ExitCode> {
    let params = read_search(path)?;
    match search_summary(&params) {
        Ok(summary) => {
            println!("{}", summary);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Missing Information: {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn book(config_dir: &Path, form: &Path, taps: usize, verbose: bool) -> anyhow::Result<ExitCode> {
    let config = Config::load_from(config_dir)?;
    let input = read_form(form)?;

    let workflow = SubmissionWorkflow::new(
        Arc::new(MockBookingService::new(config.mock.clone())),
        Arc::new(ConsoleNavigator::new(verbose)),
        &config.workflow,
    );
    tracing::info!("Submitting {} booking (workflow {})", input.kind(), workflow.id());

    let mut updates = workflow.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().state;
            tracing::debug!("Submission state: {:?}", state);
        }
    });

    let form = input.as_form();
    let outcomes = join_all((0..taps.max(1)).map(|_| workflow.submit(form))).await;

    for outcome in &outcomes {
        match outcome {
            SubmitOutcome::Ignored => tracing::info!("Submit ignored, booking already in flight"),
            SubmitOutcome::Rejected(err) => eprintln!("{}: {}", err.title(), err),
            SubmitOutcome::Failed(err) => {
                let alert = err.alert();
                eprintln!("{}: {}", alert.title, alert.message);
            }
            SubmitOutcome::Confirmed(_) => {}
        }
    }

    let status = workflow.status();
    drop(workflow);
    watcher.abort();

    tracing::info!("Final state {:?} via {:?}", status.state, status.trail);
    Ok(if status.state == SubmissionState::Succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
