use anyhow::Result;
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod client;
mod commands;
mod config;
mod error;
mod models;
mod session;

use crate::client::{RecommendationService, RecommenderClient};
use crate::commands::{Command, HELP};
use crate::config::load_config;
use crate::error::{ActionError, ServiceResult};
use crate::session::{FetchOutcome, HomeView, LikedSongsView, SessionController, View};

const PROMPT: &str = "beats> ";

#[derive(Parser)]
#[command(name = "beats-client")]
#[command(about = "Interactive client for a music recommendation service")]
#[command(version)]
struct Args {
    /// Base URL of the recommendation service (overrides RECOMMENDER_URL)
    #[arg(short = 'u', long = "base-url")]
    base_url: Option<String>,

    /// Give up on a request after this many seconds (overrides RECOMMENDER_TIMEOUT_SECS)
    #[arg(short = 't', long = "timeout-secs")]
    timeout_secs: Option<u64>,

    /// Don't check that the service is up before starting
    #[arg(long = "skip-ping")]
    skip_ping: bool,

    /// Debug mode - verbose diagnostics on stderr
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Quiet mode - only warnings and errors on stderr
    #[arg(short = 'q', long = "quiet", conflicts_with = "debug")]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else if args.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .with_env_var("LOG_LEVEL")
            .from_env_lossy()
    };

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn render<S: RecommendationService>(controller: &SessionController<S>) {
    let session = controller.session();
    match session.view {
        View::Recommendations => println!("\n{}\n", HomeView::new(session)),
        View::LikedSongs => println!("\n{}\n", LikedSongsView::new(&session.liked_songs)),
    }
}

/// Run one command against the session. Returns false when the user wants out.
fn execute<S: RecommendationService>(controller: &mut SessionController<S>, command: Command) -> bool {
    match command {
        Command::Favorites(text) => {
            controller.set_pending_favorites(&text);
            controller.navigate(View::Recommendations);
            submit(controller, |c| c.submit_pending());
        }
        Command::Type(text) => {
            controller.set_pending_favorites(&text);
            render(controller);
        }
        Command::Submit => {
            controller.navigate(View::Recommendations);
            submit(controller, |c| c.submit_pending());
        }
        Command::Like => {
            let result = controller.like_current();
            rated(controller, result);
        }
        Command::Dislike => {
            let result = controller.dislike_current();
            rated(controller, result);
        }
        Command::Stop => {
            controller.stop_recommendations();
            render(controller);
        }
        Command::Songs => {
            controller.navigate(View::LikedSongs);
            render(controller);
        }
        Command::Back => {
            controller.navigate(View::Recommendations);
            render(controller);
        }
        Command::Show => render(controller),
        Command::Help => println!("{HELP}"),
        Command::Quit => return false,
        Command::Empty => {}
        Command::Unknown(word) => eprintln!("Unknown command '{word}'. Type 'help' for a list."),
    }
    true
}

fn rated<S: RecommendationService>(controller: &SessionController<S>, result: Result<(), ActionError>) {
    match result {
        Ok(()) => render(controller),
        Err(e) => eprintln!("✗ {}", e.notice()),
    }
}

fn submit<S, F>(controller: &mut SessionController<S>, action: F)
where
    S: RecommendationService,
    F: FnOnce(&mut SessionController<S>) -> ServiceResult<FetchOutcome>,
{
    match action(controller) {
        Ok(outcome) => {
            for song in &outcome.new_songs {
                println!("+ Added '{}' by {} to the catalog", song.title, song.artist);
            }
            if !outcome.displayed {
                println!("Recommendations are stopped; nothing new to show.");
            }
            render(controller);
        }
        Err(e) => eprintln!("✗ {}", e.notice()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    // Load configuration from .env, then apply flags
    let config = load_config()?.with_overrides(args.base_url.clone(), args.timeout_secs);
    info!(base_url = %config.base_url, timeout = ?config.timeout, "configuration loaded");

    let client = RecommenderClient::new(config.clone());

    if !args.skip_ping {
        println!("Testing connection to {}...", config.base_url);
        match client.ping() {
            Ok(_) => println!("✓ Recommendation service is up"),
            Err(e) => {
                warn!(error = %e, "ping failed");
                eprintln!("✗ {}", e.notice());
                return Err(anyhow::anyhow!("Recommendation service unreachable: {}", e));
            }
        }
    }

    let mut controller = SessionController::new(client);
    let mut rl = DefaultEditor::new()?;

    println!("{HELP}");
    render(&controller);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if !execute(&mut controller, Command::parse(&line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                eprintln!("Error: {e:?}");
                break;
            }
        }
    }

    Ok(())
}
