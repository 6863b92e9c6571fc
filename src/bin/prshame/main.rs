use anyhow::Context;
use chrono::Utc;
use prshame::{Config, GitHubClient, Mode, RunOptions, parse_args, shame_stale_pull_requests};
use tracing::{error, info};

fn handle_clap_help_version(clap_err: &clap::Error) -> ! {
    use clap::error::ErrorKind;
    match clap_err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{clap_err}");
            std::process::exit(0);
        }
        _ => {
            eprint!("{clap_err}");
            std::process::exit(2);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(options: RunOptions) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(repo) = options.repo {
        config.repository = repo;
    }

    let client = GitHubClient::new(&config).context("Failed to create GitHub client")?;
    let shamings = shame_stale_pull_requests(&client, &config, Utc::now(), options.mode).await?;

    match options.mode {
        Mode::Post => info!("shamed {} PR(s) in {}", shamings.len(), config.repository),
        Mode::DryRun => info!(
            "{} shameful PR(s) in {}, nothing posted",
            shamings.len(),
            config.repository
        ),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let options = match parse_args(std::env::args()) {
        Ok(options) => options,
        Err(err) => match err.downcast_ref::<clap::Error>() {
            Some(clap_err) => handle_clap_help_version(clap_err),
            None => {
                error!("{err:#}");
                std::process::exit(2);
            }
        },
    };

    if let Err(err) = run(options).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
