mod board;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod poller;
mod readings;
mod session;
mod source;
mod ui;

use crate::board::{CardPanel, InsightPanel};
use crate::config::{Config, get_config_path, resolve_base_url};
use crate::environment::Environment;
use crate::poller::poll_once;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::source::{DataSource, SensorDataClient};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for live agricultural sensor data
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// Base URL of the sensor data server, e.g. http://10.0.0.164:5000
        #[arg(long, value_name = "BASE_URL")]
        url: Option<String>,

        /// Print poll events and latest values instead of drawing the dashboard
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Paint a dark background behind the dashboard
        #[arg(long = "with-background", default_value_t = false)]
        with_background: bool,
    },
    /// Fetch the history once and print the latest values
    Fetch {
        /// Base URL of the sensor data server
        #[arg(long, value_name = "BASE_URL")]
        url: Option<String>,
    },
    /// Remember a data server base URL for future runs
    SetUrl {
        /// Base URL of the sensor data server
        #[arg(value_name = "BASE_URL")]
        url: String,
    },
    /// Clear the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let environment = Environment::from_env();

    match args.command {
        Command::Start {
            url,
            headless,
            with_background,
        } => {
            let base_url = base_url(url, get_config_path().ok().as_deref(), &environment);
            if headless {
                let session = setup_session(base_url)?;
                run_headless_mode(session).await;
                Ok(())
            } else {
                run_tui_mode(base_url, with_background).await
            }
        }
        Command::Fetch { url } => {
            let base_url = base_url(url, get_config_path().ok().as_deref(), &environment);
            fetch(base_url).await
        }
        Command::SetUrl { url } => {
            validate_base_url(&url)?;
            let config_path = get_config_path()?;
            Config::new(url.clone()).save(&config_path)?;
            print_cmd_success!("Data server saved", "{}", url);
            Ok(())
        }
        Command::Reset => {
            let config_path = get_config_path()?;
            Config::clear(&config_path)?;
            print_cmd_success!("Configuration cleared", "{}", config_path.display());
            Ok(())
        }
    }
}

/// Flag, then saved config, then environment. A missing home directory or an
/// unreadable config file falls through to the environment.
fn base_url(
    flag: Option<String>,
    config_path: Option<&Path>,
    environment: &Environment,
) -> String {
    let config = match config_path {
        Some(path) if path.exists() => match Config::load_from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                print_cmd_warn!("Ignoring config file", "{}: {}", path.display(), e);
                None
            }
        },
        _ => None,
    };
    resolve_base_url(flag, config.as_ref(), environment)
}

fn validate_base_url(url: &str) -> Result<(), Box<dyn Error>> {
    let parsed = reqwest::Url::parse(url)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("Unsupported URL scheme: {}", parsed.scheme()).into());
    }
    Ok(())
}

/// One poll, printed as a card table. Fails on any fetch error or empty history.
async fn fetch(base_url: String) -> Result<(), Box<dyn Error>> {
    let client = SensorDataClient::new(base_url)?;
    let readings = match poll_once(&client).await {
        Ok(readings) => readings,
        Err(e) => {
            print_cmd_error!("Fetch failed", e.to_string().as_str());
            return Err(e.into());
        }
    };

    let mut cards = CardPanel::new();
    if let Some(latest) = readings.last() {
        cards.update(latest);
        print_cmd_info!(
            "Latest reading",
            "{} ({} readings from {})",
            latest.time_label(),
            readings.len(),
            client.endpoint()
        );
    }
    for card in cards.cards() {
        println!("{}", cli_messages::format_card(card));
    }
    if cards.out_of_range() > 0 {
        print_cmd_warn!(
            "Out of range",
            "{} values outside their optimal range",
            cards.out_of_range()
        );
    }

    let mut insights = InsightPanel::new();
    insights.update(&readings);
    if !insights.summaries().is_empty() {
        print_cmd_info!("History summary", "{} readings", insights.readings());
        for summary in insights.summaries() {
            println!("{}", cli_messages::format_summary(summary));
        }
    }
    for summary in insights.moving() {
        if let Some(trend) = summary.trend {
            print_cmd_info!(
                "Trend",
                "{} is {} significantly",
                summary.field.title(),
                trend
            );
        }
    }
    Ok(())
}
