mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod session;
mod snapshot;
mod thresholds;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::http::API_URL_ENV_VAR;
use crate::environment::Environment;
use crate::session::{resolve_environment, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about = "Live sensor readings and nutrient predictions for a hydroponic system", long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard and refresh it every five seconds
    Start {
        /// Base URL of the sensor service, e.g. http://localhost:5000
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print updates to the console instead of drawing the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Fill the dashboard background
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Save the sensor service URL to the config file
    SetApi {
        /// Base URL of the sensor service
        #[arg(long, value_name = "URL")]
        api_url: String,
    },
    /// Clear the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            headless,
            with_background,
        } => {
            let env_var = std::env::var(API_URL_ENV_VAR).ok();
            let environment =
                resolve_environment(api_url.as_deref(), env_var.as_deref(), &config_path)?;
            start(environment, headless, with_background).await
        }
        Command::SetApi { api_url } => {
            let environment = match api_url.parse::<Environment>() {
                Ok(environment) => environment,
                Err(e) => {
                    print_cmd_error!("Could not save API URL", e.as_str());
                    return Err(e.into());
                }
            };
            Config::new(environment.api_url())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Saved API URL",
                "{} -> {}",
                environment.api_url(),
                config_path.display()
            );
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Clearing configuration", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Starts the dashboard.
///
/// # Arguments
/// * `environment` - The sensor service to poll.
/// * `headless` - Print updates instead of running the TUI.
/// * `with_background` - Whether to fill the TUI background.
async fn start(
    environment: Environment,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let session = setup_session(environment)?;
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}
