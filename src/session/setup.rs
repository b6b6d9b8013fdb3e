//! Session setup and initialization

use crate::api::ApiClient;
use crate::config::Config;
use crate::environment::Environment;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Client for the sensor service
    pub client: Arc<ApiClient>,
}

/// Pick the sensor service to poll.
///
/// The first source that yields a value wins: the `--api-url` flag, the
/// environment variable, the saved config file, then the local default.
/// An invalid flag is an error; invalid values from the other sources are
/// reported and skipped.
pub fn resolve_environment(
    cli_url: Option<&str>,
    env_var: Option<&str>,
    config_path: &Path,
) -> Result<Environment, String> {
    if let Some(url) = cli_url {
        return url.parse::<Environment>();
    }

    if let Some(url) = env_var.filter(|v| !v.trim().is_empty()) {
        match url.parse::<Environment>() {
            Ok(environment) => return Ok(environment),
            Err(e) => crate::print_cmd_warn!("Ignoring environment variable", "{}", e),
        }
    }

    if config_path.exists() {
        match Config::load_from_file(config_path) {
            Ok(Config {
                api_url: Some(url),
            }) => match url.parse::<Environment>() {
                Ok(environment) => return Ok(environment),
                Err(e) => crate::print_cmd_warn!("Ignoring saved API URL", "{}", e),
            },
            Ok(_) => {}
            Err(e) => crate::print_cmd_warn!("Ignoring config file", "{}", e),
        }
    }

    Ok(Environment::default())
}

/// Sets up a dashboard session
///
/// # Arguments
/// * `environment` - Sensor service to poll
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub fn setup_session(environment: Environment) -> Result<SessionData, Box<dyn Error>> {
    let client = Arc::new(ApiClient::new(environment));
    Ok(SessionData { client })
}
