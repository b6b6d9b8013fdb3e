use crate::consts::cli_consts::http::DEFAULT_API_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The sensor service the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Service running on this machine at the default port.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    /// Accepts `local` or an `http(s)://` base URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let api_url = trimmed.trim_end_matches('/').to_string();
            if api_url == DEFAULT_API_URL {
                return Ok(Environment::Local);
            }
            return Ok(Environment::Custom { api_url });
        }
        Err(format!(
            "Invalid API URL: {}. Expected `local` or an http(s):// URL.",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "http://localhost:5000/".parse::<Environment>(),
            Ok(Environment::Local)
        );
    }

    #[test]
    fn test_parse_custom_strips_trailing_slash() {
        let env: Environment = "http://192.168.1.20:5000/".parse().unwrap();
        assert_eq!(
            env,
            Environment::Custom {
                api_url: "http://192.168.1.20:5000".to_string()
            }
        );
        assert_eq!(env.api_url(), "http://192.168.1.20:5000");
    }

    #[test]
    fn test_parse_rejects_non_url() {
        assert!("greenhouse".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }
}
