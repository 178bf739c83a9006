use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the dashboard looks for the sensor data server.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Data server running on this machine.
    #[default]
    Local,
    /// Any other data server, addressed by its base URL.
    Custom { base_url: String },
}

impl Environment {
    /// Returns the base URL of the data server associated with the environment.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000".to_string(),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }

    /// Reads `AGRI_DASHBOARD_ENVIRONMENT`, falling back to `Local`.
    pub fn from_env() -> Self {
        std::env::var("AGRI_DASHBOARD_ENVIRONMENT")
            .unwrap_or_default()
            .parse()
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(url) = trimmed.strip_prefix("custom:") {
            if url.is_empty() {
                return Err(());
            }
            return Ok(Environment::Custom {
                base_url: url.to_string(),
            });
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                base_url: trimmed.to_string(),
            });
        }
        match trimmed.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
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
        write!(f, "Environment::{}, URL: {}", self, self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_environments() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "custom:http://10.0.0.164:5000".parse::<Environment>(),
            Ok(Environment::Custom {
                base_url: "http://10.0.0.164:5000".to_string()
            })
        );
        assert_eq!(
            "https://farm.example".parse::<Environment>(),
            Ok(Environment::Custom {
                base_url: "https://farm.example".to_string()
            })
        );
    }

    #[test]
    fn rejects_unknown_environments() {
        assert!("staging".parse::<Environment>().is_err());
        assert!("custom:".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }

    #[test]
    fn local_points_at_default_server_port() {
        assert_eq!(Environment::Local.base_url(), "http://localhost:5000");
    }
}
