use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backend deployments the dashboard can point at.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    #[default]
    Local,
    /// A custom backend, selected via the `FUNDWATCH_API_URL` environment variable.
    Custom { api_base_url: String },
}

impl Environment {
    /// Resolve the environment from the `FUNDWATCH_API_URL` process variable.
    /// Unset or unparseable values fall back to the local backend.
    pub fn from_env() -> Self {
        std::env::var("FUNDWATCH_API_URL")
            .ok()
            .and_then(|value| value.trim().parse::<Environment>().ok())
            .unwrap_or_default()
    }

    /// Returns the API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3001".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_base_url: s.to_string(),
                })
            }
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
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}
