use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use http::HeaderName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_path: PathBuf,
    /// Header an upstream auth proxy sets to the viewer's user id
    pub identity_header: Option<HeaderName>,
    pub search_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "SCRIBBLE_BIND_ADDR", "127.0.0.1:3000");
        let database_path = PathBuf::from(value_or_default(
            &lookup,
            "SCRIBBLE_DATABASE_PATH",
            "data/scribble.db",
        ));

        let identity_header = optional_trimmed(&lookup, "SCRIBBLE_IDENTITY_HEADER")
            .map(|name| {
                HeaderName::from_bytes(name.to_ascii_lowercase().as_bytes()).map_err(|_| {
                    ConfigError::Invalid(format!(
                        "SCRIBBLE_IDENTITY_HEADER is not a valid header name: {name}"
                    ))
                })
            })
            .transpose()?;

        let search_limit = value_or_default(&lookup, "SCRIBBLE_SEARCH_LIMIT", "50")
            .parse::<usize>()
            .map_err(|_| {
                ConfigError::Invalid(
                    "SCRIBBLE_SEARCH_LIMIT must be an integer in [1, 500]".to_string(),
                )
            })?;
        if !(1..=500).contains(&search_limit) {
            return Err(ConfigError::Invalid(
                "SCRIBBLE_SEARCH_LIMIT must be in [1, 500]".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            database_path,
            identity_header,
            search_limit,
        })
    }
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    optional_trimmed(lookup, name).unwrap_or_else(|| default.to_string())
}

fn optional_trimmed(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
