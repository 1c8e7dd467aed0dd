use std::{env, path::PathBuf};

use dotenv::dotenv;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration, read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub model_path: Option<PathBuf>,
    pub log_config: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("BMI_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidValue {
                    key: "BMI_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("BMI_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            database_url: get("DATABASE_URL"),
            model_path: get("BMI_MODEL_PATH").map(PathBuf::from),
            log_config: get("BMI_LOG_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG)),
        })
    }
}
