use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// How the AI IQ score of a submission is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreMode {
    /// Server computes the weighted sum; any client value is ignored.
    #[default]
    Computed,
    /// Client sends `ai_iq_score`; it is stored verbatim.
    ClientSupplied,
}

impl FromStr for ScoreMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "computed" | "server" => Ok(ScoreMode::Computed),
            "client" | "client_supplied" => Ok(ScoreMode::ClientSupplied),
            other => Err(anyhow!(
                "unknown score mode '{other}' (expected 'computed' or 'client')"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub score_mode: ScoreMode,
    pub capture_client_ip: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: env_or("DATABASE_URL", "sqlite://ai_istrazivanje.db"),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", "5")
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            score_mode: env_or("SCORE_MODE", "computed")
                .parse()
                .context("SCORE_MODE is invalid")?,
            capture_client_ip: parse_bool(&env_or("CAPTURE_CLIENT_IP", "true"))
                .context("CAPTURE_CLIENT_IP must be true or false")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("'{other}' is not a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_mode_parsing() {
        assert_eq!("computed".parse::<ScoreMode>().unwrap(), ScoreMode::Computed);
        assert_eq!(" Client ".parse::<ScoreMode>().unwrap(), ScoreMode::ClientSupplied);
        assert!("random".parse::<ScoreMode>().is_err());
    }

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
