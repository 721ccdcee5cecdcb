use serde::Deserialize;
use std::env;
use tripr_common::error::{TriprError, TriprResult};

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Where the CLI and chat facade send planner requests.
    pub api_base_url: String,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every variable has a default.
    pub fn from_env() -> TriprResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let api_base_url = get_var_or("API_BASE_URL", "http://localhost:3000");
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(TriprError::Config(format!(
                "API_BASE_URL must be an http(s) URL, got: {api_base_url}"
            )));
        }

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "3000")
                .parse()
                .map_err(|e| TriprError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            cors_origins: split_list(&get_var_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
