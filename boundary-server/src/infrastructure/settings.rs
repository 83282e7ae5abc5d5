use anyhow::{Context, Result, anyhow};

use crate::presentation::http::translation::KindMatching;

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) http_addr: String,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) log_level: String,
    pub(crate) http_request_body_limit_bytes: usize,
    pub(crate) http_concurrency_limit: usize,
    pub(crate) failure_matching: KindMatching,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let cors_origins = parse_cors_origins(
            std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:8000,http://127.0.0.1:8000".to_string()),
        );
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let http_request_body_limit_bytes = parse_positive(
            "HTTP_REQUEST_BODY_LIMIT_BYTES",
            std::env::var("HTTP_REQUEST_BODY_LIMIT_BYTES").ok(),
            1024 * 1024,
        )?;
        let http_concurrency_limit = parse_positive(
            "HTTP_CONCURRENCY_LIMIT",
            std::env::var("HTTP_CONCURRENCY_LIMIT").ok(),
            256,
        )?;
        let failure_matching = parse_failure_matching(std::env::var("FAILURE_MATCHING").ok())?;

        Ok(Self {
            http_addr,
            cors_origins,
            log_level,
            http_request_body_limit_bytes,
            http_concurrency_limit,
            failure_matching,
        })
    }
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive(key: &str, raw: Option<String>, default: usize) -> Result<usize> {
    let value = raw
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_failure_matching(raw: Option<String>) -> Result<KindMatching> {
    match raw {
        Some(raw) => raw.parse::<KindMatching>().context("Failed to parse FAILURE_MATCHING"),
        None => Ok(KindMatching::default()),
    }
}
