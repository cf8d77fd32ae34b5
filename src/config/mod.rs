//! Configuration module for the Content Studio backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::auth::JwtConfig;

/// Signing secret used when `JWT_SECRET` is unset. Only fit for local development.
pub const DEV_JWT_SECRET: &str = "content-studio-dev-secret";

/// Text-generation provider settings.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL of the inference API
    pub endpoint: String,
    /// Model id appended to `/models/`
    pub model: String,
    /// Bearer token for the provider
    pub api_token: Option<String>,
    /// Request timeout; `None` waits until the provider answers
    pub timeout_secs: Option<u64>,
}

/// Which route groups require a bearer token.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAuth {
    pub projects: bool,
    pub content: bool,
    pub generation: bool,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub jwt: JwtConfig,
    pub llm: LlmConfig,
    pub require_auth: RequireAuth,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("CONTENT_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .expect("Invalid CONTENT_BIND_ADDR format");

        let log_level = env::var("CONTENT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let jwt = JwtConfig {
            secret: env::var("JWT_SECRET")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEV_JWT_SECRET.to_string()),
            expiry_mins: env::var("JWT_EXPIRY_MINS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("JWT_EXPIRY_MINS must be a whole number of minutes"),
        };

        let llm = LlmConfig {
            endpoint: env::var("LLM_API_ENDPOINT")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string()),
            model: env::var("HUGGINGFACE_MODEL_ID")
                .unwrap_or_else(|_| "meta-llama/Meta-Llama-3-70B-Instruct".to_string()),
            api_token: env::var("HUGGINGFACE_API_TOKEN").ok(),
            timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .map(|s| s.parse().expect("LLM_TIMEOUT_SECS must be a number of seconds")),
        };

        let require_auth = RequireAuth {
            projects: env_flag("CONTENT_REQUIRE_AUTH_PROJECTS"),
            content: env_flag("CONTENT_REQUIRE_AUTH_CONTENT"),
            generation: env_flag("CONTENT_REQUIRE_AUTH_GENERATION"),
        };

        Self {
            bind_addr,
            log_level,
            jwt,
            llm,
            require_auth,
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt.secret == DEV_JWT_SECRET
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
