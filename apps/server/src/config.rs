//! Server configuration.
//!
//! All knobs come in through `DH_*` environment variables once, at startup;
//! everything downstream receives an explicit `Config`. Tests build the
//! struct directly instead of mutating the environment.

use std::env;

/// Authentication settings. Token issuance lives outside this service;
/// the server only verifies signed bearer tokens.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub token_secret: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub auth: AuthConfig,
    /// Endpoint of the external text-generation service, if any
    pub insights_url: Option<String>,
    pub insights_api_key: Option<String>,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            env::var("DH_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let db_path = env::var("DH_DB_PATH").unwrap_or_else(|_| "data/donorhub.db".to_string());
        let token_secret = env::var("DH_TOKEN_SECRET").expect("DH_TOKEN_SECRET must be set");

        let insights_url = env::var("DH_INSIGHTS_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());
        let insights_api_key = env::var("DH_INSIGHTS_API_KEY")
            .ok()
            .filter(|v| !v.is_empty());

        let rate_limit_per_second = env::var("DH_RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);
        let rate_limit_burst = env::var("DH_RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1200);

        let allowed_origins = env::var("DH_ALLOWED_ORIGINS")
            .ok()
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Config {
            listen_addr,
            db_path,
            auth: AuthConfig { token_secret },
            insights_url,
            insights_api_key,
            rate_limit_per_second,
            rate_limit_burst,
            allowed_origins,
        }
    }
}
