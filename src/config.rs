//! Server configuration, loaded from environment variables at startup.

use anyhow::Context;
use axum_extra::extract::cookie::Key;
use base64::Engine;

/// Runtime configuration for midwife-web.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Optional base64-encoded key material (≥ 64 bytes decoded) for the
    /// signed flash cookie. When unset a fresh key is generated per process,
    /// matching the flash message's single-process lifetime.
    pub secret_key: Option<String>,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("MIDWIFE_BIND", "0.0.0.0:3000"),
            log_level: env_or("MIDWIFE_LOG", "info"),
            log_json: std::env::var("MIDWIFE_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            secret_key: std::env::var("MIDWIFE_SECRET").ok(),
        }
    }

    /// Key used to sign the one-time flash cookie.
    pub fn signing_key(&self) -> anyhow::Result<Key> {
        match &self.secret_key {
            Some(encoded) => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(encoded)
                    .context("MIDWIFE_SECRET is not valid base64")?;
                Key::try_from(bytes.as_slice())
                    .context("MIDWIFE_SECRET must decode to at least 64 bytes")
            }
            None => Ok(Key::generate()),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generated_key_when_no_secret_set() {
        let cfg = Config {
            bind_address: "127.0.0.1:0".into(),
            log_level: "info".into(),
            log_json: false,
            secret_key: None,
        };
        assert!(cfg.signing_key().is_ok());
    }

    #[test]
    fn short_secret_is_rejected() {
        let cfg = Config {
            bind_address: "127.0.0.1:0".into(),
            log_level: "info".into(),
            log_json: false,
            secret_key: Some(base64::engine::general_purpose::STANDARD.encode(b"too-short")),
        };
        assert!(cfg.signing_key().is_err());
    }

    #[test]
    fn long_secret_round_trips() {
        let cfg = Config {
            bind_address: "127.0.0.1:0".into(),
            log_level: "info".into(),
            log_json: false,
            secret_key: Some(base64::engine::general_purpose::STANDARD.encode([7u8; 64])),
        };
        assert!(cfg.signing_key().is_ok());
    }
}
