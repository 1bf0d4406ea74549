use std::env;

use chrono::Datelike;

use crate::error::{EnvVarError, Error};

pub const REMOTE_BASE_URL: &str = "https://www.thebluealliance.com/api/v3";
pub const AUTH_KEY_ENV_VAR: &str = "TBA_AUTH_KEY";

pub const DEFAULT_STUB_HOST: &str = "localhost";
pub const DEFAULT_STUB_PORT: u16 = 3000;

// no auth key means the local stub server
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_key: Option<String>,
}

impl ClientConfig {
    pub fn remote(auth_key: impl Into<String>) -> Self {
        Self {
            base_url: REMOTE_BASE_URL.into(),
            auth_key: Some(auth_key.into()),
        }
    }

    pub fn stub(host: &str, port: u16, season: impl std::fmt::Display) -> Self {
        Self {
            base_url: format!("http://{host}:{port}/api/{season}"),
            auth_key: None,
        }
    }

    pub fn default_stub() -> Self {
        Self::stub(DEFAULT_STUB_HOST, DEFAULT_STUB_PORT, current_season())
    }

    // requires TBA_AUTH_KEY env var
    // can use dotenv
    pub fn from_env() -> Result<Self, Error> {
        let auth_key =
            env::var(AUTH_KEY_ENV_VAR).map_err(|e| EnvVarError::new(AUTH_KEY_ENV_VAR, e))?;
        Ok(Self::remote(auth_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_remote(&self) -> bool {
        self.auth_key.is_some()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("auth_key", &self.auth_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

pub fn current_season() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_remote() {
        let config = ClientConfig::remote("secret");
        assert_eq!(config.base_url, "https://www.thebluealliance.com/api/v3");
        assert_eq!(config.auth_key.as_deref(), Some("secret"));
        assert!(config.is_remote());
    }

    #[test]
    fn test_stub() {
        let config = ClientConfig::stub("127.0.0.1", 8080, 2022);
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api/2022");
        assert!(!config.is_remote());

        let config = ClientConfig::default_stub();
        assert_eq!(
            config.base_url,
            format!("http://localhost:3000/api/{}", current_season())
        );
    }

    #[test]
    fn test_debug_hides_auth_key() {
        let rendered = format!("{:?}", ClientConfig::remote("secret"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_from_env() {
        dotenv::from_filename(".env.example").ok();
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.auth_key.as_deref(), Some("asdf1234"));
        assert_eq!(config.base_url, REMOTE_BASE_URL);
    }
}
