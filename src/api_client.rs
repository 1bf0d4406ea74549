use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{DecodeError, Error, Result};

pub const AUTH_KEY_HEADER: &str = "x-tba-auth-key";

pub struct TbaApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl TbaApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));
        if let Some(auth_key) = &config.auth_key {
            let mut value = HeaderValue::from_str(auth_key)?;
            value.set_sensitive(true);
            headers.insert(AUTH_KEY_HEADER, value);
        }

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .map_err(Error::Build)?,
            config,
        })
    }

    // requires TBA_AUTH_KEY env var
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Client for TbaApiClient {
    #[instrument(skip(self))]
    async fn execute(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("GET {url}");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(source) => {
                warn!("request to {url} failed: {source}");
                return Err(Error::Transport { url, source });
            }
        };
        let status = response.status();
        debug!("{status} from {url}");

        let body = response
            .text()
            .await
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;

        if !status.is_success() {
            warn!("unexpected status {status} for {url}");
            let body = serde_json::from_str(&body).unwrap_or(Value::String(body));
            return Err(Error::Api { url, status, body });
        }
        if body.trim().is_empty() {
            return Err(Error::EmptyBody { url });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => Err(DecodeError::new(path, Value::String(body), e).into()),
        }
    }

    async fn get_status(&self) -> Result<Value> {
        if !self.config.is_remote() {
            return Err(Error::StatusUnavailable);
        }
        self.execute("/status").await
    }
}
