#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} for {url}: {body}")]
    Api {
        url: String,
        status: reqwest::StatusCode,
        body: serde_json::Value,
    },

    #[error("empty response body from {url}")]
    EmptyBody { url: String },

    #[error("JSON decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("/status requires an auth key")]
    StatusUnavailable,

    #[error("auth key is not a valid header value")]
    InvalidAuthKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({path})")]
pub struct DecodeError {
    path: String,
    body: serde_json::Value,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub fn new(path: &str, body: serde_json::Value, source: serde_json::Error) -> Self {
        Self {
            path: path.into(),
            body,
            source,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    // raw text as a JSON string when the body was not JSON
    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }
}
