use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::keys::team_number_from_key;

pub const NO_STREAM: &str = "None";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub key: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Team {
    pub fn team_number(&self) -> &str {
        team_number_from_key(&self.key)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub key: String,
    pub year: i32,
    pub event_code: String,
    #[serde(default)]
    pub webcasts: Vec<Webcast>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    // only the last webcast counts
    pub fn stream_link(&self) -> Option<String> {
        let webcast = self.webcasts.last()?;
        match webcast.kind {
            WebcastKind::Ustream => Some(format!("http://www.ustream.tv/channel/{}", webcast.channel)),
            WebcastKind::Twitch => Some(format!("https://twitch.tv/{}", webcast.channel)),
            WebcastKind::Other(_) => None,
        }
    }
}

pub fn event_stream_link(event: &Event) -> String {
    event.stream_link().unwrap_or_else(|| NO_STREAM.to_string())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Webcast {
    #[serde(rename = "type")]
    pub kind: WebcastKind,
    pub channel: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WebcastKind {
    Ustream,
    Twitch,
    Other(String),
}

impl From<String> for WebcastKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "ustream" => WebcastKind::Ustream,
            "twitch" => WebcastKind::Twitch,
            _ => WebcastKind::Other(kind),
        }
    }
}

impl From<WebcastKind> for String {
    fn from(kind: WebcastKind) -> Self {
        match kind {
            WebcastKind::Ustream => "ustream".into(),
            WebcastKind::Twitch => "twitch".into(),
            WebcastKind::Other(kind) => kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub alliances: Alliances,
    /// Unix timestamp (seconds) the match was played at.
    #[serde(default)]
    pub actual_time: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Match {
    // no actual_time means not played yet
    pub fn is_done_at(&self, now: DateTime<Utc>) -> bool {
        match self.actual_time {
            Some(actual_time) => actual_time < now.timestamp(),
            None => false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.is_done_at(Utc::now())
    }
}

pub fn is_match_done(m: &Match) -> bool {
    m.is_done()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alliances {
    pub blue: Alliance,
    pub red: Alliance,
}

impl Alliances {
    pub fn team_keys(&self) -> impl Iterator<Item = &str> {
        self.blue
            .team_keys
            .iter()
            .chain(self.red.team_keys.iter())
            .map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alliance {
    #[serde(default)]
    pub team_keys: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
