pub mod api_client;
pub mod client;
pub mod config;
pub mod error;
pub mod keys;
pub mod roster;
pub mod types;

pub use api_client::TbaApiClient;
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use keys::{CompLevel, MatchDescriptor};
pub use roster::{get_teams_in_match, get_teams_in_match_concurrent, MatchRoster};
pub use types::{event_stream_link, is_match_done, Event, Match, Team, Webcast, WebcastKind};
