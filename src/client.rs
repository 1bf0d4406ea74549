use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DecodeError, Result};
use crate::keys::{event_key, match_key, team_key, MatchDescriptor};
use crate::types::{Event, Match, Team};

#[async_trait]
pub trait Client: Send + Sync {
    // one GET per call, no caching
    async fn execute(&self, path: &str) -> Result<Value>;

    async fn get_status(&self) -> Result<Value> {
        self.execute("/status").await
    }

    async fn get_team(&self, team_number: &str) -> Result<Team> {
        let path = format!("/team/{}", team_key(team_number));
        decode(&path, self.execute(&path).await?)
    }

    async fn get_event(&self, event_code: &str, year: i32) -> Result<Event> {
        let path = format!("/event/{}", event_key(year, event_code));
        decode(&path, self.execute(&path).await?)
    }

    async fn get_match(&self, event: &Event, descriptor: &MatchDescriptor) -> Result<Match> {
        let path = format!(
            "/match/{}",
            match_key(event.year, &event.event_code, descriptor)
        );
        decode(&path, self.execute(&path).await?)
    }

    async fn get_team_awards(&self, team: &Team) -> Result<Vec<Value>> {
        let path = format!("/team/{}/awards", team.key);
        decode(&path, self.execute(&path).await?)
    }

    async fn get_events_for_team(&self, team: &Team) -> Result<Vec<Event>> {
        let path = format!("/team/{}/events", team.key);
        decode(&path, self.execute(&path).await?)
    }

    async fn get_teams_at_event(&self, event: &Event) -> Result<Vec<Team>> {
        let path = format!("/event/{}/teams", event.key);
        decode(&path, self.execute(&path).await?)
    }

    async fn get_matches_at_event(&self, event: &Event) -> Result<Vec<Match>> {
        let path = format!("/event/{}/matches", event.key);
        decode(&path, self.execute(&path).await?)
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T> {
    <T as serde::Deserialize>::deserialize(&value)
        .map_err(|e| DecodeError::new(path, value, e).into())
}
