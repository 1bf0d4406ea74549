use futures::stream::{self, StreamExt};
use tracing::{debug, instrument, warn};

use crate::client::Client;
use crate::error::Result;
use crate::keys::team_number_from_key;
use crate::types::{Match, Team};

#[derive(Debug)]
pub struct MatchRoster {
    pub blue: Vec<Result<Team>>,
    pub red: Vec<Result<Team>>,
}

impl MatchRoster {
    fn split(mut teams: Vec<Result<Team>>, blue_len: usize) -> Self {
        let red = teams.split_off(blue_len.min(teams.len()));
        Self { blue: teams, red }
    }

    pub fn teams(&self) -> impl Iterator<Item = &Result<Team>> {
        self.blue.iter().chain(self.red.iter())
    }

    pub fn failures(&self) -> usize {
        self.teams().filter(|t| t.is_err()).count()
    }
}

#[instrument(skip_all)]
pub async fn get_teams_in_match<C: Client + ?Sized>(client: &C, m: &Match) -> MatchRoster {
    let mut teams = Vec::new();
    for key in m.alliances.team_keys() {
        let team = client.get_team(team_number_from_key(key)).await;
        if let Err(e) = &team {
            warn!("failed to fetch {key}: {e}");
        }
        teams.push(team);
    }

    debug!("fetched {} teams", teams.len());
    MatchRoster::split(teams, m.alliances.blue.team_keys.len())
}

/// Like [`get_teams_in_match`], with at most `limit` fetches in flight.
/// Results keep `team_keys` order.
#[instrument(skip(client, m))]
pub async fn get_teams_in_match_concurrent<C: Client + ?Sized>(
    client: &C,
    m: &Match,
    limit: usize,
) -> MatchRoster {
    let teams: Vec<Result<Team>> = stream::iter(m.alliances.team_keys())
        .map(|key| async move {
            let team = client.get_team(team_number_from_key(key)).await;
            if let Err(e) = &team {
                warn!("failed to fetch {key}: {e}");
            }
            team
        })
        .buffered(limit.max(1))
        .collect()
        .await;

    debug!("fetched {} teams", teams.len());
    MatchRoster::split(teams, m.alliances.blue.team_keys.len())
}
