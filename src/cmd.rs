use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};

use bluealliance::config::{current_season, DEFAULT_STUB_HOST, DEFAULT_STUB_PORT};
use bluealliance::{
    event_stream_link, get_teams_in_match, get_teams_in_match_concurrent, Client, ClientConfig,
    CompLevel, Event, MatchDescriptor, MatchRoster, TbaApiClient, Team,
};

#[derive(Parser, Debug)]
#[command(about = "Query The Blue Alliance API")]
pub struct Cli {
    /// Talk to a local stub server instead of thebluealliance.com
    #[arg(long)]
    stub: bool,
    #[arg(long, default_value = DEFAULT_STUB_HOST)]
    host: String,
    #[arg(long, default_value_t = DEFAULT_STUB_PORT)]
    port: u16,
    #[arg(long, requires = "stub")]
    season: Option<i32>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    Status,
    Team { number: String },
    Awards { number: String },
    TeamEvents { number: String },
    Event(EventArgs),
    EventTeams(EventArgs),
    EventMatches(EventArgs),
    Stream(EventArgs),
    Match(MatchArgs),
    /// Fetch every team playing in a match
    Roster {
        #[command(flatten)]
        game: MatchArgs,
        /// Fetch up to N teams at once instead of one by one
        #[arg(long)]
        concurrency: Option<usize>,
    },
    Done(MatchArgs),
}

#[derive(Args, Debug)]
pub struct EventArgs {
    code: String,
    year: i32,
}

#[derive(Args, Debug)]
pub struct MatchArgs {
    #[command(flatten)]
    event: EventArgs,
    level: CompLevel,
    number: u32,
    #[arg(long)]
    set: Option<u32>,
}

impl MatchArgs {
    fn descriptor(&self) -> MatchDescriptor {
        MatchDescriptor {
            comp_level: self.level,
            match_number: self.number,
            set_number: self.set,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn alliance_json(teams: &[bluealliance::Result<Team>]) -> Vec<Value> {
    teams
        .iter()
        .map(|t| match t {
            Ok(team) => json!(team),
            Err(e) => json!({ "error": e.to_string() }),
        })
        .collect()
}

fn roster_json(roster: &MatchRoster) -> Value {
    json!({ "blue": alliance_json(&roster.blue), "red": alliance_json(&roster.red) })
}

async fn load_event(client: &TbaApiClient, args: &EventArgs) -> anyhow::Result<Event> {
    Ok(client.get_event(&args.code, args.year).await?)
}

impl Cli {
    fn client(&self) -> anyhow::Result<TbaApiClient> {
        if self.stub {
            let season = self.season.unwrap_or_else(current_season);
            Ok(TbaApiClient::new(ClientConfig::stub(&self.host, self.port, season))?)
        } else {
            Ok(TbaApiClient::from_env()?)
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let client = self.client()?;

        match self.cmd {
            Cmd::Status => print_json(&client.get_status().await?)?,
            Cmd::Team { number } => print_json(&client.get_team(&number).await?)?,
            Cmd::Awards { number } => {
                let team = client.get_team(&number).await?;
                print_json(&client.get_team_awards(&team).await?)?;
            }
            Cmd::TeamEvents { number } => {
                let team = client.get_team(&number).await?;
                print_json(&client.get_events_for_team(&team).await?)?;
            }
            Cmd::Event(args) => print_json(&load_event(&client, &args).await?)?,
            Cmd::EventTeams(args) => {
                let event = load_event(&client, &args).await?;
                print_json(&client.get_teams_at_event(&event).await?)?;
            }
            Cmd::EventMatches(args) => {
                let event = load_event(&client, &args).await?;
                print_json(&client.get_matches_at_event(&event).await?)?;
            }
            Cmd::Stream(args) => {
                let event = load_event(&client, &args).await?;
                println!("{}", event_stream_link(&event));
            }
            Cmd::Match(args) => {
                let event = load_event(&client, &args.event).await?;
                print_json(&client.get_match(&event, &args.descriptor()).await?)?;
            }
            Cmd::Roster { game, concurrency } => {
                let event = load_event(&client, &game.event).await?;
                let m = client.get_match(&event, &game.descriptor()).await?;
                let roster = match concurrency {
                    Some(limit) => get_teams_in_match_concurrent(&client, &m, limit).await,
                    None => get_teams_in_match(&client, &m).await,
                };
                print_json(&roster_json(&roster))?;
            }
            Cmd::Done(args) => {
                let event = load_event(&client, &args.event).await?;
                let m = client.get_match(&event, &args.descriptor()).await?;
                println!("{}", m.is_done());
            }
        }

        Ok(())
    }
}
