///
/// endpoint.rs  Oct 16th, 2026
///
/// Details the Resource catalogue and the EndpointRegistry that turns a
/// Resource plus its path parameters into an address under the configured
/// base. Also the Endpoint struct the pipeline formulates a request from.
///
/// Resolution is pure: same inputs, same Url. Thread safe.
///

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::core::config::ApiConfig;
use crate::core::error::FetchError;
use crate::core::http::ResponseMode;
use crate::core::pagination::QueryMapping;

/************ Resource ************************************/
/* Every logical resource the statistics service exposes. The
 * template is relative to the base address; `{...}` segments are
 * filled positionally from the caller's path parameters.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Competitions,
    CompetitionsByType,
    ClubsByCompetition,
    Players,
    PlayerById,
    TeamsSearch,
    Seasons,
    Games,
    TeamsBySeason,
    TeamById,
    TeamPerformanceChart,
    TeamGoalsChart,
    TeamConcededGoalsChart,
    PlayerGoalsChart,
    PlayerCardsChart,
    PlayerAssistsChart,
    PlayerPredictions,
    TopScorers,
}

impl Resource {
    pub const ALL: [Resource; 18] = [
        Resource::Competitions,
        Resource::CompetitionsByType,
        Resource::ClubsByCompetition,
        Resource::Players,
        Resource::PlayerById,
        Resource::TeamsSearch,
        Resource::Seasons,
        Resource::Games,
        Resource::TeamsBySeason,
        Resource::TeamById,
        Resource::TeamPerformanceChart,
        Resource::TeamGoalsChart,
        Resource::TeamConcededGoalsChart,
        Resource::PlayerGoalsChart,
        Resource::PlayerCardsChart,
        Resource::PlayerAssistsChart,
        Resource::PlayerPredictions,
        Resource::TopScorers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Resource::Competitions           => "competitions",
            Resource::CompetitionsByType     => "competitionsByType",
            Resource::ClubsByCompetition     => "clubsByCompetition",
            Resource::Players                => "players",
            Resource::PlayerById             => "playerById",
            Resource::TeamsSearch            => "teamsSearch",
            Resource::Seasons                => "seasons",
            Resource::Games                  => "games",
            Resource::TeamsBySeason          => "teamsBySeason",
            Resource::TeamById               => "teamById",
            Resource::TeamPerformanceChart   => "teamPerformanceChart",
            Resource::TeamGoalsChart         => "teamGoalsChart",
            Resource::TeamConcededGoalsChart => "teamConcededGoalsChart",
            Resource::PlayerGoalsChart       => "playerGoalsChart",
            Resource::PlayerCardsChart       => "playerCardsChart",
            Resource::PlayerAssistsChart     => "playerAssistsChart",
            Resource::PlayerPredictions      => "playerPredictions",
            Resource::TopScorers             => "topScorers",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Resource::Competitions           => "competitions/",
            Resource::CompetitionsByType     => "competitions/{comp_type}",
            Resource::ClubsByCompetition     => "clubs/{competition_id}",
            Resource::Players                => "players",
            Resource::PlayerById             => "players/{player_id}",
            Resource::TeamsSearch            => "teamsSearch",
            Resource::Seasons                => "seasons",
            Resource::Games                  => "games",
            Resource::TeamsBySeason          => "teams",
            Resource::TeamById               => "teams/{team_id}",
            Resource::TeamPerformanceChart   => "team_performance_chart",
            Resource::TeamGoalsChart         => "team_goals_scored_chart",
            Resource::TeamConcededGoalsChart => "team_goals_conceded_chart",
            Resource::PlayerGoalsChart       => "player_goals_chart/{player_id}",
            Resource::PlayerCardsChart       => "player_cards_chart/{player_id}",
            Resource::PlayerAssistsChart     => "player_assists_chart/{player_id}",
            Resource::PlayerPredictions      => "players/{player_id}/predictions",
            Resource::TopScorers             => "top_scorers",
        }
    }

    pub fn mode(self) -> ResponseMode {
        match self {
            Resource::TeamPerformanceChart
            | Resource::TeamGoalsChart
            | Resource::TeamConcededGoalsChart
            | Resource::PlayerGoalsChart
            | Resource::PlayerCardsChart
            | Resource::PlayerAssistsChart => ResponseMode::Binary,
            _ => ResponseMode::Structured,
        }
    }

    // Label attached to every failure of an operation on this resource
    pub fn action(self) -> &'static str {
        match self {
            Resource::Competitions           => "fetching competitions",
            Resource::CompetitionsByType     => "fetching competitions by type",
            Resource::ClubsByCompetition     => "fetching clubs",
            Resource::Players                => "fetching players",
            Resource::PlayerById             => "fetching player details",
            Resource::TeamsSearch            => "searching teams",
            Resource::Seasons                => "fetching seasons",
            Resource::Games                  => "fetching games",
            Resource::TeamsBySeason          => "fetching teams",
            Resource::TeamById               => "fetching team details",
            Resource::TeamPerformanceChart   => "fetching team performance chart",
            Resource::TeamGoalsChart         => "fetching team goals scored chart",
            Resource::TeamConcededGoalsChart => "fetching team goals conceded chart",
            Resource::PlayerGoalsChart       => "fetching player goals chart",
            Resource::PlayerCardsChart       => "fetching player cards chart",
            Resource::PlayerAssistsChart     => "fetching player assists chart",
            Resource::PlayerPredictions      => "fetching player predictions",
            Resource::TopScorers             => "fetching top scorers",
        }
    }

    pub fn path_param_count(self) -> usize {
        self.template().split('/').filter(|s| is_placeholder(s)).count()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = FetchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .iter()
            .copied()
            .find(|r| r.name() == name)
            .ok_or_else(|| FetchError::Configuration(format!("unknown resource '{name}'")))
    }
}

fn is_placeholder(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with('{') && segment.ends_with('}')
}

/************ EndpointRegistry ****************************/
/* Maps Resource (+ path parameters) to a Url under one base address.
 * Holds nothing but the immutable base.
 */
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    base_url: Url,
}

impl EndpointRegistry {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut base_url = config.base_url.clone();
        if base_url.cannot_be_a_base() {
            return Err(FetchError::Configuration(format!(
                "base address {} cannot carry a path", config.base_url
            )));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Origin of the base address, e.g. "http://127.0.0.1:5000"
    pub fn origin(&self) -> String {
        self.base_url.origin().ascii_serialization()
    }

    pub fn resolve(&self, resource: Resource, path_params: &[&str]) -> Result<Url, FetchError> {
        let expected = resource.path_param_count();
        if expected != path_params.len() {
            return Err(FetchError::Configuration(format!(
                "{resource} expects {expected} path parameter(s), got {}", path_params.len()
            )));
        }
        if path_params.iter().any(|p| p.is_empty()) {
            return Err(FetchError::Configuration(format!("{resource}: empty path parameter")));
        }

        let mut url = self.base_url.clone();
        {
            // cannot_be_a_base was rejected in new()
            let mut segments = url.path_segments_mut().map_err(|_| {
                FetchError::Configuration(format!("base address {} cannot carry a path", self.base_url))
            })?;
            segments.pop_if_empty();

            let mut params = path_params.iter();
            for segment in resource.template().split('/') {
                if !is_placeholder(segment) {
                    segments.push(segment);
                } else if let Some(value) = params.next() {
                    segments.push(value);
                }
            }
        }

        Ok(url)
    }

    pub fn resolve_named(&self, name: &str, path_params: &[&str]) -> Result<Url, FetchError> {
        self.resolve(name.parse()?, path_params)
    }
}

/************ Endpoint ************************************/
/* A fully resolved request: where to go, what to send and how to
 * read the answer.
 */
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub resource: Resource,
    pub url: Url,
    pub query: QueryMapping,
    pub mode: ResponseMode,
}

impl Endpoint {
    // Call to Constructor Helper
    pub fn builder(resource: Resource) -> EndpointBuilder {
        EndpointBuilder::new(resource)
    }

    pub fn action(&self) -> &'static str {
        self.resource.action()
    }
}

/************ EndpointBuilder *****************************/
/* Collects path parameters and the composed query before resolving
 * against a registry.
 */
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    resource: Resource,
    path_params: Vec<String>,
    query: QueryMapping,
}

impl EndpointBuilder {
    pub fn new(resource: Resource) -> Self {
        Self { resource, path_params: Vec::new(), query: QueryMapping::new() }
    }

    pub fn path_param(mut self, value: impl Into<String>) -> Self {
        self.path_params.push(value.into());
        self
    }

    pub fn query(mut self, query: QueryMapping) -> Self {
        self.query = query;
        self
    }

    // Conversion from EndpointBuilder -> Endpoint
    pub fn finish(self, registry: &EndpointRegistry) -> Result<Endpoint, FetchError> {
        let params: Vec<&str> = self.path_params.iter().map(String::as_str).collect();
        let url = registry.resolve(self.resource, &params)?;
        Ok(Endpoint {
            resource: self.resource,
            url,
            query: self.query,
            mode: self.resource.mode(),
        })
    }
}
