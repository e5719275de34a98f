///
/// games.rs  Oct 16th, 2026
///
/// Games of a competition, optionally narrowed to one season.
///

use std::fmt::Display;

use crate::clients::{teams::SeasonQuery, StatsClient};
use crate::core::{endpoint::Resource, error::ApiError, http::CallContext};
use crate::models::Game;

impl StatsClient {
    // Without a season the service returns every season, newest first
    pub async fn games_by_competition(&self, competition_id: impl Display, season: Option<&str>, ctx: &CallContext)
        -> Result<Vec<Game>, ApiError> {
        let query = SeasonQuery {
            competition_id: competition_id.to_string(),
            season: season.map(str::to_owned),
        };
        self.fetch(Resource::Games, &[], &query, ctx).await
    }
}
