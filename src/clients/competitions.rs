///
/// competitions.rs  Oct 16th, 2026
///
/// Competition listings, clubs per competition and the seasons a
/// competition has games for.
///

use std::fmt::Display;

use serde::Serialize;

use crate::clients::StatsClient;
use crate::core::{endpoint::Resource, error::ApiError, http::CallContext};
use crate::models::{Club, Competition, Season};

#[derive(Serialize)]
struct CompetitionQuery {
    competition_id: String,
}

impl StatsClient {
    pub async fn list_competitions(&self, ctx: &CallContext) -> Result<Vec<Competition>, ApiError> {
        self.fetch(Resource::Competitions, &[], &(), ctx).await
    }

    // comp_type is the category the service filters on, e.g. "domestic_league"
    pub async fn competitions_by_type(&self, comp_type: &str, ctx: &CallContext)
        -> Result<Vec<Competition>, ApiError> {
        self.fetch(Resource::CompetitionsByType, &[comp_type], &(), ctx).await
    }

    pub async fn clubs_by_competition(&self, competition_id: impl Display, ctx: &CallContext)
        -> Result<Vec<Club>, ApiError> {
        let competition_id = competition_id.to_string();
        self.fetch(Resource::ClubsByCompetition, &[competition_id.as_str()], &(), ctx).await
    }

    pub async fn seasons(&self, competition_id: impl Display, ctx: &CallContext)
        -> Result<Vec<Season>, ApiError> {
        let query = CompetitionQuery { competition_id: competition_id.to_string() };
        self.fetch(Resource::Seasons, &[], &query, ctx).await
    }
}
