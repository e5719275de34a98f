///
/// teams.rs  Oct 16th, 2026
///
/// Team lookups. The service has two unrelated team listings, a filtered
/// paginated search and the clubs that played a given season; they are
/// kept as two operations.
///

use std::fmt::Display;

use serde::Serialize;

use crate::clients::StatsClient;
use crate::core::{endpoint::Resource, error::ApiError, http::CallContext, pagination::Pagination};
use crate::models::{PaginatedResult, TeamDetail, TeamFilter, TeamRow};

#[derive(Serialize)]
pub(crate) struct SeasonQuery {
    pub competition_id: String,
    pub season: Option<String>,
}

impl StatsClient {
    pub async fn search_teams(&self, filter: &TeamFilter, pagination: Pagination, ctx: &CallContext)
        -> Result<PaginatedResult<TeamRow>, ApiError> {
        self.fetch_page(Resource::TeamsSearch, "teams", filter, pagination, ctx).await
    }

    pub async fn teams_by_season(&self, competition_id: impl Display, season: impl Display, ctx: &CallContext)
        -> Result<Vec<TeamRow>, ApiError> {
        let query = SeasonQuery {
            competition_id: competition_id.to_string(),
            season: Some(season.to_string()),
        };
        self.fetch(Resource::TeamsBySeason, &[], &query, ctx).await
    }

    pub async fn team_by_id(&self, team_id: impl Display, ctx: &CallContext)
        -> Result<TeamDetail, ApiError> {
        let team_id = team_id.to_string();
        self.fetch(Resource::TeamById, &[team_id.as_str()], &(), ctx).await
    }
}
