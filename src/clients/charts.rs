///
/// charts.rs  Oct 16th, 2026
///
/// Chart lookups. Each call returns a NEW ChartResource that the caller
/// owns and must revoke(); see core/resource.rs for the contract.
///

use std::fmt::Display;

use serde::Serialize;

use crate::clients::StatsClient;
use crate::core::{endpoint::Resource, error::ApiError, http::CallContext, resource::ChartResource};

#[derive(Serialize)]
struct TeamChartQuery {
    team_id: String,
    competition_id: String,
}

impl StatsClient {
    async fn team_chart(&self, resource: Resource, team_id: impl Display, competition_id: impl Display,
        ctx: &CallContext) -> Result<ChartResource, ApiError> {
        let query = TeamChartQuery {
            team_id: team_id.to_string(),
            competition_id: competition_id.to_string(),
        };
        self.fetch_chart(resource, &[], &query, ctx).await
    }

    async fn player_chart(&self, resource: Resource, player_id: impl Display, ctx: &CallContext)
        -> Result<ChartResource, ApiError> {
        let player_id = player_id.to_string();
        self.fetch_chart(resource, &[player_id.as_str()], &(), ctx).await
    }

    pub async fn team_performance_chart(&self, team_id: impl Display, competition_id: impl Display,
        ctx: &CallContext) -> Result<ChartResource, ApiError> {
        self.team_chart(Resource::TeamPerformanceChart, team_id, competition_id, ctx).await
    }

    pub async fn team_goals_chart(&self, team_id: impl Display, competition_id: impl Display,
        ctx: &CallContext) -> Result<ChartResource, ApiError> {
        self.team_chart(Resource::TeamGoalsChart, team_id, competition_id, ctx).await
    }

    pub async fn team_conceded_goals_chart(&self, team_id: impl Display, competition_id: impl Display,
        ctx: &CallContext) -> Result<ChartResource, ApiError> {
        self.team_chart(Resource::TeamConcededGoalsChart, team_id, competition_id, ctx).await
    }

    pub async fn player_goals_chart(&self, player_id: impl Display, ctx: &CallContext)
        -> Result<ChartResource, ApiError> {
        self.player_chart(Resource::PlayerGoalsChart, player_id, ctx).await
    }

    pub async fn player_cards_chart(&self, player_id: impl Display, ctx: &CallContext)
        -> Result<ChartResource, ApiError> {
        self.player_chart(Resource::PlayerCardsChart, player_id, ctx).await
    }

    pub async fn player_assists_chart(&self, player_id: impl Display, ctx: &CallContext)
        -> Result<ChartResource, ApiError> {
        self.player_chart(Resource::PlayerAssistsChart, player_id, ctx).await
    }
}
