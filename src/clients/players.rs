///
/// players.rs  Oct 16th, 2026
///
/// Player search, detail, predictions and the top scorers board.
///

use std::fmt::Display;

use crate::clients::StatsClient;
use crate::core::{endpoint::Resource, error::ApiError, http::CallContext, pagination::Pagination};
use crate::models::{PaginatedResult, Player, PlayerDetail, PlayerPredictions};

impl StatsClient {
    /******** StatsClient::search_players *****************/
    /* Any Serialize map works as the filter; models::PlayerFilter covers
     * the criteria the service understands.
     */
    pub async fn search_players<F>(&self, filter: &F, pagination: Pagination, ctx: &CallContext)
        -> Result<PaginatedResult<Player>, ApiError>
    where
        F: serde::Serialize + ?Sized,
    {
        self.fetch_page(Resource::Players, "players", filter, pagination, ctx).await
    }

    pub async fn player_by_id(&self, player_id: impl Display, ctx: &CallContext)
        -> Result<PlayerDetail, ApiError> {
        let player_id = player_id.to_string();
        self.fetch(Resource::PlayerById, &[player_id.as_str()], &(), ctx).await
    }

    // The service answers null when it cannot build a prediction
    pub async fn player_predictions(&self, player_id: impl Display, ctx: &CallContext)
        -> Result<Option<PlayerPredictions>, ApiError> {
        let player_id = player_id.to_string();
        self.fetch(Resource::PlayerPredictions, &[player_id.as_str()], &(), ctx).await
    }

    pub async fn top_scorers(&self, ctx: &CallContext) -> Result<Vec<Player>, ApiError> {
        self.fetch(Resource::TopScorers, &[], &(), ctx).await
    }
}
