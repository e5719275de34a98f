use football_stats_client::{
    ApiConfig, CallContext, CancellationToken, ChartResource, FetchError, StatsClient,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// 1x1 transparent png
const PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

fn png() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(PNG.to_vec(), "image/png")
}

async fn client_for(server: &MockServer) -> StatsClient {
    let config = ApiConfig::parse(&format!("{}/api", server.uri())).expect("valid base url");
    StatsClient::new(&config).expect("client creation")
}

#[tokio::test]
async fn team_performance_chart_yields_a_revocable_handle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/team_performance_chart"))
        .and(query_param("team_id", "10"))
        .and(query_param("competition_id", "3"))
        .respond_with(png())
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut chart = client.team_performance_chart(10, 3, &CallContext::new()).await.unwrap();

    assert_eq!(chart.mime_type(), "image/png");
    assert_eq!(chart.bytes(), Some(PNG));
    assert!(chart.object_url().starts_with(&format!("blob:{}/", server.uri())));

    assert!(chart.revoke());
    assert!(!chart.revoke());
    assert!(chart.is_revoked());
}

#[tokio::test]
async fn identical_chart_calls_yield_distinct_handles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/team_goals_scored_chart"))
        .and(query_param("team_id", "5"))
        .and(query_param("competition_id", "2"))
        .respond_with(png())
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let ctx = CallContext::new();
    let mut first = client.team_goals_chart(5, 2, &ctx).await.unwrap();
    let mut second = client.team_goals_chart(5, 2, &ctx).await.unwrap();

    assert_ne!(first.id(), second.id());
    assert_ne!(first.object_url(), second.object_url());

    // releasing one leaves the other intact
    first.revoke();
    assert_eq!(second.bytes(), Some(PNG));
    second.revoke();
}

#[tokio::test]
async fn player_charts_use_the_player_path() {
    let server = MockServer::start().await;

    for chart in ["player_goals_chart", "player_cards_chart", "player_assists_chart"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/{chart}/28003")))
            .respond_with(png())
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server).await;
    let ctx = CallContext::new();

    let charts: Vec<ChartResource> = vec![
        client.player_goals_chart(28003, &ctx).await.unwrap(),
        client.player_cards_chart(28003, &ctx).await.unwrap(),
        client.player_assists_chart(28003, &ctx).await.unwrap(),
    ];
    for chart in charts {
        let scoped = chart.scoped();
        assert!(!scoped.is_revoked());
    }
}

#[tokio::test]
async fn json_body_on_chart_endpoint_is_a_conversion_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/team_goals_conceded_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": "nope" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.team_conceded_goals_chart(1, 1, &CallContext::new()).await.unwrap_err();
    assert!(matches!(err.kind(), FetchError::Conversion { .. }));
    assert_eq!(err.action, "fetching team goals conceded chart");
}

#[tokio::test]
async fn missing_chart_data_is_an_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/team_performance_chart"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "No performance data found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.team_performance_chart(99, 3, &CallContext::new()).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn cancelled_chart_request_never_creates_a_handle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/player_goals_chart/7"))
        .respond_with(png())
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let token = CancellationToken::new();
    token.cancel();

    let err = client
        .player_goals_chart(7, &CallContext::new().with_cancel(token))
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}
