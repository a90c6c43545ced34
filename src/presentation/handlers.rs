// HTTP request handlers
use crate::domain::chart::{Metric, ViewScale};
use crate::infrastructure::ndjson::stream_from_receiver;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ChartQuery {
    pub view: Option<ViewScale>,
    pub metric: Option<Metric>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Stream replayed readings as NDJSON; each request gets its own replay.
pub async fn stream_readings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let rx = state.replay_service.stream_readings();
    stream_from_receiver(rx)
}

/// Chart points for the requested view and metric.
pub async fn chart_points(
    Query(query): Query<ChartQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let view = query.view.unwrap_or(ViewScale::FiveSeconds);
    let metric = query.metric.unwrap_or(Metric::Temperature);
    Json(state.chart_service.chart_points(view, metric))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_query_deserializes_view_names() {
        let q: ChartQuery = serde_json::from_str(r#"{ "view": "5s" }"#).unwrap();
        assert_eq!(q.view, Some(ViewScale::FiveSeconds));

        let q: ChartQuery =
            serde_json::from_str(r#"{ "view": "minute", "metric": "energy" }"#).unwrap();
        assert_eq!(q.view, Some(ViewScale::Minute));
        assert_eq!(q.metric, Some(Metric::Energy));
    }
}
