use axum::Router;

use backend_application::AppState;

use crate::handlers::{consumption_handlers, ops_handlers, rating_handlers, track_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/track-beer",
            axum::routing::post(track_handlers::track_beer),
        )
        .route(
            "/api/get-today-consumption",
            axum::routing::get(consumption_handlers::get_today_consumption),
        )
        .route(
            "/api/get-all-consumption",
            axum::routing::get(consumption_handlers::get_all_consumption),
        )
        .route(
            "/api/rating-today",
            axum::routing::get(rating_handlers::rating_today),
        )
        .route(
            "/api/rating-total",
            axum::routing::get(rating_handlers::rating_total),
        )
        .route(
            "/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
