//! clinaudit-api
//!
//! Stateless JSON surface over the guidance engine and the instrument
//! catalogue. Persistence and authentication live with the consuming CRUD
//! service; this crate only computes.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments (public catalogue data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{code}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{code}/interpret",
            post(routes::instruments::interpret_total),
        )
        // Guidance
        .route(
            "/guidance/questions/analyze",
            post(routes::guidance::analyze_question),
        )
        .route(
            "/guidance/questionnaires/review",
            post(routes::guidance::review_questionnaire),
        )
        .route(
            "/guidance/questionnaires/completeness",
            post(routes::guidance::check_completeness),
        )
        .route(
            "/guidance/questionnaires/apply",
            post(routes::guidance::apply_guidance),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        // A caller's X-Request-ID is kept, otherwise a UUID is assigned; either way it is echoed.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
}
