use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::list_jobs::list_jobs;
use super::handlers::login::login;
use super::handlers::me::me;
use crate::domain::job::service::JobService;
use crate::domain::user::service::SessionService;
use crate::outbound::stores::FixtureCredentialStore;
use crate::outbound::stores::FixtureJobBoard;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService<FixtureCredentialStore>>,
    pub job_service: Arc<JobService<FixtureJobBoard>>,
}

pub fn create_router(
    session_service: Arc<SessionService<FixtureCredentialStore>>,
    job_service: Arc<JobService<FixtureJobBoard>>,
) -> Router {
    let state = AppState {
        session_service,
        job_service,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/jobs", get(list_jobs))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
