use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::UserData;
use crate::inbound::http::router::AppState;
use crate::user::ports::SessionServicePort;

/// Canonical success shape is `{ "user": … }`.
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MeResponseData>, ApiError> {
    // A non-UTF8 header value counts as no token at all.
    let bearer = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    let user = state.session_service.resolve(bearer).await?;

    Ok(Json(MeResponseData {
        user: (&user).into(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub user: UserData,
}
