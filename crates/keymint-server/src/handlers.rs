//! Request handlers.

use crate::error::ServerError;
use crate::state::AppState;
use crate::templates;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use keymint_license::LicenseRequest;
use serde_json::json;

/// `GET /`: license request form listing the paid plugin catalog.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(templates::index_page(&state.catalog().plugins()))
}

/// `POST /generateLicense`: issue a signed license token.
///
/// A body that fails to parse is the caller's error and carries the parse
/// message back; anything after that is internal and responds generically.
pub async fn generate_license(
    State(state): State<AppState>,
    payload: Result<Json<LicenseRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ServerError> {
    let Json(request) = payload.map_err(|e| ServerError::InvalidRequest(e.body_text()))?;
    let issued = state.issuer().issue(request)?;
    Ok(Json(json!({ "license": issued.token.encode() })))
}

/// `GET /healthz`: liveness probe.
pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "keymint-server" }))
}
