use crate::error::{AppError, Result};
use crate::model::{InfoQuery, ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use shortlink_core::{DetailRecord, ShortCode, ShortlinkError};
use tracing::{debug, info};

/// A code that cannot be valid was never issued, so it resolves like an unknown one.
fn lookup_code(raw: &str) -> Result<ShortCode> {
    ShortCode::parse(raw).map_err(|_| AppError::from(ShortlinkError::NotFound(raw.to_string())))
}

pub async fn shorten_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    let Json(request) = request.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let url = request.parse_url()?;

    let code = state
        .shortener()
        .shorten(url.as_str(), request.expiration_in_minutes)
        .await?;

    info!(
        shortlink = %code,
        expiration_in_minutes = request.expiration_in_minutes,
        "shortened url"
    );

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            shortlink: code.to_string(),
        }),
    ))
}

pub async fn info_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<InfoQuery>, QueryRejection>,
) -> Result<Json<DetailRecord>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let code = lookup_code(&query.shortlink)?;

    let detail = state.resolver().info(&code).await?;
    Ok(Json(detail))
}

pub async fn redirect_handler(
    Path(shortlink): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    let code = lookup_code(&shortlink)?;
    let url = state.resolver().unshorten(&code).await?;

    debug!(shortlink = %code, url = %url, "redirecting");
    Ok(Redirect::temporary(&url))
}
