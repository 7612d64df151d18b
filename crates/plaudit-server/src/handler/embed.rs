//! Embed widget handlers.
//!
//! The rendering page decodes its own query string through
//! `GET /embed/config`; the embed generator builds shareable snippets through
//! `POST /embed/snippet`.

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::routing::{get, post};
use plaudit_core::embed::{self, EmbedSnippet, EmbedUrlBuilder};

use super::request::{CreateSnippet, EmbedRenderQuery};
use super::response::EmbedConfigResponse;
use crate::extract::{Json, ValidateJson};
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for embed operations.
const TRACING_TARGET: &str = "plaudit_server::handler::embed";

/// Decodes a widget query string with every default applied.
#[tracing::instrument(skip_all)]
async fn embed_config(RawQuery(query): RawQuery) -> Result<Json<EmbedConfigResponse>> {
    let query = query.unwrap_or_default();
    let params = embed::decode(&query)?;
    let render = EmbedRenderQuery::from_query_str(&query);

    tracing::debug!(
        target: TRACING_TARGET,
        project_id = %params.project_id,
        layout = %params.layout,
        items = ?render.items,
        "embed config decoded"
    );

    Ok(Json(EmbedConfigResponse::new(params, render.items)))
}

/// Generates the embed URL and iframe snippet for a widget.
#[tracing::instrument(skip_all)]
async fn create_snippet(
    State(embed_urls): State<EmbedUrlBuilder>,
    ValidateJson(request): ValidateJson<CreateSnippet>,
) -> Result<Json<EmbedSnippet>> {
    let snippet = embed_urls.snippet(&request.project_id, request.layout, &request.config);

    tracing::info!(
        target: TRACING_TARGET,
        project_id = %request.project_id,
        layout = %request.layout,
        height = snippet.height,
        "embed snippet created"
    );

    Ok(Json(snippet))
}

/// Returns a [`Router`] with all embed routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/embed/config", get(embed_config))
        .route("/embed/snippet", post(create_snippet))
}
