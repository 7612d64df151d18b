//! Media handlers for video testimonials.

use axum::Router;
use axum::routing::get;
use plaudit_core::media::VideoLink;

use super::request::YoutubeQuery;
use crate::extract::{Json, Query};
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for media operations.
const TRACING_TARGET: &str = "plaudit_server::handler::media";

/// Extracts the video id and derived URLs from a YouTube link.
#[tracing::instrument(skip_all)]
async fn youtube_video(Query(query): Query<YoutubeQuery>) -> Result<Json<VideoLink>> {
    let video = VideoLink::parse(&query.url)?;

    tracing::debug!(
        target: TRACING_TARGET,
        video_id = %video.video_id,
        "youtube link recognized"
    );

    Ok(Json(video))
}

/// Returns a [`Router`] with all media routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/media/youtube", get(youtube_video))
}
