//! Usage chart handler.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::HttpError;
use crate::state::AppState;

/// Render the number-system frequency pie chart as PNG.
pub async fn render(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    let png = state.core.usage().render_chart().await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
