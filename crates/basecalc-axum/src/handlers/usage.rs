//! Usage summary handler.

use axum::Json;
use axum::extract::State;

use crate::dto::UsageSummaryDto;
use crate::state::AppState;

/// Request counts per number system, in the same order as the chart slices.
pub async fn summary(State(state): State<AppState>) -> Json<UsageSummaryDto> {
    Json(state.core.usage().summary().into())
}
