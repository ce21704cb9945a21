use axum::extract::{Query, State};
use std::time::Instant;

use super::{error::ApiError, response::ApiResponse, v1::SelectionQuery};
use crate::dashboard::{AppState, RevenueView};

/// GET /api/v1/revenue - revenue chart series plus the roll-up table
pub async fn get_revenue(
    State(st): State<AppState>,
    Query(q): Query<SelectionQuery>,
) -> Result<ApiResponse<RevenueView>, ApiError> {
    let start = Instant::now();
    let region = q.region(&st.cfg.dashboard)?;
    let scenario = q.scenario(&st.cfg.dashboard)?;

    let view = st.dashboard.revenue(region, scenario)?;
    let rows = view.table.len();
    let elapsed = start.elapsed().as_micros() as u64;
    tracing::debug!(%region, %scenario, rows, duration_us = elapsed, "revenue view computed");

    Ok(ApiResponse::success(view)
        .with_count(rows)
        .with_duration(elapsed))
}
