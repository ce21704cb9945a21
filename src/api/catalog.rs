//! Buyer, generator and policy reference tables

use axum::extract::{Query, State};

use super::{
    error::ApiError,
    response::{list, ApiResponse},
    v1::SelectionQuery,
};
use crate::{
    dashboard::AppState,
    domain::{Buyer, Generator, PolicyNote},
};

/// GET /api/v1/buyers
pub async fn list_buyers(
    State(st): State<AppState>,
    Query(q): Query<SelectionQuery>,
) -> Result<ApiResponse<Vec<Buyer>>, ApiError> {
    let region = q.region(&st.cfg.dashboard)?;
    Ok(list(st.dashboard.buyers(region)))
}

/// GET /api/v1/generators - largest annual generation first
pub async fn list_generators(
    State(st): State<AppState>,
    Query(q): Query<SelectionQuery>,
) -> Result<ApiResponse<Vec<Generator>>, ApiError> {
    let region = q.region(&st.cfg.dashboard)?;
    Ok(list(st.dashboard.generators(region)))
}

/// GET /api/v1/policy
pub async fn list_policy(
    State(st): State<AppState>,
    Query(q): Query<SelectionQuery>,
) -> Result<ApiResponse<Vec<PolicyNote>>, ApiError> {
    let region = q.region(&st.cfg.dashboard)?;
    Ok(list(st.dashboard.policy(region)))
}
