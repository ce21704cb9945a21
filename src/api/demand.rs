//! Demand & Supply tab endpoints

use axum::extract::{rejection::QueryRejection, Query, State};
use validator::Validate;

use super::{
    error::ApiError,
    response::{list, ApiResponse},
    v1::{CountryDemandQuery, SelectionQuery},
};
use crate::{
    dashboard::{AppState, DemandSupplyView},
    forecast::CountryDemand,
};

/// GET /api/v1/demand-supply
pub async fn get_demand_supply(
    State(st): State<AppState>,
    Query(q): Query<SelectionQuery>,
) -> Result<ApiResponse<DemandSupplyView>, ApiError> {
    let region = q.region(&st.cfg.dashboard)?;
    let scenario = q.scenario(&st.cfg.dashboard)?;
    Ok(ApiResponse::success(
        st.dashboard.demand_supply(region, scenario)?,
    ))
}

/// GET /api/v1/demand-supply/countries
///
/// Per-country split of regional demand for a single historical year.
/// Global has no country table and yields 404. A malformed query string
/// is answered with the JSON error body like every other rejection.
pub async fn get_country_demand(
    State(st): State<AppState>,
    query: Result<Query<CountryDemandQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<CountryDemand>>, ApiError> {
    let Query(q) = query?;
    q.validate()?;
    let selection = q.selection();
    let region = selection.region(&st.cfg.dashboard)?;
    let scenario = selection.scenario(&st.cfg.dashboard)?;
    let rows = st.dashboard.country_demand(region, q.year(), scenario)?;
    Ok(list(rows))
}
