//! Selector lists, KPI tiles and the map lookup

use axum::extract::{Path, Query, State};

use super::{
    error::ApiError,
    response::{list, ApiResponse},
    v1::SelectionQuery,
};
use crate::{
    dashboard::{AppState, CountryLocation, RegionSummary, ScenarioSummary},
    forecast::Kpis,
};

/// GET /api/v1/regions
pub async fn list_regions(State(st): State<AppState>) -> ApiResponse<Vec<RegionSummary>> {
    list(st.dashboard.regions())
}

/// GET /api/v1/scenarios
pub async fn list_scenarios(State(st): State<AppState>) -> ApiResponse<Vec<ScenarioSummary>> {
    list(st.dashboard.scenarios())
}

/// GET /api/v1/kpis
pub async fn get_kpis(
    State(st): State<AppState>,
    Query(q): Query<SelectionQuery>,
) -> Result<ApiResponse<Kpis>, ApiError> {
    let region = q.region(&st.cfg.dashboard)?;
    let scenario = q.scenario(&st.cfg.dashboard)?;
    let kpis = st.dashboard.kpis(region, scenario)?;
    Ok(ApiResponse::success(kpis))
}

/// GET /api/v1/map/countries/:country
///
/// Countries outside the four markets resolve to the Global roll-up.
pub async fn locate_country(
    State(st): State<AppState>,
    Path(country): Path<String>,
) -> Result<ApiResponse<CountryLocation>, ApiError> {
    let country = country.trim();
    if country.is_empty() {
        return Err(ApiError::BadRequest("country must not be empty".to_string()));
    }
    Ok(ApiResponse::success(st.dashboard.locate_country(country)))
}
