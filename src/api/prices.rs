use axum::extract::{Query, State};

use super::{
    error::ApiError,
    response::ApiResponse,
    v1::{PriceForecastQuery, SelectionQuery},
};
use crate::{dashboard::AppState, domain::PriceHistory, forecast::PriceCurve};

/// GET /api/v1/prices - observed price history for the region's scheme(s)
pub async fn get_price_history(
    State(st): State<AppState>,
    Query(q): Query<SelectionQuery>,
) -> Result<ApiResponse<PriceHistory>, ApiError> {
    let region = q.region(&st.cfg.dashboard)?;
    let history = st.dashboard.prices(region);
    let count = history.observations.len();
    Ok(ApiResponse::success(history).with_count(count))
}

/// GET /api/v1/prices/forecast - base and scenario curves for 2025..=2030
pub async fn get_price_forecast(
    State(st): State<AppState>,
    Query(q): Query<PriceForecastQuery>,
) -> Result<ApiResponse<PriceCurve>, ApiError> {
    let scheme = q.scheme(&st.cfg.dashboard)?;
    let scenario = q.scenario(&st.cfg.dashboard)?;
    let curve = st.dashboard.price_forecast(scheme, scenario)?;
    tracing::debug!(%scheme, %scenario, cagr = curve.cagr, "price forecast computed");
    Ok(ApiResponse::success(curve))
}
