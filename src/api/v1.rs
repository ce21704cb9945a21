use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use serde::Deserialize;
use std::str::FromStr;
use validator::Validate;

use super::{catalog, demand, error::ApiError, market, prices, revenue};
use crate::{
    config::DashboardConfig,
    dashboard::AppState,
    domain::{Region, Scenario, Scheme},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/regions", get(market::list_regions))
        .route("/scenarios", get(market::list_scenarios))
        .route("/kpis", get(market::get_kpis))
        .route("/map/countries/:country", get(market::locate_country))
        .route("/prices", get(prices::get_price_history))
        .route("/prices/forecast", get(prices::get_price_forecast))
        .route("/demand-supply", get(demand::get_demand_supply))
        .route("/demand-supply/countries", get(demand::get_country_demand))
        .route("/buyers", get(catalog::list_buyers))
        .route("/generators", get(catalog::list_generators))
        .route("/policy", get(catalog::list_policy))
        .route("/revenue", get(revenue::get_revenue))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// Parse a selection string, mapping unknown values to a 400
pub fn parse_selection<T: FromStr>(kind: &str, raw: &str) -> Result<T, ApiError> {
    T::from_str(raw.trim()).map_err(|_| ApiError::unknown(kind, raw))
}

/// Region and scenario selectors shared by most tabs
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub region: Option<String>,
    pub scenario: Option<String>,
}

impl SelectionQuery {
    pub fn region(&self, defaults: &DashboardConfig) -> Result<Region, ApiError> {
        self.region
            .as_deref()
            .map_or(Ok(defaults.default_region), |raw| {
                parse_selection("region", raw)
            })
    }

    pub fn scenario(&self, defaults: &DashboardConfig) -> Result<Scenario, ApiError> {
        self.scenario
            .as_deref()
            .map_or(Ok(defaults.default_scenario), |raw| {
                parse_selection("scenario", raw)
            })
    }
}

/// Selectors for the per-country demand breakdown
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CountryDemandQuery {
    pub region: Option<String>,
    pub scenario: Option<String>,
    #[validate(range(min = 2021, max = 2025))]
    pub year: Option<i32>,
}

impl CountryDemandQuery {
    pub const DEFAULT_YEAR: i32 = 2025;

    pub fn selection(&self) -> SelectionQuery {
        SelectionQuery {
            region: self.region.clone(),
            scenario: self.scenario.clone(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year.unwrap_or(Self::DEFAULT_YEAR)
    }
}

/// Scheme and scenario selectors for the price forecast
#[derive(Debug, Default, Deserialize)]
pub struct PriceForecastQuery {
    pub scheme: Option<String>,
    pub scenario: Option<String>,
}

impl PriceForecastQuery {
    /// Scheme named in the query, or the default region's scheme
    pub fn scheme(&self, defaults: &DashboardConfig) -> Result<Scheme, ApiError> {
        match self.scheme.as_deref() {
            Some(raw) => parse_selection("scheme", raw),
            None => defaults.default_region.scheme().ok_or_else(|| {
                ApiError::ValidationError(
                    "scheme is required when the default region is Global".to_string(),
                )
            }),
        }
    }

    pub fn scenario(&self, defaults: &DashboardConfig) -> Result<Scenario, ApiError> {
        self.scenario
            .as_deref()
            .map_or(Ok(defaults.default_scenario), |raw| {
                parse_selection("scenario", raw)
            })
    }
}
