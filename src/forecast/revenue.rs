use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::debug;

use super::{price_forecast_base, ForecastError, FORECAST_BASE_YEAR, FORECAST_YEARS};
use crate::domain::{ReferenceData, Region, Scenario, Scheme};

/// Millions per billion, for the revenue display unit
pub const MILLIONS_PER_BILLION: f64 = 1000.0;

/// Forecast demand, price and revenue of one scheme in one year.
///
/// TWh times price per MWh gives revenue in millions of the scheme's
/// currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueRow {
    pub scheme: Scheme,
    pub year: i32,
    pub demand_twh: f64,
    pub price_per_mwh: f64,
    pub revenue_millions: f64,
    pub revenue_billions: f64,
}

/// Revenue forecast for every scheme and forecast year, scheme-major
pub fn build_revenue(
    data: &ReferenceData,
    scenario: Scenario,
) -> Result<Vec<RevenueRow>, ForecastError> {
    let params = data.scenario(scenario);
    let mut rows = Vec::with_capacity(4 * FORECAST_YEARS.count());

    for scheme in Scheme::iter() {
        let profile = data.scheme(scheme);
        let prices = price_forecast_base(data, scheme)?;

        for (year, base_price) in prices {
            let growth = (1.0 + profile.demand_cagr).powi(year - FORECAST_BASE_YEAR);
            let demand_twh = profile.base_demand_twh_2025 * growth * params.demand_multiplier;
            let price_per_mwh = base_price * params.price_multiplier;
            let revenue_millions = demand_twh * price_per_mwh;
            rows.push(RevenueRow {
                scheme,
                year,
                demand_twh,
                price_per_mwh,
                revenue_millions,
                revenue_billions: revenue_millions / MILLIONS_PER_BILLION,
            });
        }
    }

    debug!(%scenario, rows = rows.len(), "revenue forecast built");
    Ok(rows)
}

/// Chart series for the Revenue view
#[derive(Debug, Clone, Serialize)]
pub struct RevenueChart {
    pub title: String,
    /// Set when the chart colours lines by scheme
    pub series_by_scheme: bool,
    pub points: Vec<RevenueRow>,
}

pub fn revenue_chart(rows: &[RevenueRow], region: Region, scenario: Scenario) -> RevenueChart {
    let first = *FORECAST_YEARS.start();
    let last = *FORECAST_YEARS.end();
    match region.scheme() {
        Some(scheme) => RevenueChart {
            title: format!("{scheme} revenue pool ({first}–{last}) — {scenario}"),
            series_by_scheme: false,
            points: rows.iter().filter(|r| r.scheme == scheme).copied().collect(),
        },
        None => RevenueChart {
            title: format!(
                "Indicative global EAC revenue pool by scheme ({first}–{last}) — {scenario}"
            ),
            series_by_scheme: true,
            points: rows.to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builtin::reference_data;

    #[test]
    fn test_revenue_shape() {
        let data = reference_data();
        let rows = build_revenue(&data, Scenario::Base).unwrap();
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0].scheme, Scheme::IRecs);
        assert_eq!(rows[0].year, 2025);
        assert_eq!(rows[23].scheme, Scheme::Recs);
        assert_eq!(rows[23].year, 2030);
    }

    #[test]
    fn test_base_year_row() {
        let data = reference_data();
        let rows = build_revenue(&data, Scenario::Base).unwrap();
        let recs = rows
            .iter()
            .find(|r| r.scheme == Scheme::Recs && r.year == 2025)
            .unwrap();
        assert_eq!(recs.demand_twh, 1200.0);
        assert_eq!(recs.price_per_mwh, 5.9);
        assert!((recs.revenue_millions - 7080.0).abs() < 1e-9);
        assert!((recs.revenue_billions - 7.08).abs() < 1e-12);
    }

    #[test]
    fn test_scenario_multipliers_apply_to_demand_and_price() {
        let data = reference_data();
        let base = build_revenue(&data, Scenario::Base).unwrap();
        let upside = build_revenue(&data, Scenario::Upside).unwrap();
        for (b, u) in base.iter().zip(&upside) {
            assert!((u.demand_twh - b.demand_twh * 1.25).abs() < 1e-9);
            assert!((u.price_per_mwh - b.price_per_mwh * 1.5).abs() < 1e-9);
            assert!((u.revenue_millions - b.revenue_millions * 1.875).abs() < 1e-6);
        }
    }

    #[test]
    fn test_deterministic() {
        let data = reference_data();
        let a = build_revenue(&data, Scenario::Aggressive).unwrap();
        let b = build_revenue(&data, Scenario::Aggressive).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_uk_total_matches_closed_form_geometric_sum() {
        let data = reference_data();
        let rows = build_revenue(&data, Scenario::Base).unwrap();
        let summed: f64 = rows
            .iter()
            .filter(|r| r.scheme == Scheme::Regos)
            .map(|r| r.revenue_millions)
            .sum();

        // demand and price both grow geometrically, so revenue does too
        let price_growth = (1.5f64 / 0.3).powf(0.2);
        let ratio = 1.08 * price_growth;
        let closed_form = 55.0 * 1.5 * (ratio.powi(6) - 1.0) / (ratio - 1.0);
        assert!((summed - closed_form).abs() / closed_form < 1e-9);
    }

    #[test]
    fn test_chart_for_region_filters_scheme() {
        let data = reference_data();
        let rows = build_revenue(&data, Scenario::Base).unwrap();
        let chart = revenue_chart(&rows, Region::EuropeanUnion, Scenario::Base);
        assert_eq!(chart.points.len(), 6);
        assert!(!chart.series_by_scheme);
        assert!(chart.points.iter().all(|r| r.scheme == Scheme::Gos));
        assert_eq!(chart.title, "GOs revenue pool (2025–2030) — Base");
    }

    #[test]
    fn test_chart_for_global_keeps_all_rows() {
        let data = reference_data();
        let rows = build_revenue(&data, Scenario::Upside).unwrap();
        let chart = revenue_chart(&rows, Region::Global, Scenario::Upside);
        assert_eq!(chart.points.len(), 24);
        assert!(chart.series_by_scheme);
        assert!(chart.title.ends_with("— Upside"));
    }
}
