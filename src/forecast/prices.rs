use serde::Serialize;
use std::collections::BTreeMap;

use super::{ForecastError, FORECAST_BASE_YEAR, FORECAST_YEARS};
use crate::domain::{PricePoint, ReferenceData, Scenario, Scheme};

/// Compound annual growth rate between two observations.
///
/// `None` when the starting price is not positive, since no growth rate
/// can carry it to the end price.
pub fn implied_cagr(first: PricePoint, last: PricePoint) -> Option<f64> {
    if first.price <= 0.0 {
        return None;
    }
    let years = (last.year - first.year).max(1);
    Some((last.price / first.price).powf(1.0 / f64::from(years)) - 1.0)
}

/// Growth rate the base curve extrapolates with; `None` means the curve is flat
pub fn price_cagr(data: &ReferenceData, scheme: Scheme) -> Option<f64> {
    let history = &data.scheme(scheme).prices;
    match (history.first(), history.last()) {
        (Some(&first), Some(&last)) if history.len() >= 2 => implied_cagr(first, last),
        _ => None,
    }
}

/// Scenario-independent price curve for the forecast years.
///
/// Anchored at the observed price of the forecast base year and extrapolated
/// with the CAGR implied by the first and last historical observations.
pub fn price_forecast_base(
    data: &ReferenceData,
    scheme: Scheme,
) -> Result<BTreeMap<i32, f64>, ForecastError> {
    let anchor = data
        .scheme(scheme)
        .price_at(FORECAST_BASE_YEAR)
        .ok_or(ForecastError::MissingAnchorPrice {
            scheme,
            year: FORECAST_BASE_YEAR,
        })?;

    let curve = match price_cagr(data, scheme) {
        Some(cagr) => FORECAST_YEARS
            .map(|y| (y, anchor * (1.0 + cagr).powi(y - FORECAST_BASE_YEAR)))
            .collect(),
        None => FORECAST_YEARS.map(|y| (y, anchor)).collect(),
    };
    Ok(curve)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPricePoint {
    pub year: i32,
    pub base_price: f64,
    pub scenario_price: f64,
}

/// Base curve alongside its scenario-adjusted counterpart
#[derive(Debug, Clone, Serialize)]
pub struct PriceCurve {
    pub scheme: Scheme,
    pub scenario: Scenario,
    pub unit: String,
    pub cagr: Option<f64>,
    pub points: Vec<ForecastPricePoint>,
}

pub fn price_curve(
    data: &ReferenceData,
    scheme: Scheme,
    scenario: Scenario,
) -> Result<PriceCurve, ForecastError> {
    let multiplier = data.scenario(scenario).price_multiplier;
    let points = price_forecast_base(data, scheme)?
        .into_iter()
        .map(|(year, base_price)| ForecastPricePoint {
            year,
            base_price,
            scenario_price: base_price * multiplier,
        })
        .collect();

    Ok(PriceCurve {
        scheme,
        scenario,
        unit: scheme.price_unit().label().to_string(),
        cagr: price_cagr(data, scheme),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builtin::reference_data;
    use strum::IntoEnumIterator;

    #[test]
    fn test_recs_curve() {
        let data = reference_data();
        let cagr = price_cagr(&data, Scheme::Recs).unwrap();
        assert!((cagr - ((5.9f64 / 4.5).powf(0.2) - 1.0)).abs() < 1e-12);
        assert!((cagr - 0.0557).abs() < 1e-3);

        let curve = price_forecast_base(&data, Scheme::Recs).unwrap();
        assert_eq!(curve.len(), 6);
        assert_eq!(curve[&2025], 5.9);
        // five years of the five-year CAGR reproduces the 2020 -> 2025 ratio
        assert!((curve[&2030] - 5.9 * 5.9 / 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_base_year_price_is_the_observation() {
        let data = reference_data();
        for scheme in Scheme::iter() {
            let curve = price_forecast_base(&data, scheme).unwrap();
            assert_eq!(curve[&FORECAST_BASE_YEAR], data.scheme(scheme).price_at(2025).unwrap());
        }
    }

    #[test]
    fn test_single_observation_holds_flat() {
        let mut data = reference_data();
        data.schemes.gos.prices = vec![PricePoint { year: 2025, price: 3.5 }];
        let curve = price_forecast_base(&data, Scheme::Gos).unwrap();
        assert!(curve.values().all(|&p| p == 3.5));
        assert_eq!(price_cagr(&data, Scheme::Gos), None);
    }

    #[test]
    fn test_missing_base_year_price() {
        let mut data = reference_data();
        data.schemes.regos.prices.pop();
        assert_eq!(
            price_forecast_base(&data, Scheme::Regos).unwrap_err(),
            ForecastError::MissingAnchorPrice {
                scheme: Scheme::Regos,
                year: 2025
            }
        );
    }

    #[test]
    fn test_zero_first_price_holds_flat() {
        let mut data = reference_data();
        data.schemes.irecs.prices[0].price = 0.0;
        let curve = price_forecast_base(&data, Scheme::IRecs).unwrap();
        assert!(curve.values().all(|&p| p == 2.39));
    }

    #[test]
    fn test_implied_cagr_uses_at_least_one_year() {
        let p = PricePoint { year: 2025, price: 2.0 };
        let q = PricePoint { year: 2025, price: 3.0 };
        assert!((implied_cagr(p, q).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scenario_applied_after_base_curve() {
        let data = reference_data();
        let curve = price_curve(&data, Scheme::Regos, Scenario::Aggressive).unwrap();
        assert_eq!(curve.unit, "£/MWh");
        let first = curve.points[0];
        assert_eq!(first.year, 2025);
        assert_eq!(first.base_price, 1.5);
        assert!((first.scenario_price - 3.0).abs() < 1e-12);
    }
}
