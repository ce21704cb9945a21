use serde::Serialize;

use super::ForecastError;
use crate::domain::{ReferenceData, Region, Scenario, INDEX_BASE_YEAR};
use crate::utils::format_multiple;

/// Year the demand growth tile compares against the index base year
pub const GROWTH_END_YEAR: i32 = 2025;

/// Headline tiles for a region and scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub region: Region,
    pub scenario: Scenario,
    pub scheme: String,
    pub latest_year: i32,
    pub latest_price: f64,
    pub latest_price_display: String,
    pub demand_growth: f64,
    pub demand_growth_display: String,
}

pub fn kpis(data: &ReferenceData, region: Region, scenario: Scenario) -> Result<Kpis, ForecastError> {
    let params = data.scenario(scenario);
    let latest_year = latest_price_year(data);

    let (latest_price, latest_price_display) = match region.scheme() {
        Some(scheme) => {
            let observed = data.scheme(scheme).price_at(latest_year).ok_or(
                ForecastError::MissingAnchorPrice {
                    scheme,
                    year: latest_year,
                },
            )?;
            let price = observed * params.price_multiplier;
            let unit = scheme.price_unit();
            (price, format!("{}{price:.2} {}", unit.prefix(), unit.label()))
        }
        None => {
            let observed: Vec<f64> = data
                .schemes
                .iter()
                .filter_map(|(_, profile)| profile.price_at(latest_year))
                .collect();
            let price = mean(&observed) * params.price_multiplier;
            (price, format!("${price:.2} $/MWh"))
        }
    };

    let growth = demand_growth(data, region)? * params.demand_multiplier;

    Ok(Kpis {
        region,
        scenario,
        scheme: region.scheme_label(),
        latest_year,
        latest_price,
        latest_price_display,
        demand_growth: growth,
        demand_growth_display: format_multiple(growth),
    })
}

/// Most recent year with any price observation
fn latest_price_year(data: &ReferenceData) -> i32 {
    data.schemes
        .iter()
        .filter_map(|(_, profile)| profile.prices.last().map(|p| p.year))
        .max()
        .unwrap_or(GROWTH_END_YEAR)
}

/// Demand index ratio between the growth end year and the base year.
/// Global compares the mean index across the market regions.
fn demand_growth(data: &ReferenceData, region: Region) -> Result<f64, ForecastError> {
    let regions: Vec<Region> = match region {
        Region::Global => Region::markets().collect(),
        market => vec![market],
    };

    let mut end = Vec::with_capacity(regions.len());
    let mut start = Vec::with_capacity(regions.len());
    for r in regions {
        let profile = data
            .region(r)
            .ok_or(ForecastError::UnsupportedRegion(r))?;
        let at = |year| {
            profile
                .index_at(year)
                .ok_or(ForecastError::MissingDemandIndex { region: r, year })
        };
        end.push(at(GROWTH_END_YEAR)?);
        start.push(at(INDEX_BASE_YEAR)?);
    }

    Ok(mean(&end) / mean(&start))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builtin::reference_data;

    #[test]
    fn test_uk_base_kpis() {
        let k = kpis(&reference_data(), Region::UnitedKingdom, Scenario::Base).unwrap();
        assert_eq!(k.scheme, "REGOs");
        assert_eq!(k.latest_year, 2025);
        assert_eq!(k.latest_price, 1.5);
        assert_eq!(k.latest_price_display, "£1.50 £/MWh");
        assert!((k.demand_growth - 1.5).abs() < 1e-12);
        assert_eq!(k.demand_growth_display, "1.5×");
    }

    #[test]
    fn test_scenario_scales_kpis() {
        let k = kpis(&reference_data(), Region::UnitedStates, Scenario::Aggressive).unwrap();
        assert!((k.latest_price - 11.8).abs() < 1e-12);
        assert_eq!(k.latest_price_display, "$11.80 $/MWh");
        assert!((k.demand_growth - 3.9).abs() < 1e-12);
        assert_eq!(k.demand_growth_display, "3.9×");
    }

    #[test]
    fn test_global_kpis_average_across_markets() {
        let k = kpis(&reference_data(), Region::Global, Scenario::Base).unwrap();
        assert_eq!(k.scheme, "I-RECs (International) / Cross-scheme");
        // (2.39 + 1.5 + 3.5 + 5.9) / 4
        assert!((k.latest_price - 3.3225).abs() < 1e-12);
        assert_eq!(k.latest_price_display, "$3.32 $/MWh");
        // mean(2.4, 1.5, 1.9, 2.6) / mean(1, 1, 1, 1)
        assert!((k.demand_growth - 2.1).abs() < 1e-12);
        assert_eq!(k.demand_growth_display, "2.1×");
    }

    #[test]
    fn test_missing_latest_price_is_error() {
        let mut data = reference_data();
        data.schemes.gos.prices.pop();
        let err = kpis(&data, Region::EuropeanUnion, Scenario::Base).unwrap_err();
        assert_eq!(
            err,
            ForecastError::MissingAnchorPrice {
                scheme: crate::domain::Scheme::Gos,
                year: 2025
            }
        );
    }
}
