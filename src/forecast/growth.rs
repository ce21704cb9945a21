use serde::Serialize;
use tracing::debug;

use super::ForecastError;
use crate::domain::{ReferenceData, Region, RegionProfile, Scenario, SeriesKind};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value_twh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandSupplyPoint {
    pub year: i32,
    pub demand_twh: f64,
    pub supply_twh: f64,
}

/// Merged demand and supply series of one region
#[derive(Debug, Clone, Serialize)]
pub struct RegionDemandSupply {
    pub region: Region,
    pub points: Vec<DemandSupplyPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDemand {
    pub country: String,
    pub year: i32,
    pub demand_twh: f64,
}

fn market_profile(data: &ReferenceData, region: Region) -> Result<&RegionProfile, ForecastError> {
    data.region(region)
        .ok_or(ForecastError::UnsupportedRegion(region))
}

fn demand_value(profile: &RegionProfile, index: f64, multiplier: f64) -> f64 {
    profile.base_demand_twh_2021 * index * multiplier
}

// Supply build-out lags demand: only a dampened share of index growth lands.
// The scenario's demand multiplier also drives supply.
fn supply_value(profile: &RegionProfile, index: f64, multiplier: f64) -> f64 {
    profile.base_supply_twh_2021 * (1.0 + (index - 1.0) * profile.supply_dampening) * multiplier
}

/// Scenario-adjusted demand or supply (TWh) for each indexed year of a market region
pub fn region_series(
    data: &ReferenceData,
    region: Region,
    scenario: Scenario,
    kind: SeriesKind,
) -> Result<Vec<SeriesPoint>, ForecastError> {
    let profile = market_profile(data, region)?;
    let multiplier = data.scenario(scenario).demand_multiplier;

    let series = profile
        .demand_index
        .iter()
        .map(|p| SeriesPoint {
            year: p.year,
            value_twh: match kind {
                SeriesKind::Demand => demand_value(profile, p.index, multiplier),
                SeriesKind::Supply => supply_value(profile, p.index, multiplier),
            },
        })
        .collect();

    Ok(series)
}

/// Demand and supply of a market region joined on year
pub fn demand_supply(
    data: &ReferenceData,
    region: Region,
    scenario: Scenario,
) -> Result<RegionDemandSupply, ForecastError> {
    let demand = region_series(data, region, scenario, SeriesKind::Demand)?;
    let supply = region_series(data, region, scenario, SeriesKind::Supply)?;

    let points = demand
        .iter()
        .zip(&supply)
        .map(|(d, s)| DemandSupplyPoint {
            year: d.year,
            demand_twh: d.value_twh,
            supply_twh: s.value_twh,
        })
        .collect();

    Ok(RegionDemandSupply { region, points })
}

/// Demand/supply of every market region, for the Global view
pub fn global_series(
    data: &ReferenceData,
    scenario: Scenario,
) -> Result<Vec<RegionDemandSupply>, ForecastError> {
    Region::markets()
        .map(|region| demand_supply(data, region, scenario))
        .collect()
}

/// Split a region's demand at `year` across its countries by fixed share
pub fn country_demand(
    data: &ReferenceData,
    region: Region,
    year: i32,
    scenario: Scenario,
) -> Result<Vec<CountryDemand>, ForecastError> {
    let profile = market_profile(data, region)?;
    let index = profile
        .index_at(year)
        .ok_or(ForecastError::MissingDemandIndex { region, year })?;
    let total = demand_value(profile, index, data.scenario(scenario).demand_multiplier);
    debug!(%region, year, total_twh = total, "country demand breakdown");

    Ok(profile
        .countries
        .iter()
        .map(|c| CountryDemand {
            country: c.country.clone(),
            year,
            demand_twh: total * c.share,
        })
        .collect())
}
