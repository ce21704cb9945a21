//! Static market reference data
//!
//! Everything the dashboard computes is derived from this dataset. It is
//! built once at startup (from the built-in tables or a TOML file with the
//! same shape), validated, and then shared read-only.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use super::types::{Region, Scenario, ScenarioParams, Scheme};

/// Year the demand index is normalised to (index = 1.0)
pub const INDEX_BASE_YEAR: i32 = 2021;

const SHARE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("failed to read reference data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse reference data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scenario {scenario} has non-positive multipliers ({demand}, {price})")]
    InvalidScenario {
        scenario: Scenario,
        demand: f64,
        price: f64,
    },

    #[error("country shares for {region} sum to {sum}, expected 1.0")]
    SharesNotNormalised { region: Region, sum: f64 },

    #[error("{region} has no demand index point for {year}")]
    MissingBaseIndex { region: Region, year: i32 },

    #[error("{series} years must be strictly ascending")]
    UnorderedYears { series: String },

    #[error("{region} has a non-positive base volume")]
    InvalidBaseVolume { region: Region },
}

// ============================================================================
// Keyed tables
// ============================================================================

/// One value per scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioTable {
    pub base: ScenarioParams,
    pub upside: ScenarioParams,
    pub aggressive: ScenarioParams,
}

impl ScenarioTable {
    pub fn get(&self, scenario: Scenario) -> ScenarioParams {
        match scenario {
            Scenario::Base => self.base,
            Scenario::Upside => self.upside,
            Scenario::Aggressive => self.aggressive,
        }
    }
}

/// One value per market region; Global has no entry of its own
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerRegion<T> {
    pub mena: T,
    pub united_kingdom: T,
    pub european_union: T,
    pub united_states: T,
}

impl<T> PerRegion<T> {
    pub fn get(&self, region: Region) -> Option<&T> {
        match region {
            Region::Mena => Some(&self.mena),
            Region::UnitedKingdom => Some(&self.united_kingdom),
            Region::EuropeanUnion => Some(&self.european_union),
            Region::UnitedStates => Some(&self.united_states),
            Region::Global => None,
        }
    }

    /// Entries paired with their region, in display order
    pub fn iter(&self) -> impl Iterator<Item = (Region, &T)> {
        [
            (Region::Mena, &self.mena),
            (Region::UnitedKingdom, &self.united_kingdom),
            (Region::EuropeanUnion, &self.european_union),
            (Region::UnitedStates, &self.united_states),
        ]
        .into_iter()
    }
}

/// One value per scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerScheme<T> {
    pub irecs: T,
    pub regos: T,
    pub gos: T,
    pub recs: T,
}

impl<T> PerScheme<T> {
    pub fn get(&self, scheme: Scheme) -> &T {
        match scheme {
            Scheme::IRecs => &self.irecs,
            Scheme::Regos => &self.regos,
            Scheme::Gos => &self.gos,
            Scheme::Recs => &self.recs,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Scheme, &T)> {
        [
            (Scheme::IRecs, &self.irecs),
            (Scheme::Regos, &self.regos),
            (Scheme::Gos, &self.gos),
            (Scheme::Recs, &self.recs),
        ]
        .into_iter()
    }
}

// ============================================================================
// Rows
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryShare {
    pub country: String,
    pub share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexPoint {
    pub year: i32,
    pub index: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub year: i32,
    pub price: f64,
}

/// Demand/supply profile of a market region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Constituent countries with their share of regional demand
    pub countries: Vec<CountryShare>,
    pub base_demand_twh_2021: f64,
    pub base_supply_twh_2021: f64,
    /// Fraction of demand-index growth realised on the supply side
    pub supply_dampening: f64,
    pub demand_index: Vec<IndexPoint>,
}

impl RegionProfile {
    pub fn index_at(&self, year: i32) -> Option<f64> {
        self.demand_index
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.index)
    }
}

/// Price history and forecast inputs of a scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeProfile {
    pub base_demand_twh_2025: f64,
    pub demand_cagr: f64,
    /// Historical observations, ascending by year
    pub prices: Vec<PricePoint>,
    /// Public price points quoted in press or market notes
    #[serde(default)]
    pub anchors: Vec<PricePoint>,
}

impl SchemeProfile {
    pub fn price_at(&self, year: i32) -> Option<f64> {
        self.prices.iter().find(|p| p.year == year).map(|p| p.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    pub region: Region,
    pub name: String,
    pub segment: String,
    pub annual_mwh: u64,
    pub status_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generator {
    pub region: Region,
    pub country: String,
    pub name: String,
    pub technology: String,
    pub scheme: Scheme,
    pub annual_generation_twh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyNote {
    pub region: Region,
    pub summary: String,
}

// ============================================================================
// Dataset
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub scenarios: ScenarioTable,
    pub regions: PerRegion<RegionProfile>,
    pub schemes: PerScheme<SchemeProfile>,
    #[serde(default)]
    pub buyers: Vec<Buyer>,
    #[serde(default)]
    pub generators: Vec<Generator>,
    #[serde(default)]
    pub policy_notes: Vec<PolicyNote>,
}

impl ReferenceData {
    /// Load from `path` if given, otherwise use the built-in dataset
    pub fn load(path: Option<&Path>) -> Result<Self, ReferenceError> {
        let data = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                let data = Self::from_toml_str(&raw)?;
                info!(path = %path.display(), "loaded reference data file");
                data
            }
            None => super::builtin::reference_data(),
        };

        data.validate()?;
        info!(
            buyers = data.buyers.len(),
            generators = data.generators.len(),
            policy_notes = data.policy_notes.len(),
            "reference data ready"
        );
        Ok(data)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ReferenceError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn scenario(&self, scenario: Scenario) -> ScenarioParams {
        self.scenarios.get(scenario)
    }

    pub fn region(&self, region: Region) -> Option<&RegionProfile> {
        self.regions.get(region)
    }

    pub fn scheme(&self, scheme: Scheme) -> &SchemeProfile {
        self.schemes.get(scheme)
    }

    /// Check the invariants the forecast engine relies on
    pub fn validate(&self) -> Result<(), ReferenceError> {
        for scenario in [Scenario::Base, Scenario::Upside, Scenario::Aggressive] {
            let p = self.scenarios.get(scenario);
            if p.demand_multiplier <= 0.0 || p.price_multiplier <= 0.0 {
                return Err(ReferenceError::InvalidScenario {
                    scenario,
                    demand: p.demand_multiplier,
                    price: p.price_multiplier,
                });
            }
        }

        for (region, profile) in self.regions.iter() {
            let sum: f64 = profile.countries.iter().map(|c| c.share).sum();
            if (sum - 1.0).abs() > SHARE_TOLERANCE {
                return Err(ReferenceError::SharesNotNormalised { region, sum });
            }
            if profile.base_demand_twh_2021 <= 0.0 || profile.base_supply_twh_2021 <= 0.0 {
                return Err(ReferenceError::InvalidBaseVolume { region });
            }
            if profile.index_at(INDEX_BASE_YEAR).is_none() {
                return Err(ReferenceError::MissingBaseIndex {
                    region,
                    year: INDEX_BASE_YEAR,
                });
            }
            ensure_ascending(
                profile.demand_index.iter().map(|p| p.year),
                || format!("{region} demand index"),
            )?;
        }

        for (scheme, profile) in self.schemes.iter() {
            ensure_ascending(profile.prices.iter().map(|p| p.year), || {
                format!("{scheme} price history")
            })?;
        }

        Ok(())
    }
}

fn ensure_ascending(
    years: impl Iterator<Item = i32>,
    series: impl FnOnce() -> String,
) -> Result<(), ReferenceError> {
    if years.tuple_windows().all(|(a, b)| a < b) {
        Ok(())
    } else {
        Err(ReferenceError::UnorderedYears { series: series() })
    }
}
