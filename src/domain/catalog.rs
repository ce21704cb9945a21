use itertools::Itertools;
use serde::Serialize;

use super::reference::{Buyer, Generator, PolicyNote, ReferenceData};
use super::types::{PriceUnit, Region, Scheme};

/// Country list shown for the Global roll-up
pub const GLOBAL_COUNTRY: &str = "Global";

/// A price point tagged with its scheme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceObservation {
    pub scheme: Scheme,
    pub year: i32,
    pub price: f64,
}

/// Price history for the Prices view
#[derive(Debug, Clone, Serialize)]
pub struct PriceHistory {
    pub region: Region,
    pub unit: String,
    pub unit_prefix: String,
    pub observations: Vec<PriceObservation>,
    /// Public anchors; empty for the Global view
    pub anchors: Vec<PriceObservation>,
}

impl ReferenceData {
    /// Buyers listed for a region. Global has its own ranking of global leaders.
    pub fn buyers_for(&self, region: Region) -> Vec<&Buyer> {
        self.buyers.iter().filter(|b| b.region == region).collect()
    }

    /// Generators of a region (all of them for Global), largest volume first
    pub fn generators_for(&self, region: Region) -> Vec<&Generator> {
        self.generators
            .iter()
            .filter(|g| region.is_global() || g.region == region)
            .sorted_by(|a, b| b.annual_generation_twh.total_cmp(&a.annual_generation_twh))
            .collect()
    }

    pub fn policy_for(&self, region: Region) -> Vec<&PolicyNote> {
        self.policy_notes
            .iter()
            .filter(|p| region.is_global() || p.region == region)
            .collect()
    }

    /// Countries selectable within a region; the first is the default selection
    pub fn countries(&self, region: Region) -> Vec<&str> {
        match self.region(region) {
            Some(profile) => profile.countries.iter().map(|c| c.country.as_str()).collect(),
            None => vec![GLOBAL_COUNTRY],
        }
    }

    /// Market region a country belongs to, falling back to Global
    pub fn region_for_country(&self, country: &str) -> Region {
        self.regions
            .iter()
            .find(|(_, profile)| {
                profile
                    .countries
                    .iter()
                    .any(|c| c.country.eq_ignore_ascii_case(country))
            })
            .map(|(region, _)| region)
            .unwrap_or(Region::Global)
    }

    pub fn price_history(&self, region: Region) -> PriceHistory {
        let schemes: Vec<Scheme> = match region.scheme() {
            Some(scheme) => vec![scheme],
            None => self.schemes.iter().map(|(s, _)| s).collect(),
        };
        // Global mixes currencies; the chart falls back to a dollar axis
        let unit = region
            .scheme()
            .map(Scheme::price_unit)
            .unwrap_or(PriceUnit::UsdPerMwh);

        let observations = schemes
            .iter()
            .flat_map(move |&scheme| {
                self.scheme(scheme).prices.iter().map(move |p| PriceObservation {
                    scheme,
                    year: p.year,
                    price: p.price,
                })
            })
            .collect();

        let anchors = match region.scheme() {
            Some(scheme) => self
                .scheme(scheme)
                .anchors
                .iter()
                .map(|p| PriceObservation {
                    scheme,
                    year: p.year,
                    price: p.price,
                })
                .collect(),
            None => Vec::new(),
        };

        PriceHistory {
            region,
            unit: unit.label().to_string(),
            unit_prefix: unit.prefix().to_string(),
            observations,
            anchors,
        }
    }
}
