use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

// ============================================================================
// Scenarios
// ============================================================================

/// Named multiplier set applied to demand and price projections
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Scenario {
    Base,
    Upside,
    Aggressive,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::Base
    }
}

/// Demand and price multipliers of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub demand_multiplier: f64,
    pub price_multiplier: f64,
}

impl ScenarioParams {
    pub const fn new(demand_multiplier: f64, price_multiplier: f64) -> Self {
        Self {
            demand_multiplier,
            price_multiplier,
        }
    }
}

// ============================================================================
// Certificate Schemes
// ============================================================================

/// Certificate-trading regime
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Scheme {
    #[strum(to_string = "I-RECs (incl. UAE)", serialize = "irecs", serialize = "I-RECs")]
    IRecs,
    #[strum(to_string = "REGOs")]
    Regos,
    #[strum(to_string = "GOs")]
    Gos,
    #[strum(to_string = "RECs")]
    Recs,
}

impl Scheme {
    /// Unit in which this scheme's certificates are priced
    pub fn price_unit(self) -> PriceUnit {
        match self {
            Self::Regos => PriceUnit::GbpPerMwh,
            Self::Gos => PriceUnit::EurPerMwh,
            Self::IRecs | Self::Recs => PriceUnit::UsdPerMwh,
        }
    }

    /// The market region where this scheme is the dominant instrument
    pub fn region(self) -> Region {
        match self {
            Self::IRecs => Region::Mena,
            Self::Regos => Region::UnitedKingdom,
            Self::Gos => Region::EuropeanUnion,
            Self::Recs => Region::UnitedStates,
        }
    }
}

/// Price denomination per MWh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    GbpPerMwh,
    EurPerMwh,
    UsdPerMwh,
}

impl PriceUnit {
    pub fn label(self) -> &'static str {
        match self {
            Self::GbpPerMwh => "£/MWh",
            Self::EurPerMwh => "€/MWh",
            Self::UsdPerMwh => "$/MWh",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Self::GbpPerMwh => "£",
            Self::EurPerMwh => "€",
            Self::UsdPerMwh => "$",
        }
    }
}

impl std::fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Regions
// ============================================================================

/// Label shown for the Global roll-up, which spans every scheme
pub const GLOBAL_SCHEME_LABEL: &str = "I-RECs (International) / Cross-scheme";

/// Dashboard geography selection
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    #[serde(rename = "mena")]
    #[strum(to_string = "Middle East / MENA", serialize = "mena")]
    Mena,
    #[serde(rename = "uk")]
    #[strum(to_string = "United Kingdom", serialize = "uk")]
    UnitedKingdom,
    #[serde(rename = "eu")]
    #[strum(to_string = "European Union", serialize = "eu")]
    EuropeanUnion,
    #[serde(rename = "us")]
    #[strum(to_string = "United States", serialize = "us")]
    UnitedStates,
    #[serde(rename = "global")]
    #[strum(to_string = "Global")]
    Global,
}

impl Default for Region {
    fn default() -> Self {
        Self::Mena
    }
}

impl Region {
    /// The four regions backed by their own certificate market, in display order
    pub fn markets() -> impl Iterator<Item = Region> {
        Self::iter().filter(|r| !r.is_global())
    }

    pub fn is_global(self) -> bool {
        matches!(self, Self::Global)
    }

    /// Scheme traded in this region; `None` for the Global roll-up
    pub fn scheme(self) -> Option<Scheme> {
        match self {
            Self::Mena => Some(Scheme::IRecs),
            Self::UnitedKingdom => Some(Scheme::Regos),
            Self::EuropeanUnion => Some(Scheme::Gos),
            Self::UnitedStates => Some(Scheme::Recs),
            Self::Global => None,
        }
    }

    pub fn scheme_label(self) -> String {
        self.scheme()
            .map(|s| s.to_string())
            .unwrap_or_else(|| GLOBAL_SCHEME_LABEL.to_string())
    }
}

/// Which side of the market a regional series describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum SeriesKind {
    Demand,
    Supply,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mena", Region::Mena)]
    #[case("Middle East / MENA", Region::Mena)]
    #[case("UK", Region::UnitedKingdom)]
    #[case("united kingdom", Region::UnitedKingdom)]
    #[case("eu", Region::EuropeanUnion)]
    #[case("United States", Region::UnitedStates)]
    #[case("global", Region::Global)]
    fn test_region_parsing(#[case] raw: &str, #[case] expected: Region) {
        assert_eq!(raw.parse::<Region>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_region_rejected() {
        assert!("Antarctica".parse::<Region>().is_err());
    }

    #[rstest]
    #[case("irecs", Scheme::IRecs)]
    #[case("I-RECs (incl. UAE)", Scheme::IRecs)]
    #[case("regos", Scheme::Regos)]
    #[case("GOs", Scheme::Gos)]
    #[case("RECs", Scheme::Recs)]
    fn test_scheme_parsing(#[case] raw: &str, #[case] expected: Scheme) {
        assert_eq!(raw.parse::<Scheme>().unwrap(), expected);
    }

    #[test]
    fn test_scenario_parsing_is_case_insensitive() {
        assert_eq!("aggressive".parse::<Scenario>().unwrap(), Scenario::Aggressive);
        assert_eq!("Upside".parse::<Scenario>().unwrap(), Scenario::Upside);
        assert!("Doom".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_region_scheme_mapping_is_one_to_one() {
        for region in Region::markets() {
            let scheme = region.scheme().unwrap();
            assert_eq!(scheme.region(), region);
        }
        assert_eq!(Region::Global.scheme(), None);
        assert_eq!(Region::Global.scheme_label(), GLOBAL_SCHEME_LABEL);
        assert_eq!(Region::markets().count(), 4);
    }

    #[test]
    fn test_price_units() {
        assert_eq!(Scheme::Regos.price_unit().label(), "£/MWh");
        assert_eq!(Scheme::Gos.price_unit().prefix(), "€");
        assert_eq!(Scheme::Recs.price_unit(), PriceUnit::UsdPerMwh);
        assert_eq!(Scheme::IRecs.price_unit(), PriceUnit::UsdPerMwh);
    }

    #[test]
    fn test_serde_uses_slugs() {
        assert_eq!(serde_json::to_string(&Region::UnitedKingdom).unwrap(), "\"uk\"");
        assert_eq!(serde_json::to_string(&Scheme::IRecs).unwrap(), "\"irecs\"");
        assert_eq!(serde_json::to_string(&Scenario::Upside).unwrap(), "\"upside\"");
        let region: Region = serde_json::from_str("\"eu\"").unwrap();
        assert_eq!(region, Region::EuropeanUnion);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Region::Mena.to_string(), "Middle East / MENA");
        assert_eq!(Scheme::IRecs.to_string(), "I-RECs (incl. UAE)");
        assert_eq!(SeriesKind::Supply.to_string(), "Supply");
    }
}
