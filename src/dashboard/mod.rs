//! Application state and the per-tab views handed to the presentation layer

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::domain::{
    Buyer, Generator, PolicyNote, PriceHistory, ReferenceData, ReferenceError, Region, Scenario,
    ScenarioParams, Scheme,
};
use crate::forecast::{
    self, CountryDemand, ForecastError, Kpis, PriceCurve, RegionDemandSupply, RevenueChart,
    RevenueRow, TableRow,
};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self, ReferenceError> {
        let data = ReferenceData::load(cfg.reference.path.as_deref())?;
        Ok(Self::with_reference(cfg, data))
    }

    pub fn with_reference(cfg: Config, data: ReferenceData) -> Self {
        info!(
            default_region = %cfg.dashboard.default_region,
            default_scenario = %cfg.dashboard.default_scenario,
            "dashboard state initialised"
        );
        Self {
            cfg,
            dashboard: Arc::new(Dashboard::new(Arc::new(data))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionSummary {
    pub id: Region,
    pub name: String,
    pub scheme: String,
    pub countries: Vec<String>,
    pub default_country: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub id: Scenario,
    pub name: String,
    #[serde(flatten)]
    pub params: ScenarioParams,
}

/// Demand & Supply tab: one region's merged series, or every market for Global
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum DemandSupplyView {
    Region(RegionDemandSupply),
    Global { regions: Vec<RegionDemandSupply> },
}

#[derive(Debug, Clone, Serialize)]
pub struct RevenueView {
    pub region: Region,
    pub scenario: Scenario,
    pub chart: RevenueChart,
    pub table: Vec<TableRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryLocation {
    pub country: String,
    pub region: Region,
    pub region_name: String,
    pub scheme: String,
}

/// Read-only façade over the reference data; every call recomputes
pub struct Dashboard {
    data: Arc<ReferenceData>,
}

impl Dashboard {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.data
    }

    pub fn regions(&self) -> Vec<RegionSummary> {
        use strum::IntoEnumIterator;
        Region::iter()
            .map(|region| {
                let countries: Vec<String> = self
                    .data
                    .countries(region)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                RegionSummary {
                    id: region,
                    name: region.to_string(),
                    scheme: region.scheme_label(),
                    default_country: countries.first().cloned().unwrap_or_default(),
                    countries,
                }
            })
            .collect()
    }

    pub fn scenarios(&self) -> Vec<ScenarioSummary> {
        use strum::IntoEnumIterator;
        Scenario::iter()
            .map(|scenario| ScenarioSummary {
                id: scenario,
                name: scenario.to_string(),
                params: self.data.scenario(scenario),
            })
            .collect()
    }

    pub fn kpis(&self, region: Region, scenario: Scenario) -> Result<Kpis, ForecastError> {
        forecast::kpis(&self.data, region, scenario)
    }

    pub fn prices(&self, region: Region) -> PriceHistory {
        self.data.price_history(region)
    }

    pub fn price_forecast(
        &self,
        scheme: Scheme,
        scenario: Scenario,
    ) -> Result<PriceCurve, ForecastError> {
        forecast::price_curve(&self.data, scheme, scenario)
    }

    pub fn demand_supply(
        &self,
        region: Region,
        scenario: Scenario,
    ) -> Result<DemandSupplyView, ForecastError> {
        if region.is_global() {
            return Ok(DemandSupplyView::Global {
                regions: forecast::global_series(&self.data, scenario)?,
            });
        }
        forecast::demand_supply(&self.data, region, scenario).map(DemandSupplyView::Region)
    }

    pub fn country_demand(
        &self,
        region: Region,
        year: i32,
        scenario: Scenario,
    ) -> Result<Vec<CountryDemand>, ForecastError> {
        forecast::country_demand(&self.data, region, year, scenario)
    }

    pub fn buyers(&self, region: Region) -> Vec<Buyer> {
        self.data.buyers_for(region).into_iter().cloned().collect()
    }

    pub fn generators(&self, region: Region) -> Vec<Generator> {
        self.data.generators_for(region).into_iter().cloned().collect()
    }

    pub fn policy(&self, region: Region) -> Vec<PolicyNote> {
        self.data.policy_for(region).into_iter().cloned().collect()
    }

    pub fn revenue(&self, region: Region, scenario: Scenario) -> Result<RevenueView, ForecastError> {
        let rows: Vec<RevenueRow> = forecast::build_revenue(&self.data, scenario)?;
        Ok(RevenueView {
            region,
            scenario,
            chart: forecast::revenue_chart(&rows, region, scenario),
            table: forecast::revenue_table(&rows, region),
        })
    }

    pub fn locate_country(&self, country: &str) -> CountryLocation {
        let region = self.data.region_for_country(country);
        CountryLocation {
            country: country.to_string(),
            region,
            region_name: region.to_string(),
            scheme: region.scheme_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::new(Arc::new(crate::domain::builtin::reference_data()))
    }

    #[test]
    fn test_region_summaries() {
        let regions = dashboard().regions();
        assert_eq!(regions.len(), 5);
        assert_eq!(regions[0].id, Region::Mena);
        assert_eq!(regions[0].default_country, "UAE");
        assert_eq!(regions[0].scheme, "I-RECs (incl. UAE)");
        assert_eq!(regions[4].countries, vec!["Global".to_string()]);
    }

    #[test]
    fn test_scenario_summaries() {
        let scenarios = dashboard().scenarios();
        let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Base", "Upside", "Aggressive"]);
        assert!(scenarios
            .windows(2)
            .all(|w| w[0].params.demand_multiplier <= w[1].params.demand_multiplier
                && w[0].params.price_multiplier <= w[1].params.price_multiplier));
    }

    #[test]
    fn test_demand_supply_views() {
        let d = dashboard();
        match d.demand_supply(Region::Global, Scenario::Base).unwrap() {
            DemandSupplyView::Global { regions } => assert_eq!(regions.len(), 4),
            other => panic!("unexpected view {other:?}"),
        }
        match d.demand_supply(Region::UnitedKingdom, Scenario::Base).unwrap() {
            DemandSupplyView::Region(series) => assert_eq!(series.region, Region::UnitedKingdom),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_revenue_view() {
        let view = dashboard().revenue(Region::Mena, Scenario::Upside).unwrap();
        assert_eq!(view.chart.points.len(), 6);
        assert_eq!(view.table.len(), 7);
    }

    #[test]
    fn test_locate_country() {
        let loc = dashboard().locate_country("Morocco");
        assert_eq!(loc.region, Region::Mena);
        assert_eq!(loc.region_name, "Middle East / MENA");

        let loc = dashboard().locate_country("Japan");
        assert_eq!(loc.region, Region::Global);
        assert_eq!(loc.scheme, "I-RECs (International) / Cross-scheme");
    }

    #[test]
    fn test_demand_supply_view_serialises_scope_tag() {
        let view = dashboard().demand_supply(Region::Global, Scenario::Base).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["scope"], "global");
        assert_eq!(json["regions"].as_array().unwrap().len(), 4);
    }
}
