//! Property tests over the forecast engines using the built-in dataset

use eac_market_dashboard::{
    domain::{
        builtin::reference_data, ReferenceData, Region, Scenario, ScenarioParams, Scheme,
        SeriesKind,
    },
    forecast::{
        build_revenue, country_demand, price_curve, region_series, revenue_table, vwap, RowKind,
    },
};
use proptest::prelude::*;

fn market_region() -> impl Strategy<Value = Region> {
    prop_oneof![
        Just(Region::Mena),
        Just(Region::UnitedKingdom),
        Just(Region::EuropeanUnion),
        Just(Region::UnitedStates),
    ]
}

fn scheme() -> impl Strategy<Value = Scheme> {
    prop_oneof![
        Just(Scheme::IRecs),
        Just(Scheme::Regos),
        Just(Scheme::Gos),
        Just(Scheme::Recs),
    ]
}

fn scenario() -> impl Strategy<Value = Scenario> {
    prop_oneof![
        Just(Scenario::Base),
        Just(Scenario::Upside),
        Just(Scenario::Aggressive),
    ]
}

fn with_upside(demand_multiplier: f64, price_multiplier: f64) -> ReferenceData {
    let mut data = reference_data();
    data.scenarios.upside = ScenarioParams::new(demand_multiplier, price_multiplier);
    data
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn series_scale_linearly_with_demand_multiplier(
        region in market_region(),
        multiplier in 0.1f64..5.0,
    ) {
        let data = with_upside(multiplier, 1.0);
        for kind in [SeriesKind::Demand, SeriesKind::Supply] {
            let base = region_series(&data, region, Scenario::Base, kind).unwrap();
            let scaled = region_series(&data, region, Scenario::Upside, kind).unwrap();
            prop_assert_eq!(base.len(), scaled.len());
            for (b, s) in base.iter().zip(&scaled) {
                prop_assert_eq!(b.year, s.year);
                prop_assert!(close(s.value_twh, b.value_twh * multiplier));
            }
        }
    }

    #[test]
    fn country_demand_sums_to_region_total(
        region in market_region(),
        scenario in scenario(),
        year in 2021i32..=2025,
    ) {
        let data = reference_data();
        let countries = country_demand(&data, region, year, scenario).unwrap();
        let total: f64 = countries.iter().map(|c| c.demand_twh).sum();
        let regional = region_series(&data, region, scenario, SeriesKind::Demand)
            .unwrap()
            .into_iter()
            .find(|p| p.year == year)
            .unwrap();
        // shares are normalised to within 1e-6
        prop_assert!((total - regional.value_twh).abs() <= 1e-6 * regional.value_twh);
    }

    #[test]
    fn scenario_price_is_base_times_multiplier(
        scheme in scheme(),
        multiplier in 0.1f64..5.0,
    ) {
        let data = with_upside(1.0, multiplier);
        let curve = price_curve(&data, scheme, Scenario::Upside).unwrap();
        prop_assert_eq!(curve.points.len(), 6);
        let anchor = data.scheme(scheme).price_at(2025).unwrap();
        prop_assert_eq!(curve.points[0].base_price, anchor);
        for p in &curve.points {
            prop_assert!(close(p.scenario_price, p.base_price * multiplier));
        }
    }

    #[test]
    fn total_rows_reconcile_vwap_with_revenue(
        demand_multiplier in 0.1f64..5.0,
        price_multiplier in 0.1f64..5.0,
    ) {
        let data = with_upside(demand_multiplier, price_multiplier);
        let rows = build_revenue(&data, Scenario::Upside).unwrap();
        let table = revenue_table(&rows, Region::Global);
        prop_assert_eq!(table.len(), 31);

        for row in table.iter().filter(|r| r.kind != RowKind::Scheme) {
            let price = row.price_per_mwh.unwrap();
            prop_assert!(close(price * row.demand_twh, row.revenue_millions));
            prop_assert_eq!(vwap(row.revenue_millions, row.demand_twh), Some(price));
        }

        let grand = table.last().unwrap();
        let summed: f64 = rows.iter().map(|r| r.revenue_millions).sum();
        prop_assert!(close(grand.revenue_millions, summed));
    }
}
