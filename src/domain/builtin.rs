//! Built-in indicative dataset (public price anchors plus synthetic trends)

use super::reference::{
    Buyer, CountryShare, Generator, IndexPoint, PerRegion, PerScheme, PolicyNote, PricePoint,
    ReferenceData, RegionProfile, ScenarioTable, SchemeProfile,
};
use super::types::{Region, ScenarioParams, Scheme};

pub fn reference_data() -> ReferenceData {
    ReferenceData {
        scenarios: ScenarioTable {
            base: ScenarioParams::new(1.00, 1.00),
            upside: ScenarioParams::new(1.25, 1.50),
            aggressive: ScenarioParams::new(1.50, 2.00),
        },
        regions: PerRegion {
            mena: RegionProfile {
                countries: shares(&[
                    ("UAE", 0.28),
                    ("Saudi Arabia", 0.32),
                    ("Egypt", 0.16),
                    ("Jordan", 0.06),
                    ("Morocco", 0.07),
                    ("Oman", 0.05),
                    ("Qatar", 0.03),
                    ("Bahrain", 0.02),
                    ("Kuwait", 0.01),
                ]),
                base_demand_twh_2021: 8.0,
                base_supply_twh_2021: 9.0,
                supply_dampening: 0.90,
                demand_index: index(&[1.0, 1.2, 1.5, 1.9, 2.4]),
            },
            united_kingdom: RegionProfile {
                countries: shares(&[("United Kingdom", 1.0)]),
                base_demand_twh_2021: 25.0,
                base_supply_twh_2021: 27.0,
                supply_dampening: 0.95,
                demand_index: index(&[1.0, 1.1, 1.25, 1.35, 1.5]),
            },
            european_union: RegionProfile {
                // Listed weights cover 90% of the region; scaled up to sum to 1
                countries: weights(&[
                    ("Germany", 0.18),
                    ("France", 0.14),
                    ("Netherlands", 0.10),
                    ("Spain", 0.11),
                    ("Italy", 0.12),
                    ("Sweden", 0.10),
                    ("Norway", 0.10),
                    ("Denmark", 0.05),
                ]),
                base_demand_twh_2021: 140.0,
                base_supply_twh_2021: 150.0,
                supply_dampening: 0.92,
                demand_index: index(&[1.0, 1.2, 1.4, 1.65, 1.9]),
            },
            united_states: RegionProfile {
                countries: shares(&[("United States", 1.0)]),
                base_demand_twh_2021: 220.0,
                base_supply_twh_2021: 230.0,
                supply_dampening: 0.94,
                demand_index: index(&[1.0, 1.3, 1.7, 2.1, 2.6]),
            },
        },
        schemes: PerScheme {
            irecs: SchemeProfile {
                base_demand_twh_2025: 25.0,
                demand_cagr: 0.20,
                prices: history(&[1.8, 2.0, 2.1, 2.2, 2.25, 2.39]),
                anchors: points(&[(2023, 2.20), (2025, 2.39)]),
            },
            regos: SchemeProfile {
                base_demand_twh_2025: 55.0,
                demand_cagr: 0.08,
                prices: history(&[0.3, 0.6, 2.8, 20.0, 2.0, 1.5]),
                anchors: points(&[(2022, 2.8), (2023, 20.0), (2024, 2.0)]),
            },
            gos: SchemeProfile {
                base_demand_twh_2025: 850.0,
                demand_cagr: 0.10,
                prices: history(&[0.8, 1.5, 4.0, 7.0, 3.2, 3.5]),
                anchors: points(&[(2023, 7.0), (2024, 3.2)]),
            },
            recs: SchemeProfile {
                base_demand_twh_2025: 1200.0,
                demand_cagr: 0.12,
                prices: history(&[4.5, 5.0, 5.8, 6.2, 5.7, 5.9]),
                anchors: Vec::new(),
            },
        },
        buyers: buyers(),
        generators: generators(),
        policy_notes: policy_notes(),
    }
}

fn shares(rows: &[(&str, f64)]) -> Vec<CountryShare> {
    rows.iter()
        .map(|(country, share)| CountryShare {
            country: country.to_string(),
            share: *share,
        })
        .collect()
}

/// Country shares proportional to `rows`, normalised to sum to 1
fn weights(rows: &[(&str, f64)]) -> Vec<CountryShare> {
    let total: f64 = rows.iter().map(|(_, w)| w).sum();
    rows.iter()
        .map(|(country, weight)| CountryShare {
            country: country.to_string(),
            share: weight / total,
        })
        .collect()
}

/// Demand index for 2021 onward
fn index(values: &[f64]) -> Vec<IndexPoint> {
    (2021..)
        .zip(values)
        .map(|(year, index)| IndexPoint { year, index: *index })
        .collect()
}

/// Price history for 2020 onward
fn history(values: &[f64]) -> Vec<PricePoint> {
    (2020..)
        .zip(values)
        .map(|(year, price)| PricePoint { year, price: *price })
        .collect()
}

fn points(rows: &[(i32, f64)]) -> Vec<PricePoint> {
    rows.iter()
        .map(|(year, price)| PricePoint { year: *year, price: *price })
        .collect()
}

fn buyers() -> Vec<Buyer> {
    use Region::*;
    let rows: &[(Region, &str, &str, u64, &str)] = &[
        (Mena, "EGA", "Heavy Industry", 1_100_000, "Confirmed buyer (UAE)"),
        (Mena, "DP World", "Ports/Logistics", 200_000, "Confirmed buyer"),
        (Mena, "ADNEC", "Real Estate/Venues", 13_700, "Confirmed buyer"),
        (Mena, "Emirates Airline", "Aviation", 180_000, "Priority target"),
        (Mena, "Etihad Airways", "Aviation", 120_000, "Priority target"),
        (Mena, "ADNOC", "Industry", 250_000, "Priority target"),
        (Mena, "Aramco", "Industry", 500_000, "Priority target"),
        (Mena, "SABIC", "Chemicals", 350_000, "Priority target"),
        (Mena, "Majid Al Futtaim", "Retail/Real Estate", 140_000, "Priority target"),
        (Mena, "Dubai Airports", "Infrastructure", 100_000, "Priority target"),
        (UnitedKingdom, "BT Group", "Telecom", 250_000, "Large buyer"),
        (UnitedKingdom, "Vodafone UK", "Telecom", 180_000, "Large buyer"),
        (UnitedKingdom, "Unilever UK", "FMCG", 160_000, "RE100 buyer"),
        (UnitedKingdom, "Tesco", "Retail", 220_000, "Large buyer"),
        (UnitedKingdom, "Sainsbury's", "Retail", 140_000, "Large buyer"),
        (UnitedKingdom, "HSBC UK", "Finance", 90_000, "RE100 buyer"),
        (UnitedKingdom, "Barclays", "Finance", 80_000, "RE100 buyer"),
        (UnitedKingdom, "AstraZeneca", "Pharma", 60_000, "Corporate claims"),
        (UnitedKingdom, "Google UK", "Tech", 150_000, "Corporate claims"),
        (UnitedKingdom, "British Land", "Real Estate", 70_000, "Corporate claims"),
        (EuropeanUnion, "IKEA", "Retail", 900_000, "Large GO buyer"),
        (EuropeanUnion, "BMW Group", "Automotive", 650_000, "Large GO buyer"),
        (EuropeanUnion, "BASF", "Chemicals", 520_000, "Large GO buyer"),
        (EuropeanUnion, "Schneider Electric", "Industrial/Tech", 450_000, "RE100 buyer"),
        (EuropeanUnion, "Nestlé Europe", "FMCG", 600_000, "Corporate claims"),
        (EuropeanUnion, "L'Oréal", "FMCG", 280_000, "RE100 buyer"),
        (EuropeanUnion, "Heineken", "Beverage", 260_000, "Corporate claims"),
        (EuropeanUnion, "Telefonica", "Telecom", 310_000, "RE100 buyer"),
        (EuropeanUnion, "Apple (EU ops)", "Tech", 400_000, "Corporate claims"),
        (EuropeanUnion, "TotalEnergies (EU ops)", "Energy", 350_000, "Corporate claims"),
        (UnitedStates, "Amazon", "Tech/Logistics", 12_000_000, "Largest buyer"),
        (UnitedStates, "Google", "Tech", 8_000_000, "Large buyer"),
        (UnitedStates, "Microsoft", "Tech", 7_500_000, "Large buyer"),
        (UnitedStates, "Meta", "Tech", 4_500_000, "Large buyer"),
        (UnitedStates, "Apple", "Tech", 3_200_000, "Large buyer"),
        (UnitedStates, "Walmart", "Retail", 2_400_000, "Large buyer"),
        (UnitedStates, "Verizon", "Telecom", 1_600_000, "Corporate claims"),
        (UnitedStates, "AT&T", "Telecom", 1_400_000, "Corporate claims"),
        (UnitedStates, "General Motors", "Automotive", 1_200_000, "Corporate claims"),
        (UnitedStates, "PepsiCo", "FMCG", 900_000, "Corporate claims"),
        (Global, "Amazon", "Tech/Logistics", 15_000_000, "Global leader"),
        (Global, "Google", "Tech", 10_000_000, "Global leader"),
        (Global, "Microsoft", "Tech", 9_000_000, "Global leader"),
        (Global, "Apple", "Tech", 5_000_000, "Global leader"),
        (Global, "Meta", "Tech", 6_000_000, "Global leader"),
        (Global, "IKEA", "Retail", 2_000_000, "Global leader"),
        (Global, "Unilever", "FMCG", 1_700_000, "Global leader"),
        (Global, "BMW Group", "Automotive", 1_500_000, "Global leader"),
        (Global, "Schneider Electric", "Industrial/Tech", 1_200_000, "Global leader"),
        (Global, "Nestlé", "FMCG", 1_100_000, "Global leader"),
    ];

    rows.iter()
        .map(|(region, name, segment, annual_mwh, status_note)| Buyer {
            region: *region,
            name: name.to_string(),
            segment: segment.to_string(),
            annual_mwh: *annual_mwh,
            status_note: status_note.to_string(),
        })
        .collect()
}

fn generators() -> Vec<Generator> {
    use Region::*;
    let rows: &[(Region, &str, &str, &str, Scheme, f64)] = &[
        (Mena, "UAE", "Noor Abu Dhabi", "Solar", Scheme::IRecs, 3.5),
        (Mena, "UAE", "MBR Solar Park", "Solar", Scheme::IRecs, 2.2),
        (Mena, "Saudi Arabia", "ACWA solar fleet", "Solar", Scheme::IRecs, 4.0),
        (Mena, "Egypt", "Gulf of Suez wind cluster", "Wind", Scheme::IRecs, 5.0),
        (Mena, "Morocco", "Noor + wind parks", "Solar/Wind", Scheme::IRecs, 2.8),
        (UnitedKingdom, "United Kingdom", "Ørsted Hornsea Offshore", "Wind", Scheme::Regos, 6.0),
        (UnitedKingdom, "United Kingdom", "SSE Renewables fleet", "Wind", Scheme::Regos, 5.2),
        (UnitedKingdom, "United Kingdom", "RWE UK Offshore", "Wind", Scheme::Regos, 3.8),
        (UnitedKingdom, "United Kingdom", "ScottishPower Renewables", "Wind", Scheme::Regos, 3.0),
        (UnitedKingdom, "United Kingdom", "Lightsource BP UK", "Solar", Scheme::Regos, 1.6),
        (UnitedKingdom, "United Kingdom", "Statkraft UK Hydro", "Hydro", Scheme::Regos, 0.9),
        (UnitedKingdom, "United Kingdom", "Drax biomass", "Biomass", Scheme::Regos, 3.5),
        (EuropeanUnion, "Norway", "Statkraft Hydro", "Hydro", Scheme::Gos, 20.0),
        (EuropeanUnion, "Spain", "Iberdrola Renewables", "Wind/Solar", Scheme::Gos, 12.0),
        (EuropeanUnion, "Italy", "Enel Green Power", "Wind/Solar", Scheme::Gos, 10.0),
        (EuropeanUnion, "Germany", "RWE Renewables", "Wind/Solar", Scheme::Gos, 9.0),
        (EuropeanUnion, "Sweden", "Vattenfall wind/hydro", "Wind/Hydro", Scheme::Gos, 8.0),
        (UnitedStates, "United States", "NextEra Energy Resources", "Wind/Solar", Scheme::Recs, 35.0),
        (UnitedStates, "United States", "Avangrid Renewables", "Wind/Solar", Scheme::Recs, 12.0),
        (UnitedStates, "United States", "Invenergy", "Wind/Solar", Scheme::Recs, 10.0),
        (UnitedStates, "United States", "Brookfield Renewable", "Hydro/Wind", Scheme::Recs, 14.0),
        (UnitedStates, "United States", "Duke Energy Renewables", "Wind/Solar", Scheme::Recs, 8.0),
    ];

    rows.iter()
        .map(|(region, country, name, technology, scheme, twh)| Generator {
            region: *region,
            country: country.to_string(),
            name: name.to_string(),
            technology: technology.to_string(),
            scheme: *scheme,
            annual_generation_twh: *twh,
        })
        .collect()
}

fn policy_notes() -> Vec<PolicyNote> {
    use Region::*;
    let rows: &[(Region, &str)] = &[
        (Mena, "UAE Scope-2 reporting mandatory from 30 May 2025; EWEC auctions each quarter create local demand."),
        (Mena, "I-REC Standard expanding globally, enabling emerging-market supply to reach premium buyers."),
        (UnitedKingdom, "Fuel Mix Disclosure creates annual compliance cycles; scarcity can create price spikes."),
        (UnitedKingdom, "High-quality REGOs (wind/new-build/local) trade at premiums."),
        (EuropeanUnion, "AIB GO system harmonised; exchange trading is growing."),
        (EuropeanUnion, "Supply shifts drive volatility, creating timing/arbitrage edge."),
        (UnitedStates, "State RPS compliance plus voluntary ESG demand produces highest liquidity."),
        (UnitedStates, "Corporate forward offtake supports multi-year contracts."),
    ];

    rows.iter()
        .map(|(region, summary)| PolicyNote {
            region: *region,
            summary: summary.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_shares_sum_to_one() {
        let data = reference_data();
        for (region, profile) in data.regions.iter() {
            let sum: f64 = profile.countries.iter().map(|c| c.share).sum();
            assert!((sum - 1.0).abs() < 1e-9, "{region} shares sum to {sum}");
        }
    }

    #[test]
    fn test_eu_weights_keep_their_proportions() {
        let data = reference_data();
        let eu = &data.regions.european_union.countries;
        assert_eq!(eu.len(), 8);
        assert!((eu[0].share - 0.18 / 0.90).abs() < 1e-12);
        assert!((eu[7].share - 0.05 / 0.90).abs() < 1e-12);
        assert!((eu[0].share / eu[7].share - 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_builtin_passes_validation() {
        reference_data().validate().unwrap();
    }
}
