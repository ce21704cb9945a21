//! Totals and VWAP roll-ups for the revenue table

use serde::Serialize;

use super::{RevenueRow, FORECAST_YEARS};
use crate::domain::{Region, Scheme};
use crate::utils::format_grouped;

pub const YEAR_TOTAL_LABEL: &str = "TOTAL";
pub const PERIOD_TOTAL_LABEL: &str = "TOTAL (2025–2030)";
pub const GRAND_TOTAL_LABEL: &str = "GRAND TOTAL (2025–2030)";

/// MWh per TWh; revenue in millions scales by the same factor
const MWH_PER_TWH: f64 = 1_000_000.0;

/// Volume-weighted average price per MWh.
///
/// `None` when there is no volume to weight by.
pub fn vwap(revenue_millions: f64, demand_twh: f64) -> Option<f64> {
    let revenue = revenue_millions * MWH_PER_TWH;
    let volume_mwh = demand_twh * MWH_PER_TWH;
    if volume_mwh == 0.0 {
        return None;
    }
    let price = revenue / volume_mwh;
    price.is_finite().then_some(price)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub demand_twh: f64,
    pub revenue_millions: f64,
    pub vwap: Option<f64>,
}

impl Totals {
    pub fn of<'a>(rows: impl IntoIterator<Item = &'a RevenueRow>) -> Self {
        let (demand_twh, revenue_millions) = rows
            .into_iter()
            .fold((0.0, 0.0), |(d, r), row| (d + row.demand_twh, r + row.revenue_millions));
        Self {
            demand_twh,
            revenue_millions,
            vwap: vwap(revenue_millions, demand_twh),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Scheme,
    /// All schemes in one year (Global view)
    YearTotal,
    /// One scheme over the whole forecast period
    PeriodTotal,
    /// All schemes over the whole forecast period (Global view)
    GrandTotal,
}

/// Cells as the table shows them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowDisplay {
    pub year: String,
    pub demand_twh: String,
    pub price_per_mwh: String,
    pub revenue_billions: String,
    /// Total rows are rendered bold
    pub emphasis: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub kind: RowKind,
    pub scheme: Option<Scheme>,
    pub year: Option<i32>,
    pub demand_twh: f64,
    /// Row price, or the VWAP on total rows
    pub price_per_mwh: Option<f64>,
    pub revenue_millions: f64,
    pub revenue_billions: f64,
    pub display: RowDisplay,
}

impl TableRow {
    fn new(
        label: String,
        kind: RowKind,
        scheme: Option<Scheme>,
        year: Option<i32>,
        demand_twh: f64,
        price_per_mwh: Option<f64>,
        revenue_millions: f64,
    ) -> Self {
        let revenue_billions = revenue_millions / super::MILLIONS_PER_BILLION;
        let display = RowDisplay {
            year: year.map(|y| y.to_string()).unwrap_or_default(),
            demand_twh: format_grouped(demand_twh, 0),
            price_per_mwh: price_per_mwh
                .map(|p| format_grouped(p, 2))
                .unwrap_or_default(),
            revenue_billions: format_grouped(revenue_billions, 1),
            emphasis: kind != RowKind::Scheme,
        };
        Self {
            label,
            kind,
            scheme,
            year,
            demand_twh,
            price_per_mwh,
            revenue_millions,
            revenue_billions,
            display,
        }
    }

    fn from_row(row: &RevenueRow) -> Self {
        Self::new(
            row.scheme.to_string(),
            RowKind::Scheme,
            Some(row.scheme),
            Some(row.year),
            row.demand_twh,
            Some(row.price_per_mwh),
            row.revenue_millions,
        )
    }

    fn total(label: &str, kind: RowKind, year: Option<i32>, totals: Totals) -> Self {
        Self::new(
            label.to_string(),
            kind,
            None,
            year,
            totals.demand_twh,
            totals.vwap,
            totals.revenue_millions,
        )
    }
}

/// Revenue table for a region selection.
///
/// A market region gets its scheme's rows plus one period total. Global gets
/// every row, a total per forecast year and a grand total, ordered by year
/// with the year-less grand total last.
pub fn revenue_table(rows: &[RevenueRow], region: Region) -> Vec<TableRow> {
    match region.scheme() {
        Some(scheme) => scheme_table(rows, scheme),
        None => global_table(rows),
    }
}

fn scheme_table(rows: &[RevenueRow], scheme: Scheme) -> Vec<TableRow> {
    let selected: Vec<&RevenueRow> = rows.iter().filter(|r| r.scheme == scheme).collect();
    let totals = Totals::of(selected.iter().copied());

    let mut table: Vec<TableRow> = selected.into_iter().map(TableRow::from_row).collect();
    table.push(TableRow::total(
        PERIOD_TOTAL_LABEL,
        RowKind::PeriodTotal,
        None,
        totals,
    ));
    table
}

fn global_table(rows: &[RevenueRow]) -> Vec<TableRow> {
    let mut table: Vec<TableRow> = rows.iter().map(TableRow::from_row).collect();

    for year in FORECAST_YEARS {
        let totals = Totals::of(rows.iter().filter(|r| r.year == year));
        table.push(TableRow::total(
            YEAR_TOTAL_LABEL,
            RowKind::YearTotal,
            Some(year),
            totals,
        ));
    }
    table.push(TableRow::total(
        GRAND_TOTAL_LABEL,
        RowKind::GrandTotal,
        None,
        Totals::of(rows),
    ));

    table.sort_by(|a, b| {
        a.year
            .is_none()
            .cmp(&b.year.is_none())
            .then(a.year.cmp(&b.year))
            .then_with(|| a.label.cmp(&b.label))
    });
    table
}
