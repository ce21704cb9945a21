//! Growth projection, forecasting and roll-up engines
//!
//! Every function here is pure: it reads the shared [`ReferenceData`] and
//! the selected scenario, and recomputes its series from scratch.
//!
//! [`ReferenceData`]: crate::domain::ReferenceData

pub mod error;
pub mod growth;
pub mod kpi;
pub mod prices;
pub mod revenue;
pub mod rollup;

use std::ops::RangeInclusive;

pub use error::ForecastError;
pub use growth::*;
pub use kpi::*;
pub use prices::*;
pub use revenue::*;
pub use rollup::*;

/// Years covered by the price and revenue forecasts
pub const FORECAST_YEARS: RangeInclusive<i32> = 2025..=2030;

/// First forecast year; the observed price for this year anchors the curve
pub const FORECAST_BASE_YEAR: i32 = 2025;
