use thiserror::Error;

use crate::domain::{Region, Scheme};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("demand and supply data not available for region {0}")]
    UnsupportedRegion(Region),

    #[error("no observed {scheme} price for {year}")]
    MissingAnchorPrice { scheme: Scheme, year: i32 },

    #[error("no demand index for {region} in {year}")]
    MissingDemandIndex { region: Region, year: i32 },
}
