//! Backend for the Energy Attribute Certificate (EAC) market dashboard.
//!
//! Regional demand and supply projections, certificate price forecasts and
//! revenue pools are computed on request from a read-only reference dataset
//! and served as JSON under `/api/v1`.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod forecast;
pub mod telemetry;
pub mod utils;
