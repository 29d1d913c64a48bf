//! Data models for the WeatherBot application
//!
//! Core domain values: the normalized location produced by the resolver and
//! the weather snapshot built from a successful provider response.

pub mod location;
pub mod weather;

pub use location::Location;
pub use weather::WeatherSnapshot;
