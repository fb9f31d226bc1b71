//! Championship standings and race statistics.
//!
//! The engine lives in [`utils`]: [`utils::points`], [`utils::driver_stats`],
//! [`utils::standings`], [`utils::race_analysis`], [`utils::export`] and
//! [`utils::charts`]. Every function there is a pure computation over a
//! snapshot of drivers, races and results. [`routes`] wraps them in a
//! stateless HTTP service.
pub mod handlers;
pub mod models;
pub mod routes;
pub mod utils;
