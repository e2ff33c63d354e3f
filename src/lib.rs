//! Showroom catalog search and rule-based used car price estimates.
//!
//! Both halves are pure functions over static reference data: the
//! inventory in [`catalog`] and the price tables in [`pricing`].

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod pricing;
