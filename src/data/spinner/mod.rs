//! Stationspinner repositories; every query here is scoped to one
//! corporation except account lookups, which stationspinner keys by
//! capsuler.

pub mod apicall;
pub mod corporation;
pub mod market;
pub mod member;
pub mod starbase;
pub mod user;
