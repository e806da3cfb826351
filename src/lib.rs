//! Resolution and reporting core for an EVE Online corporation chat bot.
//!
//! The crate answers lookup commands (starbases, member locations, ships,
//! market prices, API cache freshness) by querying the static SDE database
//! and a stationspinner corporation database, rendering results as chat
//! reply lines. The chat transport itself is the host bot's concern;
//! [`dispatch::dispatch`] is the boundary it calls with one command
//! invocation at a time.

pub mod command;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod status;
pub mod util;
