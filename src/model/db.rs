//! Database model type aliases.
//!
//! Convenient aliases for the entity models used throughout the crate, so
//! call sites don't import from the generated `entity` crate directly.

/// A solar system row from the SDE `mapSolarSystems` table.
pub type SolarSystemModel = entity::map_solar_system::Model;

/// A denormalized location row (`mapDenormalize`): region, system, moon or
/// station, all under one `itemID` namespace.
pub type LocationModel = entity::map_denormalize::Model;

/// An inventory type row (`invTypes`).
pub type ItemTypeModel = entity::inv_type::Model;

/// An inventory group row (`invGroups`); category 6 groups are ship
/// classes.
pub type ShipGroupModel = entity::inv_group::Model;

/// The corporation sheet row the owner scope is resolved from.
pub type CorporationSheetModel = entity::corporation_sheet::Model;

/// A tracked starbase row.
pub type StarbaseModel = entity::starbase::Model;

/// A member-tracking row: character, reported location, boarded ship.
pub type MemberModel = entity::member_tracking::Model;

/// An account row owning zero or more characters.
pub type CapsulerModel = entity::capsuler::Model;

/// A character sheet row, with the corporation at record time.
pub type CharacterSheetModel = entity::character_sheet::Model;

/// A known API endpoint row.
pub type ApiCallModel = entity::api_call::Model;

/// Per-owner refresh bookkeeping for one API call.
pub type ApiUpdateModel = entity::api_update::Model;

/// Market snapshot figures for one (location, type) pair.
pub type MarketItemModel = entity::market_item::Model;
