pub use super::api_call::Entity as ApiCall;
pub use super::api_update::Entity as ApiUpdate;
pub use super::capsuler::Entity as Capsuler;
pub use super::character_sheet::Entity as CharacterSheet;
pub use super::corporation_sheet::Entity as CorporationSheet;
pub use super::inv_group::Entity as InvGroup;
pub use super::inv_type::Entity as InvType;
pub use super::map_denormalize::Entity as MapDenormalize;
pub use super::map_solar_system::Entity as MapSolarSystem;
pub use super::market::Entity as Market;
pub use super::market_item::Entity as MarketItem;
pub use super::member_tracking::Entity as MemberTracking;
pub use super::starbase::Entity as Starbase;
