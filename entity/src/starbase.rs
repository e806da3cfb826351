//! Stationspinner starbase tracking rows.
//!
//! `state` is an API state code 0..=4; anything else renders as unknown.
//! `moonID` is zero for unanchored towers while `locationID` still yields
//! the solar system.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "corporation_starbase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub owner_id: i64,
    #[sea_orm(column_name = "locationID")]
    pub location_id: i64,
    #[sea_orm(column_name = "moonID")]
    pub moon_id: i64,
    #[sea_orm(column_name = "typeID")]
    pub type_id: i64,
    pub state: i32,
    #[sea_orm(column_name = "stateTimestamp")]
    pub state_timestamp: Option<DateTime>,
    #[sea_orm(column_name = "onlineTimestamp")]
    pub online_timestamp: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
