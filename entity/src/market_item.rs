//! Per-type market snapshot figures for one market location.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evecentral_marketitem")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "locationID")]
    pub location_id: i64,
    #[sea_orm(column_name = "typeID")]
    pub type_id: i64,
    pub buy_max: f64,
    pub buy_volume: f64,
    pub sell_min: f64,
    pub sell_volume: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
