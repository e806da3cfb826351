//! SDE denormalized location data; covers regions, systems, moons and
//! stations under a single `itemID` namespace.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mapDenormalize")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "itemID")]
    pub item_id: i64,
    #[sea_orm(column_name = "itemName")]
    pub item_name: String,
    pub security: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
