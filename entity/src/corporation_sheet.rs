//! Stationspinner corporation sheet; the owning corporation is resolved
//! from here once at startup.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "corporation_corporationsheet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "corporationID")]
    pub corporation_id: i64,
    #[sea_orm(column_name = "corporationName")]
    pub corporation_name: String,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
