//! Stationspinner character sheet rows; `corporationName` is the
//! corporation at the time the sheet was recorded.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character_charactersheet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "characterID")]
    pub character_id: i64,
    pub name: String,
    #[sea_orm(column_name = "corporationName")]
    pub corporation_name: String,
    pub owner_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
