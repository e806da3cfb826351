//! Stationspinner member tracking rows; `location` is free text as reported
//! by the API, `shipType` carries the sentinel `Unknown Type` for pods.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "corporation_membertracking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "characterID")]
    pub character_id: i64,
    pub name: String,
    pub location: String,
    #[sea_orm(column_name = "shipType")]
    pub ship_type: String,
    #[sea_orm(column_name = "shipTypeID")]
    pub ship_type_id: i64,
    pub owner_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
