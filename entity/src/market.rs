//! Market snapshot presence; one row per tracked market location.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "evecentral_market")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "locationID")]
    pub location_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
