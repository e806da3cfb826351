//! SDE inventory groups; category 6 groups classify ships.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invGroups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "groupID")]
    pub group_id: i64,
    #[sea_orm(column_name = "groupName")]
    pub group_name: String,
    #[sea_orm(column_name = "categoryID")]
    pub category_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
