//! Per-owner API refresh bookkeeping; `last_update` is null until the call
//! has run at least once.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounting_apiupdate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub apicall_id: i64,
    pub owner: i64,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
