use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{
    data::ilike,
    model::db::{ItemTypeModel, ShipGroupModel},
};

/// SDE category holding every ship group.
const SHIP_CATEGORY_ID: i64 = 6;

pub struct TypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// First inventory type whose name matches, case-insensitively.
    pub async fn type_by_name(&self, name: &str) -> Result<Option<ItemTypeModel>, DbErr> {
        entity::prelude::InvType::find()
            .filter(ilike(entity::inv_type::Column::TypeName, name))
            .one(self.db)
            .await
    }

    pub async fn type_by_id(&self, id: i64) -> Result<Option<ItemTypeModel>, DbErr> {
        entity::prelude::InvType::find_by_id(id).one(self.db).await
    }

    /// Ship groups whose name contains the fragment.
    pub async fn ship_groups_by_fragment(
        &self,
        fragment: &str,
    ) -> Result<Vec<ShipGroupModel>, DbErr> {
        entity::prelude::InvGroup::find()
            .filter(entity::inv_group::Column::CategoryId.eq(SHIP_CATEGORY_ID))
            .filter(ilike(
                entity::inv_group::Column::GroupName,
                &format!("%{fragment}%"),
            ))
            .all(self.db)
            .await
    }

    /// Published type IDs belonging to one group.
    pub async fn published_type_ids_by_group(&self, group_id: i64) -> Result<Vec<i64>, DbErr> {
        let types = entity::prelude::InvType::find()
            .filter(entity::inv_type::Column::GroupId.eq(group_id))
            .filter(entity::inv_type::Column::Published.eq(true))
            .all(self.db)
            .await?;

        Ok(types.into_iter().map(|t| t.type_id).collect())
    }
}
