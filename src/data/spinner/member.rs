use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{data::ilike, model::db::MemberModel};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Members whose character name matches, case-insensitively.
    pub async fn by_name(
        &self,
        corporation_id: i64,
        pattern: &str,
    ) -> Result<Vec<MemberModel>, DbErr> {
        entity::prelude::MemberTracking::find()
            .filter(entity::member_tracking::Column::OwnerId.eq(corporation_id))
            .filter(ilike(entity::member_tracking::Column::Name, pattern))
            .all(self.db)
            .await
    }

    /// Members whose reported location contains the fragment. Substring
    /// containment, not fuzzy matching.
    pub async fn by_location_fragment(
        &self,
        corporation_id: i64,
        fragment: &str,
    ) -> Result<Vec<MemberModel>, DbErr> {
        entity::prelude::MemberTracking::find()
            .filter(entity::member_tracking::Column::OwnerId.eq(corporation_id))
            .filter(ilike(
                entity::member_tracking::Column::Location,
                &format!("%{fragment}%"),
            ))
            .all(self.db)
            .await
    }

    /// Members currently boarded in any of the given ship types.
    pub async fn by_ship_type_ids(
        &self,
        corporation_id: i64,
        type_ids: &[i64],
    ) -> Result<Vec<MemberModel>, DbErr> {
        entity::prelude::MemberTracking::find()
            .filter(entity::member_tracking::Column::OwnerId.eq(corporation_id))
            .filter(entity::member_tracking::Column::ShipTypeId.is_in(type_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
