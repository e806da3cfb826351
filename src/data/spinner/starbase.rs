use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::db::StarbaseModel;

pub struct StarbaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarbaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starbases owned by the corporation, optionally limited to one
    /// location. The unfiltered listing is ordered by (location, moon).
    pub async fn list(
        &self,
        corporation_id: i64,
        location_id: Option<i64>,
    ) -> Result<Vec<StarbaseModel>, DbErr> {
        let mut query = entity::prelude::Starbase::find()
            .filter(entity::starbase::Column::OwnerId.eq(corporation_id));

        match location_id {
            Some(id) => query = query.filter(entity::starbase::Column::LocationId.eq(id)),
            None => {
                query = query
                    .order_by_asc(entity::starbase::Column::LocationId)
                    .order_by_asc(entity::starbase::Column::MoonId)
            }
        }

        query.all(self.db).await
    }
}
