use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::db::CorporationSheetModel;

pub struct CorporationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CorporationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enabled corporation sheet matching the configured name exactly.
    pub async fn find_enabled_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CorporationSheetModel>, DbErr> {
        entity::prelude::CorporationSheet::find()
            .filter(entity::corporation_sheet::Column::CorporationName.eq(name))
            .filter(entity::corporation_sheet::Column::Enabled.eq(true))
            .one(self.db)
            .await
    }
}
