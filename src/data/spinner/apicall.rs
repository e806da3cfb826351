use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{
    data::ilike,
    model::db::{ApiCallModel, ApiUpdateModel},
};

/// Call category the `cache` command searches.
const CORPORATION_CALL_TYPE: &str = "Corporation";

pub struct ApiCallRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApiCallRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Corporation-category API calls whose name matches, case-insensitively.
    pub async fn corporation_calls_by_name(
        &self,
        pattern: &str,
    ) -> Result<Vec<ApiCallModel>, DbErr> {
        entity::prelude::ApiCall::find()
            .filter(entity::api_call::Column::CallType.eq(CORPORATION_CALL_TYPE))
            .filter(ilike(entity::api_call::Column::Name, pattern))
            .all(self.db)
            .await
    }

    /// Refresh bookkeeping row for one call and owner.
    pub async fn update_for(
        &self,
        apicall_id: i64,
        owner: i64,
    ) -> Result<Option<ApiUpdateModel>, DbErr> {
        entity::prelude::ApiUpdate::find()
            .filter(entity::api_update::Column::ApicallId.eq(apicall_id))
            .filter(entity::api_update::Column::Owner.eq(owner))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use evespai_test_utils::prelude::*;

    use super::*;

    /// Expect matching limited to the Corporation call category
    #[tokio::test]
    async fn matches_corporation_calls_only() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::ApiCall)?;
        fixtures::spinner::insert_api_call(&test.db, 1, "StarbaseList", "Corporation").await?;
        fixtures::spinner::insert_api_call(&test.db, 2, "StarbaseDetail", "Corporation").await?;
        fixtures::spinner::insert_api_call(&test.db, 3, "AssetList", "Character").await?;

        let repo = ApiCallRepository::new(&test.db);

        let calls = repo.corporation_calls_by_name("starbase%").await?;
        assert_eq!(calls.len(), 2);

        let calls = repo.corporation_calls_by_name("assetlist").await?;
        assert!(calls.is_empty());

        Ok(())
    }

    /// Expect the update row keyed by call and owner
    #[tokio::test]
    async fn finds_update_for_owner() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::ApiUpdate)?;
        fixtures::spinner::insert_api_update(&test.db, 1, 1, 1000, None).await?;

        let repo = ApiCallRepository::new(&test.db);

        assert!(repo.update_for(1, 1000).await?.is_some());
        assert!(repo.update_for(1, 2000).await?.is_none());

        Ok(())
    }
}
