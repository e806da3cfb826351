use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{
    data::ilike,
    model::db::{LocationModel, SolarSystemModel},
};

pub struct MapRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MapRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// First solar system whose name matches, case-insensitively.
    pub async fn solar_system_by_name(
        &self,
        name: &str,
    ) -> Result<Option<SolarSystemModel>, DbErr> {
        entity::prelude::MapSolarSystem::find()
            .filter(ilike(
                entity::map_solar_system::Column::SolarSystemName,
                name,
            ))
            .one(self.db)
            .await
    }

    pub async fn solar_system_by_id(&self, id: i64) -> Result<Option<SolarSystemModel>, DbErr> {
        entity::prelude::MapSolarSystem::find_by_id(id).one(self.db).await
    }

    /// First denormalized location whose name matches, case-insensitively.
    pub async fn location_by_name(&self, name: &str) -> Result<Option<LocationModel>, DbErr> {
        entity::prelude::MapDenormalize::find()
            .filter(ilike(entity::map_denormalize::Column::ItemName, name))
            .one(self.db)
            .await
    }

    pub async fn location_by_id(&self, id: i64) -> Result<Option<LocationModel>, DbErr> {
        entity::prelude::MapDenormalize::find_by_id(id).one(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use evespai_test_utils::prelude::*;

    use super::*;

    async fn setup() -> Result<TestSetup, TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::MapSolarSystem,
            entity::prelude::MapDenormalize
        )?;

        fixtures::sde::insert_solar_system(&test.db, 30_000_142, "Jita", 10_000_002, 0.945).await?;
        fixtures::sde::insert_location(&test.db, 10_000_002, "The Forge").await?;
        fixtures::sde::insert_location(&test.db, 30_000_142, "Jita").await?;

        Ok(test)
    }

    /// Expect a match regardless of the typed name's case
    #[tokio::test]
    async fn matches_system_name_case_insensitively() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = MapRepository::new(&test.db);

        let system = repo.solar_system_by_name("jItA").await?;

        assert_eq!(system.map(|s| s.solar_system_id), Some(30_000_142));

        Ok(())
    }

    /// Expect caller-supplied wildcards to pass through to the match
    #[tokio::test]
    async fn passes_wildcards_through() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = MapRepository::new(&test.db);

        let system = repo.solar_system_by_name("ji%").await?;

        assert_eq!(system.map(|s| s.solar_system_name), Some("Jita".to_string()));

        Ok(())
    }

    /// Expect None for a name present in no row
    #[tokio::test]
    async fn misses_unknown_system() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = MapRepository::new(&test.db);

        let system = repo.solar_system_by_name("Old Man Star").await?;

        assert!(system.is_none());

        Ok(())
    }

    /// Expect location lookups to resolve both regions and systems
    #[tokio::test]
    async fn resolves_locations_by_name_and_id() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = MapRepository::new(&test.db);

        let region = repo.location_by_name("the forge").await?;
        assert_eq!(region.map(|r| r.item_id), Some(10_000_002));

        let system = repo.location_by_id(30_000_142).await?;
        assert_eq!(system.map(|s| s.item_name), Some("Jita".to_string()));

        Ok(())
    }
}
