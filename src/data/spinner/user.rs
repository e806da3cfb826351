use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::db::{CapsulerModel, CharacterSheetModel};

pub struct CapsulerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CapsulerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Account by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<CapsulerModel>, DbErr> {
        entity::prelude::Capsuler::find()
            .filter(entity::capsuler::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Character sheets registered to one account.
    pub async fn characters_by_owner(
        &self,
        owner_id: i64,
    ) -> Result<Vec<CharacterSheetModel>, DbErr> {
        entity::prelude::CharacterSheet::find()
            .filter(entity::character_sheet::Column::OwnerId.eq(owner_id))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use evespai_test_utils::prelude::*;

    use super::*;

    async fn setup() -> Result<TestSetup, TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::Capsuler,
            entity::prelude::CharacterSheet
        )?;

        fixtures::spinner::insert_capsuler(&test.db, 1, "kristian").await?;
        fixtures::spinner::insert_character_sheet(&test.db, 11, 1, "Kara Steel", "C C P").await?;
        fixtures::spinner::insert_character_sheet(&test.db, 12, 1, "Mira Voss", "Perkone").await?;
        fixtures::spinner::insert_character_sheet(&test.db, 13, 2, "Stray Alt", "C C P").await?;

        Ok(test)
    }

    /// Expect username lookup to be exact, not fuzzy
    #[tokio::test]
    async fn finds_account_by_exact_username() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = CapsulerRepository::new(&test.db);

        assert!(repo.find_by_username("kristian").await?.is_some());
        assert!(repo.find_by_username("krist%").await?.is_none());

        Ok(())
    }

    /// Expect only the account's own characters to list
    #[tokio::test]
    async fn lists_characters_for_owner() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = CapsulerRepository::new(&test.db);

        let characters = repo.characters_by_owner(1).await?;
        let names: Vec<String> = characters.into_iter().map(|c| c.name).collect();

        assert_eq!(names, vec!["Kara Steel".to_string(), "Mira Voss".to_string()]);

        Ok(())
    }
}
