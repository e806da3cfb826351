use sea_orm::DatabaseConnection;

use crate::{data::spinner::user::CapsulerRepository, error::Error};

pub struct UserService<'a> {
    spinner: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(spinner: &'a DatabaseConnection) -> Self {
        Self { spinner }
    }

    /// `chars <username>`: every character registered to an account, with
    /// the corporation each was in when its sheet was recorded.
    pub async fn chars(&self, username: &str) -> Result<Vec<String>, Error> {
        let repo = CapsulerRepository::new(self.spinner);

        let user = repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| Error::UnknownUser(username.to_string()))?;

        let characters = repo.characters_by_owner(user.id).await?;
        if characters.is_empty() {
            return Ok(vec![format!(
                "User \"{}\" has 0 characters registered",
                user.username
            )]);
        }

        let listed: Vec<String> = characters
            .iter()
            .map(|c| format!("{} [{}]", c.name, c.corporation_name))
            .collect();

        Ok(vec![format!(
            "Found {} characters: {}",
            listed.len(),
            listed.join(", ")
        )])
    }
}
