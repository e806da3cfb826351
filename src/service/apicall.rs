use sea_orm::DatabaseConnection;

use crate::{data::spinner::apicall::ApiCallRepository, error::Error};

pub struct ApiCallService<'a> {
    spinner: &'a DatabaseConnection,
    corporation_id: i64,
}

impl<'a> ApiCallService<'a> {
    pub fn new(spinner: &'a DatabaseConnection, corporation_id: i64) -> Self {
        Self {
            spinner,
            corporation_id,
        }
    }

    /// `cache <apiCallName>`: when the corporation's data for one API call
    /// was last refreshed. The name must match exactly one call; a call
    /// never refreshed reports the literal `never`.
    pub async fn cache(&self, api_call: &str) -> Result<Vec<String>, Error> {
        let repo = ApiCallRepository::new(self.spinner);

        let mut calls = repo.corporation_calls_by_name(api_call).await?;
        if calls.len() != 1 {
            return Err(Error::UnknownApiCall(api_call.to_string()));
        }
        let call = calls.remove(0);

        let last_update = repo
            .update_for(call.id, self.corporation_id)
            .await?
            .and_then(|update| update.last_update)
            .map(|timestamp| timestamp.to_string())
            .unwrap_or_else(|| "never".to_string());

        Ok(vec![format!("{} last updated {}", call.name, last_update)])
    }
}
