//! Process initialization: store connections, status client, and the
//! one-time corporation resolution.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::{
    config::{Config, DbConfig},
    data::spinner::corporation::CorporationRepository,
    error::Error,
    model::app::AppState,
    status::StatusClient,
};

/// Open a connection pool for one store.
///
/// Pools are created lazily so an unreachable store degrades only the
/// commands that need it; the first failing query surfaces the error.
pub async fn connect_store(config: &DbConfig) -> Result<DatabaseConnection, Error> {
    let mut options = ConnectOptions::new(config.url());
    options.sqlx_logging(false).connect_lazy(true);

    Ok(Database::connect(options).await?)
}

/// Resolve the configured corporation name to its ID.
pub async fn resolve_corporation(
    spinner: &DatabaseConnection,
    name: &str,
) -> Result<i64, Error> {
    if name.is_empty() {
        return Err(Error::CorporationNotConfigured);
    }

    let sheet = CorporationRepository::new(spinner)
        .find_enabled_by_name(name)
        .await?
        .ok_or_else(|| Error::CorporationNotFound(name.to_string()))?;

    Ok(sheet.corporation_id)
}

/// Build the application state from configuration.
///
/// A corporation resolution failure is reported once and leaves the ID
/// unset, blocking corporation-scoped commands without aborting startup.
pub async fn init(config: &Config) -> Result<AppState, Error> {
    let sde = connect_store(&config.sde).await?;
    let spinner = connect_store(&config.spinner).await?;

    let corporation_id = match resolve_corporation(&spinner, &config.corporation).await {
        Ok(id) => {
            info!(
                corporation = %config.corporation,
                corporation_id = id,
                "corporation resolved"
            );
            Some(id)
        }
        Err(err) => {
            error!("{err}");
            None
        }
    };

    Ok(AppState {
        sde,
        spinner,
        status_client: StatusClient::new(config.status_url.clone()),
        corporation_id,
        max_lines: config.max_lines,
        full_access_channels: config.full_access_channels.clone(),
    })
}

#[cfg(test)]
mod tests {
    use evespai_test_utils::prelude::*;

    use super::*;

    /// Expect the enabled sheet's ID back
    #[tokio::test]
    async fn resolves_configured_corporation() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::CorporationSheet)?;
        fixtures::spinner::insert_corporation(&test.db, 109_299_958, "C C P", true).await?;

        let id = resolve_corporation(&test.db, "C C P").await.unwrap();

        assert_eq!(id, 109_299_958);

        Ok(())
    }

    /// Expect CorporationNotConfigured for an empty name
    #[tokio::test]
    async fn empty_name_is_a_configuration_error() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::CorporationSheet)?;

        let result = resolve_corporation(&test.db, "").await;

        assert!(matches!(result, Err(Error::CorporationNotConfigured)));

        Ok(())
    }

    /// Expect CorporationNotFound when no enabled sheet matches
    #[tokio::test]
    async fn unknown_corporation_fails() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::CorporationSheet)?;
        fixtures::spinner::insert_corporation(&test.db, 98_000_001, "Other Corp", false).await?;

        let result = resolve_corporation(&test.db, "Other Corp").await;

        assert!(matches!(result, Err(Error::CorporationNotFound(name)) if name == "Other Corp"));

        Ok(())
    }
}
