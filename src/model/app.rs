use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::status::StatusClient;

/// State shared by every command dispatch.
///
/// Both connections are owned pools; handlers borrow them per query. The
/// corporation ID is resolved once at startup and treated as immutable for
/// the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub sde: DatabaseConnection,
    pub spinner: DatabaseConnection,
    pub status_client: StatusClient,
    /// `None` when the corporation could not be resolved at startup; every
    /// corporation-scoped command then fails with a configuration reply.
    pub corporation_id: Option<i64>,
    pub max_lines: usize,
    pub full_access_channels: HashSet<String>,
}
