use thiserror::Error;

/// Errors surfaced while preparing test state.
#[derive(Debug, Error)]
pub enum TestError {
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
