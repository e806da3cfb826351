//! Shared fixtures for evespai tests: in-memory database setup, row
//! factories for both external stores, and a mock status endpoint.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures, test_setup_with_tables, TestError, TestSetup};
}
