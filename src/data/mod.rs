//! Data access layer repositories.
//!
//! Repositories provide typed queries over the two external stores: `sde`
//! for static universe reference data, `spinner` for corporation-scoped
//! stationspinner data. Rows become typed entity models here; nothing
//! above this layer touches raw rows.

use sea_orm::sea_query::{Expr, ExprTrait, Func, SimpleExpr};
use sea_orm::ColumnTrait;

pub mod sde;
pub mod spinner;

/// Case-insensitive LIKE over `col`, matching Postgres ILIKE semantics on
/// every backend. Caller-supplied `%`/`_` wildcards pass through.
pub(crate) fn ilike<C: ColumnTrait>(col: C, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(pattern.to_lowercase())
}
