//! Substitution module

pub mod context;
pub mod expr;
pub mod types;

pub use context::LaunchContext;
pub use expr::Expr;
pub use types::{resolve_substitutions, Substitution};
