//! Expression types for optimization modeling.
//!
//! - `core`       — Expr: linear terms + constant
//! - `constraint` — ConstraintExpr: expression with comparison sense and RHS
//! - `builders`   — helpers for combining expressions
//! - `error`      — expression operation errors

pub mod builders;
pub mod constraint;
pub mod core;
pub mod error;

pub use builders::linear_sum;
pub use constraint::{ComparisonSense, ConstraintExpr};
pub use core::Expr;
pub use error::ExprError;
