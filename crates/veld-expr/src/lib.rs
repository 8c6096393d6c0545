pub mod expr;
pub mod ids;

pub use expr::{ComparisonSense, ConstraintExpr, Expr, ExprError, linear_sum};
pub use ids::VariableId;
