//! Builder functions for combining linear expressions.

use crate::expr::core::Expr;

/// Combines multiple expressions into a single expression by concatenating
/// all their linear terms and summing their constants.
///
/// Duplicate variable terms are NOT merged - use `normalized_terms()` on the
/// result if term consolidation is needed.
pub fn linear_sum(exprs: Vec<Expr>) -> Expr {
    let mut terms = Vec::new();
    let mut constant = 0.0;
    for expr in exprs {
        let (expr_terms, expr_constant) = expr.into_parts();
        terms.extend(expr_terms);
        constant += expr_constant;
    }
    Expr::new(terms, constant)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::linear_sum;
    use crate::VariableId;
    use crate::expr::Expr;

    #[test]
    fn linear_sum_accumulates_constants() {
        let summed = linear_sum(vec![
            Expr::term(VariableId::new(1), 1.0).add_constant(2.0),
            Expr::from_constant(3.0),
        ]);
        assert_eq!(summed.constant(), 5.0);
        assert_eq!(summed.terms().len(), 1);
    }

    #[test]
    fn linear_sum_of_nothing_is_empty() {
        let summed = linear_sum(Vec::new());
        assert!(summed.is_constant());
        assert_eq!(summed.constant(), 0.0);
    }
}
