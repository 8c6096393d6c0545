//! Expression conversion, arithmetic sugar, and relational builders.
//!
//! Every rule is implemented once, on [`Expr`]; everything here wraps the
//! variable into a single-term expression and forwards. Comparison
//! operators are deliberately absent: Rust comparison traits return
//! booleans, so the relational surface is the named builders, which
//! produce constraints. There is no not-equal builder anywhere, since
//! `variable != value` is not an expressible linear constraint.

use veld_expr::{ConstraintExpr, Expr};

use crate::variable::Variable;

impl From<&Variable> for Expr {
    /// Single-term expression with coefficient 1.0.
    fn from(variable: &Variable) -> Self {
        Expr::var(variable.id())
    }
}

impl Variable {
    /// This variable as a single-term expression.
    pub fn to_expr(&self) -> Expr {
        Expr::from(self)
    }

    /// Constraint `self <= rhs`, for a scalar, variable, or expression.
    pub fn less_or_equal(&self, rhs: impl Into<Expr>) -> ConstraintExpr {
        self.to_expr().le_expr(&rhs.into())
    }

    /// Constraint `self >= rhs`, for a scalar, variable, or expression.
    pub fn greater_or_equal(&self, rhs: impl Into<Expr>) -> ConstraintExpr {
        self.to_expr().ge_expr(&rhs.into())
    }

    /// Constraint `self == rhs`, for a scalar, variable, or expression.
    ///
    /// Equality here builds a constraint, not a boolean.
    pub fn equal_to(&self, rhs: impl Into<Expr>) -> ConstraintExpr {
        self.to_expr().eq_expr(&rhs.into())
    }
}

// ── Arithmetic operator sugar ───────────────────────────────

impl std::ops::Add<&Variable> for &Variable {
    type Output = Expr;

    fn add(self, rhs: &Variable) -> Expr {
        Expr::add(&self.to_expr(), &rhs.to_expr())
    }
}

impl std::ops::Add<f64> for &Variable {
    type Output = Expr;

    fn add(self, rhs: f64) -> Expr {
        self.to_expr().add_constant(rhs)
    }
}

impl std::ops::Add<&Variable> for f64 {
    type Output = Expr;

    fn add(self, rhs: &Variable) -> Expr {
        rhs.to_expr().add_constant(self)
    }
}

impl std::ops::Add<Expr> for &Variable {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::add(&self.to_expr(), &rhs)
    }
}

impl std::ops::Add<&Variable> for Expr {
    type Output = Expr;

    fn add(self, rhs: &Variable) -> Expr {
        Expr::add(&self, &rhs.to_expr())
    }
}

impl std::ops::Sub<&Variable> for &Variable {
    type Output = Expr;

    fn sub(self, rhs: &Variable) -> Expr {
        self.to_expr().subtract(&rhs.to_expr())
    }
}

impl std::ops::Sub<f64> for &Variable {
    type Output = Expr;

    fn sub(self, rhs: f64) -> Expr {
        self.to_expr().add_constant(-rhs)
    }
}

impl std::ops::Sub<&Variable> for f64 {
    type Output = Expr;

    fn sub(self, rhs: &Variable) -> Expr {
        Expr::from_constant(self).subtract(&rhs.to_expr())
    }
}

impl std::ops::Sub<Expr> for &Variable {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        self.to_expr().subtract(&rhs)
    }
}

impl std::ops::Sub<&Variable> for Expr {
    type Output = Expr;

    fn sub(self, rhs: &Variable) -> Expr {
        Expr::subtract(&self, &rhs.to_expr())
    }
}

impl std::ops::Mul<f64> for &Variable {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Expr {
        Expr::term(self.id(), rhs)
    }
}

impl std::ops::Mul<&Variable> for f64 {
    type Output = Expr;

    fn mul(self, rhs: &Variable) -> Expr {
        Expr::term(rhs.id(), self)
    }
}

impl std::ops::Neg for &Variable {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::term(self.id(), -1.0)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::registry::VariableRegistry;
    use crate::types::VariableKind;
    use crate::variable::Variable;
    use veld_expr::{ComparisonSense, Expr};

    fn pair() -> (Variable, Variable) {
        let registry = VariableRegistry::new();
        let x = Variable::named(&registry, "x", VariableKind::Continuous);
        let y = Variable::named(&registry, "y", VariableKind::Continuous);
        (x, y)
    }

    #[test]
    fn variable_converts_to_unit_term() {
        let (x, _) = pair();
        let expr = x.to_expr();
        assert_eq!(expr.terms(), &[(x.id(), 1.0)]);
        assert_eq!(expr.constant(), 0.0);
    }

    #[test]
    fn addition_forwards_to_expr() {
        let (x, y) = pair();

        let sum = &x + &y;
        assert_eq!(sum.terms(), &[(x.id(), 1.0), (y.id(), 1.0)]);

        let shifted = &x + 3.0;
        assert_eq!(shifted.constant(), 3.0);

        let shifted = 3.0 + &x;
        assert_eq!(shifted.constant(), 3.0);
        assert_eq!(shifted.terms(), &[(x.id(), 1.0)]);

        let mixed = &x + Expr::term(y.id(), 2.0);
        assert_eq!(mixed.terms(), &[(x.id(), 1.0), (y.id(), 2.0)]);
    }

    #[test]
    fn subtraction_forwards_to_expr() {
        let (x, y) = pair();

        let diff = &x - &y;
        assert_eq!(diff.terms(), &[(x.id(), 1.0), (y.id(), -1.0)]);

        let diff = &x - 2.0;
        assert_eq!(diff.constant(), -2.0);

        let diff = 2.0 - &x;
        assert_eq!(diff.constant(), 2.0);
        assert_eq!(diff.terms(), &[(x.id(), -1.0)]);

        let diff = Expr::var(x.id()) - &y;
        assert_eq!(diff.terms(), &[(x.id(), 1.0), (y.id(), -1.0)]);
    }

    #[test]
    fn scaling_and_negation() {
        let (x, _) = pair();

        let scaled = 2.0 * &x;
        assert_eq!(scaled.terms(), &[(x.id(), 2.0)]);

        let scaled = &x * 0.5;
        assert_eq!(scaled.terms(), &[(x.id(), 0.5)]);

        let negated = -&x;
        assert_eq!(negated.terms(), &[(x.id(), -1.0)]);
    }

    #[test]
    fn chained_sums_mix_variables_and_expressions() {
        let (x, y) = pair();

        // variable + variable feeds variable + expression
        let total = &x + (&y + Expr::term(x.id(), 2.0));
        let normalized = total.normalized_terms();
        assert_eq!(normalized, vec![(x.id(), 3.0), (y.id(), 1.0)]);
        assert_eq!(total.constant(), 0.0);

        let shifted = &x + (&y + 1.5);
        assert_eq!(shifted.constant(), 1.5);
        assert_eq!(shifted.terms(), &[(x.id(), 1.0), (y.id(), 1.0)]);
    }

    #[test]
    fn relational_builders_produce_constraints() {
        let (x, y) = pair();

        let le = x.less_or_equal(5.0);
        assert_eq!(le.sense(), ComparisonSense::LessEqual);
        assert_eq!(le.rhs(), 5.0);
        assert_eq!(le.expr().terms(), &[(x.id(), 1.0)]);

        let ge = x.greater_or_equal(&y);
        assert_eq!(ge.sense(), ComparisonSense::GreaterEqual);
        assert_eq!(ge.rhs(), 0.0);
        assert_eq!(ge.expr().terms(), &[(x.id(), 1.0), (y.id(), -1.0)]);

        let eq = x.equal_to(&y + 4.0);
        assert_eq!(eq.sense(), ComparisonSense::Equal);
        assert_eq!(eq.rhs(), 4.0);
    }

    #[test]
    fn builders_match_direct_expr_calls() {
        let (x, _) = pair();
        let via_variable = x.less_or_equal(5.0);
        let via_expr = Expr::var(x.id()).le_scalar(5.0);
        assert_eq!(via_variable.sense(), via_expr.sense());
        assert_eq!(via_variable.rhs(), via_expr.rhs());
        assert_eq!(via_variable.expr().terms(), via_expr.expr().terms());
    }
}
