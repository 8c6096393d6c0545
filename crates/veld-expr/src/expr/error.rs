//! Expression operation errors.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprError {
    DivideByZero,
}

impl ExprError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ExprError::DivideByZero => "EXPR_DIVIDE_BY_ZERO",
        }
    }

    fn detail(&self) -> &'static str {
        match self {
            ExprError::DivideByZero => "Cannot divide an expression by zero",
        }
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.detail())
    }
}

impl std::error::Error for ExprError {}
