//! Variable entity errors.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableError {
    /// The variable has no solution value yet; no solver has assigned it.
    NotSolved,
    /// Freeze requires a solution value to pin the bounds to.
    FreezeUnsolved,
}

impl VariableError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            VariableError::NotSolved => "VARIABLE_NOT_SOLVED",
            VariableError::FreezeUnsolved => "VARIABLE_FREEZE_UNSOLVED",
        }
    }

    fn detail(&self) -> &'static str {
        match self {
            VariableError::NotSolved => "Variable has not been assigned a solution value",
            VariableError::FreezeUnsolved => {
                "Cannot freeze a variable before a solver assigns its value"
            }
        }
    }
}

impl std::fmt::Display for VariableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.detail())
    }
}

impl std::error::Error for VariableError {}

#[cfg(test)]
mod tests {
    use super::VariableError;

    #[test]
    fn error_code_is_stable() {
        assert_eq!(VariableError::NotSolved.code(), "VARIABLE_NOT_SOLVED");
        assert_eq!(
            VariableError::FreezeUnsolved.code(),
            "VARIABLE_FREEZE_UNSOLVED"
        );
    }

    #[test]
    fn display_prefixes_error_code() {
        let rendered = VariableError::NotSolved.to_string();
        assert!(rendered.starts_with("[VARIABLE_NOT_SOLVED]"));
    }
}
