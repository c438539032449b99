use thiserror::Error;

/// Top-level error type for the console engine core.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Errors related to vector computations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience type alias for results using [`ConsoleError`].
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn math_error_converts_transparently() {
        let err: ConsoleError = MathError::ZeroVector.into();
        assert_eq!(err.to_string(), "zero-length vector");
        assert!(matches!(err, ConsoleError::Math(MathError::ZeroVector)));
    }

    #[test]
    fn division_by_zero_message() {
        assert_eq!(MathError::DivisionByZero.to_string(), "division by zero");
    }
}
