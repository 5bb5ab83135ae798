//! Error types for sparse matrix operations

/// Algebraic operation whose dimension precondition failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    /// Lowercase operation name for error messages
    pub fn name(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        }
    }
}

/// Errors that can occur while building or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Malformed textual matrix description
    Format,
    /// Operand shapes violate the precondition of an algebraic operation
    DimensionMismatch(Operation),
    /// Entry coordinate outside the declared dimensions (strict mode only)
    IndexOutOfBounds,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::Format => write!(f, "Input file has wrong format"),
            MatrixError::DimensionMismatch(op) => {
                write!(f, "Matrix dimensions must agree for {}", op.name())
            }
            MatrixError::IndexOutOfBounds => write!(f, "Index out of bounds"),
        }
    }
}

/// Result type for core matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
