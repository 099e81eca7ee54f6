//! Error types for matrix operations

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Row, column or flat offset outside the matrix bounds
    InvalidIndex,
    /// Backing data length does not match `rows * columns`
    InvalidMatrixSize,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::InvalidIndex => "Index out of matrix bounds",
            MatrixError::InvalidMatrixSize => "Data length does not match matrix size",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
