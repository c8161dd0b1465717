use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MultiplyError {
    #[error("shape mismatch: left operand is {left:?}, right operand is {right:?}; both must be square and equal-sized")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("dimension {n} is not a power of two; Strassen multiplication requires n = 2^k")]
    NotPowerOfTwo { n: usize },
}
