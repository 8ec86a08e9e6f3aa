use thiserror::Error;

/// Ошибки операций над многочленами.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error("division by the zero polynomial")]
    DivisionByZero,

    #[error("polynomial of length {length} does not fit into {capacity} value bits")]
    NumericOverflow { length: usize, capacity: u32 },

    #[error("unknown operation index {0}, expected 0 (add), 1 (mul) or 2 (div)")]
    UnknownOperation(usize),
}
