use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumTableError {
    /// The entered value is non-empty but not a positive integer.
    ///
    /// The display text is the exact user-facing validation message; front
    /// ends surface it verbatim.
    #[error("Please enter a positive number")]
    InvalidNumberInput { input: String },
}

pub type Result<T> = std::result::Result<T, NumTableError>;
