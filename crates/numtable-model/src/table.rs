use serde::{Deserialize, Serialize};

/// One generated table row: a display expression and its result.
///
/// Rows are ephemeral and recomputed in full whenever any input changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Display expression, e.g. `"7 × 3"` or `"21 ÷ 7"`.
    pub operation: String,
    /// Result of the expression.
    pub result: i64,
}

impl TableRow {
    pub fn new(operation: impl Into<String>, result: i64) -> Self {
        Self {
            operation: operation.into(),
            result,
        }
    }
}
