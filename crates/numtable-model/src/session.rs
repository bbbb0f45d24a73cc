//! Input snapshot and evaluation result for one UI transition.

use serde::{Deserialize, Serialize};

use crate::operation::Operation;
use crate::properties::NumberProperties;
use crate::range::Range;
use crate::table::TableRow;

/// Full snapshot of the interactive inputs.
///
/// The number is kept as raw text so validation stays a property of the
/// transition function, not of the state container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub number: String,
    pub operation: Operation,
    pub range: Range,
    pub show_properties: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            number: String::new(),
            operation: Operation::default(),
            range: Range::default(),
            show_properties: false,
        }
    }
}

/// Result of evaluating one input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Evaluation {
    /// No number entered yet. Not an error; front ends show an entry prompt.
    Idle,
    /// Non-empty input that is not a positive integer. Table and properties
    /// are cleared; `message` is surfaced verbatim.
    Invalid { input: String, message: String },
    /// A valid base number. `properties` is present only when the
    /// show-properties toggle is on.
    Ready {
        base: u64,
        table: Vec<TableRow>,
        properties: Option<NumberProperties>,
    },
}

impl Evaluation {
    pub fn is_ready(&self) -> bool {
        matches!(self, Evaluation::Ready { .. })
    }
}
