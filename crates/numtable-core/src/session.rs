//! The pure input-to-output transition.

use tracing::debug;

use numtable_model::{Evaluation, InputState};

use crate::properties::compute_properties;
use crate::table::generate_table;
use crate::validate::parse_base;

/// Evaluate one input snapshot into a fresh render state.
///
/// This is the single entry point for front ends: every input event rebuilds
/// the table and (when toggled on) the properties in full. There is no
/// caching and no partial update; the output depends only on `state`.
pub fn evaluate(state: &InputState) -> Evaluation {
    let base = match parse_base(&state.number) {
        Ok(Some(base)) => base,
        Ok(None) => {
            debug!("empty input, idle state");
            return Evaluation::Idle;
        }
        Err(error) => {
            debug!(input = %state.number, "invalid number input");
            return Evaluation::Invalid {
                input: state.number.clone(),
                message: error.to_string(),
            };
        }
    };
    let table = generate_table(base, state.operation, state.range);
    let properties = state.show_properties.then(|| compute_properties(base));
    debug!(
        base,
        operation = %state.operation,
        rows = table.len(),
        with_properties = properties.is_some(),
        "evaluated input state"
    );
    Evaluation::Ready {
        base,
        table,
        properties,
    }
}
