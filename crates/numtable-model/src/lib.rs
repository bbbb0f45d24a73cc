pub mod error;
pub mod operation;
pub mod properties;
pub mod range;
pub mod session;
pub mod table;

pub use error::{NumTableError, Result};
pub use operation::Operation;
pub use properties::NumberProperties;
pub use range::Range;
pub use session::{Evaluation, InputState};
pub use table::TableRow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_round_trips_through_str() {
        for operation in Operation::ALL {
            let parsed: Operation = operation.as_str().parse().expect("parse operation");
            assert_eq!(parsed, operation);
        }
    }

    #[test]
    fn evaluation_serializes() {
        let evaluation = Evaluation::Ready {
            base: 7,
            table: vec![TableRow {
                operation: "7 × 1".to_string(),
                result: 7,
            }],
            properties: None,
        };
        let json = serde_json::to_string(&evaluation).expect("serialize evaluation");
        let round: Evaluation = serde_json::from_str(&json).expect("deserialize evaluation");
        match round {
            Evaluation::Ready { base, table, .. } => {
                assert_eq!(base, 7);
                assert_eq!(table.len(), 1);
            }
            other => panic!("unexpected evaluation: {other:?}"),
        }
    }
}
