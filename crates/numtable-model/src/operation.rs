//! The fixed set of table operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Table operation selected by the user.
///
/// Division and subtraction tables synthesize their left-hand operand from
/// the loop index (see the table generator); the enum itself carries no
/// arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Multiplication,
    Division,
    Addition,
    Subtraction,
}

impl Operation {
    /// All operations in presentation order.
    pub const ALL: [Operation; 4] = [
        Operation::Multiplication,
        Operation::Division,
        Operation::Addition,
        Operation::Subtraction,
    ];

    /// Lowercase wire name as used in serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
        }
    }

    /// Capitalized display label, used in table headings.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
        }
    }

    /// Symbol shown between operands in generated rows.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Multiplication => "×",
            Operation::Division => "÷",
            Operation::Addition => "+",
            Operation::Subtraction => "-",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Parse an operation name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "multiplication" => Ok(Operation::Multiplication),
            "division" => Ok(Operation::Division),
            "addition" => Ok(Operation::Addition),
            "subtraction" => Ok(Operation::Subtraction),
            _ => Err(format!("Unknown operation: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_from_str() {
        assert_eq!(
            "multiplication".parse::<Operation>().unwrap(),
            Operation::Multiplication
        );
        assert_eq!(
            "DIVISION".parse::<Operation>().unwrap(),
            Operation::Division
        );
        assert_eq!(
            " subtraction ".parse::<Operation>().unwrap(),
            Operation::Subtraction
        );
        assert!("modulo".parse::<Operation>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Operation::Addition.label(), "Addition");
        assert_eq!(Operation::Multiplication.symbol(), "×");
    }
}
