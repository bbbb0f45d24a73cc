//! Table generation.

use numtable_model::{Operation, Range, TableRow};

/// Generate the ordered rows for one (base, operation, range) triple.
///
/// Division and subtraction rows synthesize their left-hand operand from the
/// loop index so that the displayed expression's answer is the index itself
/// (`"21 ÷ 7" -> 3`, `"10 - 7" -> 3`). This mirrors the educational display
/// the explorer has always produced; it is intentionally not general
/// division or subtraction over arbitrary operands.
///
/// An inverted range yields an empty table. There are no error conditions.
pub fn generate_table(base: u64, operation: Operation, range: Range) -> Vec<TableRow> {
    let base = base as i64;
    let mut rows = Vec::with_capacity(range.len());
    for i in range.iter() {
        let row = match operation {
            Operation::Multiplication => TableRow::new(format!("{base} × {i}"), base * i),
            Operation::Division => TableRow::new(format!("{} ÷ {base}", base * i), i),
            Operation::Addition => TableRow::new(format!("{base} + {i}"), base + i),
            Operation::Subtraction => TableRow::new(format!("{} - {base}", base + i), i),
        };
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplication_table() {
        let rows = generate_table(7, Operation::Multiplication, Range::new(1, 3));
        assert_eq!(
            rows,
            vec![
                TableRow::new("7 × 1", 7),
                TableRow::new("7 × 2", 14),
                TableRow::new("7 × 3", 21),
            ]
        );
    }

    #[test]
    fn test_division_table_synthesizes_dividend() {
        let rows = generate_table(7, Operation::Division, Range::new(1, 3));
        assert_eq!(
            rows,
            vec![
                TableRow::new("7 ÷ 7", 1),
                TableRow::new("14 ÷ 7", 2),
                TableRow::new("21 ÷ 7", 3),
            ]
        );
    }

    #[test]
    fn test_addition_table() {
        let rows = generate_table(5, Operation::Addition, Range::new(2, 4));
        assert_eq!(
            rows,
            vec![
                TableRow::new("5 + 2", 7),
                TableRow::new("5 + 3", 8),
                TableRow::new("5 + 4", 9),
            ]
        );
    }

    #[test]
    fn test_subtraction_table_synthesizes_minuend() {
        let rows = generate_table(5, Operation::Subtraction, Range::new(2, 4));
        assert_eq!(
            rows,
            vec![
                TableRow::new("7 - 5", 2),
                TableRow::new("8 - 5", 3),
                TableRow::new("9 - 5", 4),
            ]
        );
    }

    #[test]
    fn test_inverted_range_yields_empty_table() {
        for operation in Operation::ALL {
            assert!(generate_table(9, operation, Range::new(10, 1)).is_empty());
        }
    }

    #[test]
    fn test_singleton_range_yields_single_row() {
        let rows = generate_table(3, Operation::Multiplication, Range::new(6, 6));
        assert_eq!(rows, vec![TableRow::new("3 × 6", 18)]);
    }

    #[test]
    fn test_negative_indices_are_valid() {
        let rows = generate_table(4, Operation::Multiplication, Range::new(-2, 0));
        assert_eq!(
            rows,
            vec![
                TableRow::new("4 × -2", -8),
                TableRow::new("4 × -1", -4),
                TableRow::new("4 × 0", 0),
            ]
        );
    }
}
