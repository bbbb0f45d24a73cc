//! Integration tests for the session transition function.

use numtable_core::evaluate;
use numtable_model::{Evaluation, InputState, Operation, Range, TableRow};

fn snapshot(number: &str, operation: Operation, range: Range) -> InputState {
    InputState {
        number: number.to_string(),
        operation,
        range,
        show_properties: true,
    }
}

#[test]
fn multiplication_scenario() {
    let state = snapshot("7", Operation::Multiplication, Range::new(1, 3));
    match evaluate(&state) {
        Evaluation::Ready { base, table, .. } => {
            assert_eq!(base, 7);
            assert_eq!(
                table,
                vec![
                    TableRow::new("7 × 1", 7),
                    TableRow::new("7 × 2", 14),
                    TableRow::new("7 × 3", 21),
                ]
            );
        }
        other => panic!("unexpected evaluation: {other:?}"),
    }
}

#[test]
fn inverted_range_produces_empty_table_not_error() {
    let state = snapshot("7", Operation::Addition, Range::new(5, 2));
    match evaluate(&state) {
        Evaluation::Ready { table, .. } => assert!(table.is_empty()),
        other => panic!("unexpected evaluation: {other:?}"),
    }
}

#[test]
fn properties_scenario_for_twelve() {
    let state = snapshot("12", Operation::Multiplication, Range::new(1, 12));
    match evaluate(&state) {
        Evaluation::Ready { properties, .. } => {
            let props = properties.expect("properties requested");
            assert_eq!(props.divisors, vec![1, 2, 3, 4, 6, 12]);
            assert!(!props.is_prime);
            assert!(props.is_even);
            assert_eq!(props.prime_factorization, vec![(2, 2), (3, 1)]);
            assert_eq!(props.factorization_expression(12), "2^2 × 3 = 12");
        }
        other => panic!("unexpected evaluation: {other:?}"),
    }
}

#[test]
fn prime_scenario_for_thirteen() {
    let state = snapshot("13", Operation::Multiplication, Range::new(1, 1));
    match evaluate(&state) {
        Evaluation::Ready { properties, .. } => {
            let props = properties.expect("properties requested");
            assert_eq!(props.divisors, vec![1, 13]);
            assert!(props.is_prime);
        }
        other => panic!("unexpected evaluation: {other:?}"),
    }
}

#[test]
fn negative_input_is_invalid_with_static_message() {
    let state = snapshot("-5", Operation::Multiplication, Range::new(1, 12));
    assert_eq!(
        evaluate(&state),
        Evaluation::Invalid {
            input: "-5".to_string(),
            message: "Please enter a positive number".to_string(),
        }
    );
}

#[test]
fn empty_input_is_idle_not_invalid() {
    let state = snapshot("", Operation::Multiplication, Range::new(1, 12));
    assert_eq!(evaluate(&state), Evaluation::Idle);
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let state = snapshot("36", Operation::Division, Range::new(1, 6));
    assert_eq!(evaluate(&state), evaluate(&state));
}
