//! Terminal rendering for tables and property panels.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use numtable_model::{Evaluation, NumberProperties, Operation, TableRow};

/// Prompt shown while no number has been entered.
pub const IDLE_PROMPT: &str = "Enter a number to generate tables";

/// Print one evaluation: the idle prompt, the validation message, or the
/// generated table followed by the properties panel when present.
pub fn print_evaluation(operation: Operation, evaluation: &Evaluation) {
    match evaluation {
        Evaluation::Idle => println!("{IDLE_PROMPT}"),
        Evaluation::Invalid { message, .. } => println!("{message}"),
        Evaluation::Ready {
            base,
            table,
            properties,
        } => {
            print_table(*base, operation, table);
            if let Some(props) = properties {
                println!();
                print_properties(*base, props);
            }
        }
    }
}

/// Print the generated table under its "<Label> Table for <base>" heading.
pub fn print_table(base: u64, operation: Operation, rows: &[TableRow]) {
    println!("{} Table for {base}", operation.label());
    println!("{}", table_output(rows));
}

/// Render the generated rows as a bordered two-column table.
pub fn table_output(rows: &[TableRow]) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Operation"), header_cell("Result")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.operation),
            Cell::new(row.result)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table.to_string()
}

/// Print the properties panel for a base number.
pub fn print_properties(base: u64, props: &NumberProperties) {
    println!("Properties of {base}");
    println!("{}", properties_output(base, props));
}

/// Render the properties panel as a bordered property/value table.
pub fn properties_output(base: u64, props: &NumberProperties) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_panel_style(&mut table);
    table.add_row(vec![Cell::new("Parity"), Cell::new(parity_sentence(base, props))]);
    table.add_row(vec![
        Cell::new("Prime"),
        Cell::new(primality_sentence(base, props)),
    ]);
    table.add_row(vec![Cell::new("Sum of digits"), Cell::new(props.digit_sum)]);
    table.add_row(vec![Cell::new("Factors"), Cell::new(factor_chips(props))]);
    table.add_row(vec![
        Cell::new("Prime factorization"),
        Cell::new(props.factorization_expression(base)).fg(Color::Blue),
    ]);
    table.to_string()
}

/// Parity sentence, e.g. "12 is even".
pub fn parity_sentence(base: u64, props: &NumberProperties) -> String {
    format!("{base} is {}", if props.is_even { "even" } else { "odd" })
}

/// Primality sentence, e.g. "12 is not a prime number".
pub fn primality_sentence(base: u64, props: &NumberProperties) -> String {
    format!(
        "{base} is {}a prime number",
        if props.is_prime { "" } else { "not " }
    )
}

/// Divisors rendered as a single chip row.
pub fn factor_chips(props: &NumberProperties) -> String {
    props
        .divisors
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_panel_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
