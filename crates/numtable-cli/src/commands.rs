//! Subcommand entry points.

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use numtable_cli::render::{apply_table_style, print_evaluation, print_properties};
use numtable_core::{evaluate, generate_table};
use numtable_model::{Evaluation, InputState, Operation, Range};

use crate::cli::{PropertiesArgs, TableArgs};

pub fn run_table(args: &TableArgs) -> Result<i32> {
    let operation: Operation = args.op.into();
    let state = InputState {
        number: args.number.clone(),
        operation,
        range: Range::new(args.start, args.end),
        show_properties: args.properties,
    };
    info!(
        number = %state.number,
        operation = %operation,
        start = state.range.start,
        end = state.range.end,
        "generating table"
    );
    let evaluation = evaluate(&state);
    if let Evaluation::Invalid { message, .. } = &evaluation {
        eprintln!("error: {message}");
        return Ok(1);
    }
    if args.json {
        let json =
            serde_json::to_string_pretty(&evaluation).context("serialize evaluation")?;
        println!("{json}");
    } else {
        print_evaluation(operation, &evaluation);
    }
    Ok(0)
}

pub fn run_properties(args: &PropertiesArgs) -> Result<i32> {
    let state = InputState {
        number: args.number.clone(),
        show_properties: true,
        ..InputState::default()
    };
    match evaluate(&state) {
        Evaluation::Idle => {
            println!("{}", numtable_cli::render::IDLE_PROMPT);
            Ok(0)
        }
        Evaluation::Invalid { message, .. } => {
            eprintln!("error: {message}");
            Ok(1)
        }
        Evaluation::Ready {
            base, properties, ..
        } => {
            // show_properties is set above, so properties is always present.
            let props =
                properties.unwrap_or_else(|| numtable_core::compute_properties(base));
            debug!(base, divisors = props.divisors.len(), "computed properties");
            if args.json {
                let json =
                    serde_json::to_string_pretty(&props).context("serialize properties")?;
                println!("{json}");
            } else {
                print_properties(base, &props);
            }
            Ok(0)
        }
    }
}

pub fn run_operations() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Operation", "Label", "Example"]);
    apply_table_style(&mut table);
    for operation in Operation::ALL {
        let example = generate_table(7, operation, Range::new(3, 3))
            .into_iter()
            .map(|row| format!("{} = {}", row.operation, row.result))
            .next()
            .unwrap_or_default();
        table.add_row(vec![
            operation.as_str().to_string(),
            operation.label().to_string(),
            example,
        ]);
    }
    println!("{table}");
    Ok(())
}
