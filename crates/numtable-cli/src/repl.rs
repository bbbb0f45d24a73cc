//! Interactive explorer loop.
//!
//! Mirrors the reactive page the explorer started as: each command mutates
//! the input state, and every mutation re-runs the pure evaluation and
//! re-renders. The loop itself holds the only mutable state.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use numtable_cli::render::print_evaluation;
use numtable_core::evaluate;
use numtable_model::{InputState, Operation};

const HELP: &str = "\
Commands:
  <number>        set the base number (any text; invalid input shows why)
  op <name>       set the operation (multiplication, division, addition, subtraction)
  start <n>       set the first loop index
  end <n>         set the last loop index
  props           toggle the properties panel
  clear           clear the base number
  help            show this help
  quit            leave the explorer";

pub fn run_repl() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut state = InputState::default();

    println!("NumTable interactive explorer (type 'help' for commands)");
    print_evaluation(state.operation, &evaluate(&state));

    let mut line = String::new();
    loop {
        write!(stdout, "numtable> ").context("write prompt")?;
        stdout.flush().context("flush prompt")?;
        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("read command")?;
        if read == 0 {
            // EOF
            println!();
            return Ok(());
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        debug!(command = %input, "repl command");
        match apply_command(&mut state, input) {
            CommandOutcome::Quit => return Ok(()),
            CommandOutcome::Message(message) => println!("{message}"),
            CommandOutcome::Evaluate => {
                print_evaluation(state.operation, &evaluate(&state));
            }
        }
    }
}

enum CommandOutcome {
    /// Leave the loop.
    Quit,
    /// Print a message without re-evaluating.
    Message(String),
    /// State changed; re-evaluate and re-render.
    Evaluate,
}

fn apply_command(state: &mut InputState, input: &str) -> CommandOutcome {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };
    match command {
        "quit" | "exit" => CommandOutcome::Quit,
        "help" => CommandOutcome::Message(HELP.to_string()),
        "props" => {
            state.show_properties = !state.show_properties;
            CommandOutcome::Evaluate
        }
        "clear" => {
            state.number.clear();
            CommandOutcome::Evaluate
        }
        "op" => match rest.parse::<Operation>() {
            Ok(operation) => {
                state.operation = operation;
                CommandOutcome::Evaluate
            }
            Err(error) => CommandOutcome::Message(error),
        },
        "start" => match rest.parse::<i64>() {
            Ok(value) => {
                state.range.start = value;
                CommandOutcome::Evaluate
            }
            Err(_) => CommandOutcome::Message("start expects an integer".to_string()),
        },
        "end" => match rest.parse::<i64>() {
            Ok(value) => {
                state.range.end = value;
                CommandOutcome::Evaluate
            }
            Err(_) => CommandOutcome::Message("end expects an integer".to_string()),
        },
        // Bare input is the number field; validation happens in evaluate.
        _ if rest.is_empty() => {
            state.number = command.to_string();
            CommandOutcome::Evaluate
        }
        _ => CommandOutcome::Message(format!(
            "unknown command: {command} (type 'help' for commands)"
        )),
    }
}
