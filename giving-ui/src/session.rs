//! Line-oriented event loop driving one [`Widget`].
//!
//! Each input line is one event and runs to completion (parse, edit,
//! re-render) before the next line is read.
//!
//! | Line                 | Effect                                      |
//! |----------------------|---------------------------------------------|
//! | `day 10`, `week=25`  | type the value into that field              |
//! | `month=`, `year`     | clear that field (other fields keep values) |
//! | `show`               | print the five fields                       |
//! | `table`              | print the full table                        |
//! | `help`               | list commands                               |
//! | `quit`, `exit`       | end the session                             |

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use giving_core::Denomination;
use giving_core::calculations::EditOutcome;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::app::Widget;
use crate::render::render_fields;

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<field>[A-Za-z]+)(?:\s*=\s*|\s+)(?P<value>.*?)\s*$")
        .expect("assignment pattern is valid")
});

const HELP: &str = "\
Commands:
  <field> <amount>   type an amount into day, week, month, year or total
  <field>=<amount>   same as above; an empty amount clears the field
  show               print the five fields
  table              print the full table
  help               print this message
  quit               leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit {
        denomination: Denomination,
        value: String,
    },
    Show,
    Table,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown field '{0}' (expected day, week, month, year or total)")]
    UnknownField(String),

    #[error("unrecognised command '{0}' (try 'help')")]
    Unrecognised(String),
}

/// Parses `field=value` or `field value` into the field and the typed text.
pub fn parse_assignment(line: &str) -> Result<(Denomination, String), CommandError> {
    let captures = ASSIGNMENT
        .captures(line)
        .ok_or_else(|| CommandError::Unrecognised(line.trim().to_string()))?;
    let field = &captures["field"];
    let denomination =
        Denomination::parse(field).ok_or_else(|| CommandError::UnknownField(field.to_string()))?;

    Ok((denomination, captures["value"].to_string()))
}

/// Parses one line of session input.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let word = line.trim();
    match word.to_ascii_lowercase().as_str() {
        "show" => return Ok(Command::Show),
        "table" => return Ok(Command::Table),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }
    if let Some(denomination) = Denomination::parse(word) {
        return Ok(Command::Edit {
            denomination,
            value: String::new(),
        });
    }
    parse_assignment(line).map(|(denomination, value)| Command::Edit {
        denomination,
        value,
    })
}

/// Applies one command to `widget`, writing any output to `out`.
///
/// Returns `false` when the session should end.
pub fn apply<W: Write>(
    widget: &mut Widget,
    command: Command,
    out: &mut W,
) -> Result<bool> {
    match command {
        Command::Edit {
            denomination,
            value,
        } => match widget.edit(denomination, &value) {
            Ok(EditOutcome::Propagated { total }) => {
                debug!(%denomination, %total, "edit propagated");
                writeln!(out, "{}", widget.render())?;
            }
            Ok(EditOutcome::Ignored(_)) => {
                writeln!(out, "{}", render_fields(widget.synchronizer().state()))?;
            }
            Err(rejected) => {
                writeln!(out, "{denomination}: {rejected}")?;
            }
        },
        Command::Show => writeln!(out, "{}", render_fields(widget.synchronizer().state()))?,
        Command::Table => writeln!(out, "{}", widget.render())?,
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Runs the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    widget: &mut Widget,
) -> Result<()> {
    writeln!(out, "{}", widget.render())?;
    writeln!(out, "Type 'help' for commands.")?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let keep_going = match parse_command(&line) {
            Ok(command) => apply(widget, command, out)?,
            Err(e) => {
                warn!(%e, "ignoring input line");
                writeln!(out, "{e}")?;
                true
            }
        };
        out.flush()?;

        if !keep_going {
            break;
        }
    }
    Ok(())
}
