//! # REPL
//!
//! Command language, session state and the read-render loop.
//! Parsing is pure; only `run` touches I/O.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod session;

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::Result;
use ast::Command;
pub use session::{Outcome, Session};

/// Parse one input line into its commands.
pub fn parse(line: &str) -> Result<Vec<Command>> {
    let tokens = lexer::tokenize(line)?;
    parser::parse_commands(&tokens)
}

/// Print the frame and a prompt, read a line, run it; repeat until `exit`
/// or end of input. Command errors are reported and the loop continues;
/// only I/O errors end it early.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, output: &mut W) -> Result<()> {
    let mut lines = input.lines();
    loop {
        writeln!(output, "{}", session.render_text()?)?;
        write!(output, "{}", session.config().prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            debug!("end of input");
            return Ok(());
        };
        let line = line?;

        let commands = match session.prepare_line(&line) {
            Ok(commands) => commands,
            Err(e) => {
                warn!(error = %e, "rejected input");
                writeln!(output, "error: {e}")?;
                continue;
            }
        };

        for command in &commands {
            match session.execute(command) {
                Ok(Outcome::Updated) => {}
                Ok(Outcome::Message(text)) => writeln!(output, "{text}")?,
                Ok(Outcome::Quit) => {
                    debug!("exit requested");
                    return Ok(());
                }
                Err(e) => {
                    warn!(error = %e, ?command, "command failed");
                    writeln!(output, "error: {e}")?;
                    break;
                }
            }
        }
    }
}
