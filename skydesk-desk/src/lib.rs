pub mod app_config;
pub mod command;
pub mod error;
pub mod printer;
pub mod render;
pub mod session;

pub use command::Command;
pub use error::DeskError;
pub use session::{DeskSession, Flow};

use app_config::DeskConfig;
use printer::TicketPrinter;
use std::io::{BufRead, Write};

/// Drive a session from line-oriented input until `quit` or EOF.
///
/// Recoverable errors are shown as a notice and the loop carries on;
/// only failures writing to `out` end the session early.
pub fn run<P, R, W>(session: &mut DeskSession<P>, desk: &DeskConfig, input: R, mut out: W) -> Result<(), DeskError>
where
    P: TicketPrinter,
    R: BufRead,
    W: Write,
{
    writeln!(out, "== {} ==", desk.title)?;
    writeln!(out, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        let outcome = Command::parse(&line).and_then(|cmd| match cmd {
            Some(cmd) => session.handle(cmd, &mut out),
            None => Ok(Flow::Continue),
        });

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, "Command failed");
                writeln!(out, "Notice: {}", e)?;
            }
            Err(e) => return Err(e),
        }
        out.flush()?;
    }

    writeln!(out, "{}", desk.footer)?;
    out.flush()?;
    Ok(())
}
