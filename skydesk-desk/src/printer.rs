use crate::app_config::{PrinterConfig, PrinterKind};
use skydesk_core::TicketId;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

const RULE: &str = "----------------------------------------";

/// Output device for ticket labels. Stored bookings never depend on
/// whether printing succeeded.
pub trait TicketPrinter {
    fn print(&mut self, ticket_id: TicketId, label: &str) -> io::Result<()>;
}

impl<P: TicketPrinter + ?Sized> TicketPrinter for Box<P> {
    fn print(&mut self, ticket_id: TicketId, label: &str) -> io::Result<()> {
        (**self).print(ticket_id, label)
    }
}

/// Writes the label between two rules to any writer
pub struct ConsolePrinter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TicketPrinter for ConsolePrinter<W> {
    fn print(&mut self, _ticket_id: TicketId, label: &str) -> io::Result<()> {
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "{}", label)?;
        writeln!(self.out, "{}", RULE)?;
        self.out.flush()
    }
}

/// Drops one text file per printed ticket into a spool directory
pub struct SpoolPrinter {
    dir: PathBuf,
}

impl SpoolPrinter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, ticket_id: TicketId) -> PathBuf {
        self.dir.join(format!("ticket-{}.txt", ticket_id))
    }
}

impl TicketPrinter for SpoolPrinter {
    fn print(&mut self, ticket_id: TicketId, label: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(ticket_id);
        fs::write(&path, format!("{}\n", label))?;
        tracing::info!(ticket_id = %ticket_id, path = %path.display(), "Spooled ticket");
        Ok(())
    }
}

pub fn from_config(config: &PrinterConfig) -> Box<dyn TicketPrinter> {
    match config.kind {
        PrinterKind::Console => Box::new(ConsolePrinter::new(io::stdout())),
        PrinterKind::Spool => Box::new(SpoolPrinter::new(config.spool_dir.clone())),
    }
}
