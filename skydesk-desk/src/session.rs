use crate::command::{Command, Field, HELP};
use crate::error::DeskError;
use crate::printer::TicketPrinter;
use crate::render::render_table;
use skydesk_core::{BookingError, BookingStore, TicketId};
use std::io::Write;

/// Current contents of the booking form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub flight: String,
    pub from: String,
    pub to: String,
}

impl BookingForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Flight => self.flight = value,
            Field::From => self.from = value,
            Field::To => self.to = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One operator's desk: the store, the form, the selected row and the
/// printer tickets go to.
pub struct DeskSession<P: TicketPrinter> {
    store: BookingStore,
    form: BookingForm,
    selected: Option<TicketId>,
    printer: P,
}

impl<P: TicketPrinter> DeskSession<P> {
    pub fn new(printer: P) -> Self {
        Self {
            store: BookingStore::new(),
            form: BookingForm::default(),
            selected: None,
            printer,
        }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn selected(&self) -> Option<TicketId> {
        self.selected
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    /// Run one command, writing any visible result to `out`
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, DeskError> {
        tracing::debug!(?command, "Handling command");

        match command {
            Command::Set(field, value) => self.form.set(field, value),
            Command::ShowForm => {
                let f = self.form();
                writeln!(out, "Name:   {}\nFlight: {}\nFrom:   {}\nTo:     {}", f.name, f.flight, f.from, f.to)?;
            }
            Command::Book => {
                let f = &self.form;
                let ticket = self.store.book(&f.name, &f.flight, &f.from, &f.to);
                writeln!(out, "Issued ticket {}", ticket.id)?;
                self.write_table(out)?;
            }
            Command::Cancel => {
                let f = &self.form;
                let leg = self.store.cancel(&f.name, &f.flight, &f.from, &f.to)?;
                writeln!(out, "{} canceled booking: {} from {} to {}", f.name, leg.flight, leg.from, leg.to)?;
                self.write_table(out)?;
            }
            Command::Select(id) => {
                if self.store.position_of(id).is_none() {
                    return Err(DeskError::NotInTable(id));
                }
                self.selected = Some(id);
                writeln!(out, "Selected ticket {}", id)?;
            }
            Command::Delete => {
                let ticket = self.store.delete_at(self.selected_position())?;
                self.selected = None;
                writeln!(out, "Deleted ticket {}", ticket.id)?;
                self.write_table(out)?;
            }
            Command::Print => {
                let label = self.store.format_ticket(self.selected_position())?;
                let ticket_id = self.selected.ok_or(BookingError::NoSelection)?;
                self.printer.print(ticket_id, &label)
                    .map_err(|source| DeskError::Print { ticket_id, source })?;
                tracing::info!(ticket_id = %ticket_id, "Printed ticket");
            }
            Command::List => self.write_table(out)?,
            Command::Ledger => self.write_ledger(out)?,
            Command::Export => {
                serde_json::to_writer_pretty(&mut *out, &self.store.rows())?;
                writeln!(out)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    // Selection is held as a ticket id and joined to the table at use time
    fn selected_position(&self) -> Option<usize> {
        self.selected.and_then(|id| self.store.position_of(id))
    }

    fn write_ledger<W: Write>(&self, out: &mut W) -> Result<(), DeskError> {
        let Some(passenger) = self.store.current_passenger() else {
            writeln!(out, "No passenger")?;
            return Ok(());
        };
        writeln!(out, "Passenger Name: {}", passenger.name)?;
        if passenger.bookings.is_empty() {
            writeln!(out, "  (no bookings)")?;
        }
        for (i, leg) in passenger.bookings.iter().enumerate() {
            writeln!(out, "  {}. {} from {} to {}", i + 1, leg.flight, leg.from, leg.to)?;
        }
        Ok(())
    }

    fn write_table<W: Write>(&self, out: &mut W) -> Result<(), DeskError> {
        write!(out, "{}", render_table(&self.store.rows(), self.selected))?;
        Ok(())
    }
}
