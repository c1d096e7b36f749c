use crate::models::{FlightLeg, Passenger, Ticket, TicketId, TicketRow};
use crate::registry::TicketRegistry;
use crate::{BookingError, BookingResult};

/// Holds the current passenger's ledger and the ticket registry, and runs
/// the desk operations against them.
///
/// Only one passenger is held at a time. Booking under a different name
/// replaces the held passenger with a fresh, empty ledger.
#[derive(Debug, Default)]
pub struct BookingStore {
    passenger: Option<Passenger>,
    registry: TicketRegistry,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the leg for `name` and issue a ticket for it
    pub fn book(&mut self, name: &str, flight: &str, from: &str, to: &str) -> Ticket {
        let leg = FlightLeg::new(flight, from, to);

        let passenger = match self.passenger.take() {
            Some(held) if held.name == name => self.passenger.insert(held),
            previous => {
                if let Some(previous) = previous {
                    tracing::debug!(previous = %previous.name, current = %name, "Switching held passenger");
                }
                self.passenger.insert(Passenger::new(name))
            }
        };
        passenger.book_flight(leg.clone());

        let ticket = self.registry.issue(name, &leg).clone();
        tracing::info!(
            ticket_id = %ticket.id,
            passenger = %name,
            flight = %flight,
            from = %from,
            to = %to,
            "Booked flight"
        );
        ticket
    }

    /// Remove the first matching ledger entry of the held passenger.
    /// Issued tickets are left alone.
    pub fn cancel(&mut self, name: &str, flight: &str, from: &str, to: &str) -> BookingResult<FlightLeg> {
        let removed = self.passenger.as_mut()
            .filter(|p| p.name == name)
            .and_then(|p| p.cancel_booking(flight, from, to));

        match removed {
            Some(leg) => {
                tracing::info!(passenger = %name, flight = %flight, from = %from, to = %to, "Canceled booking");
                Ok(leg)
            }
            None => {
                tracing::warn!(passenger = %name, flight = %flight, from = %from, to = %to, "No booking found to cancel");
                Err(BookingError::BookingNotFound {
                    name: name.to_string(),
                    flight: flight.to_string(),
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
        }
    }

    /// Delete the ticket at a table position. `None` means nothing is selected.
    pub fn delete_at(&mut self, index: Option<usize>) -> BookingResult<Ticket> {
        let index = self.resolve(index)?;
        let ticket = self.registry.remove_at(index)
            .ok_or(BookingError::OutOfRange { index, len: self.registry.len() })?;

        self.release_ledger_entry(&ticket);
        tracing::info!(ticket_id = %ticket.id, position = index, "Deleted ticket");
        Ok(ticket)
    }

    /// Delete a ticket by its id, wherever it sits in the table
    pub fn delete_ticket(&mut self, id: TicketId) -> BookingResult<Ticket> {
        let Some(index) = self.registry.position_of(id) else {
            tracing::warn!(ticket_id = %id, "Ticket not found");
            return Err(BookingError::TicketNotFound(id));
        };
        self.delete_at(Some(index))
    }

    /// Render the ticket at a table position as its printable label
    pub fn format_ticket(&self, index: Option<usize>) -> BookingResult<String> {
        let index = self.resolve(index)?;
        self.registry.get(index)
            .map(Ticket::label)
            .ok_or(BookingError::OutOfRange { index, len: self.registry.len() })
    }

    pub fn rows(&self) -> Vec<TicketRow> {
        self.registry.rows()
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.registry.tickets()
    }

    pub fn ticket(&self, id: TicketId) -> Option<&Ticket> {
        self.registry.find(id)
    }

    pub fn position_of(&self, id: TicketId) -> Option<usize> {
        self.registry.position_of(id)
    }

    pub fn current_passenger(&self) -> Option<&Passenger> {
        self.passenger.as_ref()
    }

    fn resolve(&self, index: Option<usize>) -> BookingResult<usize> {
        let index = match index {
            Some(i) if !self.registry.is_empty() => i,
            _ => {
                tracing::warn!("No ticket selected");
                return Err(BookingError::NoSelection);
            }
        };
        if index >= self.registry.len() {
            tracing::warn!(position = index, len = self.registry.len(), "Selection out of range");
            return Err(BookingError::OutOfRange { index, len: self.registry.len() });
        }
        Ok(index)
    }

    // Drops one ledger entry for the deleted ticket if it belongs to the held passenger
    fn release_ledger_entry(&mut self, ticket: &Ticket) {
        if let Some(passenger) = self.passenger.as_mut().filter(|p| p.name == ticket.passenger_name) {
            if passenger.cancel_booking(&ticket.flight, &ticket.from, &ticket.to).is_some() {
                tracing::debug!(ticket_id = %ticket.id, passenger = %passenger.name, "Released ledger entry");
            }
        }
    }
}
