use crate::models::{FlightLeg, Ticket, TicketId, TicketRow};

/// Ordered list of issued tickets plus the counter that numbers them
#[derive(Debug)]
pub struct TicketRegistry {
    tickets: Vec<Ticket>,
    last_id: u64,
}

impl TicketRegistry {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            last_id: 0,
        }
    }

    /// Allocate the next id and append a snapshot of the booking
    pub fn issue(&mut self, passenger_name: &str, leg: &FlightLeg) -> &Ticket {
        self.last_id += 1;
        let ticket = Ticket::issue(TicketId(self.last_id), passenger_name, leg);
        self.tickets.push(ticket);
        &self.tickets[self.tickets.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&Ticket> {
        self.tickets.get(index)
    }

    pub fn find(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn position_of(&self, id: TicketId) -> Option<usize> {
        self.tickets.iter().position(|t| t.id == id)
    }

    /// Remove by position, preserving the order of the remaining tickets
    pub fn remove_at(&mut self, index: usize) -> Option<Ticket> {
        if index < self.tickets.len() {
            Some(self.tickets.remove(index))
        } else {
            None
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn rows(&self) -> Vec<TicketRow> {
        self.tickets.iter().map(Ticket::to_row).collect()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

impl Default for TicketRegistry {
    fn default() -> Self {
        Self::new()
    }
}
