use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;

/// A single flight leg recorded against a passenger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightLeg {
    pub flight: String,
    pub from: String,
    pub to: String,
}

impl FlightLeg {
    pub fn new(flight: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            flight: flight.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Exact, case-sensitive match on all three fields
    pub fn matches(&self, flight: &str, from: &str, to: &str) -> bool {
        self.flight == flight && self.from == from && self.to == to
    }
}

/// The passenger currently held by the desk and the legs they have booked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub bookings: Vec<FlightLeg>,
}

impl Passenger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bookings: Vec::new(),
        }
    }

    /// Record a leg. Duplicates are kept in insertion order.
    pub fn book_flight(&mut self, leg: FlightLeg) {
        self.bookings.push(leg);
    }

    /// Remove the first leg matching all fields. Returns the removed leg.
    pub fn cancel_booking(&mut self, flight: &str, from: &str, to: &str) -> Option<FlightLeg> {
        let index = self.bookings.iter()
            .position(|leg| leg.matches(flight, from, to))?;
        Some(self.bookings.remove(index))
    }
}

/// Process-unique ticket number, starting at 1 and never reused
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TicketId(pub u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TicketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TicketId)
    }
}

/// Immutable snapshot of a booking taken when the ticket was issued
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub passenger_name: String,
    pub flight: String,
    pub from: String,
    pub to: String,
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    pub(crate) fn issue(id: TicketId, passenger_name: &str, leg: &FlightLeg) -> Self {
        Self {
            id,
            passenger_name: passenger_name.to_string(),
            flight: leg.flight.clone(),
            from: leg.from.clone(),
            to: leg.to.clone(),
            issued_at: Utc::now(),
        }
    }

    /// Printable label, one field per line in a fixed order
    pub fn label(&self) -> String {
        format!(
            "Ticket ID: {}\nPassenger: {}\nFlight: {}\nFrom: {}\nTo: {}",
            self.id, self.passenger_name, self.flight, self.from, self.to
        )
    }

    pub fn to_row(&self) -> TicketRow {
        TicketRow {
            ticket_id: self.id,
            passenger_name: self.passenger_name.clone(),
            flight: self.flight.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

/// One row of the bookings table. Rows carry the ticket id so a selection
/// survives deletions elsewhere in the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub passenger_name: String,
    pub flight: String,
    pub from: String,
    pub to: String,
}

impl TicketRow {
    pub const COLUMNS: [&'static str; 5] = ["Ticket ID", "Passenger Name", "Flight", "From", "To"];

    pub fn cells(&self) -> [String; 5] {
        [
            self.ticket_id.to_string(),
            self.passenger_name.clone(),
            self.flight.clone(),
            self.from.clone(),
            self.to.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_removes_first_match_only() {
        let mut passenger = Passenger::new("Alice");
        passenger.book_flight(FlightLeg::new("AA100", "NYC", "LAX"));
        passenger.book_flight(FlightLeg::new("AA200", "LAX", "SFO"));
        passenger.book_flight(FlightLeg::new("AA100", "NYC", "LAX"));

        let removed = passenger.cancel_booking("AA100", "NYC", "LAX");

        assert_eq!(removed, Some(FlightLeg::new("AA100", "NYC", "LAX")));
        assert_eq!(passenger.bookings.len(), 2);
        assert_eq!(passenger.bookings[0].flight, "AA200");
        assert_eq!(passenger.bookings[1], FlightLeg::new("AA100", "NYC", "LAX"));
    }

    #[test]
    fn test_cancel_requires_exact_match() {
        let mut passenger = Passenger::new("Alice");
        passenger.book_flight(FlightLeg::new("AA100", "NYC", "LAX"));

        assert!(passenger.cancel_booking("aa100", "NYC", "LAX").is_none());
        assert!(passenger.cancel_booking("AA100", "NYC", "SFO").is_none());
        assert_eq!(passenger.bookings.len(), 1);
    }

    #[test]
    fn test_ticket_label_field_order() {
        let ticket = Ticket::issue(TicketId(7), "Bob", &FlightLeg::new("UA1", "SFO", "ORD"));

        assert_eq!(
            ticket.label(),
            "Ticket ID: 7\nPassenger: Bob\nFlight: UA1\nFrom: SFO\nTo: ORD"
        );
    }

    #[test]
    fn test_row_serializes_with_plain_ticket_id() {
        let ticket = Ticket::issue(TicketId(3), "Carol", &FlightLeg::new("DL5", "ATL", "BOS"));
        let json = serde_json::to_value(ticket.to_row()).unwrap();

        assert_eq!(json["ticket_id"], 3);
        assert_eq!(json["passenger_name"], "Carol");
        assert_eq!(ticket.to_row().cells()[0], "3");
    }

    #[test]
    fn test_ticket_id_parse() {
        assert_eq!(" 12 ".parse::<TicketId>().unwrap(), TicketId(12));
        assert!("abc".parse::<TicketId>().is_err());
    }
}
