pub mod models;
pub mod registry;
pub mod store;

pub use models::{FlightLeg, Passenger, Ticket, TicketId, TicketRow};
pub use registry::TicketRegistry;
pub use store::BookingStore;

/// Recoverable conditions reported back to the operator. None of them
/// change stored data.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("No booking found for {name}: {flight} from {from} to {to}")]
    BookingNotFound {
        name: String,
        flight: String,
        from: String,
        to: String,
    },

    #[error("No ticket selected")]
    NoSelection,

    #[error("Row {index} is out of range ({len} tickets)")]
    OutOfRange {
        index: usize,
        len: usize,
    },

    #[error("Ticket not found: {0}")]
    TicketNotFound(TicketId),
}

pub type BookingResult<T> = Result<T, BookingError>;
