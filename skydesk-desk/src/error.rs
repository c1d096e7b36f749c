use skydesk_core::{BookingError, TicketId};

#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("Error printing ticket {ticket_id}: {source}")]
    Print {
        ticket_id: TicketId,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown command: {0} (type `help`)")]
    UnknownCommand(String),

    #[error("Invalid ticket id: {0:?}")]
    InvalidTicketId(String),

    #[error("Ticket {0} is not in the table")]
    NotInTable(TicketId),

    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeskError {
    /// Whether the session can carry on after reporting this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DeskError::Io(_))
    }
}
