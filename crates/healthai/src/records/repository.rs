use super::domain::{Appointment, HistoryEntry, Payload};

/// Append-only visit log.
pub trait HistoryLog: Send + Sync {
    /// Stores the payload under the next sequence id (`len + 1`).
    fn append(&self, timestamp: String, payload: Payload) -> Result<HistoryEntry, RecordsError>;
    /// The newest `limit` entries, oldest first.
    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, RecordsError>;
}

/// Append-only appointment ledger.
pub trait AppointmentBook: Send + Sync {
    fn book(&self, booking_time: String, payload: Payload) -> Result<Appointment, RecordsError>;
    fn all(&self) -> Result<Vec<Appointment>, RecordsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}
