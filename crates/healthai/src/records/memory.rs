use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{Appointment, HistoryEntry, Payload};
use super::repository::{AppointmentBook, HistoryLog, RecordsError};

fn acquire<'a, T>(
    store: &'a Mutex<Vec<T>>,
    name: &str,
) -> Result<MutexGuard<'a, Vec<T>>, RecordsError> {
    store
        .lock()
        .map_err(|_| RecordsError::Unavailable(format!("{name} lock poisoned")))
}

fn next_id<T>(records: &[T]) -> u64 {
    records.len() as u64 + 1
}

/// Process-local history, lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryLog {
    entries: Arc<Mutex<Vec<HistoryEntry>>>,
}

impl HistoryLog for InMemoryHistoryLog {
    fn append(&self, timestamp: String, payload: Payload) -> Result<HistoryEntry, RecordsError> {
        let mut entries = acquire(&self.entries, "history")?;
        let entry = HistoryEntry::new(next_id(&entries), timestamp, payload);
        entries.push(entry.clone());
        Ok(entry)
    }

    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, RecordsError> {
        let entries = acquire(&self.entries, "history")?;
        let start = entries.len().saturating_sub(limit);
        Ok(entries[start..].to_vec())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointmentBook {
    appointments: Arc<Mutex<Vec<Appointment>>>,
}

impl AppointmentBook for InMemoryAppointmentBook {
    fn book(&self, booking_time: String, payload: Payload) -> Result<Appointment, RecordsError> {
        let mut appointments = acquire(&self.appointments, "appointments")?;
        let appointment = Appointment::confirmed(next_id(&appointments), booking_time, payload);
        appointments.push(appointment.clone());
        Ok(appointment)
    }

    fn all(&self) -> Result<Vec<Appointment>, RecordsError> {
        Ok(acquire(&self.appointments, "appointments")?.clone())
    }
}
