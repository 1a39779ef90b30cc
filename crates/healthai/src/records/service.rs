use std::sync::Arc;

use chrono::Local;
use tracing::info;

use super::domain::{Appointment, HistoryEntry, Payload};
use super::repository::{AppointmentBook, HistoryLog, RecordsError};

/// Local wall-clock stamp attached to saved records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Composes the history log and appointment book behind the HTTP handlers.
pub struct RecordsService<H, A> {
    history: Arc<H>,
    appointments: Arc<A>,
    history_limit: usize,
}

impl<H, A> RecordsService<H, A>
where
    H: HistoryLog + 'static,
    A: AppointmentBook + 'static,
{
    pub fn new(history: Arc<H>, appointments: Arc<A>, history_limit: usize) -> Self {
        Self {
            history,
            appointments,
            history_limit,
        }
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn save_history(&self, payload: Payload) -> Result<HistoryEntry, RecordsError> {
        let entry = self.history.append(now_stamp(), payload)?;
        info!(id = entry.id, "history entry saved");
        Ok(entry)
    }

    /// Newest `history_limit` entries, oldest first.
    pub fn recent_history(&self) -> Result<Vec<HistoryEntry>, RecordsError> {
        self.history.recent(self.history_limit)
    }

    pub fn book_appointment(&self, payload: Payload) -> Result<Appointment, RecordsError> {
        let appointment = self.appointments.book(now_stamp(), payload)?;
        info!(id = appointment.id, "appointment confirmed");
        Ok(appointment)
    }

    pub fn appointments(&self) -> Result<Vec<Appointment>, RecordsError> {
        self.appointments.all()
    }
}

fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use serde_json::json;

    use super::*;
    use crate::records::memory::{InMemoryAppointmentBook, InMemoryHistoryLog};

    fn service(limit: usize) -> RecordsService<InMemoryHistoryLog, InMemoryAppointmentBook> {
        RecordsService::new(
            Arc::new(InMemoryHistoryLog::default()),
            Arc::new(InMemoryAppointmentBook::default()),
            limit,
        )
    }

    fn visit(urgency: &str) -> Payload {
        let mut payload = Payload::new();
        payload.insert("urgency".into(), json!(urgency));
        payload
    }

    #[test]
    fn saved_history_is_stamped_with_minute_precision() {
        let service = service(10);
        let entry = service.save_history(visit("LOW")).expect("save");

        assert_eq!(entry.id, 1);
        assert!(NaiveDateTime::parse_from_str(&entry.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(entry.payload["urgency"], "LOW");
    }

    #[test]
    fn recent_history_honours_configured_limit() {
        let service = service(2);
        for urgency in ["LOW", "MODERATE", "HIGH"] {
            service.save_history(visit(urgency)).expect("save");
        }

        let recent = service.recent_history().expect("recent");
        let urgencies: Vec<_> = recent.iter().map(|entry| entry.payload["urgency"].clone()).collect();
        assert_eq!(urgencies, vec![json!("MODERATE"), json!("HIGH")]);
    }

    #[test]
    fn appointments_are_listed_in_booking_order() {
        let service = service(10);
        service.book_appointment(visit("a")).expect("book");
        service.book_appointment(visit("b")).expect("book");

        let all = service.appointments().expect("list");
        assert_eq!(all.iter().map(|appointment| appointment.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(NaiveDateTime::parse_from_str(&all[0].booking_time, TIMESTAMP_FORMAT).is_ok());
    }
}
