use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied JSON object stored alongside the server-assigned fields.
pub type Payload = Map<String, Value>;

/// Saved triage visit. Server fields replace any same-named keys in the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: String,
    #[serde(flatten)]
    pub payload: Payload,
}

impl HistoryEntry {
    pub fn new(id: u64, timestamp: String, mut payload: Payload) -> Self {
        payload.remove("id");
        payload.remove("timestamp");
        Self {
            id,
            timestamp,
            payload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
}

/// Booked teleconsultation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub status: AppointmentStatus,
    pub booking_time: String,
    #[serde(flatten)]
    pub payload: Payload,
}

impl Appointment {
    pub fn confirmed(id: u64, booking_time: String, mut payload: Payload) -> Self {
        for reserved in ["id", "status", "booking_time"] {
            payload.remove(reserved);
        }
        Self {
            id,
            status: AppointmentStatus::Confirmed,
            booking_time,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn history_entry_overrides_client_supplied_id() {
        let entry = HistoryEntry::new(
            3,
            "2024-06-01 09:30".to_string(),
            payload(json!({"id": 99, "urgency": "LOW", "timestamp": "yesterday"})),
        );

        let value = serde_json::to_value(&entry).expect("serializes");
        assert_eq!(value, json!({"id": 3, "timestamp": "2024-06-01 09:30", "urgency": "LOW"}));
    }

    #[test]
    fn appointment_serializes_confirmed_status() {
        let appointment = Appointment::confirmed(
            1,
            "2024-06-01 10:00".to_string(),
            payload(json!({"doctor_id": 2, "slot": "9:30 AM", "status": "Pending"})),
        );

        let value = serde_json::to_value(&appointment).expect("serializes");
        assert_eq!(value["status"], "Confirmed");
        assert_eq!(value["doctor_id"], 2);
        assert_eq!(value["booking_time"], "2024-06-01 10:00");
    }
}
