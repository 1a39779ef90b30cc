//! Visit history and telemedicine appointments.
//!
//! Records are free-form JSON objects stamped with a sequence id and a local
//! timestamp. Storage sits behind [`HistoryLog`] and [`AppointmentBook`] so the
//! router can be exercised against the in-memory stores or a failing double.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod service;

pub use domain::{Appointment, AppointmentStatus, HistoryEntry, Payload};
pub use memory::{InMemoryAppointmentBook, InMemoryHistoryLog};
pub use repository::{AppointmentBook, HistoryLog, RecordsError};
pub use service::{RecordsService, TIMESTAMP_FORMAT};
