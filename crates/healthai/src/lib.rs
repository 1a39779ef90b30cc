//! Community health triage service.
//!
//! The scoring components ([`triage`], [`risk`], [`wellness`]) are pure functions over
//! immutable reference tables. [`catalog`] serves the static public-health datasets and
//! [`records`] keeps the in-memory visit history and appointment log behind the HTTP API
//! exposed by [`router`].

pub mod catalog;
pub mod config;
pub mod error;
mod numeric;
pub mod records;
pub mod risk;
pub mod router;
pub mod telemetry;
pub mod triage;
pub mod wellness;
