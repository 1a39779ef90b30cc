use healthai::config::RecordsConfig;
use healthai::records::{InMemoryAppointmentBook, InMemoryHistoryLog, RecordsService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type InMemoryRecords = RecordsService<InMemoryHistoryLog, InMemoryAppointmentBook>;

/// Process-local record stores; everything is lost on restart.
pub(crate) fn in_memory_records(config: &RecordsConfig) -> Arc<InMemoryRecords> {
    Arc::new(RecordsService::new(
        Arc::new(InMemoryHistoryLog::default()),
        Arc::new(InMemoryAppointmentBook::default()),
        config.history_limit,
    ))
}

pub(crate) fn parse_percentage(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a percentage ({err})"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a finite percentage"))
    }
}
