//! JSON API consumed by the clinic dashboard and frontline worker apps.

mod handlers;


use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::records::{AppointmentBook, HistoryLog, RecordsService};

pub use handlers::{
    EducationQuery, FrontlineQuery, HospitalQuery, MedicineQuery, MedicineSuggestions,
    TranslateQuery,
};

/// Router builder exposing every domain endpoint under `/api`.
pub fn api_router<H, A>(service: Arc<RecordsService<H, A>>) -> Router
where
    H: HistoryLog + 'static,
    A: AppointmentBook + 'static,
{
    Router::new()
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/health-data", get(handlers::health_data))
        .route("/api/hospitals", get(handlers::hospitals))
        .route("/api/medicines", get(handlers::medicines))
        .route("/api/outbreak-alerts", get(handlers::outbreak_alerts))
        .route("/api/save-history", post(handlers::save_history::<H, A>))
        .route("/api/get-history", get(handlers::get_history::<H, A>))
        .route("/api/translate", get(handlers::translate))
        .route("/api/bmi", post(handlers::bmi))
        .route("/api/chatbot", post(handlers::chatbot))
        .route("/api/doctors", get(handlers::doctors))
        .route("/api/book-appointment", post(handlers::book_appointment::<H, A>))
        .route("/api/appointments", get(handlers::appointments::<H, A>))
        .route("/api/predict-outbreak", post(handlers::predict_outbreak))
        .route("/api/personal-risk", post(handlers::personal_risk))
        .route("/api/education", get(handlers::education))
        .route("/api/frontline-summary", get(handlers::frontline_summary))
        .with_state(service)
}
