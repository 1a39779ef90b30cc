use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::catalog::{
    self, education_articles, hospitals_for, medicine_suggestions, translations_for, Doctor,
    EducationView, FrontlineSummary, HealthData, Hospital, Language, OutbreakAlert, Translation,
};
use crate::error::AppError;
use crate::records::{Appointment, AppointmentBook, HistoryEntry, HistoryLog, Payload, RecordsService};
use crate::risk::{DiseaseRisk, OutbreakConditions, PersonalProfile, PersonalRiskReport};
use crate::triage::{TriageEngine, TriageRequest, TriageResult};
use crate::wellness::{BmiReport, BmiRequest};

type SharedRecords<H, A> = State<Arc<RecordsService<H, A>>>;

pub(crate) async fn analyze(Json(request): Json<TriageRequest>) -> Result<Json<TriageResult>, AppError> {
    if let Err(error) = request.validate() {
        warn!(%error, "rejected triage request");
        return Err(error.into());
    }
    Ok(Json(TriageEngine::standard().assess_request(&request)))
}

pub(crate) async fn health_data() -> Json<&'static HealthData> {
    Json(&catalog::HEALTH_DATA)
}

#[derive(Debug, Deserialize)]
pub struct HospitalQuery {
    #[serde(default = "default_hospital_region")]
    pub region: String,
}

fn default_hospital_region() -> String {
    "default".to_string()
}

pub(crate) async fn hospitals(Query(query): Query<HospitalQuery>) -> Json<&'static [Hospital]> {
    Json(hospitals_for(&query.region))
}

#[derive(Debug, Deserialize)]
pub struct MedicineQuery {
    #[serde(default)]
    pub condition: String,
}

#[derive(Debug, Serialize)]
pub struct MedicineSuggestions {
    pub condition: String,
    pub medicines: &'static [&'static str],
}

pub(crate) async fn medicines(Query(query): Query<MedicineQuery>) -> Json<MedicineSuggestions> {
    let medicines = medicine_suggestions(&query.condition);
    Json(MedicineSuggestions {
        condition: query.condition,
        medicines,
    })
}

pub(crate) async fn outbreak_alerts() -> Json<&'static [OutbreakAlert]> {
    Json(catalog::OUTBREAK_ALERTS)
}

pub(crate) async fn save_history<H, A>(
    State(service): SharedRecords<H, A>,
    Json(payload): Json<Payload>,
) -> Result<Json<Value>, AppError>
where
    H: HistoryLog + 'static,
    A: AppointmentBook + 'static,
{
    let entry = service.save_history(payload)?;
    Ok(Json(json!({ "success": true, "id": entry.id })))
}

pub(crate) async fn get_history<H, A>(
    State(service): SharedRecords<H, A>,
) -> Result<Json<Vec<HistoryEntry>>, AppError>
where
    H: HistoryLog + 'static,
    A: AppointmentBook + 'static,
{
    Ok(Json(service.recent_history()?))
}

#[derive(Debug, Deserialize)]
pub struct TranslateQuery {
    #[serde(default = "default_translation_lang")]
    pub lang: String,
}

fn default_translation_lang() -> String {
    "te".to_string()
}

pub(crate) async fn translate(Query(query): Query<TranslateQuery>) -> Json<&'static Translation> {
    Json(translations_for(&query.lang))
}

pub(crate) async fn bmi(Json(request): Json<BmiRequest>) -> Result<Json<BmiReport>, AppError> {
    match request.calculate() {
        Ok(report) => Ok(Json(report)),
        Err(error) => {
            warn!(weight = request.weight, height = request.height, "rejected bmi request");
            Err(error.into())
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatbotRequest {
    #[serde(default)]
    message: String,
    #[serde(default)]
    lang: Language,
}

pub(crate) async fn chatbot(Json(request): Json<ChatbotRequest>) -> Json<Value> {
    let response = catalog::chatbot_response(&request.message, request.lang);
    Json(json!({ "response": response }))
}

pub(crate) async fn doctors() -> Json<&'static [Doctor]> {
    Json(catalog::DOCTORS)
}

pub(crate) async fn book_appointment<H, A>(
    State(service): SharedRecords<H, A>,
    Json(payload): Json<Payload>,
) -> Result<Json<Value>, AppError>
where
    H: HistoryLog + 'static,
    A: AppointmentBook + 'static,
{
    let appointment = service.book_appointment(payload)?;
    Ok(Json(json!({ "success": true, "appointment": appointment })))
}

pub(crate) async fn appointments<H, A>(
    State(service): SharedRecords<H, A>,
) -> Result<Json<Vec<Appointment>>, AppError>
where
    H: HistoryLog + 'static,
    A: AppointmentBook + 'static,
{
    Ok(Json(service.appointments()?))
}

pub(crate) async fn predict_outbreak(
    Json(conditions): Json<OutbreakConditions>,
) -> Json<Vec<DiseaseRisk>> {
    Json(conditions.estimate())
}

pub(crate) async fn personal_risk(Json(profile): Json<PersonalProfile>) -> Json<PersonalRiskReport> {
    Json(profile.estimate())
}

#[derive(Debug, Deserialize)]
pub struct EducationQuery {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub lang: Language,
}

pub(crate) async fn education(Query(query): Query<EducationQuery>) -> Json<Vec<EducationView>> {
    Json(education_articles(Some(query.category.as_str()), query.lang))
}

#[derive(Debug, Deserialize)]
pub struct FrontlineQuery {
    #[serde(default = "default_frontline_region")]
    pub region: String,
}

fn default_frontline_region() -> String {
    "Anantapur".to_string()
}

pub(crate) async fn frontline_summary(Query(query): Query<FrontlineQuery>) -> Json<FrontlineSummary> {
    Json(catalog::frontline_summary(&query.region, &mut rand::thread_rng()))
}
