// rest_api/src/lib.rs
// The HTTP boundary of the SmileAgent booking backend. Handlers validate
// caller input, fill in configured defaults, and delegate every decision to
// the engine crate; no business rule lives here.

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use anyhow::Context;
use anyhow::Error as AnyhowError;

use lib::{check_eligibility, classify, relief_breakdown, search, ClinicDirectory};
use models::{
    Clinic, ClinicMatch, ClinicSearchQuery, EligibilityRequest, GeoCoordinate, PayerRole,
    RedFlag, ReliefBreakdown, TaxStatus, TriageRequest, TriageResult, UrgencyTier,
    ValidationError,
};

mod config;
pub use crate::config::{load_server_config, SearchDefaults, ServerConfig};

// Define the REST API error enum
#[derive(Debug, Error)]
pub enum RestApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Engine error: {0}")]
    Engine(#[from] lib::EngineError),
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] AnyhowError),
}

// Convert RestApiError into an HTTP response with a JSON error body.
impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            RestApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            RestApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            RestApiError::Engine(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            RestApiError::Anyhow(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal error: {}", e))
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

// Shared state for the Axum application. The directory is loaded once at
// startup and read-only afterwards, so plain Arc sharing is enough.
#[derive(Clone)]
struct AppState {
    directory: Arc<ClinicDirectory>,
    search_defaults: SearchDefaults,
}

/// Clinic search payload. Origin, urgency and radius may be omitted; the
/// configured defaults are applied before the query reaches the matcher.
#[derive(Debug, Deserialize)]
pub struct ClinicSearchRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub urgency: Option<UrgencyTier>,
    #[serde(default)]
    pub medical_card_only: bool,
    #[serde(default)]
    pub prsi_only: bool,
    pub max_distance_km: Option<f64>,
}

/// One ranked clinic in a search response, flattened for the frontend.
#[derive(Debug, Serialize)]
pub struct ClinicMatchResponse {
    pub id: i32,
    pub clinic_name: String,
    pub address: String,
    pub eircode: String,
    pub phone: String,
    pub distance_km: f64,
    pub rating: f32,
    pub review_count: u32,
    pub accepts_medical_card: bool,
    pub accepting_new_medical_card_patients: bool,
    pub accepts_prsi: bool,
    pub offers_same_day_emergency: bool,
    pub typical_emergency_wait_hours: u32,
    pub emergency_suitable: bool,
    pub is_open_now: bool,
    pub pricing: BTreeMap<String, f64>,
}

impl From<ClinicMatch> for ClinicMatchResponse {
    fn from(m: ClinicMatch) -> Self {
        let clinic = m.clinic;
        Self {
            id: clinic.id,
            clinic_name: clinic.name,
            address: clinic.address,
            eircode: clinic.eircode,
            phone: clinic.phone,
            distance_km: m.distance_km,
            rating: clinic.rating,
            review_count: clinic.review_count,
            accepts_medical_card: clinic.accepts_medical_card,
            accepting_new_medical_card_patients: clinic.accepting_new_medical_card_patients,
            accepts_prsi: clinic.accepts_prsi,
            offers_same_day_emergency: clinic.offers_same_day_emergency,
            typical_emergency_wait_hours: clinic.typical_emergency_wait_hours,
            emergency_suitable: m.emergency_suitable,
            is_open_now: m.is_open_now,
            pricing: clinic.pricing,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ClinicListParams {
    pub treatment: Option<String>,
}

/// One clinic in the directory listing; `price` is attached when the
/// caller asked for a specific treatment the clinic prices.
#[derive(Debug, Serialize)]
pub struct ClinicListEntry {
    #[serde(flatten)]
    pub clinic: Clinic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Eligibility payload: the Med 2 decision inputs plus an optional gross
/// treatment cost to get the relief arithmetic in the same round trip.
#[derive(Debug, Deserialize)]
pub struct EligibilityCheckRequest {
    pub payer_role: PayerRole,
    pub payer_tax_status: TaxStatus,
    #[serde(default)]
    pub treatment_cost: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct EligibilityCheckResponse {
    pub eligible: bool,
    pub message: String,
    pub relief_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_tip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relief: Option<ReliefBreakdown>,
}

// Handler for the /api/v1/health endpoint
async fn health_check_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "message": "SmileAgent API is healthy" })),
    )
}

// Handler for the /api/v1/version endpoint
async fn version_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "version": env!("CARGO_PKG_VERSION"), "api_level": 1 })),
    )
}

// Handler for the /api/v1/triage/assess endpoint
async fn assess_triage_handler(
    Json(payload): Json<TriageRequest>,
) -> Result<Json<TriageResult>, RestApiError> {
    payload.validate()?;
    let result = classify(&payload);
    debug!(urgency = %result.urgency_tier, "triage assessed");
    Ok(Json(result))
}

// Handler for the /api/v1/triage/red-flags endpoint
async fn red_flags_handler() -> Json<Value> {
    let red_flags: Vec<Value> = RedFlag::ALL
        .iter()
        .map(|flag| json!({ "code": flag.code(), "label": flag.label() }))
        .collect();
    Json(json!({ "red_flags": red_flags }))
}

// Handler for the /api/v1/clinics/search endpoint
async fn search_clinics_handler(
    State(state): State<AppState>,
    Json(payload): Json<ClinicSearchRequest>,
) -> Result<Json<Value>, RestApiError> {
    let defaults = &state.search_defaults;
    let origin = match (payload.latitude, payload.longitude) {
        (Some(latitude), Some(longitude)) => GeoCoordinate::new(latitude, longitude),
        (None, None) => defaults.origin(),
        _ => {
            return Err(RestApiError::InvalidInput(
                "latitude and longitude must be supplied together".to_string(),
            ))
        }
    };

    let query = ClinicSearchQuery {
        origin,
        urgency_tier: payload.urgency.unwrap_or(defaults.urgency),
        medical_card_only: payload.medical_card_only,
        prsi_only: payload.prsi_only,
        max_distance_km: payload.max_distance_km.unwrap_or(defaults.max_distance_km),
    };
    query.validate()?;

    let now = Local::now().naive_local();
    let matches = search(&query, &state.directory, now);
    debug!(
        count = matches.len(),
        urgency = %query.urgency_tier,
        "clinic search served"
    );

    let clinics: Vec<ClinicMatchResponse> =
        matches.into_iter().map(ClinicMatchResponse::from).collect();
    let count = clinics.len();
    Ok(Json(json!({ "clinics": clinics, "count": count })))
}

// Handler for the /api/v1/clinics endpoint
async fn list_clinics_handler(
    State(state): State<AppState>,
    Query(params): Query<ClinicListParams>,
) -> Json<Value> {
    let clinics: Vec<ClinicListEntry> = state
        .directory
        .clinics()
        .iter()
        .map(|clinic| ClinicListEntry {
            price: params
                .treatment
                .as_ref()
                .and_then(|code| clinic.pricing.get(code).copied()),
            clinic: clinic.clone(),
        })
        .collect();
    Json(json!({ "clinics": clinics }))
}

// Handler for the /api/v1/treatments endpoint
async fn list_treatments_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "treatments": state.directory.treatments() }))
}

// Handler for the /api/v1/eligibility/check endpoint
async fn check_eligibility_handler(
    Json(payload): Json<EligibilityCheckRequest>,
) -> Result<Json<EligibilityCheckResponse>, RestApiError> {
    if let Some(cost) = payload.treatment_cost {
        if cost < 0.0 {
            return Err(RestApiError::InvalidInput(format!(
                "treatment cost must not be negative, got {}",
                cost
            )));
        }
    }

    let request = EligibilityRequest {
        payer_role: payload.payer_role,
        payer_tax_status: payload.payer_tax_status,
    };
    let decision = check_eligibility(&request);
    let relief = match (decision.eligible, payload.treatment_cost) {
        (true, Some(cost)) => Some(relief_breakdown(cost)),
        _ => None,
    };

    Ok(Json(EligibilityCheckResponse {
        eligible: decision.eligible,
        message: decision.message,
        relief_rate: decision.relief_rate,
        strategy_tip: decision.strategy_tip,
        relief,
    }))
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    Router::new()
        .route("/api/v1/health", get(health_check_handler))
        .route("/api/v1/version", get(version_handler))
        .route("/api/v1/triage/assess", post(assess_triage_handler))
        .route("/api/v1/triage/red-flags", get(red_flags_handler))
        .route("/api/v1/clinics", get(list_clinics_handler))
        .route("/api/v1/clinics/search", post(search_clinics_handler))
        .route("/api/v1/treatments", get(list_treatments_handler))
        .route("/api/v1/eligibility/check", post(check_eligibility_handler))
        .with_state(state)
        .layer(cors)
}

// Main function to start the REST API server
pub async fn start_server(
    config: ServerConfig,
    shutdown_rx: oneshot::Receiver<()>,
) -> Result<(), AnyhowError> {
    let directory = match &config.clinics_file {
        Some(path) => ClinicDirectory::load_from_path(path)
            .with_context(|| format!("Failed to load clinic directory from {}", path.display()))?,
        None => ClinicDirectory::load_default().context("Failed to load clinic directory")?,
    };

    let state = AppState {
        directory: Arc::new(directory),
        search_defaults: config.search.clone(),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind to address: {}", addr))?;
    info!("REST API server listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
            info!("Received shutdown signal.");
        })
        .await
        .context("REST API server failed to start or run")?;

    info!("REST API server stopped.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        assess_triage_handler, check_eligibility_handler, search_clinics_handler, AppState,
        ClinicSearchRequest, EligibilityCheckRequest, RestApiError, SearchDefaults,
    };
    use axum::extract::State;
    use axum::Json;
    use lib::ClinicDirectory;
    use models::{PayerRole, TaxStatus, TriageRequest, UrgencyTier};
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            directory: Arc::new(ClinicDirectory::load_default().unwrap()),
            search_defaults: SearchDefaults::default(),
        }
    }

    fn triage_request(pain_level: u8) -> TriageRequest {
        TriageRequest {
            reported_red_flags: Vec::new(),
            pain_level,
            pain_worsening: false,
            sleep_disrupted: false,
            symptom_duration_hours: 24,
            visible_damage: false,
        }
    }

    #[tokio::test]
    async fn triage_endpoint_classifies_validated_input() {
        let Json(result) = assess_triage_handler(Json(triage_request(9))).await.unwrap();
        assert_eq!(result.urgency_tier, UrgencyTier::Urgent);
        assert_eq!(result.recommended_timeframe, "Within 24 hours");
    }

    #[tokio::test]
    async fn triage_endpoint_rejects_out_of_range_pain() {
        let error = assess_triage_handler(Json(triage_request(11)))
            .await
            .unwrap_err();
        assert!(matches!(error, RestApiError::Validation(_)));
    }

    #[tokio::test]
    async fn search_endpoint_applies_dublin_defaults() {
        let request = ClinicSearchRequest {
            latitude: None,
            longitude: None,
            urgency: None,
            medical_card_only: false,
            prsi_only: false,
            max_distance_km: None,
        };
        let Json(body) = search_clinics_handler(State(test_state()), Json(request))
            .await
            .unwrap();
        // All three demo clinics sit within the default 15 km of the centre.
        assert_eq!(body["count"], 3);
        assert_eq!(body["clinics"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn search_endpoint_rejects_half_supplied_origin() {
        let request = ClinicSearchRequest {
            latitude: Some(53.3),
            longitude: None,
            urgency: None,
            medical_card_only: false,
            prsi_only: false,
            max_distance_km: None,
        };
        let error = search_clinics_handler(State(test_state()), Json(request))
            .await
            .unwrap_err();
        assert!(matches!(error, RestApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn search_endpoint_rejects_invalid_origin() {
        let request = ClinicSearchRequest {
            latitude: Some(120.0),
            longitude: Some(0.0),
            urgency: None,
            medical_card_only: false,
            prsi_only: false,
            max_distance_km: None,
        };
        let error = search_clinics_handler(State(test_state()), Json(request))
            .await
            .unwrap_err();
        assert!(matches!(error, RestApiError::Validation(_)));
    }

    #[tokio::test]
    async fn eligibility_endpoint_attaches_breakdown_for_eligible_payers() {
        let request = EligibilityCheckRequest {
            payer_role: PayerRole::SelfPaying,
            payer_tax_status: TaxStatus::Paye,
            treatment_cost: Some(650.0),
        };
        let Json(response) = check_eligibility_handler(Json(request)).await.unwrap();
        assert!(response.eligible);
        assert_eq!(response.relief_rate, 0.20);
        let relief = response.relief.unwrap();
        assert_eq!(relief.relief_amount, 130.0);
        assert_eq!(relief.net_cost, 520.0);
    }

    #[tokio::test]
    async fn eligibility_endpoint_omits_breakdown_for_ineligible_payers() {
        let request = EligibilityCheckRequest {
            payer_role: PayerRole::OtherPayingForMe,
            payer_tax_status: TaxStatus::Other,
            treatment_cost: Some(650.0),
        };
        let Json(response) = check_eligibility_handler(Json(request)).await.unwrap();
        assert!(!response.eligible);
        assert_eq!(response.relief_rate, 0.0);
        assert!(response.relief.is_none());
        assert!(response.strategy_tip.is_some());
    }
}
