//! API handlers for Locadora endpoints

pub mod equipment;
pub mod health;
pub mod maintenance;
pub mod openapi;
pub mod pages;
pub mod people;
pub mod rentals;

use axum::{
    extract::FromRequest,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

pub const INVALID_DATE_MESSAGE: &str = "Formato de data inválido. Use YYYY-MM-DD.";

/// JSON body extractor whose rejections use the application error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Parse an optional `YYYY-MM-DD` field; blank strings count as absent
pub fn parse_optional_date(value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::Validation(INVALID_DATE_MESSAGE.to_string())),
    }
}

/// Treat a missing or zero ID as absent
pub(crate) fn required_id(id: Option<i32>) -> Option<i32> {
    id.filter(|id| *id != 0)
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Pages
        .route("/", get(pages::index))
        .route("/consulta/alugueis_ativos", get(pages::active_rentals))
        .route("/consulta/equipamentos_disponiveis", get(pages::available_equipment))
        .route("/operacao/finalizar", get(pages::finalize_form))
        .route("/operacao/manutencao", get(pages::maintenance_form))
        // Rentals
        .route("/api/realizar_aluguel", post(rentals::create_rental))
        .route("/api/finalizar_aluguel", post(rentals::finalize_rental))
        .route("/api/alugueis_ativos", get(rentals::list_active_rentals))
        .route("/api/aluguel/:id", get(rentals::get_rental))
        // Maintenance
        .route("/api/registrar_manutencao", post(maintenance::register_maintenance))
        // Equipment
        .route("/api/equipamentos_disponiveis", get(equipment::list_available_equipment))
        .route("/api/equipamentos_manutencao", get(equipment::list_equipment_in_maintenance))
        // Customers, employees, suppliers
        .route("/api/clientes", get(people::list_customers))
        .route("/api/funcionarios", get(people::list_employees))
        .route("/api/fornecedores", get(people::list_suppliers))
        .with_state(state);

    app.merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
