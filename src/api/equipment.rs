//! Equipment endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::equipment::{AvailableEquipment, EquipmentInMaintenance},
};

/// Equipment available for rental
#[derive(Serialize, ToSchema)]
pub struct AvailableEquipmentResponse {
    pub success: bool,
    pub equipamentos: Vec<AvailableEquipment>,
}

/// Equipment out of service
#[derive(Serialize, ToSchema)]
pub struct EquipmentInMaintenanceResponse {
    pub success: bool,
    pub equipamentos: Vec<EquipmentInMaintenance>,
}

/// List equipment available for rental (status available and in stock)
#[utoipa::path(
    get,
    path = "/api/equipamentos_disponiveis",
    tag = "equipment",
    responses(
        (status = 200, description = "Available equipment", body = AvailableEquipmentResponse)
    )
)]
pub async fn list_available_equipment(
    State(state): State<crate::AppState>,
) -> AppResult<Json<AvailableEquipmentResponse>> {
    let equipamentos = state.services.equipment.list_available().await?;
    Ok(Json(AvailableEquipmentResponse {
        success: true,
        equipamentos,
    }))
}

/// List equipment currently in maintenance
#[utoipa::path(
    get,
    path = "/api/equipamentos_manutencao",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment in maintenance", body = EquipmentInMaintenanceResponse)
    )
)]
pub async fn list_equipment_in_maintenance(
    State(state): State<crate::AppState>,
) -> AppResult<Json<EquipmentInMaintenanceResponse>> {
    let equipamentos = state.services.equipment.list_in_maintenance().await?;
    Ok(Json(EquipmentInMaintenanceResponse {
        success: true,
        equipamentos,
    }))
}
