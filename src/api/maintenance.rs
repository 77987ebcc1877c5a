//! Maintenance endpoints

use axum::{extract::State, Json};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{maintenance::NewMaintenance, EquipmentStatus},
};

use super::{required_id, ApiJson};

const REQUIRED_FIELDS_MESSAGE: &str = "Todos os campos são obrigatórios para iniciar a manutenção.";

/// Register maintenance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterMaintenanceRequest {
    pub equipamento_id: Option<i32>,
    pub fornecedor_id: Option<i32>,
    #[schema(value_type = Option<f64>, example = 150.0)]
    pub custo: Option<Decimal>,
    #[validate(length(max = 500, message = "A descrição deve ter no máximo 500 caracteres"))]
    pub descricao: Option<String>,
}

/// Maintenance registered response
#[derive(Serialize, ToSchema)]
pub struct RegisterMaintenanceResponse {
    pub success: bool,
    pub message: String,
    pub manutencao_id: i32,
}

impl RegisterMaintenanceRequest {
    pub fn into_new_maintenance(self, today: NaiveDate) -> AppResult<NewMaintenance> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let descricao = self
            .descricao
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let (Some(equipamento_id), Some(fornecedor_id), Some(custo), Some(descricao)) = (
            required_id(self.equipamento_id),
            required_id(self.fornecedor_id),
            self.custo,
            descricao,
        ) else {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        };

        if custo < Decimal::ZERO {
            return Err(AppError::Validation("O custo não pode ser negativo.".to_string()));
        }

        Ok(NewMaintenance {
            equipamento_id,
            fornecedor_id,
            custo,
            descricao,
            dt_inicio: today,
        })
    }
}

/// Open a maintenance record; the equipment goes out of service
#[utoipa::path(
    post,
    path = "/api/registrar_manutencao",
    tag = "maintenance",
    request_body = RegisterMaintenanceRequest,
    responses(
        (status = 200, description = "Maintenance registered", body = RegisterMaintenanceResponse),
        (status = 400, description = "Missing fields", body = crate::error::ErrorResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_maintenance(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<RegisterMaintenanceRequest>,
) -> AppResult<Json<RegisterMaintenanceResponse>> {
    let maintenance = request.into_new_maintenance(Local::now().date_naive())?;
    let manutencao_id = state.services.maintenance.register(&maintenance).await?;

    Ok(Json(RegisterMaintenanceResponse {
        success: true,
        message: format!(
            "Manutenção registrada com sucesso para o Equipamento ID {}. O status foi alterado automaticamente para \"{}\".",
            maintenance.equipamento_id,
            EquipmentStatus::InMaintenance
        ),
        manutencao_id,
    }))
}
