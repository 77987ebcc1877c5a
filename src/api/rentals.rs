//! Rental endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::rental::{
        format_brl, total_value, ActiveRental, FinalizeRental, NewRental, RentalDetails,
        RentalItemDetails, RentalItemInput,
    },
};

use super::{parse_optional_date, required_id, ApiJson};

/// Create rental request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRentalRequest {
    /// Customer ID
    pub cliente_id: Option<i32>,
    /// Employee registering the rental
    pub funcionario_id: Option<i32>,
    /// Rented equipment lines
    pub itens: Option<Vec<RentalItemInput>>,
    /// Planned return date (YYYY-MM-DD), used for the late fee
    pub data_prevista_devolucao: Option<String>,
}

/// Rental created response
#[derive(Serialize, ToSchema)]
pub struct CreateRentalResponse {
    pub success: bool,
    pub message: String,
    pub aluguel_id: i32,
    #[schema(value_type = String, example = "100.00")]
    pub valor_total: rust_decimal::Decimal,
}

/// Finalize rental request
#[derive(Debug, Deserialize, ToSchema)]
pub struct FinalizeRentalRequest {
    /// Rental ID
    pub aluguel_id: Option<i32>,
    /// Employee receiving the equipment back
    pub funcionario_id: Option<i32>,
    /// Return date (YYYY-MM-DD), defaults to today
    pub data_devolucao: Option<String>,
}

/// Finalize rental response
#[derive(Serialize, ToSchema)]
pub struct FinalizeRentalResponse {
    pub success: bool,
    /// Message reported by the procedure
    pub message: String,
    /// Late fee, e.g. "R$ 12.50"
    pub valor_multa: String,
}

/// Open rentals response
#[derive(Serialize, ToSchema)]
pub struct ActiveRentalsResponse {
    pub success: bool,
    pub alugueis: Vec<ActiveRental>,
}

/// Rental details response
#[derive(Serialize, ToSchema)]
pub struct RentalDetailsResponse {
    pub success: bool,
    pub aluguel: RentalDetails,
    pub itens: Vec<RentalItemDetails>,
}

impl CreateRentalRequest {
    /// Check required fields and item values, and compute the total
    pub fn into_new_rental(self, today: NaiveDate) -> AppResult<NewRental> {
        let (cliente_id, funcionario_id, itens) = match (
            required_id(self.cliente_id),
            required_id(self.funcionario_id),
            self.itens.filter(|itens| !itens.is_empty()),
        ) {
            (Some(cliente_id), Some(funcionario_id), Some(itens)) => {
                (cliente_id, funcionario_id, itens)
            }
            _ => {
                return Err(AppError::Validation(
                    "Cliente, Funcionário e Itens são obrigatórios.".to_string(),
                ))
            }
        };

        for item in &itens {
            item.validate().map_err(|e| {
                AppError::Validation(format!("Item inválido (equipamento {}): {}", item.id, e))
            })?;
        }

        let data_prevista_devolucao = parse_optional_date(self.data_prevista_devolucao.as_deref())?;
        if matches!(data_prevista_devolucao, Some(date) if date < today) {
            return Err(AppError::Validation(
                "A data prevista de devolução não pode ser anterior à data de início.".to_string(),
            ));
        }

        let valor_total = total_value(&itens).ok_or_else(|| {
            AppError::Validation("O valor total do aluguel excede o limite permitido.".to_string())
        })?;

        Ok(NewRental {
            cliente_id,
            funcionario_id,
            data_inicio: today,
            data_prevista_devolucao,
            itens,
            valor_total,
        })
    }
}

impl FinalizeRentalRequest {
    pub fn into_finalize(self) -> AppResult<FinalizeRental> {
        let (Some(aluguel_id), Some(funcionario_id)) =
            (required_id(self.aluguel_id), required_id(self.funcionario_id))
        else {
            return Err(AppError::Validation(
                "IDs do Aluguel e Funcionário são obrigatórios.".to_string(),
            ));
        };

        Ok(FinalizeRental {
            aluguel_id,
            funcionario_id,
            data_devolucao: parse_optional_date(self.data_devolucao.as_deref())?,
        })
    }
}

/// Register a new rental with its items
#[utoipa::path(
    post,
    path = "/api/realizar_aluguel",
    tag = "rentals",
    request_body = CreateRentalRequest,
    responses(
        (status = 200, description = "Rental created", body = CreateRentalResponse),
        (status = 400, description = "Missing or invalid fields", body = crate::error::ErrorResponse),
        (status = 500, description = "Transaction rolled back", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_rental(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<CreateRentalRequest>,
) -> AppResult<Json<CreateRentalResponse>> {
    let rental = request.into_new_rental(Local::now().date_naive())?;
    let aluguel_id = state.services.rentals.create(&rental).await?;

    Ok(Json(CreateRentalResponse {
        success: true,
        message: format!(
            "Aluguel ID {} criado com sucesso! Valor total inicial: {}. Estoque e Status atualizados.",
            aluguel_id,
            format_brl(rental.valor_total)
        ),
        aluguel_id,
        valor_total: rental.valor_total,
    }))
}

/// Finalize a rental (sp_finalizar_aluguel)
#[utoipa::path(
    post,
    path = "/api/finalizar_aluguel",
    tag = "rentals",
    request_body = FinalizeRentalRequest,
    responses(
        (status = 200, description = "Rental finalized", body = FinalizeRentalResponse),
        (status = 400, description = "Missing IDs or bad date", body = crate::error::ErrorResponse),
        (status = 500, description = "Procedure or database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn finalize_rental(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<FinalizeRentalRequest>,
) -> AppResult<Json<FinalizeRentalResponse>> {
    let request = request.into_finalize()?;
    let outcome = state.services.rentals.finalize(&request).await?;

    Ok(Json(FinalizeRentalResponse {
        success: true,
        message: outcome.mensagem,
        valor_multa: format_brl(outcome.valor_multa),
    }))
}

/// List open rentals
#[utoipa::path(
    get,
    path = "/api/alugueis_ativos",
    tag = "rentals",
    responses(
        (status = 200, description = "Open rentals", body = ActiveRentalsResponse)
    )
)]
pub async fn list_active_rentals(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ActiveRentalsResponse>> {
    let alugueis = state.services.rentals.list_active().await?;
    Ok(Json(ActiveRentalsResponse {
        success: true,
        alugueis,
    }))
}

/// Get a rental with its items
#[utoipa::path(
    get,
    path = "/api/aluguel/{id}",
    tag = "rentals",
    params(("id" = i32, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental details", body = RentalDetailsResponse),
        (status = 404, description = "Rental not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RentalDetailsResponse>> {
    let (aluguel, itens) = state.services.rentals.get_details(id).await?;
    Ok(Json(RentalDetailsResponse {
        success: true,
        aluguel,
        itens,
    }))
}
