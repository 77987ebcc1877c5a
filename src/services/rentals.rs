//! Rental management service

use crate::{
    error::{AppError, AppResult},
    models::rental::{
        format_brl, ActiveRental, FinalizeOutcome, FinalizeRental, NewRental, RentalDetails,
        RentalItemDetails,
    },
    repository::Repository,
};

/// SQLSTATE of errors raised with `RAISE EXCEPTION` inside a procedure
const RAISED_ERROR_STATE: &str = "P0001";

/// Line markers identifying the application message in a raised error
const RAISED_ERROR_MARKERS: [&str; 3] = ["RAISE", "Erro", "Error"];

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
}

impl RentalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List open rentals
    pub async fn list_active(&self) -> AppResult<Vec<ActiveRental>> {
        self.repository.rentals.list_active().await
    }

    /// Get a rental with its items.
    ///
    /// A failure while loading the items is logged and yields an empty list.
    pub async fn get_details(&self, id: i32) -> AppResult<(RentalDetails, Vec<RentalItemDetails>)> {
        let rental = self
            .repository
            .rentals
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Aluguel não encontrado".to_string()))?;

        let items = match self.repository.rentals.get_items(id).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Failed to load items of rental {}: {}", id, e);
                Vec::new()
            }
        };

        Ok((rental, items))
    }

    /// Create a rental and book its stock
    pub async fn create(&self, rental: &NewRental) -> AppResult<i32> {
        let aluguel_id = self
            .repository
            .rentals
            .create(rental)
            .await
            .map_err(|e| e.with_context("Erro ao registrar aluguel"))?;

        tracing::info!(
            "Rental {} created for customer {} by employee {}: {} item(s), total {}",
            aluguel_id,
            rental.cliente_id,
            rental.funcionario_id,
            rental.itens.len(),
            format_brl(rental.valor_total)
        );

        Ok(aluguel_id)
    }

    /// Finalize a rental through the database procedure
    pub async fn finalize(&self, request: &FinalizeRental) -> AppResult<FinalizeOutcome> {
        let outcome = self
            .repository
            .rentals
            .finalize(request)
            .await
            .map_err(|e| {
                tracing::warn!(
                    "sp_finalizar_aluguel failed for rental {}: {}",
                    request.aluguel_id,
                    e
                );
                procedure_error(e)
            })?;

        tracing::info!(
            "Rental {} finalized by employee {}, late fee {}",
            request.aluguel_id,
            request.funcionario_id,
            format_brl(outcome.valor_multa)
        );

        Ok(outcome)
    }
}

/// Turn an error raised inside the procedure into its application message
fn procedure_error(err: AppError) -> AppError {
    match err {
        AppError::Database(sqlx::Error::Database(db))
            if db.code().as_deref() == Some(RAISED_ERROR_STATE) =>
        {
            AppError::Procedure(extract_raised_message(db.message()))
        }
        other => other,
    }
}

/// Pick the line carrying the application message out of a raised error text
pub fn extract_raised_message(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| RAISED_ERROR_MARKERS.iter().any(|marker| line.contains(marker)))
        .unwrap_or_else(|| text.trim())
        .to_string()
}
