//! Rental (aluguel) model and related types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Open rental as listed on the active rentals screen
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ActiveRental {
    pub aluguel_id: i32,
    #[serde(rename = "Cliente")]
    pub cliente: String,
    pub data_inicio: NaiveDate,
    #[schema(value_type = String, example = "100.00")]
    pub valor_total: Decimal,
    #[serde(rename = "Funcionario")]
    pub funcionario: String,
}

/// Rental header with customer and employee names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RentalDetails {
    pub aluguel_id: i32,
    #[serde(rename = "Cliente")]
    pub cliente: String,
    pub data_inicio: NaiveDate,
    #[schema(value_type = String, example = "100.00")]
    pub valor_total: Decimal,
    #[serde(rename = "Funcionario")]
    pub funcionario: String,
    pub data_prevista_devolucao: Option<NaiveDate>,
    /// Null while the rental is open
    pub data_devolucao: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub valor_multa: Option<Decimal>,
}

/// Rented line with the rate recorded at booking time
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RentalItemDetails {
    pub item_id: i32,
    #[serde(rename = "Equipamento")]
    pub equipamento: String,
    pub quantidade: i32,
    #[schema(value_type = String)]
    pub valor_diaria: Decimal,
    #[schema(value_type = String)]
    pub subtotal: Decimal,
}

/// One requested line of a new rental
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RentalItemInput {
    /// Equipment ID
    pub id: i32,
    #[validate(custom(function = "validate_daily_price"))]
    #[schema(value_type = f64, example = 50.0)]
    pub preco_diaria: Decimal,
    #[validate(range(
        min = 1,
        max = 1_000_000,
        message = "A quantidade deve estar entre 1 e 1000000"
    ))]
    pub quantidade: i32,
}

/// Validated rental ready to be written
#[derive(Debug, Clone)]
pub struct NewRental {
    pub cliente_id: i32,
    pub funcionario_id: i32,
    pub data_inicio: NaiveDate,
    pub data_prevista_devolucao: Option<NaiveDate>,
    pub itens: Vec<RentalItemInput>,
    pub valor_total: Decimal,
}

/// Validated finalization request
#[derive(Debug, Clone)]
pub struct FinalizeRental {
    pub aluguel_id: i32,
    pub funcionario_id: i32,
    /// Defaults to the current date inside the procedure
    pub data_devolucao: Option<NaiveDate>,
}

/// Output values reported by the finalization procedure
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizeOutcome {
    pub valor_multa: Decimal,
    pub mensagem: String,
}

impl FinalizeOutcome {
    pub const NO_MESSAGE: &'static str = "Executado sem mensagem";
    pub const NO_RESULT: &'static str = "Executado, mas não retornou mensagem";

    /// Build the outcome from the procedure's output row, if one was returned
    pub fn from_outputs(row: Option<(Option<Decimal>, Option<String>)>) -> Self {
        match row {
            Some((multa, mensagem)) => Self {
                valor_multa: multa.unwrap_or(Decimal::ZERO),
                mensagem: mensagem
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| Self::NO_MESSAGE.to_string()),
            },
            None => Self {
                valor_multa: Decimal::ZERO,
                mensagem: Self::NO_RESULT.to_string(),
            },
        }
    }
}

/// Largest daily price `aluguel_item.valor_diaria` (NUMERIC(10, 2)) can hold
pub const MAX_DAILY_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Total value of a rental: sum of daily price times quantity.
///
/// Returns `None` when the sum does not fit in a `Decimal`.
pub fn total_value(itens: &[RentalItemInput]) -> Option<Decimal> {
    let mut total = itens
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| {
            item.preco_diaria
                .checked_mul(Decimal::from(item.quantidade))
                .and_then(|subtotal| acc.checked_add(subtotal))
        })?
        .round_dp(2);
    total.rescale(2);
    Some(total)
}

/// Format an amount as Brazilian reais, e.g. `R$ 100.00`
pub fn format_brl(value: Decimal) -> String {
    format!("R$ {:.2}", value.round_dp(2))
}

fn validate_daily_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("O valor não pode ser negativo".into());
        return Err(err);
    }
    if *value > MAX_DAILY_PRICE {
        let mut err = ValidationError::new("max_daily_price");
        let message = format!("A diária não pode exceder {}", format_brl(MAX_DAILY_PRICE));
        err.message = Some(message.into());
        return Err(err);
    }
    Ok(())
}
