//! Equipment model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Equipment available for rental, with its category and free stock
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AvailableEquipment {
    pub equipamento_id: i32,
    pub nome: String,
    pub modelo: Option<String>,
    /// Current daily price
    #[schema(value_type = String, example = "50.00")]
    pub preco_diaria: Decimal,
    pub nome_categoria: String,
    /// Units in stock
    pub quant_disponivel: i32,
}

/// Equipment currently out of service
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentInMaintenance {
    pub equipamento_id: i32,
    pub nome: String,
    pub numero_serie: Option<String>,
}
