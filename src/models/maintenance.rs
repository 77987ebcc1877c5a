//! Maintenance (manutencao) model

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Validated maintenance registration
#[derive(Debug, Clone)]
pub struct NewMaintenance {
    pub equipamento_id: i32,
    pub fornecedor_id: i32,
    pub custo: Decimal,
    pub descricao: String,
    pub dt_inicio: NaiveDate,
}
