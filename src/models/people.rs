//! Customers, employees and suppliers (lookup lists)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub cliente_id: i32,
    #[serde(rename = "Nome")]
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub funcionario_id: i32,
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Supplier {
    pub fornecedor_id: i32,
    pub nome: String,
}
