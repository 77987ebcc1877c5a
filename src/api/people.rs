//! Customer, employee and supplier lists (used to fill form selects)

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::people::{Customer, Employee, Supplier},
};

#[derive(Serialize, ToSchema)]
pub struct CustomersResponse {
    pub success: bool,
    pub clientes: Vec<Customer>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeesResponse {
    pub success: bool,
    pub funcionarios: Vec<Employee>,
}

#[derive(Serialize, ToSchema)]
pub struct SuppliersResponse {
    pub success: bool,
    pub fornecedores: Vec<Supplier>,
}

/// List customers
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "people",
    responses((status = 200, description = "Customers ordered by name", body = CustomersResponse))
)]
pub async fn list_customers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<CustomersResponse>> {
    let clientes = state.services.people.customers().await?;
    Ok(Json(CustomersResponse {
        success: true,
        clientes,
    }))
}

/// List employees
#[utoipa::path(
    get,
    path = "/api/funcionarios",
    tag = "people",
    responses((status = 200, description = "Employees ordered by name", body = EmployeesResponse))
)]
pub async fn list_employees(
    State(state): State<crate::AppState>,
) -> AppResult<Json<EmployeesResponse>> {
    let funcionarios = state.services.people.employees().await?;
    Ok(Json(EmployeesResponse {
        success: true,
        funcionarios,
    }))
}

/// List suppliers
#[utoipa::path(
    get,
    path = "/api/fornecedores",
    tag = "people",
    responses((status = 200, description = "Suppliers ordered by name", body = SuppliersResponse))
)]
pub async fn list_suppliers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<SuppliersResponse>> {
    let fornecedores = state.services.people.suppliers().await?;
    Ok(Json(SuppliersResponse {
        success: true,
        fornecedores,
    }))
}
