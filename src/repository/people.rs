//! Customers, employees and suppliers repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::people::{Customer, Employee, Supplier},
};

#[derive(Clone)]
pub struct PeopleRepository {
    pool: Pool<Postgres>,
}

impl PeopleRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, Customer>(
            "SELECT cliente_id, nome FROM clientes ORDER BY nome",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT funcionario_id, nome FROM funcionarios ORDER BY nome",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        let rows = sqlx::query_as::<_, Supplier>(
            "SELECT fornecedor_id, nome FROM fornecedores ORDER BY nome",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
