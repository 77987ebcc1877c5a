//! Equipment repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        equipment::{AvailableEquipment, EquipmentInMaintenance},
        EquipmentStatus,
    },
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment that can be rented right now (available and in stock)
    pub async fn list_available(&self) -> AppResult<Vec<AvailableEquipment>> {
        let rows = sqlx::query_as::<_, AvailableEquipment>(
            r#"
            SELECT e.equipamento_id, e.nome, e.modelo, e.preco_diaria,
                   c.nome_categoria, es.quant_disponivel
            FROM equipamento e
            JOIN categoria c ON e.categoria_id = c.categoria_id
            JOIN estoque es ON e.equipamento_id = es.equipamento_id
            WHERE e.status = $1 AND es.quant_disponivel > 0
            ORDER BY e.nome
            "#,
        )
        .bind(EquipmentStatus::Available.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List equipment currently in maintenance
    pub async fn list_in_maintenance(&self) -> AppResult<Vec<EquipmentInMaintenance>> {
        let rows = sqlx::query_as::<_, EquipmentInMaintenance>(
            "SELECT equipamento_id, nome, numero_serie FROM equipamento WHERE status = $1 ORDER BY nome",
        )
        .bind(EquipmentStatus::InMaintenance.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
