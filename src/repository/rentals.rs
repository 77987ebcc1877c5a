//! Rentals repository for database operations

use rust_decimal::Decimal;
use sqlx::{
    postgres::{PgQueryResult, PgRow},
    Either, Pool, Postgres, Row,
};
use tokio_stream::{Stream, StreamExt};

use crate::{
    error::{AppError, AppResult},
    models::{
        rental::{
            ActiveRental, FinalizeOutcome, FinalizeRental, NewRental, RentalDetails,
            RentalItemDetails,
        },
        EquipmentStatus,
    },
};

/// Output columns of `sp_finalizar_aluguel`: late fee and status message
type ProcedureOutputs = (Option<Decimal>, Option<String>);

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List rentals that have not been returned yet
    pub async fn list_active(&self) -> AppResult<Vec<ActiveRental>> {
        let rows = sqlx::query_as::<_, ActiveRental>(
            r#"
            SELECT a.aluguel_id, c.nome AS cliente, a.data_inicio, a.valor_total,
                   f.nome AS funcionario
            FROM aluguel a
            JOIN clientes c ON a.cliente_id = c.cliente_id
            JOIN funcionarios f ON a.funcionario_id = f.funcionario_id
            WHERE a.data_devolucao IS NULL
            ORDER BY a.data_inicio, a.aluguel_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a rental header by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<RentalDetails>> {
        let row = sqlx::query_as::<_, RentalDetails>(
            r#"
            SELECT a.aluguel_id, c.nome AS cliente, a.data_inicio, a.valor_total,
                   f.nome AS funcionario, a.data_prevista_devolucao, a.data_devolucao,
                   a.valor_multa
            FROM aluguel a
            JOIN clientes c ON a.cliente_id = c.cliente_id
            JOIN funcionarios f ON a.funcionario_id = f.funcionario_id
            WHERE a.aluguel_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Get the items of a rental
    pub async fn get_items(&self, id: i32) -> AppResult<Vec<RentalItemDetails>> {
        let rows = sqlx::query_as::<_, RentalItemDetails>(
            r#"
            SELECT ai.item_id, e.nome AS equipamento, ai.quantidade, ai.valor_diaria,
                   (ai.quantidade * ai.valor_diaria)::NUMERIC(12, 2) AS subtotal
            FROM aluguel_item ai
            JOIN equipamento e ON ai.equipamento_id = e.equipamento_id
            WHERE ai.aluguel_id = $1
            ORDER BY ai.item_id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a rental with its items, booking the stock.
    ///
    /// The rental row, every item row, the equipment status changes and the
    /// stock decrements are committed together or not at all.
    pub async fn create(&self, rental: &NewRental) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let aluguel_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO aluguel (cliente_id, funcionario_id, data_inicio, valor_total,
                                 data_prevista_devolucao, data_devolucao)
            VALUES ($1, $2, $3, $4, $5, NULL)
            RETURNING aluguel_id
            "#,
        )
        .bind(rental.cliente_id)
        .bind(rental.funcionario_id)
        .bind(rental.data_inicio)
        .bind(rental.valor_total)
        .bind(rental.data_prevista_devolucao)
        .fetch_one(&mut *tx)
        .await?;

        // Any error below returns early and drops `tx`, which rolls back.
        for item in &rental.itens {
            sqlx::query(
                r#"
                INSERT INTO aluguel_item (aluguel_id, equipamento_id, quantidade, valor_diaria)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(aluguel_id)
            .bind(item.id)
            .bind(item.quantidade)
            .bind(item.preco_diaria)
            .execute(&mut *tx)
            .await?;

            sqlx::query("UPDATE equipamento SET status = $1 WHERE equipamento_id = $2")
                .bind(EquipmentStatus::InUse.as_str())
                .bind(item.id)
                .execute(&mut *tx)
                .await?;

            let updated = sqlx::query(
                r#"
                UPDATE estoque
                SET quant_disponivel = quant_disponivel - $1,
                    data_revisao = $2
                WHERE equipamento_id = $3
                "#,
            )
            .bind(item.quantidade)
            .bind(rental.data_inicio)
            .bind(item.id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

            if updated == 0 {
                return Err(AppError::BusinessRule(format!(
                    "Estoque não encontrado para o equipamento {}",
                    item.id
                )));
            }
        }

        tx.commit().await?;
        Ok(aluguel_id)
    }

    /// Finalize a rental through `sp_finalizar_aluguel`.
    ///
    /// The procedure reports its fee and message as output parameters. The
    /// first row found across the returned result sets is used.
    pub async fn finalize(&self, request: &FinalizeRental) -> AppResult<FinalizeOutcome> {
        let mut tx = self.pool.begin().await?;

        let outputs = {
            let mut results = sqlx::query("CALL sp_finalizar_aluguel($1, $2, $3, NULL, NULL)")
                .bind(request.aluguel_id)
                .bind(request.data_devolucao)
                .bind(request.funcionario_id)
                .fetch_many(&mut *tx);
            first_output_row(&mut results).await?
        };

        tx.commit().await?;
        Ok(FinalizeOutcome::from_outputs(outputs))
    }
}

/// Walk every result set of a batch and keep the first row seen.
///
/// Result sets that end without rows are skipped; the rest of the batch is
/// still drained so the connection is left idle.
pub(crate) async fn first_output_row<S>(results: &mut S) -> AppResult<Option<ProcedureOutputs>>
where
    S: Stream<Item = Result<Either<PgQueryResult, PgRow>, sqlx::Error>> + Unpin,
{
    let mut first = None;
    while let Some(step) = results.next().await {
        if let Either::Right(row) = step? {
            if first.is_none() {
                let multa: Option<Decimal> = row.try_get(0)?;
                let mensagem: Option<String> = row.try_get(1)?;
                first = Some((multa, mensagem));
            }
        }
    }
    Ok(first)
}
