//! Database tests
//!
//! Each test gets a fresh database with the migrations and the `seed`
//! fixture applied. Requires `DATABASE_URL` to point at a PostgreSQL
//! server the tests may create databases on.

use std::str::FromStr;

use axum::http::StatusCode;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;

use locadora_server::{
    models::{
        rental::{total_value, FinalizeRental, NewRental, RentalItemInput},
        NewMaintenance,
    },
    AppError,
};

use crate::common::{app, get_json, post_json, services};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn money(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn item(id: i32, preco: &str, quantidade: i32) -> RentalItemInput {
    RentalItemInput {
        id,
        preco_diaria: money(preco),
        quantidade,
    }
}

fn rental(itens: Vec<RentalItemInput>) -> NewRental {
    NewRental {
        cliente_id: 1,
        funcionario_id: 1,
        data_inicio: date("2025-01-01"),
        data_prevista_devolucao: Some(date("2025-01-05")),
        valor_total: total_value(&itens).unwrap(),
        itens,
    }
}

async fn stock(pool: &PgPool, equipamento_id: i32) -> i32 {
    sqlx::query_scalar("SELECT quant_disponivel FROM estoque WHERE equipamento_id = $1")
        .bind(equipamento_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn status(pool: &PgPool, equipamento_id: i32) -> String {
    sqlx::query_scalar("SELECT status FROM equipamento WHERE equipamento_id = $1")
        .bind(equipamento_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn rental_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM aluguel")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_create_rental_books_stock(pool: PgPool) {
    let services = services(pool.clone());

    let id = services.rentals.create(&rental(vec![item(3, "50.00", 2)])).await.unwrap();

    assert_eq!(stock(&pool, 3).await, 8);
    assert_eq!(status(&pool, 3).await, "Em Uso");

    let (header, itens) = services.rentals.get_details(id).await.unwrap();
    assert_eq!(header.valor_total, money("100.00"));
    assert_eq!(header.cliente, "Ana Souza");
    assert!(header.data_devolucao.is_none());
    assert_eq!(itens.len(), 1);
    assert_eq!(itens[0].subtotal, money("100.00"));

    let active = services.rentals.list_active().await.unwrap();
    assert!(active.iter().any(|a| a.aluguel_id == id));
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_create_rental_unknown_equipment_commits_nothing(pool: PgPool) {
    let services = services(pool.clone());

    let result = services
        .rentals
        .create(&rental(vec![item(3, "50.00", 1), item(999, "10.00", 1)]))
        .await;

    match result {
        Err(AppError::Operation { context, .. }) => {
            assert_eq!(context, "Erro ao registrar aluguel")
        }
        other => panic!("expected operation error, got {:?}", other),
    }
    assert_eq!(rental_count(&pool).await, 0);
    assert_eq!(stock(&pool, 3).await, 10);
    assert_eq!(status(&pool, 3).await, "Disponível");
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_create_rental_beyond_stock_commits_nothing(pool: PgPool) {
    let services = services(pool.clone());

    let result = services.rentals.create(&rental(vec![item(5, "120.00", 3)])).await;

    assert!(result.is_err());
    assert_eq!(rental_count(&pool).await, 0);
    assert_eq!(stock(&pool, 5).await, 2);
    assert_eq!(status(&pool, 5).await, "Disponível");
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_finalize_computes_fee_and_restores_stock(pool: PgPool) {
    let services = services(pool.clone());
    let id = services.rentals.create(&rental(vec![item(3, "50.00", 2)])).await.unwrap();

    let outcome = services
        .rentals
        .finalize(&FinalizeRental {
            aluguel_id: id,
            funcionario_id: 2,
            data_devolucao: Some(date("2025-01-08")),
        })
        .await
        .unwrap();

    assert_eq!(outcome.valor_multa, money("300.00"));
    assert!(outcome.mensagem.contains("Dias de atraso: 3"));
    assert_eq!(stock(&pool, 3).await, 10);
    assert_eq!(status(&pool, 3).await, "Disponível");

    let (header, _) = services.rentals.get_details(id).await.unwrap();
    assert_eq!(header.data_devolucao, Some(date("2025-01-08")));
    assert_eq!(header.valor_multa, Some(money("300.00")));
    assert!(services.rentals.list_active().await.unwrap().is_empty());
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_finalize_on_time_has_no_fee(pool: PgPool) {
    let services = services(pool.clone());
    let id = services.rentals.create(&rental(vec![item(1, "25.00", 1)])).await.unwrap();

    let outcome = services
        .rentals
        .finalize(&FinalizeRental {
            aluguel_id: id,
            funcionario_id: 1,
            data_devolucao: Some(date("2025-01-05")),
        })
        .await
        .unwrap();

    assert_eq!(outcome.valor_multa, Decimal::ZERO);
    assert!(outcome.mensagem.contains("Dias de atraso: 0"));
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_equipment_stays_in_use_while_another_rental_is_open(pool: PgPool) {
    let services = services(pool.clone());
    let first = services.rentals.create(&rental(vec![item(3, "50.00", 1)])).await.unwrap();
    services.rentals.create(&rental(vec![item(3, "50.00", 1)])).await.unwrap();

    services
        .rentals
        .finalize(&FinalizeRental {
            aluguel_id: first,
            funcionario_id: 1,
            data_devolucao: Some(date("2025-01-05")),
        })
        .await
        .unwrap();

    assert_eq!(stock(&pool, 3).await, 9);
    assert_eq!(status(&pool, 3).await, "Em Uso");
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_finalize_unknown_rental(pool: PgPool) {
    let services = services(pool.clone());

    let result = services
        .rentals
        .finalize(&FinalizeRental {
            aluguel_id: 9999,
            funcionario_id: 1,
            data_devolucao: None,
        })
        .await;

    match result {
        Err(AppError::Procedure(message)) => {
            assert_eq!(message, "Erro: Aluguel 9999 não encontrado.")
        }
        other => panic!("expected procedure error, got {:?}", other),
    }
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_finalize_twice_keeps_first_return(pool: PgPool) {
    let services = services(pool.clone());
    let id = services.rentals.create(&rental(vec![item(3, "50.00", 2)])).await.unwrap();
    let request = FinalizeRental {
        aluguel_id: id,
        funcionario_id: 1,
        data_devolucao: Some(date("2025-01-08")),
    };
    services.rentals.finalize(&request).await.unwrap();

    let again = services
        .rentals
        .finalize(&FinalizeRental {
            data_devolucao: Some(date("2025-01-20")),
            ..request
        })
        .await;

    match again {
        Err(AppError::Procedure(message)) => assert!(message.contains("já foi finalizado")),
        other => panic!("expected procedure error, got {:?}", other),
    }
    let (header, _) = services.rentals.get_details(id).await.unwrap();
    assert_eq!(header.data_devolucao, Some(date("2025-01-08")));
    assert_eq!(header.valor_multa, Some(money("300.00")));
    assert_eq!(stock(&pool, 3).await, 10);
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_register_maintenance_takes_equipment_out_of_service(pool: PgPool) {
    let services = services(pool.clone());

    let id = services
        .maintenance
        .register(&NewMaintenance {
            equipamento_id: 5,
            fornecedor_id: 1,
            custo: money("80.00"),
            descricao: "Troca de óleo".to_string(),
            dt_inicio: date("2025-02-01"),
        })
        .await
        .unwrap();

    assert!(id > 0);
    assert_eq!(status(&pool, 5).await, "Em Manutenção");

    let in_maintenance = services.equipment.list_in_maintenance().await.unwrap();
    assert!(in_maintenance.iter().any(|e| e.equipamento_id == 5));
    let available = services.equipment.list_available().await.unwrap();
    assert!(!available.iter().any(|e| e.equipamento_id == 5));
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_trigger_sets_status_on_direct_insert(pool: PgPool) {
    sqlx::query(
        "INSERT INTO manutencao (equipamento_id, fornecedor_id, custo, descricao) VALUES (4, 1, 0, 'Inspeção')",
    )
    .execute(&pool)
    .await
    .unwrap();

    assert_eq!(status(&pool, 4).await, "Em Manutenção");
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_lookup_lists(pool: PgPool) {
    let services = services(pool);

    let available = services.equipment.list_available().await.unwrap();
    assert_eq!(available.len(), 5);
    let betoneira = available.iter().find(|e| e.equipamento_id == 3).unwrap();
    assert_eq!(betoneira.nome_categoria, "Construção");
    assert_eq!(betoneira.quant_disponivel, 10);

    assert_eq!(services.people.customers().await.unwrap().len(), 2);
    assert_eq!(services.people.employees().await.unwrap().len(), 2);
    assert_eq!(services.people.suppliers().await.unwrap().len(), 1);
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_http_rental_flow(pool: PgPool) {
    let (status_code, body) = post_json(
        app(pool.clone()),
        "/api/realizar_aluguel",
        &json!({
            "cliente_id": 1,
            "funcionario_id": 1,
            "itens": [{"id": 3, "preco_diaria": 50.0, "quantidade": 2}]
        }),
    )
    .await;

    assert_eq!(status_code, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["valor_total"], "100.00");
    let id = body["aluguel_id"].as_i64().unwrap();

    let (status_code, body) = get_json(app(pool.clone()), &format!("/api/aluguel/{}", id)).await;
    assert_eq!(status_code, StatusCode::OK);
    assert_eq!(body["itens"].as_array().unwrap().len(), 1);

    let (status_code, body) = post_json(
        app(pool.clone()),
        "/api/finalizar_aluguel",
        &json!({"aluguel_id": id, "funcionario_id": 1, "data_devolucao": "2099-12-31"}),
    )
    .await;
    assert_eq!(status_code, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["valor_multa"], "R$ 0.00");
}

#[sqlx::test(fixtures("seed"))]
#[ignore]
async fn test_http_errors(pool: PgPool) {
    let (status_code, body) = get_json(app(pool.clone()), "/api/aluguel/9999").await;
    assert_eq!(status_code, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status_code, body) = post_json(
        app(pool),
        "/api/finalizar_aluguel",
        &json!({"aluguel_id": 9999, "funcionario_id": 1}),
    )
    .await;
    assert_eq!(status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Erro: Aluguel 9999 não encontrado.");
}
