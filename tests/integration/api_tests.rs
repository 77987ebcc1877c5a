//! API tests against a running server seeded with the `seed` fixture

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_available_equipment() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/equipamentos_disponiveis", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["equipamentos"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_list_customers() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/clientes", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["clientes"][0]["Nome"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_create_and_finalize_rental() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/realizar_aluguel", BASE_URL))
        .json(&json!({
            "cliente_id": 1,
            "funcionario_id": 1,
            "itens": [{"id": 3, "preco_diaria": 50.0, "quantidade": 2}]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["valor_total"], "100.00");
    let aluguel_id = body["aluguel_id"].as_i64().expect("No aluguel_id in response");

    let response = client
        .post(format!("{}/api/finalizar_aluguel", BASE_URL))
        .json(&json!({"aluguel_id": aluguel_id, "funcionario_id": 1}))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains("finalizado"));
}

#[tokio::test]
#[ignore]
async fn test_finalize_missing_ids() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/finalizar_aluguel", BASE_URL))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
}
