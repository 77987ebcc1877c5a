//! Integration tests
//!
//! `router_tests` run in-process without a database. `db_tests` need a
//! PostgreSQL server in `DATABASE_URL` and `api_tests` a running server;
//! both are ignored by default (run with `cargo test -- --ignored`).

mod api_tests;
mod common;
mod db_tests;
