use crate::db::{self, DbPool};
use crate::run_migrations;
use proptest::prelude::*;
use serde_json::{Number, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Sets up a test database with migrations applied
///
/// Each call gets its own shared-cache in-memory SQLite database. Plain
/// ":memory:" would give every pooled connection a separate, empty database;
/// the unique `cache=shared` URI lets all connections in this pool see the
/// same schema while staying isolated from other tests.
///
/// ### Returns
///
/// An Arc-wrapped database connection pool connected to the in-memory database
pub fn setup_test_db() -> Arc<DbPool> {
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = db::init_pool(&database_url).expect("Failed to create pool");

    let mut conn = pool.get().expect("Failed to get connection");
    run_migrations(&mut conn).expect("Failed to run migrations");
    drop(conn);

    Arc::new(pool)
}

/// Generates strings that stress escaping and encoding: empty, whitespace,
/// quotes, SQL metacharacters, control characters and arbitrary unicode
pub fn arb_messy_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(" ".to_string()),
        Just("'; DROP TABLE places; --".to_string()),
        Just("\"quoted\"".to_string()),
        Just("line\nbreak\ttab".to_string()),
        "\\PC*",
    ]
}

/// Removes duplicates while keeping first-seen order
pub fn dedup_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names.into_iter().filter(|n| seen.insert(n.clone())).collect()
}

/// Generates an arbitrary JSON value up to a few levels deep
pub fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(Number::from(n))),
        (-1.0e6f64..1.0e6f64)
            .prop_filter_map("finite floats only", Number::from_f64)
            .prop_map(Value::Number),
        ".*".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        4, // 4 levels deep
        64, // maximum size of 64 nodes
        8, // up to 8 items per collection
        |inner| prop_oneof![
            prop::collection::vec(inner.clone(), 0..8)
                .prop_map(Value::Array),
            prop::collection::hash_map(".*", inner, 0..8)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ])
}
