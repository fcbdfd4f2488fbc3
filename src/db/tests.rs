use super::*;
use crate::schema::cities;
use crate::test_utils::setup_test_db;
use diesel::prelude::*;
use diesel::sql_types::Integer;

#[derive(QueryableByName, Debug)]
struct ForeignKeys {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn test_pooled_connections_enforce_foreign_keys() {
    let pool = setup_test_db();

    // Every connection handed out by the pool should have the pragma set
    for _ in 0..3 {
        let mut conn = pool.get().unwrap();
        let pragma = diesel::sql_query("PRAGMA foreign_keys")
            .get_result::<ForeignKeys>(&mut conn)
            .unwrap();
        assert_eq!(pragma.foreign_keys, 1);
    }
}

#[tokio::test]
async fn test_execute_with_retry_runs_statement() {
    let pool = setup_test_db();
    let mut conn = pool.get().unwrap();
    let now = chrono::Utc::now().naive_utc();

    let inserted = diesel::insert_into(cities::table)
        .values((
            cities::id.eq("city-1"),
            cities::name.eq("Lagos"),
            cities::created_at.eq(now),
            cities::updated_at.eq(now),
        ))
        .execute_with_retry(&mut conn)
        .await
        .unwrap();

    assert_eq!(inserted, 1);
}

#[tokio::test]
async fn test_execute_with_retry_returns_non_lock_errors() {
    let pool = setup_test_db();
    let mut conn = pool.get().unwrap();
    let now = chrono::Utc::now().naive_utc();

    let insert = diesel::insert_into(cities::table).values((
        cities::id.eq("city-1"),
        cities::name.eq("Lagos"),
        cities::created_at.eq(now),
        cities::updated_at.eq(now),
    ));

    insert.clone().execute_with_retry(&mut conn).await.unwrap();

    // A primary key violation is not a lock, so it must surface immediately
    let result = insert.execute_with_retry(&mut conn).await;
    assert!(result.is_err());
    assert!(!is_locked(&result.unwrap_err()));
}

#[test]
fn test_is_locked_ignores_not_found() {
    assert!(!is_locked(&DieselError::NotFound));
}
