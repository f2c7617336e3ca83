//! Integration tests for the read-only query executor.
//!
//! The source design collapsed "query failed" and "query matched zero rows"
//! into one absent signal. This implementation resolves that ambiguity: zero
//! rows is `Ok` with an empty result set, failure is `Err(QueryError)`. The
//! tests below pin both sides of that distinction.

mod helpers;

use assessment_etl::{execute_select, insert_rows, QueryError, SqlValue};
use helpers::{setup_db, KEYED_TABLE_DDL};

#[tokio::test]
async fn select_on_empty_table_is_ok_and_empty() {
    let db = setup_db(KEYED_TABLE_DDL).await;

    let rows = execute_select(&db.db_path, "SELECT * FROM t", &[])
        .await
        .expect("zero matching rows is success, not failure");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn select_returns_inserted_rows() {
    let db = setup_db(KEYED_TABLE_DDL).await;

    insert_rows(
        &db.db_path,
        "t",
        &["id", "val"],
        &[
            vec![
                SqlValue::Text("a".to_string()),
                SqlValue::Text("1".to_string()),
            ],
            vec![
                SqlValue::Text("b".to_string()),
                SqlValue::Text("2".to_string()),
            ],
        ],
    )
    .await;

    let rows = execute_select(&db.db_path, "SELECT id, val FROM t ORDER BY id", &[])
        .await
        .expect("select");
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        vec![
            SqlValue::Text("a".to_string()),
            SqlValue::Text("1".to_string())
        ]
    );
    assert_eq!(
        rows[1],
        vec![
            SqlValue::Text("b".to_string()),
            SqlValue::Text("2".to_string())
        ]
    );
}

#[tokio::test]
async fn parameterized_select_binds_positionally() {
    let db = setup_db(KEYED_TABLE_DDL).await;

    insert_rows(
        &db.db_path,
        "t",
        &["id", "val"],
        &[
            vec![
                SqlValue::Text("a".to_string()),
                SqlValue::Text("1".to_string()),
            ],
            vec![
                SqlValue::Text("b".to_string()),
                SqlValue::Text("2".to_string()),
            ],
        ],
    )
    .await;

    let rows = execute_select(
        &db.db_path,
        "SELECT val FROM t WHERE id = ?",
        &[SqlValue::Text("b".to_string())],
    )
    .await
    .expect("select");
    assert_eq!(rows, vec![vec![SqlValue::Text("2".to_string())]]);
}

#[tokio::test]
async fn failed_query_is_an_error_not_an_empty_result() {
    let db = setup_db(KEYED_TABLE_DDL).await;

    let result = execute_select(&db.db_path, "SELECT * FROM no_such_table", &[]).await;
    assert!(matches!(result, Err(QueryError::SqlError(_))));
}

#[tokio::test]
async fn query_against_missing_database_is_an_error() {
    let result = execute_select(
        std::path::Path::new("/nonexistent-dir/absent.db"),
        "SELECT 1",
        &[],
    )
    .await;
    assert!(matches!(result, Err(QueryError::SqlError(_))));
}

#[tokio::test]
async fn mixed_storage_classes_decode_by_value() {
    let db = setup_db("CREATE TABLE m (i INTEGER, r REAL, s TEXT, n TEXT);").await;

    insert_rows(
        &db.db_path,
        "m",
        &["i", "r", "s", "n"],
        &[vec![
            SqlValue::Integer(42),
            SqlValue::Real(0.97),
            SqlValue::Text("Cayuga".to_string()),
            SqlValue::Null,
        ]],
    )
    .await;

    let rows = execute_select(&db.db_path, "SELECT i, r, s, n FROM m", &[])
        .await
        .expect("select");
    assert_eq!(
        rows,
        vec![vec![
            SqlValue::Integer(42),
            SqlValue::Real(0.97),
            SqlValue::Text("Cayuga".to_string()),
            SqlValue::Null,
        ]]
    );
}
