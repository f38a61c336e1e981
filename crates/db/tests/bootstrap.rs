use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    movierent_db::health_check(&pool).await.unwrap();

    for table in ["customers", "movies", "rentals", "payments"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Re-running migrations against an up-to-date schema is a no-op.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migrations_are_idempotent(pool: PgPool) {
    movierent_db::run_migrations(&pool).await.unwrap();
    movierent_db::run_migrations(&pool).await.unwrap();
}

/// The status check constraint admits exactly the known statuses.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_check_matches_known_statuses(pool: PgPool) {
    let definition: (String,) = sqlx::query_as(
        "SELECT pg_get_constraintdef(oid) FROM pg_constraint WHERE conname = 'status_check'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    for status in movierent_core::rental::RENTAL_STATUSES {
        assert!(
            definition.0.contains(&format!("'{status}'")),
            "status_check should admit {status}: {}",
            definition.0
        );
    }
}
