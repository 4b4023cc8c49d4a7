//! PostgreSQL record store.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

mod beer;
mod customer;

pub use beer::PgBeerRepository;
pub use customer::PgCustomerRepository;

/// Connects the pool and makes sure both collections exist.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS beer (
            id UUID PRIMARY KEY,
            beer_name TEXT NOT NULL,
            beer_style TEXT,
            upc TEXT,
            price NUMERIC,
            quantity_on_hand INTEGER,
            created_date TIMESTAMPTZ,
            last_modified_date TIMESTAMPTZ
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS customer (
            id UUID PRIMARY KEY,
            customer_name TEXT NOT NULL,
            created_date TIMESTAMPTZ,
            last_modified_date TIMESTAMPTZ
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
