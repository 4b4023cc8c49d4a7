use crate::domain::model::Beer;
use crate::storage::{BeerField, Document, Repository, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

const COLUMNS: &str =
    "id, beer_name, beer_style, upc, price, quantity_on_hand, created_date, last_modified_date";

#[derive(Clone)]
pub struct PgBeerRepository {
    pool: PgPool,
}

impl PgBeerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn beer_from_row(row: &PgRow) -> Result<Beer, sqlx::Error> {
    Ok(Beer {
        id: Some(row.try_get("id")?),
        beer_name: row.try_get("beer_name")?,
        beer_style: row.try_get("beer_style")?,
        upc: row.try_get("upc")?,
        price: row.try_get("price")?,
        quantity_on_hand: row.try_get("quantity_on_hand")?,
        created_date: row.try_get("created_date")?,
        last_modified_date: row.try_get("last_modified_date")?,
    })
}

fn column(field: BeerField) -> &'static str {
    match field {
        BeerField::Name => "beer_name",
        BeerField::Style => "beer_style",
    }
}

#[async_trait]
impl Repository<Beer> for PgBeerRepository {
    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM beer")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn find_all(&self) -> Result<Vec<Beer>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM beer ORDER BY created_date, id");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(beer_from_row).collect::<Result<Vec<_>, sqlx::Error>>()?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM beer WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(beer_from_row).transpose()?)
    }

    async fn find_by_field(&self, field: BeerField, value: &str) -> Result<Vec<Beer>, StoreError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM beer WHERE {} = $1 ORDER BY created_date, id",
            column(field)
        );
        let rows = sqlx::query(&sql).bind(value).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(beer_from_row).collect::<Result<Vec<_>, sqlx::Error>>()?)
    }

    async fn save(&self, mut beer: Beer) -> Result<Beer, StoreError> {
        let id = beer.stamp(Utc::now());
        sqlx::query(
            "INSERT INTO beer (id, beer_name, beer_style, upc, price, quantity_on_hand, created_date, last_modified_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (id) DO UPDATE SET
                beer_name = EXCLUDED.beer_name,
                beer_style = EXCLUDED.beer_style,
                upc = EXCLUDED.upc,
                price = EXCLUDED.price,
                quantity_on_hand = EXCLUDED.quantity_on_hand,
                last_modified_date = EXCLUDED.last_modified_date",
        )
        .bind(id)
        .bind(&beer.beer_name)
        .bind(&beer.beer_style)
        .bind(&beer.upc)
        .bind(beer.price)
        .bind(beer.quantity_on_hand)
        .bind(beer.created_date)
        .bind(beer.last_modified_date)
        .execute(&self.pool)
        .await?;
        Ok(beer)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM beer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM beer").execute(&self.pool).await?;
        Ok(())
    }
}
