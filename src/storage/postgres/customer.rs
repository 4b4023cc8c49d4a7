use crate::domain::model::Customer;
use crate::storage::{CustomerField, Document, Repository, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

const COLUMNS: &str = "id, customer_name, created_date, last_modified_date";

#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn customer_from_row(row: &PgRow) -> Result<Customer, sqlx::Error> {
    Ok(Customer {
        id: Some(row.try_get("id")?),
        customer_name: row.try_get("customer_name")?,
        created_date: row.try_get("created_date")?,
        last_modified_date: row.try_get("last_modified_date")?,
    })
}

#[async_trait]
impl Repository<Customer> for PgCustomerRepository {
    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM customer ORDER BY created_date, id");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows
            .iter()
            .map(customer_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM customer WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(customer_from_row).transpose()?)
    }

    async fn find_by_field(
        &self,
        field: CustomerField,
        value: &str,
    ) -> Result<Vec<Customer>, StoreError> {
        let column = match field {
            CustomerField::Name => "customer_name",
        };
        let sql = format!(
            "SELECT {COLUMNS} FROM customer WHERE {column} = $1 ORDER BY created_date, id"
        );
        let rows = sqlx::query(&sql).bind(value).fetch_all(&self.pool).await?;
        Ok(rows
            .iter()
            .map(customer_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?)
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer, StoreError> {
        let id = customer.stamp(Utc::now());
        sqlx::query(
            "INSERT INTO customer (id, customer_name, created_date, last_modified_date)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                customer_name = EXCLUDED.customer_name,
                last_modified_date = EXCLUDED.last_modified_date",
        )
        .bind(id)
        .bind(&customer.customer_name)
        .bind(customer.created_date)
        .bind(customer.last_modified_date)
        .execute(&self.pool)
        .await?;
        Ok(customer)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM customer").execute(&self.pool).await?;
        Ok(())
    }
}
