//! Repository for the `customer` table.

use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer};
use crate::transaction;

const COLUMNS: &str = "customer_id, name, email";

/// Provides create and lookup operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    ///
    /// A duplicate email violates `uq_customer_email`.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customer (name, email) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let result = sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(&mut *tx)
            .await;
        transaction::finish(tx, result).await
    }

    /// List all customers in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer ORDER BY customer_id");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Find a customer by exact email address.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer WHERE email = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
