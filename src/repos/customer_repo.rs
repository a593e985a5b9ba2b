/*
 * Responsibility
 * - customers table access
 * - One profile row per user_id (unique constraint); the merge-upsert
 *   keeps stored values for NULL arguments
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;
use crate::services::auth::UserId;

#[derive(Debug, FromRow)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub async fn find_by_user_id(
    db: &PgPool,
    user_id: &UserId,
) -> Result<Option<CustomerRow>, RepoError> {
    let row = sqlx::query_as::<_, CustomerRow>(
        r#"
        SELECT customer_id, user_id, name, email, phone
        FROM customers
        WHERE user_id = $1
        "#,
    )
    .bind(user_id.as_str())
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn upsert(
    db: &PgPool,
    user_id: &UserId,
    name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<CustomerRow, RepoError> {
    // name/email/phone: NULL keeps the stored value, non-NULL overwrites
    let row = sqlx::query_as::<_, CustomerRow>(
        r#"
        INSERT INTO customers (user_id, name, email, phone)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id) DO UPDATE SET
            name  = COALESCE(EXCLUDED.name,  customers.name),
            email = COALESCE(EXCLUDED.email, customers.email),
            phone = COALESCE(EXCLUDED.phone, customers.phone)
        RETURNING customer_id, user_id, name, email, phone
        "#,
    )
    .bind(user_id.as_str())
    .bind(name)
    .bind(email)
    .bind(phone)
    .fetch_one(db)
    .await?;

    Ok(row)
}
