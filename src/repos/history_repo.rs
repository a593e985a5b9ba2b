/*
 * Responsibility
 * - history_items table access
 * - Append + owner-scoped listing; vehicle_id is a soft reference with
 *   no foreign key
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;
use crate::services::auth::UserId;

#[derive(Debug, FromRow)]
pub struct HistoryRow {
    pub history_id: i64,
    pub customer_user_id: String,
    pub vehicle_id: Option<i64>,
    pub title: String,
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
}

pub async fn list_by_owner(db: &PgPool, owner: &UserId) -> Result<Vec<HistoryRow>, RepoError> {
    // Items without a completion time sort after everything else
    let rows = sqlx::query_as::<_, HistoryRow>(
        r#"
        SELECT history_id, customer_user_id, vehicle_id, title, status, completed_at, cost
        FROM history_items
        WHERE customer_user_id = $1
        ORDER BY completed_at DESC NULLS LAST, history_id DESC
        "#,
    )
    .bind(owner.as_str())
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    owner: &UserId,
    vehicle_id: Option<i64>,
    title: &str,
    status: &str,
    completed_at: Option<DateTime<Utc>>,
    cost: Option<f64>,
) -> Result<HistoryRow, RepoError> {
    let row = sqlx::query_as::<_, HistoryRow>(
        r#"
        INSERT INTO history_items (customer_user_id, vehicle_id, title, status, completed_at, cost)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING history_id, customer_user_id, vehicle_id, title, status, completed_at, cost
        "#,
    )
    .bind(owner.as_str())
    .bind(vehicle_id)
    .bind(title)
    .bind(status)
    .bind(completed_at)
    .bind(cost)
    .fetch_one(db)
    .await?;

    Ok(row)
}
