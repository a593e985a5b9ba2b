/*
 * Responsibility
 * - vehicles table access
 * - replace/delete carry the ownership key in the WHERE clause: a row
 *   owned by someone else looks exactly like a missing row
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;
use crate::services::auth::UserId;

#[derive(Debug, FromRow)]
pub struct VehicleRow {
    pub vehicle_id: i64,
    pub customer_user_id: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub plate_no: Option<String>,
    pub year: Option<i32>,
}

pub async fn list_by_owner(db: &PgPool, owner: &UserId) -> Result<Vec<VehicleRow>, RepoError> {
    let rows = sqlx::query_as::<_, VehicleRow>(
        r#"
        SELECT vehicle_id, customer_user_id, make, model, plate_no, year
        FROM vehicles
        WHERE customer_user_id = $1
        ORDER BY vehicle_id
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
    make: Option<&str>,
    model: Option<&str>,
    plate_no: Option<&str>,
    year: Option<i32>,
) -> Result<VehicleRow, RepoError> {
    let row = sqlx::query_as::<_, VehicleRow>(
        r#"
        INSERT INTO vehicles (customer_user_id, make, model, plate_no, year)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING vehicle_id, customer_user_id, make, model, plate_no, year
        "#,
    )
    .bind(owner.as_str())
    .bind(make)
    .bind(model)
    .bind(plate_no)
    .bind(year)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn replace(
    db: &PgPool,
    vehicle_id: i64,
    owner: &UserId,
    make: Option<&str>,
    model: Option<&str>,
    plate_no: Option<&str>,
    year: Option<i32>,
) -> Result<Option<VehicleRow>, RepoError> {
    // Full replace: NULL arguments null the column
    let row = sqlx::query_as::<_, VehicleRow>(
        r#"
        UPDATE vehicles
        SET make = $3, model = $4, plate_no = $5, year = $6
        WHERE vehicle_id = $1 AND customer_user_id = $2
        RETURNING vehicle_id, customer_user_id, make, model, plate_no, year
        "#,
    )
    .bind(vehicle_id)
    .bind(owner.as_str())
    .bind(make)
    .bind(model)
    .bind(plate_no)
    .bind(year)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, vehicle_id: i64, owner: &UserId) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM vehicles
        WHERE vehicle_id = $1 AND customer_user_id = $2
        "#,
    )
    .bind(vehicle_id)
    .bind(owner.as_str())
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
