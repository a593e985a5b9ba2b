/*
 * Responsibility
 * - Vehicle request/response DTOs
 * - One request shape for create and full replace; on replace, absent
 *   fields become null
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    pub make: Option<String>,
    pub model: Option<String>,
    pub plate_no: Option<String>,
    pub year: Option<i32>,
}

impl VehicleRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(make) = &self.make
            && make.len() > 64
        {
            return Err("make must be <= 64 chars");
        }
        if let Some(model) = &self.model
            && model.len() > 64
        {
            return Err("model must be <= 64 chars");
        }
        if let Some(plate_no) = &self.plate_no
            && plate_no.len() > 32
        {
            return Err("plateNo must be <= 32 chars");
        }
        if let Some(year) = self.year
            && !(1900..=2100).contains(&year)
        {
            return Err("year must be between 1900 and 2100");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: String,
    pub customer_user_id: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub plate_no: Option<String>,
    pub year: Option<i32>,
}
