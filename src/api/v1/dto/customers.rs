/*
 * Responsibility
 * - Customer profile request/response DTOs
 * - validate() holds format checks only; merge semantics live in the repo
 */
use serde::{Deserialize, Serialize};

/// Merge-upsert body: absent fields keep their stored values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateCustomerRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.name
            && name.len() > 100
        {
            return Err("name must be <= 100 chars");
        }
        if let Some(email) = &self.email
            && !email.trim().is_empty()
            && (!email.contains('@') || email.len() > 254)
        {
            return Err("email must be a valid address");
        }
        if let Some(phone) = &self.phone
            && phone.len() > 32
        {
            return Err("phone must be <= 32 chars");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
