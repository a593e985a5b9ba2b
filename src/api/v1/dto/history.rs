/*
 * Responsibility
 * - Service-history request/response DTOs
 * - Status is strict on write (typed enum) and tolerant on read
 *   (whatever string the row carries)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow state of a service-history item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    Open,
    InProgress,
    Done,
    Cancelled,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
            Self::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHistoryRequest {
    /// Public id of a vehicle. Well-formedness is checked; existence is not.
    pub vehicle_id: Option<String>,
    pub title: String,
    pub status: ServiceStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
}

impl CreateHistoryRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title is required");
        }
        if self.title.len() > 200 {
            return Err("title must be <= 200 chars");
        }
        if let Some(cost) = self.cost
            && !(cost.is_finite() && cost >= 0.0)
        {
            return Err("cost must be a non-negative number");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemResponse {
    pub id: String,
    pub customer_user_id: String,
    pub vehicle_id: Option<String>,
    pub title: String,
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_screaming_snake_case_on_the_wire() {
        let json = serde_json::to_string(&ServiceStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");

        let parsed: ServiceStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, ServiceStatus::Cancelled);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<ServiceStatus>("\"PENDING\"").is_err());
    }

    #[test]
    fn create_request_requires_a_title() {
        let req: CreateHistoryRequest =
            serde_json::from_str(r#"{"title":"  ","status":"OPEN"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_cost_is_rejected() {
        let req: CreateHistoryRequest =
            serde_json::from_str(r#"{"title":"Oil change","status":"DONE","cost":-1.0}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
