// Violation endpoints: police capture, supervisor review, and the
// cross-console analytics views.

use serde_json::json;
use tracing::debug;

use crate::client::RegistryClient;
use crate::error::Error;
use crate::models::{ActionOutcome, NewViolation, OfficerStat, Violation, ViolationStats};

impl RegistryClient {
    /// List violations (the supervisor review queue).
    ///
    /// `GET /violations`
    pub async fn get_violations(&self) -> Result<Vec<Violation>, Error> {
        debug!("listing violations");
        self.get("/violations").await
    }

    /// Record a new violation.
    ///
    /// `POST /violations`
    pub async fn submit_violation(&self, violation: &NewViolation) -> Result<Violation, Error> {
        debug!(reg_number = %violation.reg_number, violation_type = %violation.violation_type, "submitting violation");
        self.post("/violations", violation).await
    }

    /// Approve a pending violation.
    ///
    /// `POST /violations/{id}/approve`
    pub async fn approve_violation(&self, id: i64) -> Result<ActionOutcome, Error> {
        debug!(id, "approving violation");
        self.post_empty(&format!("/violations/{id}/approve")).await
    }

    /// Reject a pending violation, optionally with a reason.
    ///
    /// `POST /violations/{id}/reject`
    pub async fn reject_violation(
        &self,
        id: i64,
        reason: Option<&str>,
    ) -> Result<ActionOutcome, Error> {
        debug!(id, ?reason, "rejecting violation");
        let path = format!("/violations/{id}/reject");
        match reason {
            Some(reason) => self.post(&path, &json!({ "reason": reason })).await,
            None => self.post_empty(&path).await,
        }
    }

    /// Aggregate violation counts by status and type.
    ///
    /// `GET /analytics/violations`
    pub async fn get_violation_stats(&self) -> Result<ViolationStats, Error> {
        debug!("fetching violation stats");
        self.get("/analytics/violations").await
    }

    /// Per-officer recording and review counts.
    ///
    /// `GET /analytics/officers`
    pub async fn get_officer_stats(&self) -> Result<Vec<OfficerStat>, Error> {
        debug!("fetching officer stats");
        self.get("/analytics/officers").await
    }
}
