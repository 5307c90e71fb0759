// Wire models for the registry service.
//
// The service is inconsistent about field presence across its sub-APIs, so
// fields use `#[serde(default)]` liberally and every model carries an
// `extra` catch-all. The same shapes must also deserialize from the
// synthetic catalogue — the fallback path goes through these types too.

use serde::{Deserialize, Serialize};

// ── Auth ─────────────────────────────────────────────────────────────

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Vehicles ─────────────────────────────────────────────────────────

/// A registered vehicle as the registry returns it. Serves both the police
/// lookup view and the DVLA registry view; fields absent from one surface
/// simply default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub id: Option<i64>,
    pub reg_number: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    /// `active`, `expired`, or `sorn`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tax_status: Option<String>,
    #[serde(default)]
    pub mot_status: Option<String>,
    #[serde(default)]
    pub registration_expires: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body for creating or replacing a DVLA vehicle record.
#[derive(Debug, Clone, Serialize)]
pub struct NewVehicle {
    pub reg_number: String,
    pub owner_name: String,
    pub make: String,
    pub model: String,
    pub colour: String,
    pub year: i32,
}

// ── Violations ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    #[serde(default)]
    pub id: Option<i64>,
    pub reg_number: String,
    #[serde(default)]
    pub violation_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub officer_name: Option<String>,
    /// `pending`, `approved`, or `rejected`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub fine_amount: Option<f64>,
    #[serde(default)]
    pub recorded_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body for recording a new violation.
#[derive(Debug, Clone, Serialize)]
pub struct NewViolation {
    pub reg_number: String,
    pub violation_type: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine_amount: Option<f64>,
}

// ── Fines & renewals ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fine {
    #[serde(default)]
    pub id: Option<i64>,
    pub reg_number: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub reason: Option<String>,
    /// `outstanding` or `cleared`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Renewal {
    #[serde(default)]
    pub id: Option<i64>,
    pub reg_number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Generic outcomes ─────────────────────────────────────────────────

/// Shape of the registry's acknowledgement responses (`{"success": true}`
/// with an optional status/message).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Analytics ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DvlaAnalytics {
    #[serde(default)]
    pub total_vehicles: i64,
    #[serde(default)]
    pub active_registrations: i64,
    #[serde(default)]
    pub expired_registrations: i64,
    #[serde(default)]
    pub sorn_vehicles: i64,
    #[serde(default)]
    pub renewals_this_month: i64,
    #[serde(default)]
    pub fines_outstanding: i64,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationStats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub pending: i64,
    #[serde(default)]
    pub approved: i64,
    #[serde(default)]
    pub rejected: i64,
    #[serde(default)]
    pub by_type: serde_json::Map<String, serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerStat {
    #[serde(default)]
    pub officer_name: String,
    #[serde(default)]
    pub violations_recorded: i64,
    #[serde(default)]
    pub approved: i64,
    #[serde(default)]
    pub rejected: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
