use crate::domain::draft::{OrmType, RailKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStatus {
    Completed,
    InProgress,
    Pending,
    Failed,
    Stuck,
}

impl TrackingStatus {
    /// Human-readable capitalization used by the status filter chips.
    pub fn humanize(&self) -> &'static str {
        match self {
            TrackingStatus::Completed => "Completed",
            TrackingStatus::InProgress => "In Progress",
            TrackingStatus::Pending => "Pending",
            TrackingStatus::Failed => "Failed",
            TrackingStatus::Stuck => "Stuck",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TimelineEvent {
    pub event: String,
    pub status: TrackingStatus,
    pub timestamp: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

/// Per-transaction tracking record: identity, overall status and the ordered
/// milestone timeline the projection derives its views from.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TrackingInfo {
    pub txn_id: String,
    pub rail: RailKind,
    pub orm_type: Option<OrmType>,
    pub uetr: Option<String>,
    pub beneficiary: String,
    pub currency: String,
    pub amount: Decimal,
    pub last_updated: DateTime<Utc>,
    pub overall_status: TrackingStatus,
    pub timeline: Vec<TimelineEvent>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Success,
    Failed,
    Pending,
}

/// A past payment shown in history; the source record for pay-again replays.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TransactionRecord {
    pub txn_id: String,
    pub beneficiary_id: String,
    pub beneficiary_name: String,
    pub amount: Decimal,
    pub currency: String,
    pub rail: RailKind,
    pub date_time: DateTime<Utc>,
    pub status: TransactionStatus,
    #[serde(default)]
    pub intelligence_tags: Vec<String>,
    pub failure_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Catalog entry mapping a form field to a historical issue and its fix;
/// rendered as a soft warning next to the matching field.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ExceptionItem {
    pub id: String,
    pub field: String,
    pub issue: String,
    pub why_it_occurred: String,
    pub suggestion: String,
    pub severity: Severity,
}
