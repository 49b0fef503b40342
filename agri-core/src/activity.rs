//! Activity log entries.

use crate::record_id::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Registration,
    Insurance,
    Loan,
    #[serde(rename = "Carbon Credits")]
    CarbonCredits,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityKind::Registration => "Registration",
            ActivityKind::Insurance => "Insurance",
            ActivityKind::Loan => "Loan",
            ActivityKind::CarbonCredits => "Carbon Credits",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Completed,
    Pending,
    Failed,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityStatus::Completed => "Completed",
            ActivityStatus::Pending => "Pending",
            ActivityStatus::Failed => "Failed",
        };
        f.write_str(label)
    }
}

/// A past action, stored newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub amount: f64,
    pub status: ActivityStatus,
    pub date: NaiveDate,
}

/// Caller-supplied part of an [`Activity`]; the store assigns id and date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub description: String,
    pub amount: f64,
    pub status: ActivityStatus,
}

impl NewActivity {
    /// The entry recorded when a farmer NFT is minted.
    pub fn registration() -> Self {
        Self {
            kind: ActivityKind::Registration,
            description: "Farmer NFT created successfully".to_string(),
            amount: 0.0,
            status: ActivityStatus::Completed,
        }
    }

    pub fn into_activity(self, id: RecordId, date: NaiveDate) -> Activity {
        Activity {
            id,
            kind: self.kind,
            description: self.description,
            amount: self.amount,
            status: self.status,
            date,
        }
    }
}
