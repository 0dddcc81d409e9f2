//! # Complaint Records
//!
//! [`ComplaintRecord`] mirrors the JSON shape of the complaints API
//! (snake_case field names). Records are owned and persisted upstream;
//! this crate reads them and derives deadline views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use regdesk_core::ComplaintId;

use crate::deadline::{evaluate, DeadlineStatus};

/// A single complaint as supplied by the complaints API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Register identifier, assigned by the API layer when registering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ComplaintId>,
    /// Firm-facing reference, carried through untouched.
    #[serde(default)]
    pub reference: String,
    /// Short description, carried through untouched.
    #[serde(default)]
    pub summary: String,
    /// When the complaint was received.
    pub received_date: DateTime<Utc>,
    /// Custom resolution deadline; defaults to 56 days from receipt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_deadline: Option<DateTime<Utc>>,
    /// When the complaint was resolved, if it has been.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<DateTime<Utc>>,
    /// Whether the 4-week holding letter has been sent.
    #[serde(default)]
    pub four_week_letter_sent: bool,
    /// Whether the 8-week letter has been sent.
    #[serde(default)]
    pub eight_week_letter_sent: bool,
    /// Whether the final response has been sent.
    #[serde(default)]
    pub final_response_sent: bool,
}

impl ComplaintRecord {
    /// Evaluate this complaint's deadline position at `now`.
    pub fn deadline_status_at(&self, now: DateTime<Utc>) -> DeadlineStatus {
        evaluate(
            self.received_date,
            self.resolution_deadline,
            self.resolved_date,
            now,
        )
    }
}
