//! # Milestone Letter Classification
//!
//! The complaints process requires two interim letters (at 4 and 8
//! weeks) and a final response. Classification is a pure lookup over the
//! record's sent flags and the deadline evaluation — there is no
//! milestone state machine to advance, only a view to derive.

use serde::{Deserialize, Serialize};

use crate::deadline::DeadlineStatus;
use crate::record::ComplaintRecord;

/// Status of a single milestone letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneState {
    /// The letter has been sent.
    Sent,
    /// The letter's mark has passed and it has not been sent.
    Overdue,
    /// The mark has not yet been reached.
    Pending,
}

impl std::fmt::Display for MilestoneState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent => write!(f, "sent"),
            Self::Overdue => write!(f, "overdue"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Milestone letter statuses for one complaint at one evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneReport {
    /// 4-week holding letter.
    pub four_week: MilestoneState,
    /// 8-week letter.
    pub eight_week: MilestoneState,
    /// Final response. Never `Overdue` — no fixed deadline is modeled
    /// for the final response beyond the 8-week marker itself.
    pub final_response: MilestoneState,
}

/// Classify the milestone letters for a complaint against a deadline
/// evaluation.
pub fn milestones(record: &ComplaintRecord, status: &DeadlineStatus) -> MilestoneReport {
    let four_week = if record.four_week_letter_sent {
        MilestoneState::Sent
    } else if status.past_four_weeks {
        MilestoneState::Overdue
    } else {
        MilestoneState::Pending
    };

    let eight_week = if record.eight_week_letter_sent {
        MilestoneState::Sent
    } else if status.past_eight_weeks {
        MilestoneState::Overdue
    } else {
        MilestoneState::Pending
    };

    let final_response = if record.final_response_sent {
        MilestoneState::Sent
    } else {
        MilestoneState::Pending
    };

    MilestoneReport {
        four_week,
        eight_week,
        final_response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn complaint(received: DateTime<Utc>) -> ComplaintRecord {
        ComplaintRecord {
            id: None,
            reference: String::new(),
            summary: String::new(),
            received_date: received,
            resolution_deadline: None,
            resolved_date: None,
            four_week_letter_sent: false,
            eight_week_letter_sent: false,
            final_response_sent: false,
        }
    }

    fn report_at(record: &ComplaintRecord, elapsed_days: i64) -> MilestoneReport {
        let now = record.received_date + Duration::days(elapsed_days);
        let status = record.deadline_status_at(now);
        milestones(record, &status)
    }

    fn received() -> DateTime<Utc> {
        "2026-04-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn all_pending_early_in_the_window() {
        let record = complaint(received());
        let report = report_at(&record, 10);
        assert_eq!(report.four_week, MilestoneState::Pending);
        assert_eq!(report.eight_week, MilestoneState::Pending);
        assert_eq!(report.final_response, MilestoneState::Pending);
    }

    #[test]
    fn four_week_overdue_when_unsent_past_the_mark() {
        let record = complaint(received());
        let report = report_at(&record, 35);
        assert_eq!(report.four_week, MilestoneState::Overdue);
        assert_eq!(report.eight_week, MilestoneState::Pending);
    }

    #[test]
    fn four_week_sent_beats_overdue() {
        let mut record = complaint(received());
        record.four_week_letter_sent = true;
        let report = report_at(&record, 35);
        assert_eq!(report.four_week, MilestoneState::Sent);
    }

    #[test]
    fn eight_week_overdue_once_past_the_deadline() {
        let record = complaint(received());
        let report = report_at(&record, 60);
        assert_eq!(report.eight_week, MilestoneState::Overdue);
    }

    #[test]
    fn eight_week_tracks_a_custom_deadline() {
        let mut record = complaint(received());
        record.resolution_deadline = Some(record.received_date + Duration::days(20));
        // Past the custom deadline but well before day 56.
        let report = report_at(&record, 25);
        assert_eq!(report.eight_week, MilestoneState::Overdue);
    }

    #[test]
    fn final_response_is_binary() {
        let mut record = complaint(received());
        // Far past every mark and still only Pending, never Overdue.
        let report = report_at(&record, 120);
        assert_eq!(report.final_response, MilestoneState::Pending);

        record.final_response_sent = true;
        let report = report_at(&record, 120);
        assert_eq!(report.final_response, MilestoneState::Sent);
    }

    #[test]
    fn states_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&MilestoneState::Overdue).unwrap(),
            "\"overdue\""
        );
        let record = complaint(received());
        let json = serde_json::to_string(&report_at(&record, 10)).unwrap();
        assert!(json.contains("four_week"));
        assert!(json.contains("final_response"));
    }
}
