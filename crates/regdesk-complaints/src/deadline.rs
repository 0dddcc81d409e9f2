//! # Deadline Evaluation
//!
//! Computes a complaint's position against the regulatory resolution
//! window at a chosen evaluation instant. The window and the urgency
//! thresholds are domain constants, not configuration: the 56-day
//! deadline is the FCA's 8-week complaint resolution rule.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The regulatory resolution window: 8 weeks from receipt.
pub const RESOLUTION_WINDOW_DAYS: i64 = 56;

/// Days after receipt at which the 4-week holding letter falls due.
pub const FOUR_WEEK_MARK_DAYS: i64 = 28;

/// Elapsed days at which urgency turns Amber.
pub const AMBER_THRESHOLD_DAYS: i64 = 28;

/// Elapsed days at which urgency turns Red (one week before the window
/// closes).
pub const RED_THRESHOLD_DAYS: i64 = 49;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Traffic-light urgency classification.
///
/// Thresholds key off elapsed days since receipt — day 28 and day 49 —
/// even when a custom resolution deadline is supplied. A complaint with a
/// short custom deadline can therefore read Green while already past its
/// deadline; callers that care should also inspect
/// [`DeadlineStatus::days_until_deadline`]. Open question for product —
/// reproduced as the register behaves today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RagStatus {
    /// Under 4 weeks elapsed.
    Green,
    /// 4 weeks elapsed, final week not yet reached.
    Amber,
    /// 7 weeks elapsed — the window closes within a week.
    Red,
}

impl std::fmt::Display for RagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Green => write!(f, "green"),
            Self::Amber => write!(f, "amber"),
            Self::Red => write!(f, "red"),
        }
    }
}

/// A complaint's full position against the resolution window at one
/// evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeadlineStatus {
    /// Whole days since receipt (floor; negative if evaluated before
    /// receipt).
    pub days_elapsed: i64,
    /// Whole days until the deadline, clamped to 0 once past.
    pub days_until_deadline: i64,
    /// Percentage of the 56-day window elapsed, capped at 100.
    pub progress: i64,
    /// Traffic-light urgency.
    pub status: RagStatus,
    /// Whether the 4-week mark has passed.
    pub past_four_weeks: bool,
    /// Whether the deadline has passed.
    pub past_eight_weeks: bool,
    /// Whether a resolution date is recorded.
    pub is_resolved: bool,
    /// The effective deadline (supplied or the 56-day default).
    pub deadline: DateTime<Utc>,
}

/// Floor the difference `to - from` into whole days.
///
/// Floor division on the millisecond delta, so a negative difference
/// rounds away from zero (-1ms is a full day early), matching how the
/// register counts days.
fn floor_days(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Evaluate a complaint's deadline position at `now`.
///
/// `resolution_deadline` overrides the default `received + 56 days`
/// window; the urgency thresholds still key off `received` (see
/// [`RagStatus`]). Never fails.
pub fn evaluate(
    received: DateTime<Utc>,
    resolution_deadline: Option<DateTime<Utc>>,
    resolved: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> DeadlineStatus {
    let days_elapsed = floor_days(received, now);
    let deadline =
        resolution_deadline.unwrap_or(received + Duration::days(RESOLUTION_WINDOW_DAYS));
    let days_until_deadline = floor_days(now, deadline).max(0);

    let four_week_mark = received + Duration::days(FOUR_WEEK_MARK_DAYS);
    let past_four_weeks = now > four_week_mark;
    let past_eight_weeks = now > deadline;

    let progress = (((days_elapsed as f64) / (RESOLUTION_WINDOW_DAYS as f64)) * 100.0).round()
        as i64;
    let progress = progress.min(100);

    let status = if days_elapsed >= RED_THRESHOLD_DAYS {
        RagStatus::Red
    } else if days_elapsed >= AMBER_THRESHOLD_DAYS {
        RagStatus::Amber
    } else {
        RagStatus::Green
    };

    DeadlineStatus {
        days_elapsed,
        days_until_deadline,
        progress,
        status,
        past_four_weeks,
        past_eight_weeks,
        is_resolved: resolved.is_some(),
        deadline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
        now - Duration::days(days)
    }

    fn now() -> DateTime<Utc> {
        "2026-06-15T12:00:00Z".parse().unwrap()
    }

    // ── Elapsed time and deadline arithmetic ─────────────────────────

    #[test]
    fn elapsed_days_floor_on_partial_days() {
        let now = now();
        let received = now - Duration::hours(36);
        let status = evaluate(received, None, None, now);
        assert_eq!(status.days_elapsed, 1);
    }

    #[test]
    fn default_deadline_is_56_days_from_receipt() {
        let now = now();
        let received = days_ago(now, 10);
        let status = evaluate(received, None, None, now);
        assert_eq!(status.deadline, received + Duration::days(56));
        assert_eq!(status.days_until_deadline, 46);
    }

    #[test]
    fn supplied_deadline_overrides_default() {
        let now = now();
        let received = days_ago(now, 10);
        let custom = received + Duration::days(30);
        let status = evaluate(received, Some(custom), None, now);
        assert_eq!(status.deadline, custom);
        assert_eq!(status.days_until_deadline, 20);
    }

    #[test]
    fn days_until_deadline_clamps_at_zero() {
        let now = now();
        let received = days_ago(now, 70);
        let status = evaluate(received, None, None, now);
        assert_eq!(status.days_until_deadline, 0);
        assert!(status.past_eight_weeks);
    }

    // ── Traffic-light thresholds ─────────────────────────────────────

    #[test]
    fn status_green_at_10_days() {
        let now = now();
        let status = evaluate(days_ago(now, 10), None, None, now);
        assert_eq!(status.status, RagStatus::Green);
    }

    #[test]
    fn status_amber_at_30_days() {
        let now = now();
        let status = evaluate(days_ago(now, 30), None, None, now);
        assert_eq!(status.status, RagStatus::Amber);
    }

    #[test]
    fn status_red_at_50_days() {
        let now = now();
        let status = evaluate(days_ago(now, 50), None, None, now);
        assert_eq!(status.status, RagStatus::Red);
    }

    #[test]
    fn status_boundaries_are_inclusive() {
        let now = now();
        assert_eq!(
            evaluate(days_ago(now, 27), None, None, now).status,
            RagStatus::Green
        );
        assert_eq!(
            evaluate(days_ago(now, 28), None, None, now).status,
            RagStatus::Amber
        );
        assert_eq!(
            evaluate(days_ago(now, 48), None, None, now).status,
            RagStatus::Amber
        );
        assert_eq!(
            evaluate(days_ago(now, 49), None, None, now).status,
            RagStatus::Red
        );
    }

    #[test]
    fn custom_deadline_does_not_move_thresholds() {
        // 30 days elapsed against a 20-day custom deadline: already past
        // the deadline, yet the traffic light still reads Amber because
        // thresholds key off receipt.
        let now = now();
        let received = days_ago(now, 30);
        let custom = received + Duration::days(20);
        let status = evaluate(received, Some(custom), None, now);
        assert_eq!(status.status, RagStatus::Amber);
        assert!(status.past_eight_weeks);
        assert_eq!(status.days_until_deadline, 0);
    }

    // ── Progress ─────────────────────────────────────────────────────

    #[test]
    fn progress_rounds_to_percentage_of_window() {
        let now = now();
        let status = evaluate(days_ago(now, 28), None, None, now);
        assert_eq!(status.progress, 50);
        let status = evaluate(days_ago(now, 14), None, None, now);
        assert_eq!(status.progress, 25);
    }

    #[test]
    fn progress_caps_at_100_when_overdue() {
        let now = now();
        let status = evaluate(days_ago(now, 56), None, None, now);
        assert_eq!(status.progress, 100);
        let status = evaluate(days_ago(now, 200), None, None, now);
        assert_eq!(status.progress, 100);
    }

    #[test]
    fn progress_is_monotonic_as_time_advances() {
        let received: DateTime<Utc> = "2026-01-01T00:00:00Z".parse().unwrap();
        let mut last = i64::MIN;
        for day in 0..80 {
            let at = received + Duration::days(day);
            let status = evaluate(received, None, None, at);
            assert!(
                status.progress >= last,
                "progress regressed at day {day}: {} < {last}",
                status.progress
            );
            last = status.progress;
        }
        assert_eq!(last, 100);
    }

    // ── Milestones flags and resolution ──────────────────────────────

    #[test]
    fn four_week_flag_follows_the_mark() {
        let now = now();
        assert!(!evaluate(days_ago(now, 27), None, None, now).past_four_weeks);
        assert!(evaluate(days_ago(now, 29), None, None, now).past_four_weeks);
    }

    #[test]
    fn resolution_is_read_from_resolved_date() {
        let now = now();
        let received = days_ago(now, 20);
        assert!(!evaluate(received, None, None, now).is_resolved);
        assert!(evaluate(received, None, Some(now), now).is_resolved);
    }

    // ── Degenerate input ─────────────────────────────────────────────

    #[test]
    fn evaluation_before_receipt_stays_green() {
        let now = now();
        let received = now + Duration::days(3);
        let status = evaluate(received, None, None, now);
        assert_eq!(status.days_elapsed, -3);
        assert_eq!(status.status, RagStatus::Green);
        assert!(status.progress <= 0);
        assert!(!status.past_four_weeks);
        assert!(!status.past_eight_weeks);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RagStatus::Amber).unwrap(),
            "\"amber\""
        );
        let now = now();
        let json = serde_json::to_string(&evaluate(days_ago(now, 30), None, None, now)).unwrap();
        assert!(json.contains("days_elapsed"));
        assert!(json.contains("past_four_weeks"));
    }
}
