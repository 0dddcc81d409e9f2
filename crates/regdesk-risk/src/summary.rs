//! # Portfolio Summary
//!
//! Aggregate metrics over a whole risk register, as rendered on the
//! dashboard header: counts per coarse bucket and the average control
//! effectiveness over risks that have controls mapped.

use serde::{Deserialize, Serialize};

use crate::record::RiskRecord;
use crate::severity::FilterBucket;

/// Portfolio-level summary metrics.
///
/// Counts use the 3-band filter policy over the **inherent** score, so
/// `high_risks` means inherent score ≥ 15. The average ignores records
/// without a defined control effectiveness and is 0.0 when none has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Number of records in the register, including malformed ones.
    pub total_risks: usize,
    /// Records with inherent score ≥ 15.
    pub high_risks: usize,
    /// Records with inherent score in 7–14.
    pub medium_risks: usize,
    /// Records with inherent score ≤ 6.
    pub low_risks: usize,
    /// Mean control effectiveness over records that define one, else 0.0.
    pub average_control_effectiveness: f64,
}

/// Compute portfolio summary metrics for a risk register.
///
/// Never fails: an empty register yields an all-zero summary.
pub fn summarize(risks: &[RiskRecord]) -> RiskSummary {
    let mut high_risks = 0;
    let mut medium_risks = 0;
    let mut low_risks = 0;
    let mut effectiveness_sum = 0.0;
    let mut effectiveness_count = 0usize;

    for risk in risks {
        match FilterBucket::from_score(risk.inherent_score()) {
            FilterBucket::High => high_risks += 1,
            FilterBucket::Medium => medium_risks += 1,
            FilterBucket::Low => low_risks += 1,
        }
        // Only defined, finite values enter the average.
        if let Some(effectiveness) = risk.control_effectiveness {
            if effectiveness.is_finite() {
                effectiveness_sum += effectiveness;
                effectiveness_count += 1;
            }
        }
    }

    let average_control_effectiveness = if effectiveness_count == 0 {
        0.0
    } else {
        effectiveness_sum / effectiveness_count as f64
    };

    RiskSummary {
        total_risks: risks.len(),
        high_risks,
        medium_risks,
        low_risks,
        average_control_effectiveness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(likelihood: i32, impact: i32, effectiveness: Option<f64>) -> RiskRecord {
        RiskRecord {
            id: None,
            title: String::new(),
            likelihood,
            impact,
            residual_likelihood: None,
            residual_impact: None,
            control_effectiveness: effectiveness,
            category: String::new(),
            status: String::new(),
        }
    }

    #[test]
    fn empty_register_yields_zeroed_summary() {
        let summary = summarize(&[]);
        assert_eq!(
            summary,
            RiskSummary {
                total_risks: 0,
                high_risks: 0,
                medium_risks: 0,
                low_risks: 0,
                average_control_effectiveness: 0.0,
            }
        );
    }

    #[test]
    fn mixed_register_counts_and_average() {
        // Score 20 → high; score 1 → low. Only the first defines controls.
        let risks = vec![record(5, 4, Some(3.0)), record(1, 1, None)];
        let summary = summarize(&risks);
        assert_eq!(summary.total_risks, 2);
        assert_eq!(summary.high_risks, 1);
        assert_eq!(summary.medium_risks, 0);
        assert_eq!(summary.low_risks, 1);
        assert_eq!(summary.average_control_effectiveness, 3.0);
    }

    #[test]
    fn boundary_scores_use_filter_policy() {
        // 15 is high (the filter policy's ">14"), 14 is medium, 6 is low.
        let risks = vec![record(3, 5, None), record(2, 7, None), record(2, 3, None)];
        let summary = summarize(&risks);
        assert_eq!(summary.high_risks, 1);
        assert_eq!(summary.medium_risks, 1);
        assert_eq!(summary.low_risks, 1);
    }

    #[test]
    fn average_spans_multiple_records() {
        let risks = vec![
            record(1, 1, Some(2.0)),
            record(1, 2, Some(4.0)),
            record(1, 3, None),
        ];
        let summary = summarize(&risks);
        assert_eq!(summary.average_control_effectiveness, 3.0);
    }

    #[test]
    fn non_finite_effectiveness_is_ignored() {
        let risks = vec![record(1, 1, Some(f64::NAN)), record(1, 1, Some(4.0))];
        let summary = summarize(&risks);
        assert_eq!(summary.average_control_effectiveness, 4.0);
    }

    #[test]
    fn all_undefined_effectiveness_yields_zero() {
        let risks = vec![record(2, 2, None), record(3, 3, None)];
        let summary = summarize(&risks);
        assert_eq!(summary.average_control_effectiveness, 0.0);
    }

    #[test]
    fn counts_cover_the_whole_register() {
        let risks = vec![
            record(5, 5, None),
            record(3, 4, None),
            record(1, 2, None),
            record(0, 0, None),
        ];
        let summary = summarize(&risks);
        assert_eq!(summary.total_risks, 4);
        // Malformed (0 × 0 = 0) still lands in a bucket — low — rather
        // than being dropped from the totals.
        assert_eq!(
            summary.high_risks + summary.medium_risks + summary.low_risks,
            4
        );
    }

    #[test]
    fn summary_serializes_snake_case() {
        let json = serde_json::to_string(&summarize(&[])).unwrap();
        assert!(json.contains("total_risks"));
        assert!(json.contains("average_control_effectiveness"));
    }
}
