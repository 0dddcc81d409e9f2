//! # Severity Policies
//!
//! Two classification policies over the same likelihood × impact product.
//! They use different boundaries and serve different purposes:
//!
//! | Score  | [`SeverityBand`] (display) | [`FilterBucket`] (filtering) |
//! |--------|----------------------------|------------------------------|
//! | ≤ 4    | Low                        | Low                          |
//! | 5–6    | Moderate                   | Low                          |
//! | 7–9    | Moderate                   | Medium                       |
//! | 10–14  | High                       | Medium                       |
//! | ≥ 15   | Critical                   | High                         |
//!
//! The display policy labels heat-map cells and register rows; the filter
//! policy drives coarse list filtering and the portfolio summary counts.
//! Unifying them would silently change one behavior or the other, so both
//! are kept as distinct named types. The disagreement on scores 5–6 and
//! 10–14 is flagged for product review, not resolved here.
//!
//! Neither policy assumes its input lies in [1, 25]: anything ≤ 4 is Low
//! and anything > 14 is Critical/High regardless of bound.

use serde::{Deserialize, Serialize};

/// Display severity band, used for heat-map cell and register labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    /// Score ≤ 4.
    Low,
    /// Score 5–9.
    Moderate,
    /// Score 10–14.
    High,
    /// Score ≥ 15.
    Critical,
}

impl SeverityBand {
    /// Classify a severity score under the 4-band display policy.
    pub fn from_score(score: i32) -> Self {
        if score <= 4 {
            Self::Low
        } else if score <= 9 {
            Self::Moderate
        } else if score <= 14 {
            Self::High
        } else {
            Self::Critical
        }
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Coarse filter bucket, used for list filtering and the portfolio summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterBucket {
    /// Score ≤ 6.
    Low,
    /// Score 7–14.
    Medium,
    /// Score ≥ 15.
    High,
}

impl FilterBucket {
    /// Classify a severity score under the 3-band filter policy.
    pub fn from_score(score: i32) -> Self {
        if score <= 6 {
            Self::Low
        } else if score <= 14 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl std::fmt::Display for FilterBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}
