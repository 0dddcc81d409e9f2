//! # Risk Records & Views
//!
//! [`RiskRecord`] mirrors the JSON shape of the upstream risk register API
//! (camelCase field names). Records are owned and persisted upstream; this
//! crate only reads them and derives views.
//!
//! Axis values are nominally in [1, 5] but arrive from an external feed,
//! so nothing here assumes the range holds. Out-of-range records are
//! handled by the consumers ([`HeatMapGrid::build`](crate::heatmap::HeatMapGrid::build)
//! skips them; the severity policies classify any integer).

use serde::{Deserialize, Serialize};

use regdesk_core::RiskId;

/// Which pair of axes a record contributes to an aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskView {
    /// Raw likelihood × impact before any controls are considered.
    #[default]
    Inherent,
    /// Likelihood × impact after existing controls, with per-axis
    /// fallback to the inherent value when a residual axis is absent.
    Residual,
}

impl std::fmt::Display for RiskView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inherent => write!(f, "inherent"),
            Self::Residual => write!(f, "residual"),
        }
    }
}

impl std::str::FromStr for RiskView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inherent" => Ok(Self::Inherent),
            "residual" => Ok(Self::Residual),
            other => Err(format!("unknown risk view \"{other}\"")),
        }
    }
}

/// A single risk register entry as supplied by the upstream API.
///
/// `category` and `status` are opaque classification labels — the engine
/// never interprets them, only carries them through to grid cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRecord {
    /// Register identifier, assigned by the API layer when registering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RiskId>,
    /// Display title, carried through untouched.
    #[serde(default)]
    pub title: String,
    /// Inherent likelihood axis, nominally in [1, 5].
    pub likelihood: i32,
    /// Inherent impact axis, nominally in [1, 5].
    pub impact: i32,
    /// Post-control likelihood; falls back to `likelihood` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual_likelihood: Option<i32>,
    /// Post-control impact; falls back to `impact` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual_impact: Option<i32>,
    /// Aggregate control effectiveness in [0, 5]; `None` when no controls
    /// are mapped to this risk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_effectiveness: Option<f64>,
    /// Opaque category label.
    #[serde(default)]
    pub category: String,
    /// Opaque status label.
    #[serde(default)]
    pub status: String,
}

impl RiskRecord {
    /// The (likelihood, impact) pair selected by `view`.
    ///
    /// The residual view falls back per-axis: a record with only
    /// `residual_impact` set contributes (inherent likelihood,
    /// residual impact).
    pub fn axes(&self, view: RiskView) -> (i32, i32) {
        match view {
            RiskView::Inherent => (self.likelihood, self.impact),
            RiskView::Residual => (
                self.residual_likelihood.unwrap_or(self.likelihood),
                self.residual_impact.unwrap_or(self.impact),
            ),
        }
    }

    /// Inherent severity score: likelihood × impact.
    pub fn inherent_score(&self) -> i32 {
        self.likelihood * self.impact
    }

    /// Residual severity score with per-axis fallback to inherent values.
    pub fn residual_score(&self) -> i32 {
        let (l, i) = self.axes(RiskView::Residual);
        l * i
    }

    /// Severity score under the given view.
    pub fn score(&self, view: RiskView) -> i32 {
        let (l, i) = self.axes(view);
        l * i
    }
}
