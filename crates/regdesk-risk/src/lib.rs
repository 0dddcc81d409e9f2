//! # regdesk-risk — Risk Scoring Engine
//!
//! Pure functions over externally supplied risk records: severity band
//! classification, 5×5 heat-map aggregation, and portfolio summary metrics.
//!
//! ## Scoring Model
//!
//! Every risk carries two pairs of axes on a 5-point scale:
//!
//! ```text
//! inherent  = (likelihood, impact)                      — before controls
//! residual  = (residual_likelihood, residual_impact)    — after controls,
//!                                                         per-axis fallback
//!                                                         to inherent
//! score     = likelihood × impact ∈ [1, 25]
//! ```
//!
//! Two classification policies exist over the same product, and they are
//! deliberately **not** unified — see [`severity`] for the boundary tables
//! and the rationale.
//!
//! ## Failure Semantics
//!
//! Nothing in this crate errors or panics on malformed input. Records with
//! zero or out-of-range axes are skipped during aggregation; an empty
//! register produces an empty grid and a zeroed summary. Range enforcement
//! belongs to the API boundary, not to the engine.

pub mod heatmap;
pub mod record;
pub mod severity;
pub mod summary;

// Re-export primary types.
pub use heatmap::{HeatMapCell, HeatMapGrid, GRID_DIM};
pub use record::{RiskRecord, RiskView};
pub use severity::{FilterBucket, SeverityBand};
pub use summary::{summarize, RiskSummary};
