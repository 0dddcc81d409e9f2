//! # regdesk-complaints — Complaint Deadline Tracking
//!
//! Pure evaluation of a complaint's position against the regulatory
//! 8-week (56-day) resolution window: elapsed days, time remaining,
//! progress percentage, traffic-light urgency, and milestone letter
//! status.
//!
//! ## Time Model
//!
//! All timestamps are UTC (`chrono::DateTime<Utc>`); local time is a
//! presentation concern for the consuming layer. Day arithmetic is floor
//! division of the millisecond difference — deliberately not
//! calendar-aware, so a complaint received at 23:59 counts its first
//! elapsed day at 23:59 the next day regardless of month boundaries or
//! daylight saving in the firm's locale.
//!
//! ## Failure Semantics
//!
//! Evaluation never fails. A missing resolution deadline falls back to
//! the 56-day default; a missing resolved date simply reads as
//! unresolved; an evaluation instant before the received date produces
//! negative elapsed days and a Green status rather than an error.

pub mod deadline;
pub mod milestone;
pub mod record;

// Re-export primary types.
pub use deadline::{evaluate, DeadlineStatus, RagStatus, RESOLUTION_WINDOW_DAYS};
pub use milestone::{milestones, MilestoneReport, MilestoneState};
pub use record::ComplaintRecord;
