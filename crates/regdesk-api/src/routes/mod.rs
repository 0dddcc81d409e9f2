//! # API Route Modules
//!
//! Route modules for the RegDesk API surface:
//!
//! - `risks` — Risk register endpoints: registration, listing, heat-map
//!   aggregation, and portfolio summary per organization.
//! - `complaints` — Complaint endpoints: registration, retrieval, and
//!   deadline evaluation against the 56-day regulatory window.

pub mod complaints;
pub mod risks;
