#![deny(missing_docs)]

//! # regdesk-core — Foundational Types for the RegDesk Compliance Stack
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `serde_json`,
//! `thiserror`, and `uuid` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`RiskId`] where a [`ComplaintId`]
//!    is expected.
//!
//! 2. **[`RegdeskError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! 3. **Permissive engines, strict boundaries.** The scoring and deadline
//!    engines downstream never reject data; validation errors exist only
//!    for the request boundary of the API layer.

pub mod error;
pub mod identity;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{RegdeskError, ValidationError};
pub use identity::{ComplaintId, OrganizationId, RiskId};
