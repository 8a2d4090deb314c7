// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`submission`]: Delivery of contact form drafts
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced types)
//! - Traits are `Send + Sync` so implementations can be shared behind `Arc`
//! - Methods are synchronous and return `Result` with a port-specific error

pub mod submission;

pub use submission::{ContactSubmitter, SubmissionError};
