// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`submission`]: Contact form delivery (implements [`ContactSubmitter`])
//!
//! [`ContactSubmitter`]: crate::application::port::ContactSubmitter

pub mod submission;

pub use submission::LogSubmitter;
