// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports for collaborators outside the core.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives port implementations by injection

pub mod port;
