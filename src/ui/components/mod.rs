// SPDX-License-Identifier: MPL-2.0
//! Reusable UI building blocks shared by the section views.
//!
//! # Components
//!
//! - [`grid`] - Rows of equally wide cells that collapse to one column on
//!   compact layouts
//! - [`heading`] - Centered section title with subtitle
//! - [`badge`] - Icon inside a rounded badge
//! - [`stat`] - Headline figure with caption

pub mod badge;
pub mod grid;
pub mod heading;
pub mod stat;
