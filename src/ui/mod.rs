// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every section follows the Elm-style "state down, messages up" pattern: a
//! `view` renders from a localized content bundle, and interactive sections
//! translate their own `Message` into an `Event` the application acts on.
//!
//! # Sections
//!
//! - [`header`] - Navigation entries, language toggle, compact menu
//! - [`hero`] - Headline with the call-to-action into the services
//! - [`services`] - Service cards and the contact call-to-action
//! - [`about`] - Company profile, mission, vision and values
//! - [`contact`] - Inquiry form with constraint checks and contact details
//! - [`footer`] - Company blurb, contact details, legal row
//! - [`acknowledgement`] - Modal reporting the outcome of a submission
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable building blocks (grid, headings, badges)
//! - [`layout`] - Wide / compact layout selection from the window width
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Symbolic icon set

pub mod about;
pub mod acknowledgement;
pub mod components;
pub mod contact;
pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod layout;
pub mod services;
pub mod styles;
