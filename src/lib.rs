// SPDX-License-Identifier: MPL-2.0
//! `carnelli_marine` is the bilingual (Chinese/English) showcase of Carnelli
//! Marine Technology, built with the Iced GUI framework.
//!
//! The page is a single window with a header, one or more content sections
//! (hero, services, about, contact) and a footer. Every string comes from
//! Fluent translations embedded in the binary; switching language re-renders
//! the whole page from the other language's content bundles.
//!
//! # Layers
//!
//! - [`domain`]: Languages, sections and the contact form draft
//! - [`application`]: Ports the UI depends on (contact submission)
//! - [`infrastructure`]: Port adapters
//! - [`content`]: Typed, localized content bundles
//! - [`ui`]: Section views and styles
//! - [`app`]: Root state, update loop and startup

pub mod app;
pub mod application;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
