// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types of the site, free of any UI toolkit.
//!
//! # Modules
//!
//! - [`site`]: Navigation state ([`LanguageTag`](site::LanguageTag),
//!   [`SectionId`](site::SectionId), [`View`](site::View))
//! - [`contact`]: Contact form input ([`ContactFormDraft`](contact::ContactFormDraft),
//!   [`Field`](contact::Field), [`ServiceKind`](contact::ServiceKind),
//!   [`ConstraintViolation`](contact::ConstraintViolation))

pub mod contact;
pub mod site;
