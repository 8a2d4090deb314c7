// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Startup**: Initial language and section

use crate::domain::site::{LanguageTag, SectionId};

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1200;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

/// Smallest window width accepted from the config file.
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Smallest window height accepted from the config file.
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// ==========================================================================
// Startup Defaults
// ==========================================================================

/// Language shown on first launch.
pub const DEFAULT_LANGUAGE: LanguageTag = LanguageTag::Zh;

/// Section shown on first launch.
pub const DEFAULT_SECTION: SectionId = SectionId::Home;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
