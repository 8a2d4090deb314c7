// SPDX-License-Identifier: MPL-2.0
//! Symbolic icon set.
//!
//! Views ask for an icon by meaning ([`Icon::Anchor`], [`Icon::Phone`], ...)
//! and the icon is drawn as a text glyph, so no image assets ship with the
//! binary.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons::{self, Icon};
//!
//! let badge = icons::sized(Icon::Shield, sizing::ICON_MD);
//! ```

use iced::widget::{text, Text};

/// Icons used across the site, named by what they depict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Anchor,
    Ship,
    Activity,
    Volume,
    Waves,
    Chart,
    Shield,
    Award,
    Users,
    Globe,
    Target,
    MapPin,
    Phone,
    Mail,
    Clock,
    Send,
    ArrowRight,
    Check,
    Menu,
    Close,
}

impl Icon {
    /// Glyph drawn for the icon.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Anchor => "⚓",
            Icon::Ship => "⛴",
            Icon::Activity => "∿",
            Icon::Volume => "♪",
            Icon::Waves => "≈",
            Icon::Chart => "▤",
            Icon::Shield => "⛨",
            Icon::Award => "★",
            Icon::Users => "☺",
            Icon::Globe => "◍",
            Icon::Target => "◎",
            Icon::MapPin => "⌖",
            Icon::Phone => "☎",
            Icon::Mail => "✉",
            Icon::Clock => "◷",
            Icon::Send => "➤",
            Icon::ArrowRight => "→",
            Icon::Check => "✓",
            Icon::Menu => "☰",
            Icon::Close => "✕",
        }
    }
}

/// Renders an icon at the given glyph size.
pub fn sized<'a>(icon: Icon, size: f32) -> Text<'a> {
    text(icon.glyph()).size(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 20] = [
        Icon::Anchor,
        Icon::Ship,
        Icon::Activity,
        Icon::Volume,
        Icon::Waves,
        Icon::Chart,
        Icon::Shield,
        Icon::Award,
        Icon::Users,
        Icon::Globe,
        Icon::Target,
        Icon::MapPin,
        Icon::Phone,
        Icon::Mail,
        Icon::Clock,
        Icon::Send,
        Icon::ArrowRight,
        Icon::Check,
        Icon::Menu,
        Icon::Close,
    ];

    #[test]
    fn every_icon_has_a_distinct_glyph() {
        let mut glyphs: Vec<&str> = ALL.iter().map(|icon| icon.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), ALL.len());
    }
}
