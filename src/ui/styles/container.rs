// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::gradient::{self, Gradient};
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Theme};

fn diagonal(from: Color, to: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        gradient::Linear::new(Degrees(135.0))
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}

/// Page background behind every section.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Alternate light band (services, contact).
pub fn band_muted(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_50)),
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Fixed header bar.
///
/// Slightly translucent so the page reads as scrolling beneath it.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::WHITE
        })),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dark navy backdrop of the hero, standing in for the photograph.
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(diagonal(palette::SLATE_900, palette::PRIMARY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Brand-colored call-to-action band.
pub fn cta_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(diagonal(palette::PRIMARY_600, palette::PRIMARY_800)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Banner at the end of the about section.
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(diagonal(palette::PRIMARY_900, palette::SLATE_800)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// White card with a soft shadow (service cards, form).
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            color: palette::GRAY_100,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Translucent card on the dark hero backdrop.
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Rounded badge behind a feature icon.
pub fn icon_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_100)),
        text_color: Some(palette::PRIMARY_600),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled brand badge (contact info rows, value cards).
pub fn icon_badge_solid(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Map placeholder of the location card.
pub fn map(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(diagonal(palette::PRIMARY_100, palette::PRIMARY_300)),
        text_color: Some(palette::PRIMARY_900),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer surface.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        text_color: Some(palette::GRAY_300),
        ..Default::default()
    }
}

/// Thin separator line above the footer legal row.
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_700)),
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal dialog.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Modal dialog surface.
pub fn dialog(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
