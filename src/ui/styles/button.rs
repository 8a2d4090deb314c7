// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Filled brand button (hero CTA, form submit, dialog OK).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_800,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_300)),
            text_color: palette::GRAY_600,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        },
    }
}

/// White button sitting on a brand-colored band.
pub fn inverted(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_100,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::PRIMARY_600,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Navigation link in the header; `active` marks the current section.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match (active, status) {
            (true, _) => palette::PRIMARY_600,
            (false, button::Status::Hovered | button::Status::Pressed) => palette::PRIMARY_600,
            (false, _) => palette::GRAY_700,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Full-width entry of the compact navigation menu.
pub fn menu_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match (active, status) {
            (true, _) => (Some(palette::PRIMARY_100), palette::PRIMARY_600),
            (false, button::Status::Hovered | button::Status::Pressed) => {
                (Some(palette::GRAY_100), palette::PRIMARY_600)
            }
            (false, _) => (None, palette::GRAY_700),
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Outlined pill used by the language toggle.
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (Some(palette::PRIMARY_600), WHITE),
        _ => (None, palette::PRIMARY_600),
    };

    button::Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Borderless icon button (compact menu toggle).
pub fn icon(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(palette::GRAY_100),
        _ => None,
    };

    button::Style {
        background: background.map(Background::Color),
        text_color: palette::GRAY_700,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Plain footer link on the dark footer surface.
pub fn footer_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => WHITE,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}
