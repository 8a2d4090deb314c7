// SPDX-License-Identifier: MPL-2.0
//! Form input styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::{text_editor, text_input};
use iced::{Border, Theme};

/// Text input with a rounded border; `invalid` paints it in the error color.
pub fn field(invalid: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let base = text_input::default(theme, status);
        let focused = matches!(status, text_input::Status::Focused { .. });

        text_input::Style {
            border: outline(invalid, focused),
            ..base
        }
    }
}

/// Multi-line editor matching [`field`].
pub fn editor(invalid: bool) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style {
    move |theme: &Theme, status: text_editor::Status| {
        let base = text_editor::default(theme, status);
        let focused = matches!(status, text_editor::Status::Focused { .. });

        text_editor::Style {
            border: outline(invalid, focused),
            ..base
        }
    }
}

fn outline(invalid: bool, focused: bool) -> Border {
    let (color, width) = match (invalid, focused) {
        (true, _) => (palette::ERROR_500, border::WIDTH_MD),
        (false, true) => (palette::PRIMARY_600, border::WIDTH_MD),
        (false, false) => (palette::GRAY_300, border::WIDTH_SM),
    };

    Border {
        color,
        width,
        radius: radius::MD.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_uses_error_border() {
        let style = field(true)(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn focused_field_uses_brand_border() {
        let style = field(false)(
            &Theme::Light,
            text_input::Status::Focused { is_hovered: false },
        );
        assert_eq!(style.border.color, palette::PRIMARY_600);
    }

    #[test]
    fn editor_borders_match_single_line_fields() {
        let theme = Theme::Light;
        let editor_style = editor(true)(&theme, text_editor::Status::Active);
        assert_eq!(editor_style.border.color, palette::ERROR_500);

        let focused = editor(false)(&theme, text_editor::Status::Focused { is_hovered: false });
        let field_focused = field(false)(&theme, text_input::Status::Focused { is_hovered: false });
        assert_eq!(focused.border, field_focused.border);
    }
}
