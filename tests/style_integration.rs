// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as button_widget, text_editor, text_input};
    use iced::Theme;
    use carnelli_marine::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
    use carnelli_marine::ui::layout::{Layout, COMPACT_BREAKPOINT};
    use carnelli_marine::ui::styles::{button, container, input};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Light;
        let status = button_widget::Status::Active;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, status);
        let _ = button::inverted(&theme, status);
        let _ = button::outline(&theme, status);
        let _ = button::icon(&theme, status);
        let _ = button::footer_link(&theme, status);
        let _ = button::nav_link(true)(&theme, status);
        let _ = button::menu_item(false)(&theme, status);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Light;
        for style in [
            container::page,
            container::band_muted,
            container::header,
            container::hero,
            container::cta_band,
            container::banner,
            container::card,
            container::glass,
            container::icon_badge,
            container::icon_badge_solid,
            container::map,
            container::footer,
            container::divider,
            container::modal_backdrop,
            container::dialog,
        ] {
            let _ = style(&theme);
        }
    }

    #[test]
    fn input_styles_compile_for_every_status() {
        let theme = Theme::Light;
        for invalid in [false, true] {
            let style = input::field(invalid);
            let _ = style(&theme, text_input::Status::Active);
            let _ = style(&theme, text_input::Status::Hovered);
            let _ = style(&theme, text_input::Status::Focused { is_hovered: false });

            let editor = input::editor(invalid);
            let _ = editor(&theme, text_editor::Status::Active);
            let _ = editor(&theme, text_editor::Status::Focused { is_hovered: true });
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_600;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_MEDIUM;

        // Sizing
        let _ = sizing::CONTENT_MAX_WIDTH;

        // Typography
        let _ = typography::DISPLAY;
    }

    #[test]
    fn layouts_fit_between_minimum_window_and_content_width() {
        assert!(COMPACT_BREAKPOINT < sizing::CONTENT_MAX_WIDTH);
        assert_eq!(Layout::from_width(sizing::CONTENT_MAX_WIDTH), Layout::Wide);
        assert_eq!(Layout::from_width(sizing::DIALOG_WIDTH), Layout::Compact);
    }
}
