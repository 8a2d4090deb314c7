// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing, sizing and type scale shared by every section view.

## Organization

- **Palette**: Base colors (navy / ocean blue brand, slate surfaces)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes and layout widths
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use carnelli_marine::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Modal backdrop
let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::SLATE_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);

    // Slate surfaces (footer, dark bands)
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);

    // Brand colors (ocean blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const PRIMARY_300: Color = Color::from_rgb(0.576, 0.773, 0.992);
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847);
    pub const PRIMARY_800: Color = Color::from_rgb(0.118, 0.251, 0.686);
    pub const PRIMARY_900: Color = Color::from_rgb(0.118, 0.227, 0.541);

    // Service card accents
    pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.290);
    pub const PURPLE_600: Color = Color::from_rgb(0.576, 0.200, 0.918);
    pub const CYAN_600: Color = Color::from_rgb(0.031, 0.569, 0.698);
    pub const ORANGE_600: Color = Color::from_rgb(0.918, 0.345, 0.047);
    pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149);

    // Semantic colors
    pub const ERROR_500: Color = RED_600;
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Translucent header bar over page content.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 80.0; // vertical rhythm between page sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon glyph sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Header
    pub const HEADER_HEIGHT: f32 = 64.0;

    // Content column
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const DIALOG_WIDTH: f32 = 360.0;
    pub const MESSAGE_INPUT_HEIGHT: f32 = 120.0;

    // Decorative backdrops standing in for imagery
    pub const BANNER_HEIGHT: f32 = 240.0;
    pub const MAP_HEIGHT: f32 = 180.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero headline
    //! - Titles: section and card headings
    //! - Body: running copy
    //! - Caption: labels, hints, legal lines

    /// Hero headline
    pub const DISPLAY: f32 = 44.0;

    /// Stat figures ("15+")
    pub const STAT: f32 = 34.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Company name, banner headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Card headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Section subtitles
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most running text
    pub const BODY: f32 = 14.0;

    /// Small body - Feature bullets, form hints
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Stat labels, copyright line
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Input fields, cards
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Focused / invalid input
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const TINT: Color = Color {
        a: opacity::OVERLAY_SUBTLE,
        ..palette::BLACK
    };

    pub const SM: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::DIALOG_WIDTH < sizing::CONTENT_MAX_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::STAT);
    assert!(typography::STAT > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_600.b >= 0.0 && palette::PRIMARY_600.b <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_scale_darkens_monotonically() {
        let scale = [
            palette::PRIMARY_100,
            palette::PRIMARY_300,
            palette::PRIMARY_400,
            palette::PRIMARY_600,
            palette::PRIMARY_700,
            palette::PRIMARY_900,
        ];
        for pair in scale.windows(2) {
            assert!(pair[0].g > pair[1].g);
        }
    }
}
