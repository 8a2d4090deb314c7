// SPDX-License-Identifier: MPL-2.0
//! Responsive layout selection.

/// Window widths below this are laid out for small screens.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Layout class derived from the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Header shows every navigation entry; cards sit side by side.
    #[default]
    Wide,
    /// Header collapses navigation into a menu; cards stack.
    Compact,
}

impl Layout {
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT {
            Layout::Compact
        } else {
            Layout::Wide
        }
    }

    #[must_use]
    pub fn is_compact(self) -> bool {
        self == Layout::Compact
    }

    /// Number of card columns for a grid that holds `wide_columns` per row
    /// in the wide layout.
    #[must_use]
    pub fn columns(self, wide_columns: usize) -> usize {
        match self {
            Layout::Wide => wide_columns.max(1),
            Layout::Compact => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(Layout::from_width(767.9), Layout::Compact);
        assert_eq!(Layout::from_width(768.0), Layout::Wide);
    }

    #[test]
    fn compact_layout_stacks_cards() {
        assert_eq!(Layout::Compact.columns(3), 1);
        assert_eq!(Layout::Wide.columns(3), 3);
        assert_eq!(Layout::Wide.columns(0), 1);
    }
}
