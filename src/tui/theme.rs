// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fixed colour theme for the viewer.

use ratatui::style::{Color, Modifier, Style};

/// Named colours the viewer draws with. Foreground and background stay on the terminal's own
/// defaults so the viewer blends into light and dark setups alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiTheme {
    focus: Color,
    muted: Color,
    heading: Color,
    block_title: Color,
    accent: Color,
    badge_fg: Color,
    badge_bg: Color,
    progress: Color,
}

impl Default for TuiTheme {
    fn default() -> Self {
        Self {
            focus: Color::LightGreen,
            muted: Color::DarkGray,
            heading: Color::White,
            block_title: Color::LightCyan,
            accent: Color::Yellow,
            badge_fg: Color::Black,
            badge_bg: Color::Cyan,
            progress: Color::Green,
        }
    }
}

impl TuiTheme {
    pub(crate) fn base_style(&self) -> Style {
        Style::default()
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.focus)
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    /// Active chapter and section in the tree.
    pub(crate) fn active_style(&self) -> Style {
        self.base_style().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.muted)
    }

    pub(crate) fn heading_style(&self) -> Style {
        self.base_style().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn block_title_style(&self) -> Style {
        self.base_style().fg(self.block_title).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn accent_style(&self) -> Style {
        self.base_style().fg(self.accent)
    }

    pub(crate) fn badge_style(&self) -> Style {
        self.base_style().fg(self.badge_fg).bg(self.badge_bg).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn progress_style(&self) -> Style {
        self.base_style().fg(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::{Color, Modifier};

    use super::TuiTheme;

    #[test]
    fn focused_panels_are_highlighted() {
        let theme = TuiTheme::default();
        assert_eq!(theme.panel_border_style(true).fg, Some(Color::LightGreen));
        assert_eq!(theme.panel_border_style(false).fg, None);
    }

    #[test]
    fn badges_stand_out_from_body_text() {
        let theme = TuiTheme::default();
        let badge = theme.badge_style();
        assert_eq!(badge.bg, Some(Color::Cyan));
        assert!(badge.add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.base_style().bg, None);
    }

    #[test]
    fn active_rows_share_the_focus_colour() {
        let theme = TuiTheme::default();
        assert_eq!(theme.active_style().fg, theme.panel_border_style(true).fg);
    }
}
