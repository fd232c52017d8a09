// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View derivation for the course page.
//!
//! Renderers are pure functions from course data plus the active section id to serialisable view
//! models. The TUI draws these views with ratatui; `--print` and `--json` emit them directly.

pub mod content;
pub mod navigation;
pub mod page;
pub mod text;

pub use content::{
    render_content, render_lesson, Badge, BadgeKind, BlockKind, ContentBlock, ContentView,
    LessonView, NextSteps, PlaceholderView,
};
pub use navigation::{render_navigation, NavRow, NavigationView};
pub use page::{render_page, PageView};
pub use text::{
    content_view_lines, content_view_to_text, wrap_text, ContentLine, LineRole,
};
