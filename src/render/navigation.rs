// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{ChapterId, CourseOverview, CourseRegistry, SectionId};
use crate::nav::NavigationController;

/// Flattened navigation tree, one row per visible line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationView {
    pub title: String,
    pub subtitle: String,
    pub rows: Vec<NavRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavRow {
    Chapter { chapter_id: ChapterId, title: String, expanded: bool, active: bool },
    Section { section_id: SectionId, title: String, duration: String, active: bool },
}

impl NavRow {
    pub fn is_active(&self) -> bool {
        match self {
            Self::Chapter { active, .. } | Self::Section { active, .. } => *active,
        }
    }
}

impl NavigationView {
    /// Index of the row for the active section, if that section is visible.
    pub fn active_section_row(&self) -> Option<usize> {
        self.rows.iter().position(|row| matches!(row, NavRow::Section { active: true, .. }))
    }

    pub fn chapter_row(&self, chapter_id: &str) -> Option<usize> {
        self.rows.iter().position(|row| {
            matches!(row, NavRow::Chapter { chapter_id: id, .. } if id.as_str() == chapter_id)
        })
    }
}

/// Builds the visible tree: every chapter, followed by its sections when expanded.
pub fn render_navigation(
    registry: &CourseRegistry,
    navigation: &NavigationController,
    overview: &CourseOverview,
    active_section_id: &str,
) -> NavigationView {
    let active_chapter = NavigationController::active_chapter(registry, active_section_id);
    let mut rows = Vec::with_capacity(registry.chapters().len() + registry.section_count());

    for chapter in registry.chapters() {
        let expanded = navigation.is_expanded(chapter.id().as_str());
        rows.push(NavRow::Chapter {
            chapter_id: chapter.id().clone(),
            title: chapter.title().to_owned(),
            expanded,
            active: chapter.id() == active_chapter.id(),
        });

        if !expanded {
            continue;
        }
        for section in chapter.sections() {
            rows.push(NavRow::Section {
                section_id: section.id().clone(),
                title: section.title().to_owned(),
                duration: section.duration().to_owned(),
                active: section.id().as_str() == active_section_id,
            });
        }
    }

    NavigationView {
        title: overview.navigation_title.clone(),
        subtitle: overview.navigation_subtitle.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::{render_navigation, NavRow};
    use crate::catalog;
    use crate::model::ChapterId;
    use crate::nav::NavigationController;

    #[test]
    fn collapsed_chapters_hide_their_sections() {
        let registry = catalog::registry().expect("registry");
        let overview = catalog::overview();
        let nav = NavigationController::for_initial_section(&registry, catalog::DEFAULT_SECTION_ID);

        let view = render_navigation(&registry, &nav, &overview, catalog::DEFAULT_SECTION_ID);

        // 8 chapters + 4 intro sections.
        assert_eq!(view.rows.len(), 12);
        assert_eq!(view.active_section_row(), Some(1));
        assert!(matches!(
            &view.rows[0],
            NavRow::Chapter { expanded: true, active: true, .. }
        ));
        assert_eq!(view.title, "Digital Marketing Mastery");
    }

    #[test]
    fn unknown_active_section_highlights_first_chapter_only() {
        let registry = catalog::registry().expect("registry");
        let overview = catalog::overview();
        let mut nav = NavigationController::default();
        nav.toggle_chapter(&ChapterId::new("seo"));

        let view = render_navigation(&registry, &nav, &overview, "nowhere");

        assert_eq!(view.active_section_row(), None);
        let active = view.rows.iter().filter(|row| row.is_active()).collect::<Vec<_>>();
        assert_eq!(active.len(), 1);
        assert!(matches!(
            active[0],
            NavRow::Chapter { chapter_id, .. } if chapter_id.as_str() == "intro"
        ));
        assert_eq!(view.chapter_row("seo"), Some(1));
        assert_eq!(view.chapter_row("content"), Some(7));
    }
}
