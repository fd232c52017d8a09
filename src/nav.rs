// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation controller for the chapter/section tree.
//!
//! The controller owns only the set of expanded chapters. The active section is an input it
//! reads and never writes: selecting a section produces a [`SectionSelected`] event that the
//! page composer applies.

use std::collections::BTreeSet;

use crate::model::{Chapter, ChapterId, CourseRegistry, SectionId};

/// Selection-change notification emitted by the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSelected {
    section_id: SectionId,
}

impl SectionSelected {
    pub fn section_id(&self) -> &SectionId {
        &self.section_id
    }

    pub fn into_section_id(self) -> SectionId {
        self.section_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationController {
    expanded: BTreeSet<ChapterId>,
}

impl NavigationController {
    pub fn new(expanded: impl IntoIterator<Item = ChapterId>) -> Self {
        Self { expanded: expanded.into_iter().collect() }
    }

    /// Starts with the chapter containing `initial_section_id` expanded (or the first chapter
    /// when the id is not in the registry).
    pub fn for_initial_section(registry: &CourseRegistry, initial_section_id: &str) -> Self {
        let chapter = Self::active_chapter(registry, initial_section_id);
        Self::new([chapter.id().clone()])
    }

    /// Flips membership of `chapter_id` in the expanded set. Returns whether it is now
    /// expanded. Unknown ids are accepted; they are simply never drawn.
    pub fn toggle_chapter(&mut self, chapter_id: &ChapterId) -> bool {
        if self.expanded.remove(chapter_id) {
            tracing::debug!(chapter = %chapter_id, "collapsed chapter");
            false
        } else {
            self.expanded.insert(chapter_id.clone());
            tracing::debug!(chapter = %chapter_id, "expanded chapter");
            true
        }
    }

    pub fn expand(&mut self, chapter_id: &ChapterId) {
        if !self.expanded.contains(chapter_id) {
            self.expanded.insert(chapter_id.clone());
        }
    }

    pub fn is_expanded(&self, chapter_id: &str) -> bool {
        self.expanded.contains(chapter_id)
    }

    pub fn expanded_chapter_ids(&self) -> impl Iterator<Item = &ChapterId> + '_ {
        self.expanded.iter()
    }

    /// Emits a selection event for `section_id`. No validation: the content renderer decides
    /// how unknown ids are displayed. Expansion state is left untouched.
    pub fn select_section(&self, section_id: SectionId) -> SectionSelected {
        SectionSelected { section_id }
    }

    /// The chapter whose sections contain `active_section_id`, or the first chapter.
    pub fn active_chapter<'a>(
        registry: &'a CourseRegistry,
        active_section_id: &str,
    ) -> &'a Chapter {
        registry
            .chapter_containing(active_section_id)
            .unwrap_or_else(|| registry.first_chapter())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::NavigationController;
    use crate::catalog;
    use crate::model::{ChapterId, CourseRegistry, SectionId};

    #[fixture]
    fn registry() -> CourseRegistry {
        catalog::registry().expect("builtin registry")
    }

    fn chapter_id(value: &str) -> ChapterId {
        ChapterId::new(value)
    }

    #[rstest]
    fn initial_section_expands_its_chapter(registry: CourseRegistry) {
        let nav = NavigationController::for_initial_section(&registry, catalog::DEFAULT_SECTION_ID);
        assert!(nav.is_expanded("intro"));
        assert_eq!(nav.expanded_chapter_ids().count(), 1);
    }

    #[rstest]
    #[case("intro")]
    #[case("seo")]
    #[case("not-a-chapter")]
    fn toggle_twice_restores_membership(#[case] id: &str) {
        let mut nav = NavigationController::new([chapter_id("intro")]);
        let before = nav.is_expanded(id);

        nav.toggle_chapter(&chapter_id(id));
        assert_ne!(nav.is_expanded(id), before);
        nav.toggle_chapter(&chapter_id(id));
        assert_eq!(nav.is_expanded(id), before);
    }

    #[rstest]
    fn select_emits_unvalidated_id_and_keeps_expansion(registry: CourseRegistry) {
        let nav = NavigationController::for_initial_section(&registry, catalog::DEFAULT_SECTION_ID);
        let before = nav.clone();

        let event = nav.select_section(SectionId::new("does-not-exist"));

        assert_eq!(event.section_id().as_str(), "does-not-exist");
        assert_eq!(nav, before);
    }

    #[rstest]
    #[case("what-is-digital-marketing", "intro")]
    #[case("on-page-seo", "seo")]
    #[case("future-trends", "advanced")]
    #[case("unknown-section", "intro")]
    fn active_chapter_falls_back_to_first(
        registry: CourseRegistry,
        #[case] section: &str,
        #[case] expected: &str,
    ) {
        let chapter = NavigationController::active_chapter(&registry, section);
        assert_eq!(chapter.id().as_str(), expected);
    }
}
