// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Page composition: the single active-section state and the views derived from it.
//!
//! [`PageState`] is the only writer of the active section id. Navigation emits
//! [`SectionSelected`] events; the composer applies them and every view is re-derived from the
//! new id on demand.

use crate::model::{Chapter, ChapterId, Course, SectionId};
use crate::nav::{NavigationController, SectionSelected};
use crate::render::{
    render_content, render_navigation, render_page, ContentView, NavigationView, PageView,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    rev: u64,
    active_section_id: SectionId,
}

impl PageState {
    pub fn new(active_section_id: SectionId) -> Self {
        Self { rev: 0, active_section_id }
    }

    /// Bumped on every effective change of the active section.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn active_section_id(&self) -> &SectionId {
        &self.active_section_id
    }

    /// Replaces the active section. Returns `false` (and leaves `rev` alone) when the id is
    /// already active.
    pub fn apply(&mut self, event: SectionSelected) -> bool {
        if event.section_id() == &self.active_section_id {
            return false;
        }
        self.active_section_id = event.into_section_id();
        self.rev = self.rev.wrapping_add(1);
        true
    }
}

/// Owns the course, the navigation tree and the page state, and wires them together.
#[derive(Debug, Clone)]
pub struct PageComposer {
    course: Course,
    navigation: NavigationController,
    state: PageState,
}

impl PageComposer {
    pub fn new(course: Course, initial_section_id: SectionId) -> Self {
        let navigation = NavigationController::for_initial_section(
            course.registry(),
            initial_section_id.as_str(),
        );
        Self { course, navigation, state: PageState::new(initial_section_id) }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn active_section_id(&self) -> &SectionId {
        self.state.active_section_id()
    }

    pub fn rev(&self) -> u64 {
        self.state.rev()
    }

    pub fn active_chapter(&self) -> &Chapter {
        NavigationController::active_chapter(
            self.course.registry(),
            self.active_section_id().as_str(),
        )
    }

    /// Toggles a chapter in the navigation tree. The active section is unaffected.
    pub fn toggle_chapter(&mut self, chapter_id: &ChapterId) -> bool {
        self.navigation.toggle_chapter(chapter_id)
    }

    pub fn expand_chapter(&mut self, chapter_id: &ChapterId) {
        self.navigation.expand(chapter_id);
    }

    /// Routes a selection through the navigation controller and applies the emitted event.
    pub fn select_section(&mut self, section_id: SectionId) -> bool {
        let event = self.navigation.select_section(section_id);
        let changed = self.state.apply(event);
        if changed {
            tracing::info!(
                section = %self.state.active_section_id(),
                rev = self.state.rev(),
                known = self.course.content().contains(self.state.active_section_id().as_str()),
                "selected section"
            );
        }
        changed
    }

    pub fn content_view(&self) -> ContentView {
        render_content(self.course.content(), self.active_section_id().as_str())
    }

    pub fn navigation_view(&self) -> NavigationView {
        render_navigation(
            self.course.registry(),
            &self.navigation,
            self.course.overview(),
            self.active_section_id().as_str(),
        )
    }

    pub fn page_view(&self) -> PageView {
        render_page(&self.course, &self.navigation, self.active_section_id())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{PageComposer, PageState};
    use crate::catalog;
    use crate::model::{ChapterId, SectionId};
    use crate::nav::NavigationController;

    fn section_id(value: &str) -> SectionId {
        SectionId::new(value)
    }

    #[fixture]
    fn composer() -> PageComposer {
        let course = catalog::digital_marketing().expect("builtin course");
        PageComposer::new(course, catalog::default_section_id().expect("default section"))
    }

    #[test]
    fn apply_bumps_rev_only_on_change() {
        let nav = NavigationController::default();
        let mut state = PageState::new(section_id("evolution"));

        assert!(!state.apply(nav.select_section(section_id("evolution"))));
        assert_eq!(state.rev(), 0);

        assert!(state.apply(nav.select_section(section_id("ppc-basics"))));
        assert_eq!(state.rev(), 1);
        assert_eq!(state.active_section_id().as_str(), "ppc-basics");
    }

    #[rstest]
    fn starts_on_default_section_with_intro_expanded(composer: PageComposer) {
        assert_eq!(composer.active_section_id().as_str(), "what-is-digital-marketing");
        assert_eq!(composer.active_chapter().id().as_str(), "intro");
        assert!(composer.navigation().is_expanded("intro"));
        assert_eq!(composer.rev(), 0);
        assert_eq!(composer.content_view().heading(), "What is Digital Marketing?");
    }

    #[rstest]
    #[case("on-page-seo")]
    #[case("totally-unknown")]
    #[case("ppc-basics")]
    fn selection_sets_exact_id_regardless_of_validity(
        mut composer: PageComposer,
        #[case] id: &str,
    ) {
        assert!(composer.select_section(section_id(id)));
        assert_eq!(composer.active_section_id().as_str(), id);

        let state = composer.state().clone();
        assert!(!composer.select_section(section_id(id)));
        assert_eq!(composer.state(), &state);
    }

    #[rstest]
    fn selection_does_not_touch_expansion(mut composer: PageComposer) {
        let before = composer.navigation().clone();
        composer.select_section(section_id("email-fundamentals"));
        assert_eq!(composer.navigation(), &before);
        assert_eq!(composer.active_chapter().id().as_str(), "email");
    }

    #[rstest]
    fn toggling_leaves_active_section(mut composer: PageComposer) {
        let seo = ChapterId::new("seo");
        assert!(composer.toggle_chapter(&seo));
        assert!(!composer.toggle_chapter(&seo));
        assert_eq!(composer.active_section_id().as_str(), "what-is-digital-marketing");
        assert_eq!(composer.rev(), 0);
    }

    #[rstest]
    fn page_view_tracks_state(mut composer: PageComposer) {
        composer.select_section(section_id("on-page-seo"));
        let page = composer.page_view();

        assert_eq!(page.active_section_id.as_str(), "on-page-seo");
        assert_eq!(page.active_chapter_id.as_str(), "seo");
        assert!(page.content.is_placeholder());
        assert_eq!(page.header.badge, "Complete Masterclass");
        // the seo chapter is highlighted but stays collapsed
        assert_eq!(page.navigation.active_section_row(), None);
    }
}
