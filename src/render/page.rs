// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{ChapterId, Course, CourseOverview, SectionId};
use crate::nav::NavigationController;

use super::content::{render_content, ContentView};
use super::navigation::{render_navigation, NavigationView};

/// Everything on screen for one state of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub active_section_id: SectionId,
    pub active_chapter_id: ChapterId,
    pub header: CourseOverview,
    pub navigation: NavigationView,
    pub content: ContentView,
}

pub fn render_page(
    course: &Course,
    navigation: &NavigationController,
    active_section_id: &SectionId,
) -> PageView {
    let active_chapter =
        NavigationController::active_chapter(course.registry(), active_section_id.as_str());
    PageView {
        active_section_id: active_section_id.clone(),
        active_chapter_id: active_chapter.id().clone(),
        header: course.overview().clone(),
        navigation: render_navigation(
            course.registry(),
            navigation,
            course.overview(),
            active_section_id.as_str(),
        ),
        content: render_content(course.content(), active_section_id.as_str()),
    }
}
