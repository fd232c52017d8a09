// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A course is a [`CourseRegistry`] of chapters/sections plus a [`ContentStore`] of lesson
//! payloads keyed by the same section ids, and a static [`CourseOverview`] header.

pub mod content;
pub mod course;
pub mod ids;
pub mod overview;

pub use content::{
    Component, ContentBody, ContentEntry, ContentStore, Difficulty, HowItWorks, PracticalExample,
    ProcessStep, RankingFactor, SeoType, TimelineEra,
};
pub use course::{Chapter, CourseError, CourseRegistry, Section};
pub use ids::{ChapterId, Id, IdError, SectionId};
pub use overview::{CourseOverview, CourseStat};

/// Everything the viewer needs, immutable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    registry: CourseRegistry,
    content: ContentStore,
    overview: CourseOverview,
}

impl Course {
    pub fn new(registry: CourseRegistry, content: ContentStore, overview: CourseOverview) -> Self {
        Self { registry, content, overview }
    }

    pub fn registry(&self) -> &CourseRegistry {
        &self.registry
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn overview(&self) -> &CourseOverview {
        &self.overview
    }
}
