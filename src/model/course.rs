// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use super::ids::{ChapterId, Id, IdError, SectionId};

/// A single navigable lesson unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    id: SectionId,
    title: String,
    duration: String,
}

impl Section {
    pub fn new(id: SectionId, title: impl Into<String>, duration: impl Into<String>) -> Self {
        Self { id, title: title.into(), duration: duration.into() }
    }

    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }
}

/// An ordered group of sections sharing a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    id: ChapterId,
    title: String,
    sections: Vec<Section>,
}

impl Chapter {
    pub fn new(id: ChapterId, title: impl Into<String>) -> Self {
        Self { id, title: title.into(), sections: Vec::new() }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn id(&self) -> &ChapterId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn contains_section(&self, section_id: &str) -> bool {
        self.sections.iter().any(|section| section.id().as_str() == section_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    #[error("invalid id {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: IdError,
    },
    #[error("duplicate chapter id {0}")]
    DuplicateChapter(ChapterId),
    #[error("duplicate section id {section_id} (in chapter {chapter_id})")]
    DuplicateSection { chapter_id: ChapterId, section_id: SectionId },
    #[error("course registry must contain at least one chapter")]
    NoChapters,
}

/// The section registry: chapters in display order, each with its sections in display order.
///
/// Construction validates that chapter ids and section ids are unique across the whole
/// registry, so lookups by id are unambiguous afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRegistry {
    chapters: Vec<Chapter>,
}

impl CourseRegistry {
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, CourseError> {
        if chapters.is_empty() {
            return Err(CourseError::NoChapters);
        }

        let mut chapter_ids = BTreeSet::<&ChapterId>::new();
        let mut section_ids = BTreeSet::<&SectionId>::new();
        for chapter in &chapters {
            authored(chapter.id())?;
            if !chapter_ids.insert(chapter.id()) {
                return Err(CourseError::DuplicateChapter(chapter.id().clone()));
            }
            for section in chapter.sections() {
                authored(section.id())?;
                if !section_ids.insert(section.id()) {
                    return Err(CourseError::DuplicateSection {
                        chapter_id: chapter.id().clone(),
                        section_id: section.id().clone(),
                    });
                }
            }
        }

        Ok(Self { chapters })
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn first_chapter(&self) -> &Chapter {
        // Non-empty by construction.
        &self.chapters[0]
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| chapter.id().as_str() == chapter_id)
    }

    pub fn chapter_containing(&self, section_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| chapter.contains_section(section_id))
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections().find(|section| section.id().as_str() == section_id)
    }

    /// All sections in display order, across chapters.
    pub fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.chapters.iter().flat_map(|chapter| chapter.sections().iter())
    }

    pub fn section_count(&self) -> usize {
        self.chapters.iter().map(|chapter| chapter.sections().len()).sum()
    }
}

fn authored<T>(id: &Id<T>) -> Result<(), CourseError> {
    id.check_authored()
        .map_err(|source| CourseError::InvalidId { value: id.as_str().to_owned(), source })
}

#[cfg(test)]
mod tests {
    use super::{Chapter, CourseError, CourseRegistry, Section};
    use crate::model::{ChapterId, IdError, SectionId};

    fn section(id: &str) -> Section {
        Section::new(SectionId::new(id), id.to_uppercase(), "5 min")
    }

    fn chapter(id: &str) -> Chapter {
        Chapter::new(ChapterId::new(id), id)
    }

    #[test]
    fn rejects_duplicate_section_ids_across_chapters() {
        let err = CourseRegistry::new(vec![
            chapter("a").with_section(section("one")),
            chapter("b").with_section(section("two")).with_section(section("one")),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            CourseError::DuplicateSection {
                chapter_id: ChapterId::new("b"),
                section_id: SectionId::new("one"),
            }
        );
    }

    #[test]
    fn rejects_duplicate_chapter_ids() {
        let err = CourseRegistry::new(vec![chapter("a"), chapter("a")]).unwrap_err();
        assert!(matches!(err, CourseError::DuplicateChapter(id) if id.as_str() == "a"));
    }

    #[test]
    fn rejects_sections_with_unauthored_ids() {
        let err = CourseRegistry::new(vec![chapter("a").with_section(section("on page seo"))])
            .unwrap_err();
        assert!(matches!(
            err,
            CourseError::InvalidId { ref value, source: IdError::ContainsWhitespace }
                if value == "on page seo"
        ));

        let err = CourseRegistry::new(vec![chapter("")]).unwrap_err();
        assert!(matches!(err, CourseError::InvalidId { source: IdError::Empty, .. }));
    }

    #[test]
    fn rejects_empty_registry() {
        assert_eq!(CourseRegistry::new(Vec::new()).unwrap_err(), CourseError::NoChapters);
    }

    #[test]
    fn sections_iterate_in_display_order() {
        let registry = CourseRegistry::new(vec![
            chapter("a").with_section(section("one")).with_section(section("two")),
            chapter("b").with_section(section("three")),
        ])
        .expect("registry");

        let ids = registry.sections().map(|s| s.id().as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["one", "two", "three"]);
        assert_eq!(registry.section_count(), 3);
        assert_eq!(
            registry.chapter_containing("three").map(|c| c.id().as_str()),
            Some("b")
        );
        assert!(registry.chapter_containing("missing").is_none());
    }
}
