// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lesson payloads keyed by section id.
//!
//! Every [`ContentBody`] field is independently optional. An empty list is still "present"
//! (it renders an empty block); only `None` omits a block.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::ids::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentEntry {
    pub title: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub body: ContentBody,
}

impl ContentEntry {
    pub fn new(
        title: impl Into<String>,
        duration: impl Into<String>,
        difficulty: Difficulty,
        body: ContentBody,
    ) -> Self {
        Self { title: title.into(), duration: duration.into(), difficulty, body }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentBody {
    pub definition: Option<String>,
    pub key_points: Option<Vec<String>>,
    pub components: Option<Vec<Component>>,
    pub timeline: Option<Vec<TimelineEra>>,
    pub statistics: Option<Vec<String>>,
    pub practical_example: Option<PracticalExample>,
    pub key_shifts: Option<Vec<String>>,
    pub future_trends: Option<Vec<String>>,
    pub how_it_works: Option<HowItWorks>,
    pub ranking_factors: Option<Vec<RankingFactor>>,
    pub seo_types: Option<Vec<SeoType>>,
    pub practical_steps: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub title: String,
    pub description: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEra {
    pub era: String,
    pub focus: String,
    pub channels: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticalExample {
    pub title: String,
    pub scenario: String,
    pub strategy: Vec<String>,
    pub results: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HowItWorks {
    pub title: String,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub step: String,
    pub description: String,
    pub analogy: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingFactor {
    pub category: String,
    pub factors: Vec<String>,
    pub weight: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoType {
    #[serde(rename = "type")]
    pub name: String,
    pub description: String,
    pub tactics: Vec<String>,
    pub example: String,
}

/// Section id → lesson payload. Ids without an entry are legal; callers render a fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentStore {
    entries: BTreeMap<SectionId, ContentEntry>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `section_id`, returning the previous one.
    pub fn insert(&mut self, section_id: SectionId, entry: ContentEntry) -> Option<ContentEntry> {
        self.entries.insert(section_id, entry)
    }

    pub fn with_entry(mut self, section_id: SectionId, entry: ContentEntry) -> Self {
        self.insert(section_id, entry);
        self
    }

    pub fn get(&self, section_id: &str) -> Option<&ContentEntry> {
        self.entries.get(section_id)
    }

    pub fn contains(&self, section_id: &str) -> bool {
        self.entries.contains_key(section_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SectionId, &ContentEntry)> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentBody, ContentEntry, ContentStore, Difficulty, SeoType};
    use crate::model::SectionId;

    #[test]
    fn lookup_by_str_borrows_section_id() {
        let store = ContentStore::new().with_entry(
            SectionId::new("evolution"),
            ContentEntry::new("Evolution", "12 min", Difficulty::Beginner, ContentBody::default()),
        );

        assert!(store.contains("evolution"));
        assert_eq!(store.get("evolution").map(|entry| entry.title.as_str()), Some("Evolution"));
        assert!(store.get("on-page-seo").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn seo_type_name_serializes_as_type() {
        let seo_type = SeoType {
            name: "On-Page SEO".to_owned(),
            description: "Optimizing individual pages".to_owned(),
            tactics: vec!["Title tags".to_owned()],
            example: "Rewriting a product page title".to_owned(),
        };

        let json = serde_json::to_value(&seo_type).expect("json");
        assert_eq!(json["type"], "On-Page SEO");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn difficulty_labels_are_capitalised() {
        assert_eq!(Difficulty::Beginner.to_string(), "Beginner");
        assert_eq!(Difficulty::Intermediate.label(), "Intermediate");
        assert_eq!(Difficulty::Advanced.label(), "Advanced");
    }
}
