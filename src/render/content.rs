// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Section id → structured lesson view.
//!
//! The view is a presentation-agnostic description: badges, heading, an optional definition
//! and the body blocks in fixed order. Each block is included solely on the presence of its
//! field in the [`ContentBody`]; no block implies another.

use serde::Serialize;

use crate::model::{
    Component, ContentBody, ContentEntry, ContentStore, HowItWorks, PracticalExample,
    RankingFactor, SeoType, TimelineEra,
};

pub const PLACEHOLDER_HEADING: &str = "Content Coming Soon";
pub const PLACEHOLDER_MESSAGE: &str =
    "This section is being developed. Please check other sections.";

pub const NEXT_STEPS_HEADING: &str = "Ready to Apply What You've Learned?";
pub const NEXT_STEPS_MESSAGE: &str = "Continue to the next section to build on these foundations \
                                      and develop your digital marketing expertise further.";
pub const NEXT_STEPS_PROGRESS_PERCENT: u8 = 65;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentView {
    Placeholder(PlaceholderView),
    Lesson(LessonView),
}

impl ContentView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    pub fn heading(&self) -> &str {
        match self {
            Self::Placeholder(view) => &view.heading,
            Self::Lesson(view) => &view.heading,
        }
    }

    pub fn as_lesson(&self) -> Option<&LessonView> {
        match self {
            Self::Lesson(view) => Some(view),
            Self::Placeholder(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderView {
    pub heading: String,
    pub message: String,
}

impl Default for PlaceholderView {
    fn default() -> Self {
        Self { heading: PLACEHOLDER_HEADING.to_owned(), message: PLACEHOLDER_MESSAGE.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonView {
    pub badges: Vec<Badge>,
    pub heading: String,
    pub definition: Option<String>,
    pub blocks: Vec<ContentBlock>,
    pub next_steps: NextSteps,
}

impl LessonView {
    pub fn block_kinds(&self) -> Vec<BlockKind> {
        self.blocks.iter().map(ContentBlock::kind).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Duration,
    Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextSteps {
    pub heading: String,
    pub message: String,
    pub progress_percent: u8,
}

impl Default for NextSteps {
    fn default() -> Self {
        Self {
            heading: NEXT_STEPS_HEADING.to_owned(),
            message: NEXT_STEPS_MESSAGE.to_owned(),
            progress_percent: NEXT_STEPS_PROGRESS_PERCENT,
        }
    }
}

/// One body block of a lesson, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    KeyPoints { title: String, items: Vec<String> },
    Components { title: String, items: Vec<Component> },
    Timeline { title: String, eras: Vec<TimelineEra> },
    Statistics { title: String, items: Vec<String> },
    PracticalExample { example: PracticalExample, strategy_title: String, results_title: String },
    KeyShifts { title: String, items: Vec<String> },
    FutureTrends { title: String, items: Vec<String> },
    HowItWorks { how_it_works: HowItWorks },
    RankingFactors { title: String, factors: Vec<RankingFactor> },
    SeoTypes { title: String, types: Vec<SeoType> },
    PracticalSteps { title: String, items: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    KeyPoints,
    Components,
    Timeline,
    Statistics,
    PracticalExample,
    KeyShifts,
    FutureTrends,
    HowItWorks,
    RankingFactors,
    SeoTypes,
    PracticalSteps,
}

impl ContentBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::KeyPoints { .. } => BlockKind::KeyPoints,
            Self::Components { .. } => BlockKind::Components,
            Self::Timeline { .. } => BlockKind::Timeline,
            Self::Statistics { .. } => BlockKind::Statistics,
            Self::PracticalExample { .. } => BlockKind::PracticalExample,
            Self::KeyShifts { .. } => BlockKind::KeyShifts,
            Self::FutureTrends { .. } => BlockKind::FutureTrends,
            Self::HowItWorks { .. } => BlockKind::HowItWorks,
            Self::RankingFactors { .. } => BlockKind::RankingFactors,
            Self::SeoTypes { .. } => BlockKind::SeoTypes,
            Self::PracticalSteps { .. } => BlockKind::PracticalSteps,
        }
    }

    /// Heading shown above the block.
    pub fn title(&self) -> &str {
        match self {
            Self::KeyPoints { title, .. }
            | Self::Components { title, .. }
            | Self::Timeline { title, .. }
            | Self::Statistics { title, .. }
            | Self::KeyShifts { title, .. }
            | Self::FutureTrends { title, .. }
            | Self::RankingFactors { title, .. }
            | Self::SeoTypes { title, .. }
            | Self::PracticalSteps { title, .. } => title,
            Self::PracticalExample { example, .. } => &example.title,
            Self::HowItWorks { how_it_works } => &how_it_works.title,
        }
    }
}

/// Looks up `section_id` and derives its view. Unknown ids yield the placeholder view.
pub fn render_content(store: &ContentStore, section_id: &str) -> ContentView {
    match store.get(section_id) {
        Some(entry) => ContentView::Lesson(render_lesson(entry)),
        None => {
            tracing::debug!(section = section_id, "no content for section, rendering placeholder");
            ContentView::Placeholder(PlaceholderView::default())
        }
    }
}

pub fn render_lesson(entry: &ContentEntry) -> LessonView {
    LessonView {
        badges: vec![
            Badge { kind: BadgeKind::Duration, label: entry.duration.clone() },
            Badge { kind: BadgeKind::Difficulty, label: entry.difficulty.label().to_owned() },
        ],
        heading: entry.title.clone(),
        definition: entry.body.definition.clone(),
        blocks: body_blocks(&entry.body),
        next_steps: NextSteps::default(),
    }
}

fn body_blocks(body: &ContentBody) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    if let Some(items) = &body.key_points {
        blocks.push(ContentBlock::KeyPoints {
            title: "Key Takeaways".to_owned(),
            items: items.clone(),
        });
    }
    if let Some(items) = &body.components {
        blocks.push(ContentBlock::Components {
            title: "Core Components".to_owned(),
            items: items.clone(),
        });
    }
    if let Some(eras) = &body.timeline {
        blocks.push(ContentBlock::Timeline {
            title: "Marketing Evolution Timeline".to_owned(),
            eras: eras.clone(),
        });
    }
    if let Some(items) = &body.statistics {
        blocks.push(ContentBlock::Statistics {
            title: "Industry Statistics".to_owned(),
            items: items.clone(),
        });
    }
    if let Some(example) = &body.practical_example {
        blocks.push(ContentBlock::PracticalExample {
            example: example.clone(),
            strategy_title: "Digital Marketing Strategy:".to_owned(),
            results_title: "Results:".to_owned(),
        });
    }
    if let Some(items) = &body.key_shifts {
        blocks.push(ContentBlock::KeyShifts {
            title: "Key Shifts".to_owned(),
            items: items.clone(),
        });
    }
    if let Some(items) = &body.future_trends {
        blocks.push(ContentBlock::FutureTrends {
            title: "Future Trends".to_owned(),
            items: items.clone(),
        });
    }
    if let Some(how_it_works) = &body.how_it_works {
        blocks.push(ContentBlock::HowItWorks { how_it_works: how_it_works.clone() });
    }
    if let Some(factors) = &body.ranking_factors {
        blocks.push(ContentBlock::RankingFactors {
            title: "Ranking Factors".to_owned(),
            factors: factors.clone(),
        });
    }
    if let Some(types) = &body.seo_types {
        blocks.push(ContentBlock::SeoTypes {
            title: "Types of SEO".to_owned(),
            types: types.clone(),
        });
    }
    if let Some(items) = &body.practical_steps {
        blocks.push(ContentBlock::PracticalSteps {
            title: "Practical Steps".to_owned(),
            items: items.clone(),
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{render_content, BadgeKind, BlockKind, ContentView, PLACEHOLDER_HEADING};
    use crate::catalog;
    use crate::model::{ContentBody, ContentEntry, ContentStore, Difficulty, SectionId};

    fn store_with(section_id: &str, body: ContentBody) -> ContentStore {
        ContentStore::new().with_entry(
            SectionId::new(section_id),
            ContentEntry::new("Sparse", "3 min", Difficulty::Advanced, body),
        )
    }

    #[test]
    fn unknown_section_renders_placeholder() {
        let store = catalog::content_store().expect("builtin content");
        let view = render_content(&store, "on-page-seo");
        assert!(view.is_placeholder());
        assert_eq!(view.heading(), PLACEHOLDER_HEADING);
    }

    #[test]
    fn definition_and_statistics_only_render_exactly_those_blocks() {
        let store = store_with(
            "sparse",
            ContentBody {
                definition: Some("Only a definition".to_owned()),
                statistics: Some(vec!["1 stat".to_owned()]),
                ..ContentBody::default()
            },
        );

        let ContentView::Lesson(lesson) = render_content(&store, "sparse") else {
            panic!("expected lesson view");
        };
        assert_eq!(lesson.definition.as_deref(), Some("Only a definition"));
        assert_eq!(lesson.block_kinds(), vec![BlockKind::Statistics]);
    }

    #[test]
    fn empty_list_is_present_and_renders_an_empty_block() {
        let store = store_with(
            "empty",
            ContentBody { key_points: Some(Vec::new()), ..ContentBody::default() },
        );

        let view = render_content(&store, "empty");
        let lesson = view.as_lesson().expect("lesson view");
        assert_eq!(lesson.definition, None);
        assert_eq!(lesson.block_kinds(), vec![BlockKind::KeyPoints]);
    }

    #[test]
    fn full_lesson_renders_blocks_in_fixed_order() {
        let store = catalog::content_store().expect("builtin content");
        let view = render_content(&store, catalog::DEFAULT_SECTION_ID);
        let lesson = view.as_lesson().expect("lesson view");

        assert_eq!(
            lesson.block_kinds(),
            vec![
                BlockKind::KeyPoints,
                BlockKind::Components,
                BlockKind::Statistics,
                BlockKind::PracticalExample,
            ]
        );
        assert_eq!(lesson.next_steps.progress_percent, 65);
    }

    #[rstest]
    #[case("evolution", &[BlockKind::Timeline, BlockKind::KeyShifts, BlockKind::FutureTrends])]
    #[case(
        "seo-fundamentals",
        &[
            BlockKind::HowItWorks,
            BlockKind::RankingFactors,
            BlockKind::SeoTypes,
            BlockKind::PracticalSteps,
        ]
    )]
    #[case("keyword-research", &[BlockKind::KeyPoints, BlockKind::PracticalExample])]
    fn builtin_lessons_render_their_present_fields(
        #[case] section_id: &str,
        #[case] expected: &[BlockKind],
    ) {
        let store = catalog::content_store().expect("builtin content");
        let view = render_content(&store, section_id);
        assert_eq!(view.as_lesson().expect("lesson view").block_kinds(), expected);
    }

    #[test]
    fn badges_carry_stored_duration_and_difficulty_verbatim() {
        let store = catalog::content_store().expect("builtin content");
        for (section_id, entry) in store.iter() {
            let view = render_content(&store, section_id.as_str());
            let lesson = view.as_lesson().expect("lesson view");
            assert_eq!(lesson.heading, entry.title);
            assert_eq!(lesson.badges[0].kind, BadgeKind::Duration);
            assert_eq!(lesson.badges[0].label, entry.duration);
            assert_eq!(lesson.badges[1].kind, BadgeKind::Difficulty);
            assert_eq!(lesson.badges[1].label, entry.difficulty.label());
        }
    }

    #[test]
    fn content_view_serializes_with_kind_tags() {
        let store = catalog::content_store().expect("builtin content");
        let json = serde_json::to_value(render_content(&store, "evolution")).expect("json");
        assert_eq!(json["kind"], "lesson");
        assert_eq!(json["blocks"][0]["kind"], "timeline");

        let json = serde_json::to_value(render_content(&store, "google-ads")).expect("json");
        assert_eq!(json["kind"], "placeholder");
    }
}
