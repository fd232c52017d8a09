// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in "Digital Marketing Mastery" course.

use crate::model::{
    Chapter, Course, CourseError, CourseOverview, CourseRegistry, CourseStat, Id, Section,
    SectionId,
};

mod lessons;

pub use lessons::content_store;

/// Section shown when the viewer starts.
pub const DEFAULT_SECTION_ID: &str = "what-is-digital-marketing";

type SectionRow = (&'static str, &'static str, &'static str);

const CHAPTERS: &[(&str, &str, &[SectionRow])] = &[
    (
        "intro",
        "Introduction to Digital Marketing",
        &[
            ("what-is-digital-marketing", "What is Digital Marketing?", "15 min"),
            ("evolution", "Evolution of Marketing", "12 min"),
            ("digital-vs-traditional", "Digital vs Traditional Marketing", "10 min"),
            ("career-opportunities", "Career Opportunities", "8 min"),
        ],
    ),
    (
        "seo",
        "SEO & Website Optimization",
        &[
            ("seo-fundamentals", "SEO Fundamentals", "20 min"),
            ("keyword-research", "Keyword Research", "18 min"),
            ("on-page-seo", "On-Page SEO", "25 min"),
            ("technical-seo", "Technical SEO", "22 min"),
            ("link-building", "Link Building Strategies", "15 min"),
        ],
    ),
    (
        "content",
        "Content Marketing",
        &[
            ("content-strategy", "Content Strategy", "18 min"),
            ("content-types", "Types of Content", "16 min"),
            ("content-creation", "Content Creation Process", "20 min"),
            ("content-distribution", "Content Distribution", "14 min"),
        ],
    ),
    (
        "social-media",
        "Social Media Marketing",
        &[
            ("social-strategy", "Social Media Strategy", "17 min"),
            ("platform-specific", "Platform-Specific Marketing", "25 min"),
            ("social-advertising", "Social Media Advertising", "20 min"),
            ("community-management", "Community Management", "12 min"),
        ],
    ),
    (
        "email",
        "Email Marketing",
        &[
            ("email-fundamentals", "Email Marketing Fundamentals", "15 min"),
            ("list-building", "List Building Strategies", "18 min"),
            ("email-campaigns", "Email Campaign Types", "20 min"),
            ("automation", "Email Automation", "22 min"),
        ],
    ),
    (
        "ppc",
        "Pay-Per-Click Advertising",
        &[
            ("ppc-basics", "PPC Fundamentals", "16 min"),
            ("google-ads", "Google Ads Mastery", "30 min"),
            ("facebook-ads", "Facebook Advertising", "25 min"),
            ("campaign-optimization", "Campaign Optimization", "20 min"),
        ],
    ),
    (
        "analytics",
        "Analytics & Data-Driven Marketing",
        &[
            ("analytics-setup", "Analytics Setup", "18 min"),
            ("data-interpretation", "Data Interpretation", "22 min"),
            ("kpis-metrics", "KPIs and Metrics", "15 min"),
            ("reporting", "Reporting & Insights", "17 min"),
        ],
    ),
    (
        "advanced",
        "Advanced Strategies",
        &[
            ("conversion-optimization", "Conversion Rate Optimization", "25 min"),
            ("marketing-automation", "Marketing Automation", "20 min"),
            ("growth-hacking", "Growth Hacking", "18 min"),
            ("future-trends", "Future Trends & AI", "15 min"),
        ],
    ),
];

/// Parses a catalog id, attaching the offending value to the error.
pub(crate) fn catalog_id<T>(value: &str) -> Result<Id<T>, CourseError> {
    Id::authored(value).map_err(|source| CourseError::InvalidId { value: value.to_owned(), source })
}

pub fn registry() -> Result<CourseRegistry, CourseError> {
    let mut chapters = Vec::with_capacity(CHAPTERS.len());
    for &(chapter_id, title, sections) in CHAPTERS {
        let mut chapter = Chapter::new(catalog_id(chapter_id)?, title);
        for &(section_id, section_title, duration) in sections {
            chapter = chapter.with_section(Section::new(
                catalog_id(section_id)?,
                section_title,
                duration,
            ));
        }
        chapters.push(chapter);
    }
    CourseRegistry::new(chapters)
}

pub fn overview() -> CourseOverview {
    CourseOverview {
        badge: "Complete Masterclass".to_owned(),
        title: "Digital Marketing".to_owned(),
        title_accent: "Mastery Course".to_owned(),
        description: "Master every aspect of digital marketing from SEO to advanced analytics. \
                      Transform from beginner to professional with our comprehensive, \
                      example-rich curriculum designed by industry experts."
            .to_owned(),
        highlights: vec![
            "8 Comprehensive Modules".to_owned(),
            "12+ Hours Content".to_owned(),
            "Real-World Case Studies".to_owned(),
        ],
        call_to_action: "Start Learning Now".to_owned(),
        progress_percent: 0,
        stats: vec![
            CourseStat::new("35+", "Lessons"),
            CourseStat::new("50+", "Examples"),
            CourseStat::new("20+", "Case Studies"),
            CourseStat::new("100%", "Practical"),
        ],
        skills: [
            "SEO & Website Optimization",
            "Social Media Marketing",
            "PPC Advertising (Google & Facebook)",
            "Email Marketing & Automation",
            "Content Marketing Strategy",
            "Analytics & Data Interpretation",
            "Conversion Rate Optimization",
            "Advanced Growth Strategies",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
        navigation_title: "Digital Marketing Mastery".to_owned(),
        navigation_subtitle: "Complete course from basics to advanced".to_owned(),
    }
}

/// The full built-in course.
pub fn digital_marketing() -> Result<Course, CourseError> {
    Ok(Course::new(registry()?, content_store()?, overview()))
}

pub fn default_section_id() -> Result<SectionId, CourseError> {
    catalog_id(DEFAULT_SECTION_ID)
}

#[cfg(test)]
mod tests {
    use super::{digital_marketing, DEFAULT_SECTION_ID};

    #[test]
    fn builtin_course_has_eight_chapters_and_thirty_three_sections() {
        let course = digital_marketing().expect("builtin course");
        assert_eq!(course.registry().chapters().len(), 8);
        assert_eq!(course.registry().section_count(), 33);
    }

    #[test]
    fn every_lesson_is_reachable_from_navigation() {
        let course = digital_marketing().expect("builtin course");
        assert_eq!(course.content().len(), 10);
        for (section_id, _) in course.content().iter() {
            assert!(
                course.registry().section(section_id.as_str()).is_some(),
                "{section_id} has content but no navigation entry"
            );
        }
    }

    #[test]
    fn default_section_has_content_and_lives_in_intro() {
        let course = digital_marketing().expect("builtin course");
        assert!(course.content().contains(DEFAULT_SECTION_ID));
        assert_eq!(
            course.registry().chapter_containing(DEFAULT_SECTION_ID).map(|c| c.id().as_str()),
            Some("intro")
        );
    }

    #[test]
    fn lesson_metadata_matches_navigation_metadata() {
        let course = digital_marketing().expect("builtin course");
        for (section_id, entry) in course.content().iter() {
            let section = course.registry().section(section_id.as_str()).expect("section");
            assert_eq!(section.title(), entry.title, "{section_id}");
            assert_eq!(section.duration(), entry.duration, "{section_id}");
        }
    }
}
