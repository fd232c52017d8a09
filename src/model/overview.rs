// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

/// Static promotional header shown above the navigation and content panes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseOverview {
    pub badge: String,
    pub title: String,
    pub title_accent: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub call_to_action: String,
    pub progress_percent: u8,
    pub stats: Vec<CourseStat>,
    pub skills: Vec<String>,
    pub navigation_title: String,
    pub navigation_subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseStat {
    pub value: String,
    pub label: String,
}

impl CourseStat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}
