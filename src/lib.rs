// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Syllabus: a terminal course viewer.
//!
//! The library side holds the static course (chapters, sections and lesson content), the
//! navigation controller, the page composer that owns the active section, and pure renderers
//! that turn all of it into serialisable view models. The `tui` module draws those views.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod nav;
pub mod page;
pub mod render;
pub mod tui;
