// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text rendering of content views, used by `--print` and by the TUI for wrapping.

use super::content::{ContentBlock, ContentView, LessonView, PlaceholderView};

const BULLET: &str = "•";
const CHECK: &str = "✓";

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Greedy word wrap on character counts. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let mut word = word.to_owned();
        loop {
            let word_len = text_len(&word);
            let needed = if line_len == 0 { word_len } else { line_len + 1 + word_len };
            if needed <= width {
                if line_len > 0 {
                    line.push(' ');
                }
                line.push_str(&word);
                line_len = needed;
                break;
            }
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }
            let head = word.chars().take(width).collect::<String>();
            let tail = word.chars().skip(width).collect::<String>();
            lines.push(head);
            word = tail;
            if word.is_empty() {
                break;
            }
        }
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// What a laid-out line represents, so callers can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Badges,
    Heading,
    HeadingRule,
    BlockTitle,
    BlockRule,
    Label,
    Body,
    Bullet,
    Progress,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub role: LineRole,
    pub text: String,
}

/// Lays out `view` as lines wrapped to `width` columns.
pub fn content_view_lines(view: &ContentView, width: usize) -> Vec<ContentLine> {
    let mut out = TextWriter::new(width);
    match view {
        ContentView::Placeholder(placeholder) => write_placeholder(&mut out, placeholder),
        ContentView::Lesson(lesson) => write_lesson(&mut out, lesson),
    }
    out.finish()
}

/// Renders `view` as plain text wrapped to `width` columns.
pub fn content_view_to_text(view: &ContentView, width: usize) -> String {
    content_view_lines(view, width)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_placeholder(out: &mut TextWriter, view: &PlaceholderView) {
    out.heading(&view.heading);
    out.paragraph("", &view.message);
}

fn write_lesson(out: &mut TextWriter, view: &LessonView) {
    let badges = view.badges.iter().map(|badge| format!("[{}]", badge.label)).collect::<Vec<_>>();
    out.push(LineRole::Badges, badges.join(" "));
    out.heading(&view.heading);
    if let Some(definition) = &view.definition {
        out.paragraph("", definition);
    }

    for block in &view.blocks {
        out.blank();
        out.block_title(block.title());
        write_block(out, block);
    }

    out.blank();
    out.block_title(&view.next_steps.heading);
    out.paragraph("", &view.next_steps.message);
    out.push(LineRole::Progress, progress_bar(view.next_steps.progress_percent, 20));
}

fn write_block(out: &mut TextWriter, block: &ContentBlock) {
    match block {
        ContentBlock::KeyPoints { items, .. }
        | ContentBlock::Statistics { items, .. }
        | ContentBlock::KeyShifts { items, .. }
        | ContentBlock::FutureTrends { items, .. } => {
            for item in items {
                out.bullet(BULLET, item);
            }
        }
        ContentBlock::PracticalSteps { items, .. } => {
            for (idx, item) in items.iter().enumerate() {
                out.bullet(&format!("{}.", idx + 1), item);
            }
        }
        ContentBlock::Components { items, .. } => {
            for component in items {
                out.label(component.title.clone());
                out.paragraph("  ", &component.description);
                out.paragraph("  ", &format!("Example: {}", component.example));
            }
        }
        ContentBlock::Timeline { eras, .. } => {
            for era in eras {
                out.label(era.era.clone());
                out.paragraph("  ", &format!("Focus: {}", era.focus));
                out.paragraph("  ", &format!("Channels: {}", era.channels));
                out.paragraph("  ", &format!("Example: {}", era.example));
            }
        }
        ContentBlock::PracticalExample { example, strategy_title, results_title } => {
            out.paragraph("", &example.scenario);
            out.label(strategy_title.clone());
            for item in &example.strategy {
                out.bullet(CHECK, item);
            }
            out.label(results_title.clone());
            out.paragraph("  ", &example.results);
        }
        ContentBlock::HowItWorks { how_it_works } => {
            for (idx, step) in how_it_works.steps.iter().enumerate() {
                out.label(format!("{}. {}", idx + 1, step.step));
                out.paragraph("  ", &step.description);
                out.paragraph("  ", &format!("Analogy: {}", step.analogy));
            }
        }
        ContentBlock::RankingFactors { factors, .. } => {
            for factor in factors {
                out.label(format!("{} ({})", factor.category, factor.weight));
                for item in &factor.factors {
                    out.bullet(&format!("  {BULLET}"), item);
                }
                out.paragraph("  ", &format!("Example: {}", factor.example));
            }
        }
        ContentBlock::SeoTypes { types, .. } => {
            for seo_type in types {
                out.label(seo_type.name.clone());
                out.paragraph("  ", &seo_type.description);
                for tactic in &seo_type.tactics {
                    out.bullet(&format!("  {BULLET}"), tactic);
                }
                out.paragraph("  ", &format!("Example: {}", seo_type.example));
            }
        }
    }
}

pub(crate) fn progress_bar(percent: u8, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    let filled = (percent * width + 50) / 100;
    format!(
        "[{}{}] {percent}% Complete",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled))
    )
}

struct TextWriter {
    width: usize,
    lines: Vec<ContentLine>,
}

impl TextWriter {
    fn new(width: usize) -> Self {
        Self { width: width.max(8), lines: Vec::new() }
    }

    fn push(&mut self, role: LineRole, text: String) {
        self.lines.push(ContentLine { role, text });
    }

    fn label(&mut self, text: String) {
        self.push(LineRole::Label, text);
    }

    fn blank(&mut self) {
        if !matches!(self.lines.last(), Some(line) if line.role == LineRole::Blank) {
            self.push(LineRole::Blank, String::new());
        }
    }

    fn heading(&mut self, text: &str) {
        self.push(LineRole::Heading, text.to_owned());
        self.push(LineRole::HeadingRule, "=".repeat(text_len(text).min(self.width)));
    }

    fn block_title(&mut self, text: &str) {
        self.push(LineRole::BlockTitle, text.to_owned());
        self.push(LineRole::BlockRule, "-".repeat(text_len(text).min(self.width)));
    }

    fn paragraph(&mut self, indent: &str, text: &str) {
        let width = self.width.saturating_sub(text_len(indent));
        for line in wrap_text(text, width) {
            self.push(LineRole::Body, format!("{indent}{line}"));
        }
    }

    fn bullet(&mut self, marker: &str, text: &str) {
        let prefix_len = text_len(marker) + 1;
        let width = self.width.saturating_sub(prefix_len);
        let continuation = " ".repeat(prefix_len);
        for (idx, line) in wrap_text(text, width).into_iter().enumerate() {
            if idx == 0 {
                self.push(LineRole::Bullet, format!("{marker} {line}"));
            } else {
                self.push(LineRole::Bullet, format!("{continuation}{line}"));
            }
        }
    }

    fn finish(mut self) -> Vec<ContentLine> {
        while matches!(self.lines.last(), Some(line) if line.role == LineRole::Blank) {
            self.lines.pop();
        }
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::{
        content_view_lines, content_view_to_text, progress_bar, text_len, truncate_with_ellipsis,
        wrap_text, LineRole,
    };
    use crate::catalog;
    use crate::render::content::render_content;

    #[test]
    fn truncate_with_ellipsis_handles_small_widths() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("h", 1), "h");
        assert_eq!(truncate_with_ellipsis("hello", 2), "h…");
    }

    #[test]
    fn truncate_with_ellipsis_counts_chars_not_bytes() {
        assert_eq!(text_len("αβγ"), 3);
        assert_eq!(truncate_with_ellipsis("αβγ", 2), "α…");
    }

    #[test]
    fn wrap_text_breaks_on_words_and_splits_long_words() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn progress_bar_rounds_to_width() {
        assert_eq!(progress_bar(0, 4), "[░░░░] 0% Complete");
        assert_eq!(progress_bar(65, 4), "[███░] 65% Complete");
        assert_eq!(progress_bar(250, 2), "[██] 100% Complete");
    }

    #[test]
    fn placeholder_text_mentions_coming_soon() {
        let store = catalog::content_store().expect("content");
        let text = content_view_to_text(&render_content(&store, "technical-seo"), 80);
        assert!(text.starts_with("Content Coming Soon\n==================="));
        assert!(text.contains("Please check other sections."));
    }

    #[test]
    fn lesson_text_starts_with_badges_and_heading() {
        let store = catalog::content_store().expect("content");
        let text = content_view_to_text(&render_content(&store, "ppc-basics"), 60);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("[16 min] [Intermediate]"));
        assert_eq!(lines.next(), Some("PPC Fundamentals"));
        assert!(text.contains("Key Takeaways"));
        assert!(text.contains("Case Study: B2B Software PPC Campaign"));
        assert!(text.lines().all(|line| text_len(line) <= 60));
    }

    #[test]
    fn lesson_lines_tag_block_titles() {
        let store = catalog::content_store().expect("content");
        let lines = content_view_lines(&render_content(&store, "what-is-digital-marketing"), 80);
        let titles = lines
            .iter()
            .filter(|line| line.role == LineRole::BlockTitle)
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            [
                "Key Takeaways",
                "Core Components",
                "Industry Statistics",
                "Case Study: Local Restaurant",
                "Ready to Apply What You've Learned?",
            ]
        );
        assert_eq!(lines.last().map(|line| line.role), Some(LineRole::Progress));
    }
}
