// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, help, and style helpers used by TUI rendering.
fn stack_main_panes_vertically(area: Rect) -> bool {
    area.width < 90
}

fn footer_uses_compact_mode(area: Rect) -> bool {
    stack_main_panes_vertically(area)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Navigation,
    Content,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    fn cycle_back(self) -> Self {
        // two panes: backwards is the same hop
        self.cycle()
    }
}

fn nav_cursor_highlight_style(nav_focused: bool, theme: &TuiTheme) -> Style {
    if nav_focused {
        theme.selection_style()
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }
}

fn view_title(label: &str, key: char, tail: Option<&str>) -> String {
    let mut title = format!("─[{key}]─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn chapter_counter_label(chapter_index: Option<usize>, chapter_total: usize) -> String {
    if chapter_total == 0 {
        return "[0/0]".to_owned();
    }

    let width = chapter_total.to_string().len();
    let index = chapter_index.unwrap_or(0).min(chapter_total);
    format!("[{index:0width$}/{chapter_total}]")
}

fn footer_help_line(app: &App, toast_suffix: &str, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    if compact {
        push_footer_entry_with_separator(&mut spans, "LESSON", "[]", " | ");
        push_footer_entry_with_separator(&mut spans, "HELP", "?", " | ");
        push_footer_entry_with_separator(&mut spans, "QUIT", "q", " | ");
    } else {
        match app.focus {
            Focus::Navigation => {
                let open = match app.cursor_row() {
                    Some(NavRow::Chapter { expanded: true, .. }) => "COLLAPSE",
                    Some(NavRow::Chapter { .. }) => "EXPAND",
                    _ => "OPEN",
                };
                push_footer_entry(&mut spans, "MOVE", "j/k");
                push_footer_entry(&mut spans, open, "⏎");
                push_footer_entry(&mut spans, "FOLD", "h");
            }
            Focus::Content => {
                push_footer_entry(&mut spans, "SCROLL", "j/k");
                push_footer_entry(&mut spans, "PAGE", "PgUp/PgDn");
            }
        }

        let header = if app.header_visible { "3◼ " } else { "3◻ " };
        push_footer_entry(&mut spans, "LESSON", "[]");
        push_footer_entry(&mut spans, "SEARCH", "/ \\");
        push_footer_entry(&mut spans, "HEADER", header);
        push_footer_entry(&mut spans, "HELP", "?");
        push_footer_entry(&mut spans, "QUIT", "q");
    }

    let toast_message = toast_suffix.strip_prefix(" | ").unwrap_or(toast_suffix).trim();
    if !toast_message.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::styled("Toast:".to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::raw(toast_message.to_owned()));
    }

    Line::from(spans)
}

fn search_footer_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let query = app.search_query.as_str();
    let search_prefix = app.search_prefix();
    let (idx, total) = match app.search_results.len() {
        0 => (0usize, 0usize),
        n => (app.search_result_index.saturating_add(1), n),
    };

    let count = if query.is_empty() {
        None
    } else if total == 0 {
        Some("0".to_owned())
    } else {
        Some(format!("{idx}/{total}"))
    };

    let mut spans = vec![
        Span::styled(
            search_prefix.to_string(),
            Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::raw(query.to_owned()),
        Span::raw("   "),
    ];
    if let Some(count) = count {
        spans.push(Span::styled(count, Style::default().fg(Color::LightGreen)));
    }

    if app.search_mode == SearchMode::Results {
        push_footer_entry_with_separator(&mut spans, "Next", "n/N", " | ");
    }
    push_footer_entry_with_separator(&mut spans, "Accept", "Enter", " | ");
    push_footer_entry_with_separator(&mut spans, "Close", "Esc", " | ");

    let toast_message = toast_suffix.strip_prefix(" | ").unwrap_or(toast_suffix).trim();
    if !toast_message.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::styled("Toast:".to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::raw(toast_message.to_owned()));
    }

    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(FOOTER_BRAND_COLOR),
    )])
}

fn help_key_style() -> Style {
    Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    let key_style = help_key_style();
    let header_style = help_header_style();
    let key_col_width = ["Tab/Shift-Tab", "j/k, ↑/↓, PgUp/PgDn, Home/End", "Enter/Space/l"]
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);
    let kv = |key: &str, desc: &str| help_kv(key, desc, key_col_width, key_style);

    vec![
        Line::from(Span::styled("--- Global ---", header_style)),
        kv("?", "Help (toggle)"),
        kv("q", "Quit"),
        kv("1", "Focus course navigation"),
        kv("2", "Focus lesson"),
        kv("3", "Show/hide course header"),
        kv("Tab/Shift-Tab", "Focus next/previous panel"),
        kv("[/]", "Previous/next lesson"),
        kv("/", "Regular search"),
        kv("\\", "Fuzzy search"),
        kv("n/N", "Search next/previous result"),
        Line::from(""),
        Line::from(Span::styled("--- Search ---", header_style)),
        kv("Type", "Update query and jump to best match"),
        kv("Enter", "Commit results mode"),
        kv("Backspace", "Delete query char"),
        kv("Esc", "Clear search"),
        Line::from(""),
        Line::from(Span::styled("--- Navigation ---", header_style)),
        kv("↑/↓ or j/k", "Move cursor"),
        kv("Home/End", "First/last row"),
        kv("Enter/Space/l", "Expand/collapse chapter or open section"),
        kv("h", "Collapse current chapter"),
        Line::from(""),
        Line::from(Span::styled("--- Lesson ---", header_style)),
        kv("↑/↓ or j/k", "Scroll by line"),
        kv("PgUp/PgDn", "Scroll by page"),
        kv("Home/End", "Top/bottom"),
        Line::from(""),
        Line::from(Span::styled("--- Help ---", header_style)),
        kv("j/k, ↑/↓, PgUp/PgDn, Home/End", "Scroll help"),
        kv("Esc/?", "Close help"),
    ]
}

fn render_help(frame: &mut Frame<'_>, app: &mut App, main_area: Rect) {
    let area = centered_rect(82, 84, main_area);
    frame.render_widget(Clear, area);

    let lines = help_lines();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(app.theme.panel_border_style(true))
        .title_style(app.theme.panel_border_style(true).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    app.help_viewport_height = inner.height;
    let max_scroll = lines
        .len()
        .saturating_sub(inner.height.max(1) as usize)
        .min(u16::MAX as usize) as u16;
    app.help_scroll = app.help_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_with_separator(spans, label, value, " | ");
}

fn push_footer_entry_with_separator(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(separator.to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
