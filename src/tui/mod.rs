// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Draws the page composer's views with ratatui: a course header, the chapter/section tree and
//! the lesson pane. Every selection goes through [`PageComposer::select_section`].

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::model::{CourseOverview, SectionId};
use crate::page::PageComposer;
use crate::render::text::{progress_bar, text_len, truncate_with_ellipsis};
use crate::render::{content_view_lines, ContentView, LineRole, NavRow, NavigationView};

mod theme;

pub use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🆂 🆈 🅻 🅻 🅰 🅱 🆄 🆂 ";
const HEADER_HEIGHT: u16 = 6;
const HEADER_MIN_AREA_HEIGHT: u16 = 20;

/// Runs the interactive viewer until the user quits.
pub fn run(composer: PageComposer, theme: TuiTheme) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(composer, theme);
    tracing::info!(section = %app.composer.active_section_id(), "viewer started");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    tracing::info!(section = %app.composer.active_section_id(), "viewer closed");
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let show_header = app.header_visible && area.height >= HEADER_MIN_AREA_HEIGHT;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if show_header { HEADER_HEIGHT } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let header_area = layout[0];
    let main_area = layout[1];
    let status_area = layout[2];

    if show_header {
        let inner_width = header_area.width.saturating_sub(2) as usize;
        let lines = header_lines(app.composer.course().overview(), &app.theme, inner_width);
        let header = Paragraph::new(lines)
            .style(app.theme.base_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(view_title("Course", '3', None))
                    .border_style(app.theme.muted_style()),
            );
        frame.render_widget(header, header_area);
    }

    let compact_footer = footer_uses_compact_mode(main_area);
    let (direction, constraints) = if stack_main_panes_vertically(main_area) {
        (Direction::Vertical, [Constraint::Percentage(40), Constraint::Percentage(60)])
    } else {
        (Direction::Horizontal, [Constraint::Percentage(32), Constraint::Percentage(68)])
    };
    let panes = Layout::default().direction(direction).constraints(constraints).split(main_area);
    let nav_area = panes[0];
    let content_area = panes[1];

    let nav_focused = app.focus == Focus::Navigation;
    let nav_inner_width = nav_area.width.saturating_sub(2) as usize;
    let items = app
        .nav_view
        .rows
        .iter()
        .map(|row| nav_item(row, nav_inner_width, &app.theme))
        .collect::<Vec<_>>();
    let active_chapter_index = app
        .composer
        .course()
        .registry()
        .chapters()
        .iter()
        .position(|chapter| chapter.id() == app.composer.active_chapter().id())
        .map(|idx| idx + 1);
    let chapter_total = app.composer.course().registry().chapters().len();
    let nav_title = view_title(
        &app.nav_view.title,
        '1',
        Some(&chapter_counter_label(active_chapter_index, chapter_total)),
    );
    let nav_list = List::new(items)
        .style(app.theme.base_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(nav_title)
                .title_bottom(Line::from(format!(" {} ", app.nav_view.subtitle)))
                .border_style(app.theme.panel_border_style(nav_focused)),
        )
        .highlight_style(nav_cursor_highlight_style(nav_focused, &app.theme));
    frame.render_stateful_widget(nav_list, nav_area, &mut app.nav_state);

    let content_inner = Block::default().borders(Borders::ALL).inner(content_area);
    let content_text = app.content_text(content_inner.width as usize);
    app.content_viewport_height = content_inner.height;
    let max_scroll = content_text
        .lines
        .len()
        .saturating_sub(content_inner.height.max(1) as usize)
        .min(u16::MAX as usize) as u16;
    app.content_scroll = app.content_scroll.min(max_scroll);

    let content = Paragraph::new(content_text)
        .style(app.theme.base_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Lesson", '2', Some(&app.lesson_title_tail())))
                .border_style(app.theme.panel_border_style(app.focus == Focus::Content)),
        )
        .scroll((app.content_scroll, 0));
    frame.render_widget(content, content_area);

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };
    if app.search_mode != SearchMode::Inactive {
        let query = app.search_query.as_str();
        let status = Paragraph::new(search_footer_line(app, &toast_suffix));
        frame.render_widget(status, status_area);
        let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
        frame.render_widget(brand, status_area);
        if app.search_mode == SearchMode::Editing {
            let cursor_x = status_area
                .x
                .saturating_add(1)
                .saturating_add(query.chars().count() as u16)
                .min(status_area.x.saturating_add(status_area.width.saturating_sub(1)));
            frame.set_cursor_position((cursor_x, status_area.y));
        }
        return;
    }

    let status = Paragraph::new(footer_help_line(app, &toast_suffix, compact_footer));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

// Extracted panel/header/footer/help rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Editing,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchKind {
    Regular,
    Fuzzy,
}

#[derive(Debug, Clone)]
struct SearchCandidate {
    section_id: SectionId,
    haystack: String,
}

struct App {
    composer: PageComposer,
    theme: TuiTheme,
    nav_view: NavigationView,
    nav_state: ListState,
    content_view: ContentView,
    content_rev: u64,
    content_scroll: u16,
    content_viewport_height: u16,
    focus: Focus,
    header_visible: bool,
    show_help: bool,
    help_scroll: u16,
    help_viewport_height: u16,
    toast: Option<Toast>,
    search_mode: SearchMode,
    search_kind: SearchKind,
    search_query: String,
    search_candidates: Vec<SearchCandidate>,
    search_results: Vec<SectionId>,
    search_result_index: usize,
    should_quit: bool,
}

impl App {
    fn new(composer: PageComposer, theme: TuiTheme) -> Self {
        let nav_view = composer.navigation_view();
        let mut nav_state = ListState::default();
        let cursor = nav_view
            .active_section_row()
            .or_else(|| nav_view.chapter_row(composer.active_chapter().id().as_str()));
        nav_state.select(cursor);
        let content_view = composer.content_view();
        let content_rev = composer.rev();

        Self {
            composer,
            theme,
            nav_view,
            nav_state,
            content_view,
            content_rev,
            content_scroll: 0,
            content_viewport_height: 0,
            focus: Focus::Navigation,
            header_visible: true,
            show_help: false,
            help_scroll: 0,
            help_viewport_height: 0,
            toast: None,
            search_mode: SearchMode::Inactive,
            search_kind: SearchKind::Regular,
            search_query: String::new(),
            search_candidates: Vec::new(),
            search_results: Vec::new(),
            search_result_index: 0,
            should_quit: false,
        }
    }

    /// Re-derives cached views after the composer changed. The content view is only rebuilt
    /// (and its scroll reset) when the page revision moved.
    fn refresh_views(&mut self) {
        self.nav_view = self.composer.navigation_view();
        if self.composer.rev() != self.content_rev {
            self.content_view = self.composer.content_view();
            self.content_rev = self.composer.rev();
            self.content_scroll = 0;
        }

        let len = self.nav_view.rows.len();
        match self.nav_state.selected() {
            Some(idx) if idx >= len => self.nav_state.select(len.checked_sub(1)),
            None if len > 0 => self.nav_state.select(Some(0)),
            _ => {}
        }
    }

    fn cursor_row(&self) -> Option<&NavRow> {
        self.nav_state.selected().and_then(|idx| self.nav_view.rows.get(idx))
    }

    fn lesson_title_tail(&self) -> String {
        let section_id = self.composer.active_section_id();
        let title = self
            .composer
            .course()
            .registry()
            .section(section_id.as_str())
            .map(|section| section.title().to_owned())
            .unwrap_or_else(|| section_id.to_string());
        format!("— {title}")
    }

    fn content_text(&self, width: usize) -> Text<'static> {
        let lines = content_view_lines(&self.content_view, width.max(1));
        let badges = self.content_view.as_lesson().map(|lesson| lesson.badges.as_slice());
        let lines = lines
            .into_iter()
            .map(|line| match (line.role, badges) {
                (LineRole::Badges, Some(badges)) => {
                    let mut spans = Vec::with_capacity(badges.len() * 2);
                    for (idx, badge) in badges.iter().enumerate() {
                        if idx > 0 {
                            spans.push(Span::raw(" "));
                        }
                        spans.push(Span::styled(
                            format!(" {} ", badge.label),
                            self.theme.badge_style(),
                        ));
                    }
                    Line::from(spans)
                }
                (role, _) => {
                    Line::from(Span::styled(line.text, content_line_style(role, &self.theme)))
                }
            })
            .collect::<Vec<_>>();
        Text::from(lines)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            if self.search_mode != SearchMode::Inactive {
                self.clear_search();
            }
            self.help_scroll = 0;
        }
    }

    fn toggle_header(&mut self) {
        self.header_visible = !self.header_visible;
    }

    fn help_scroll_by(&mut self, delta: i32) {
        if delta < 0 {
            self.help_scroll = self.help_scroll.saturating_sub((-delta) as u16);
        } else {
            self.help_scroll = self.help_scroll.saturating_add(delta as u16);
        }
    }

    fn help_scroll_page(&mut self, direction: i32) {
        let page = self.help_viewport_height.max(1).saturating_sub(1) as i32;
        let step = page.max(1);
        self.help_scroll_by(direction.signum() * step);
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => {
                    self.show_help = false;
                }
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => self.help_scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => self.help_scroll_by(-1),
                KeyCode::PageDown => self.help_scroll_page(1),
                KeyCode::PageUp => self.help_scroll_page(-1),
                KeyCode::Home => self.help_scroll = 0,
                KeyCode::End => self.help_scroll = u16::MAX,
                _ => {}
            }
            return false;
        }

        match self.search_mode {
            SearchMode::Editing => {
                self.handle_search_edit_key(code);
                return false;
            }
            SearchMode::Results => {
                if matches!(code, KeyCode::Esc) {
                    self.clear_search();
                    return false;
                }
            }
            SearchMode::Inactive => {}
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('1') => self.focus = Focus::Navigation,
            KeyCode::Char('2') => self.focus = Focus::Content,
            KeyCode::Char('3') => self.toggle_header(),
            KeyCode::Char('/') => self.enter_search_mode(SearchKind::Regular),
            KeyCode::Char('\\') => self.enter_search_mode(SearchKind::Fuzzy),
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char('n') => self.search_next(),
            KeyCode::Char('N') => self.search_prev(),
            KeyCode::Char('[') => self.step_section(-1),
            KeyCode::Char(']') => self.step_section(1),
            KeyCode::Tab => self.focus = self.focus.cycle(),
            KeyCode::BackTab => self.focus = self.focus.cycle_back(),

            _ => match self.focus {
                Focus::Navigation => self.handle_navigation_key(code),
                Focus::Content => self.handle_content_key(code),
            },
        }

        false
    }

    fn handle_navigation_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Home | KeyCode::Char('g') => self.nav_state.select_first(),
            KeyCode::End | KeyCode::Char('G') => {
                self.nav_state.select(self.nav_view.rows.len().checked_sub(1));
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
                self.activate_cursor_row();
            }
            KeyCode::Left | KeyCode::Char('h') => self.collapse_cursor_chapter(),
            _ => {}
        }
    }

    fn handle_content_key(&mut self, code: KeyCode) {
        let page = self.content_viewport_height.max(2).saturating_sub(1);
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.content_scroll = self.content_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.content_scroll = self.content_scroll.saturating_add(1);
            }
            KeyCode::PageUp => self.content_scroll = self.content_scroll.saturating_sub(page),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.content_scroll = self.content_scroll.saturating_add(page);
            }
            KeyCode::Home | KeyCode::Char('g') => self.content_scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.content_scroll = u16::MAX,
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.nav_view.rows.len();
        if len == 0 {
            return;
        }
        let current = self.nav_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.nav_state.select(Some(next));
    }

    fn activate_cursor_row(&mut self) {
        match self.cursor_row().cloned() {
            Some(NavRow::Chapter { chapter_id, .. }) => {
                self.composer.toggle_chapter(&chapter_id);
                self.refresh_views();
                self.nav_state.select(self.nav_view.chapter_row(chapter_id.as_str()));
            }
            Some(NavRow::Section { section_id, .. }) => {
                self.composer.select_section(section_id);
                self.refresh_views();
                self.nav_state.select(self.nav_view.active_section_row());
            }
            None => {}
        }
    }

    fn collapse_cursor_chapter(&mut self) {
        let chapter_id = match self.cursor_row() {
            Some(NavRow::Chapter { chapter_id, expanded: true, .. }) => chapter_id.clone(),
            Some(NavRow::Section { section_id, .. }) => {
                let Some(chapter) =
                    self.composer.course().registry().chapter_containing(section_id.as_str())
                else {
                    return;
                };
                chapter.id().clone()
            }
            _ => return,
        };

        self.composer.toggle_chapter(&chapter_id);
        self.refresh_views();
        self.nav_state.select(self.nav_view.chapter_row(chapter_id.as_str()));
    }

    /// Expands the section's chapter and selects it, as if it had been picked in the tree.
    fn jump_to_section(&mut self, section_id: &SectionId) {
        let chapter_id = self
            .composer
            .course()
            .registry()
            .chapter_containing(section_id.as_str())
            .map(|chapter| chapter.id().clone());
        if let Some(chapter_id) = chapter_id {
            self.composer.expand_chapter(&chapter_id);
        }
        self.composer.select_section(section_id.clone());
        self.refresh_views();
        if let Some(row) = self.nav_view.active_section_row() {
            self.nav_state.select(Some(row));
        }
    }

    fn step_section(&mut self, direction: isize) {
        let registry = self.composer.course().registry();
        let sections = registry.sections().map(|section| section.id().clone()).collect::<Vec<_>>();
        let active = self.composer.active_section_id().as_str();
        let target = match sections.iter().position(|id| id.as_str() == active) {
            Some(idx) => idx.checked_add_signed(direction).and_then(|idx| sections.get(idx)),
            None => sections.first(),
        };

        match target.cloned() {
            Some(section_id) => self.jump_to_section(&section_id),
            None if direction < 0 => self.set_toast("Already at the first lesson"),
            None => self.set_toast("Already at the last lesson"),
        }
    }

    fn enter_search_mode(&mut self, kind: SearchKind) {
        self.search_mode = SearchMode::Editing;
        self.search_kind = kind;
        self.search_query.clear();
        self.search_result_index = 0;
        self.search_results.clear();
        self.search_candidates = search_candidates_from_course(&self.composer);
    }

    fn handle_search_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.clear_search(),
            KeyCode::Enter => self.commit_search(),
            KeyCode::Backspace => {
                self.search_query.pop();
                self.update_search_results();
            }
            KeyCode::Char(ch) => {
                self.search_query.push(ch);
                self.update_search_results();
            }
            _ => {}
        }
    }

    fn commit_search(&mut self) {
        tracing::info!(
            query = %self.search_query,
            kind = ?self.search_kind,
            results = self.search_results.len(),
            "search committed"
        );
        if self.search_results.is_empty() && !self.search_query.trim().is_empty() {
            self.set_toast("No matching sections");
        }
        if self.search_results.len() > 1 {
            self.search_mode = SearchMode::Results;
        } else {
            self.search_mode = SearchMode::Inactive;
        }
    }

    fn clear_search(&mut self) {
        self.search_mode = SearchMode::Inactive;
        self.search_query.clear();
        self.search_candidates.clear();
        self.search_results.clear();
        self.search_result_index = 0;
    }

    fn update_search_results(&mut self) {
        self.search_results =
            ranked_search_results(&self.search_candidates, &self.search_query, self.search_kind);
        self.search_result_index = 0;
        self.jump_to_current_search_result();
    }

    fn search_prefix(&self) -> char {
        match self.search_kind {
            SearchKind::Regular => '/',
            SearchKind::Fuzzy => '\\',
        }
    }

    fn jump_to_current_search_result(&mut self) {
        let Some(section_id) = self.search_results.get(self.search_result_index).cloned() else {
            return;
        };
        self.jump_to_section(&section_id);
    }

    fn search_next(&mut self) {
        let len = self.search_results.len();
        if len <= 1 {
            return;
        }

        self.search_result_index = (self.search_result_index + 1) % len;
        self.jump_to_current_search_result();
    }

    fn search_prev(&mut self) {
        let len = self.search_results.len();
        if len <= 1 {
            return;
        }

        self.search_result_index = match self.search_result_index {
            0 => len - 1,
            n => n - 1,
        };
        self.jump_to_current_search_result();
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn header_lines(overview: &CourseOverview, theme: &TuiTheme, width: usize) -> Vec<Line<'static>> {
    let stats = overview
        .stats
        .iter()
        .map(|stat| format!("{} {}", stat.value, stat.label))
        .collect::<Vec<_>>()
        .join(" · ");
    let highlights = overview.highlights.join(" • ");
    let skills = format!("What You'll Master: {}", overview.skills.join(", "));

    vec![
        Line::from(vec![
            Span::styled(format!("[{}]", overview.badge), theme.accent_style()),
            Span::raw(" "),
            Span::styled(overview.title.clone(), theme.heading_style()),
            Span::raw(" "),
            Span::styled(overview.title_accent.clone(), theme.active_style()),
            Span::raw("  "),
            Span::styled(format!("▶ {}", overview.call_to_action), theme.accent_style()),
        ]),
        Line::from(Span::styled(
            truncate_with_ellipsis(&overview.description, width),
            theme.base_style(),
        )),
        Line::from(vec![
            Span::styled(highlights, theme.muted_style()),
            Span::styled("  |  ", theme.muted_style()),
            Span::styled(stats, theme.block_title_style()),
        ]),
        Line::from(vec![
            Span::styled(
                format!("Course Progress {}", progress_bar(overview.progress_percent, 10)),
                theme.progress_style(),
            ),
            Span::raw("  "),
            Span::styled(
                truncate_with_ellipsis(&skills, width.saturating_sub(44)),
                theme.muted_style(),
            ),
        ]),
    ]
}

fn content_line_style(role: LineRole, theme: &TuiTheme) -> Style {
    match role {
        LineRole::Heading => theme.heading_style(),
        LineRole::BlockTitle => theme.block_title_style(),
        LineRole::HeadingRule | LineRole::BlockRule => theme.muted_style(),
        LineRole::Label => theme.accent_style(),
        LineRole::Progress => theme.progress_style(),
        LineRole::Badges | LineRole::Body | LineRole::Bullet | LineRole::Blank => {
            theme.base_style()
        }
    }
}

fn nav_item(row: &NavRow, width: usize, theme: &TuiTheme) -> ListItem<'static> {
    match row {
        NavRow::Chapter { title, expanded, active, .. } => {
            let marker = if *expanded { "▾" } else { "▸" };
            let style = if *active { theme.active_style() } else { theme.heading_style() };
            let title = truncate_with_ellipsis(title, width.saturating_sub(2));
            ListItem::new(Line::from(vec![
                Span::styled(marker, theme.muted_style()),
                Span::raw(" "),
                Span::styled(title, style),
            ]))
        }
        NavRow::Section { title, duration, active, .. } => {
            let marker = if *active { "●" } else { "○" };
            let style = if *active { theme.active_style() } else { theme.base_style() };
            let duration_len = text_len(duration);
            let title_width = width.saturating_sub(4 + duration_len + 1);
            let title = truncate_with_ellipsis(title, title_width);
            let pad = title_width.saturating_sub(text_len(&title)) + 1;
            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(marker, style),
                Span::raw(" "),
                Span::styled(title, style),
                Span::raw(" ".repeat(pad)),
                Span::styled(duration.clone(), theme.muted_style()),
            ]))
        }
    }
}

fn search_candidates_from_course(composer: &PageComposer) -> Vec<SearchCandidate> {
    composer
        .course()
        .registry()
        .sections()
        .map(|section| SearchCandidate {
            section_id: section.id().clone(),
            haystack: format!("{} {}", section.id(), section.title()).to_lowercase(),
        })
        .collect()
}

/// Ranks matching sections by score, ties broken by display order.
fn ranked_search_results(
    candidates: &[SearchCandidate],
    query: &str,
    kind: SearchKind,
) -> Vec<SectionId> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches = candidates
        .iter()
        .enumerate()
        .filter_map(|(idx, candidate)| {
            let score = match kind {
                SearchKind::Regular => substring_score(&needle, &candidate.haystack),
                SearchKind::Fuzzy => fuzzy_score(&needle, &candidate.haystack),
            };
            score.map(|score| (score, idx))
        })
        .collect::<Vec<_>>();

    matches.sort_by(|(score_a, idx_a), (score_b, idx_b)| {
        score_b.cmp(score_a).then_with(|| idx_a.cmp(idx_b))
    });
    matches.into_iter().map(|(_, idx)| candidates[idx].section_id.clone()).collect()
}

/// Earlier hits rank higher; hits at the start of an id or title word get a bonus.
fn substring_score(needle: &str, haystack: &str) -> Option<i64> {
    let pos = haystack.find(needle)?;
    let mut score = 10_000 - (pos as i64) * 10 - haystack.len() as i64;
    if starts_word(haystack, pos) {
        score += 1_000;
    }
    Some(score)
}

/// Every needle char must appear in order. Contiguous runs and plain substrings rank first;
/// the rapidfuzz ratio orders the rest.
fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let positions = subsequence_positions(needle, haystack)?;
    let (first, last) = (*positions.first()?, *positions.last()?);
    let contiguous = positions.windows(2).filter(|pair| pair[1] == pair[0] + 1).count() as i64;

    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let mut score = (ratio * 1000.0).round() as i64 + contiguous * 40 - (last - first) as i64;
    if haystack.contains(needle) {
        score += 2_000;
    }
    Some(score)
}

/// Char indices of the greedy in-order match of `needle` inside `haystack`.
fn subsequence_positions(needle: &str, haystack: &str) -> Option<Vec<usize>> {
    let mut wanted = needle.chars().peekable();
    let mut positions = Vec::with_capacity(needle.len());
    for (idx, ch) in haystack.chars().enumerate() {
        match wanted.peek() {
            Some(&want) if want == ch => {
                wanted.next();
                positions.push(idx);
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none().then_some(positions)
}

fn starts_word(haystack: &str, byte_pos: usize) -> bool {
    haystack[..byte_pos].chars().next_back().map_or(true, |ch| matches!(ch, '-' | ' '))
}
