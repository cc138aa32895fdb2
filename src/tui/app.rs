//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the board snapshot,
//! the HTTP client, and the per-screen UI state, and coordinates the task
//! list, the create form, and the AI capture prompt.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::api::{ApiClient, TaskDraft};
use crate::board::{format_done, format_priority, Board};
use crate::fields::{Filter, Priority};
use crate::tui::{
    colors::{DARK_PURPLE, EMBER, GOLD, SLATE},
    enums::AppState,
    input::InputField,
    task_form::{TaskForm, NOTES_FIELD, PRIORITY_FIELD, TITLE_FIELD},
    utils::centered_rect,
};

/// Main application state for the terminal user interface.
///
/// All task data lives in the `Board` snapshot; everything else here is
/// transient screen state. Mutations go out through the `ApiClient` and
/// come back in via a full reload, never a local patch.
pub struct App {
    state: AppState,
    api: ApiClient,
    board: Board,
    task_list_state: TableState,
    task_form: TaskForm,
    status_message: String,
    ai_text: InputField,
    ai_loading: bool,
    ai_error: String,
    confirm_delete: Option<u64>,
}

impl App {
    /// Create a new App and pull the initial snapshot from the server.
    /// A failed first load leaves the board empty and reports in the
    /// status bar; the UI stays usable and 'r' retries.
    pub fn new(api_url: &str) -> Self {
        let mut app = App {
            state: AppState::TaskList,
            api: ApiClient::new(api_url),
            board: Board::new(),
            task_list_state: TableState::default(),
            task_form: TaskForm::new(),
            status_message: String::new(),
            ai_text: InputField::new(),
            ai_loading: false,
            ai_error: String::new(),
            confirm_delete: None,
        };

        if let Err(e) = app.board.reload(&app.api) {
            app.status_message = format!("Load failed: {e}");
        }
        app.clamp_selection();
        app
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Keep the selection inside the current projection after a reload or
    /// filter change.
    fn clamp_selection(&mut self) {
        let len = self.board.visible().len();
        if len == 0 {
            self.task_list_state.select(None);
        } else {
            let idx = self.task_list_state.selected().unwrap_or(0).min(len - 1);
            self.task_list_state.select(Some(idx));
        }
    }

    fn selected_id(&self) -> Option<u64> {
        let visible = self.board.visible();
        self.task_list_state
            .selected()
            .and_then(|idx| visible.get(idx))
            .map(|t| t.id)
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.board.visible().len();
        if len == 0 {
            return;
        }
        let cur = self.task_list_state.selected().unwrap_or(0);
        let next = if down {
            (cur + 1).min(len - 1)
        } else {
            cur.saturating_sub(1)
        };
        self.task_list_state.select(Some(next));
    }

    fn set_filter(&mut self, filter: Filter) {
        self.board.filter = filter;
        self.clamp_selection();
    }

    /// Re-fetch the full list. On failure the stale snapshot stays visible.
    fn reload_board(&mut self) {
        match self.board.reload(&self.api) {
            Ok(()) => self.clamp_selection(),
            Err(e) => self.set_status(format!("Reload failed: {e}")),
        }
    }

    /// Request a completion transition for the selected task, then reload.
    /// Done tasks never offer the action in the rendered view, so this is
    /// only reachable for pending ones.
    fn mark_selected_done(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.board.get(id).map(|t| t.done).unwrap_or(true) {
            return;
        }
        match self
            .api
            .mark_done(id)
            .and_then(|r| r.apply(&mut self.board, &self.api))
        {
            Ok(()) => self.set_status(format!("Task {id} done")),
            Err(e) => self.set_status(format!("Done failed: {e}")),
        }
        self.clamp_selection();
    }

    fn delete_confirmed_task(&mut self) {
        let Some(id) = self.confirm_delete.take() else {
            return;
        };
        match self
            .api
            .delete(id)
            .and_then(|r| r.apply(&mut self.board, &self.api))
        {
            Ok(()) => self.set_status(format!("Deleted task {id}")),
            Err(e) => self.set_status(format!("Delete failed: {e}")),
        }
        self.clamp_selection();
    }

    /// Submit the create form. A blank title never reaches the network;
    /// a successful create resets the form and reloads the list.
    fn submit_form(&mut self) {
        let Some(title) = self.task_form.trimmed_title() else {
            self.set_status("Title cannot be empty");
            return;
        };
        let draft = TaskDraft {
            title,
            notes: self.task_form.notes.value.clone(),
            priority: self.task_form.selected_priority(),
        };
        match self
            .api
            .create(&draft)
            .and_then(|r| r.apply(&mut self.board, &self.api))
        {
            Ok(()) => {
                self.task_form = TaskForm::new();
                self.state = AppState::TaskList;
                self.set_status("Task added");
                self.clamp_selection();
            }
            Err(e) => self.set_status(format!("Create failed: {e}")),
        }
    }

    /// Send the AI buffer for parsing. Empty input performs no call, and
    /// the in-flight flag keeps the trigger disabled. Success pre-fills
    /// the create form; failure shows the server's message and leaves
    /// everything else alone.
    fn submit_ai_text(&mut self) {
        if self.ai_loading {
            return;
        }
        let text = self.ai_text.value.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.ai_loading = true;
        self.ai_error.clear();
        let outcome = self.api.parse_task(&text);
        self.ai_loading = false;

        match outcome {
            Ok(parsed) => {
                self.task_form = TaskForm::from_parsed(&parsed);
                self.ai_text.clear();
                self.state = AppState::AddTask;
                self.set_status("Review the suggestion, then press Enter to add");
            }
            Err(e) => {
                self.ai_error = e.to_string();
                if self.ai_error.is_empty() {
                    self.ai_error = "AI parse failed".to_string();
                }
            }
        }
    }

    fn handle_task_list_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Char('a') | KeyCode::Char('n') => self.state = AppState::AddTask,
            KeyCode::Char('i') => self.state = AppState::AiParse,
            KeyCode::Enter | KeyCode::Char('d') => self.mark_selected_done(),
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.confirm_delete = Some(id);
                    self.state = AppState::ConfirmDelete;
                }
            }
            KeyCode::Tab | KeyCode::Char('f') => {
                self.set_filter(self.board.filter.next());
            }
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Pending),
            KeyCode::Char('3') => self.set_filter(Filter::Done),
            KeyCode::Char('r') => self.reload_board(),
            KeyCode::Char('h') | KeyCode::Char('?') => self.state = AppState::Help,
            _ => {}
        }
        false
    }

    fn handle_form_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Esc => {
                // Cancel keeps the draft; only a successful create resets it.
                self.state = AppState::TaskList;
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Left => self.task_form.handle_left_right(false),
            KeyCode::Right => self.task_form.handle_left_right(true),
            KeyCode::Backspace => self.task_form.handle_backspace(),
            KeyCode::Delete => self.task_form.handle_delete(),
            KeyCode::Char(c) => self.task_form.handle_char(c),
            _ => {}
        }
        false
    }

    fn handle_ai_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Esc => {
                self.state = AppState::TaskList;
                self.ai_error.clear();
            }
            KeyCode::Enter => self.submit_ai_text(),
            KeyCode::Left => self.ai_text.move_cursor_left(),
            KeyCode::Right => self.ai_text.move_cursor_right(),
            KeyCode::Backspace => self.ai_text.handle_backspace(),
            KeyCode::Delete => self.ai_text.handle_delete(),
            KeyCode::Char(c) => self.ai_text.handle_char(c),
            _ => {}
        }
        false
    }

    fn handle_confirm_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.delete_confirmed_task();
                self.state = AppState::TaskList;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_delete = None;
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        false
    }

    fn handle_help_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') => {
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        false
    }

    /// Poll for and handle keyboard events based on current application state.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if self.state == AppState::TaskList {
                    self.clear_status_message();
                }

                let should_quit = match self.state {
                    AppState::TaskList => self.handle_task_list_input(key.code, key.modifiers),
                    AppState::AddTask => self.handle_form_input(key.code, key.modifiers),
                    AppState::AiParse => self.handle_ai_input(key.code, key.modifiers),
                    AppState::Help => self.handle_help_input(key.code, key.modifiers),
                    AppState::ConfirmDelete => self.handle_confirm_input(key.code, key.modifiers),
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn priority_color(p: Priority) -> Color {
        match p {
            Priority::High => EMBER,
            Priority::Medium => GOLD,
            Priority::Low => SLATE,
        }
    }

    /// Render the main task list view: header, filter tabs, table, counts.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(1), // filter tabs
                Constraint::Min(0),    // table
                Constraint::Length(1), // summary counts
            ])
            .split(area);

        let header_text = vec![Line::from(vec![
            Span::styled("TASK BOARD", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                self.api.base_url().to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])];
        let header_block = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header_block, chunks[0]);

        let mut tab_spans = vec![Span::raw(" Filter: ")];
        for filter in [Filter::All, Filter::Pending, Filter::Done] {
            let style = if filter == self.board.filter {
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            tab_spans.push(Span::styled(filter.label(), style));
            tab_spans.push(Span::raw("  "));
        }
        f.render_widget(Paragraph::new(Line::from(tab_spans)), chunks[1]);

        let header_cells = ["ID", "Status", "Pri", "Title", "Notes"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let table_header = Row::new(header_cells)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .height(1);

        let rows: Vec<Row> = self
            .board
            .visible()
            .iter()
            .map(|task| {
                let row_style = if task.done {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                let marker = if task.done { "✔" } else { " " };
                Row::new(vec![
                    Cell::from(task.id.to_string()),
                    Cell::from(format!("{} {}", marker, format_done(task.done))),
                    Cell::from(format_priority(task.priority))
                        .style(Style::default().fg(Self::priority_color(task.priority))),
                    Cell::from(task.title.clone()),
                    Cell::from(task.notes.clone()),
                ])
                .style(row_style)
            })
            .collect();

        let visible_count = rows.len();
        let widths = [
            Constraint::Length(6),  // ID
            Constraint::Length(10), // Status
            Constraint::Length(8),  // Pri
            Constraint::Min(24),    // Title
            Constraint::Min(16),    // Notes
        ];

        let table = Table::new(rows, widths)
            .header(table_header)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Tasks ({}/{}) - Press 'h' for help",
                visible_count,
                self.board.tasks().len()
            )))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(table, chunks[2], &mut self.task_list_state);

        let s = self.board.summary();
        let summary = Paragraph::new(format!(
            " Total: {} | Pending: {} | Done: {}",
            s.total, s.pending, s.done
        ))
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(summary, chunks[3]);
    }

    /// Render the create form as a centered popup over the task list.
    fn render_task_form(&mut self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 60, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title("Add Task (Enter to add, Esc to cancel)")
            .borders(Borders::ALL);
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // title
                Constraint::Length(3), // notes
                Constraint::Length(3), // priority
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_text_field(f, chunks[0], "Title", TITLE_FIELD);
        self.render_text_field(f, chunks[1], "Notes", NOTES_FIELD);

        let selected = self.task_form.selected_priority();
        let pri_style = if self.task_form.current_field == PRIORITY_FIELD {
            Style::default().fg(Self::priority_color(selected)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::priority_color(selected))
        };
        let pri_border = if self.task_form.current_field == PRIORITY_FIELD {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let pri = Paragraph::new(Line::from(vec![
            Span::raw("◀ "),
            Span::styled(format_priority(selected), pri_style),
            Span::raw(" ▶"),
        ]))
        .block(
            Block::default()
                .title("Priority")
                .borders(Borders::ALL)
                .border_style(pri_border),
        );
        f.render_widget(pri, chunks[2]);
    }

    fn render_text_field(&mut self, f: &mut Frame, area: Rect, label: &str, field_idx: usize) {
        let field = match field_idx {
            TITLE_FIELD => &self.task_form.title,
            _ => &self.task_form.notes,
        };
        let active = self.task_form.current_field == field_idx;
        let border = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let widget = Paragraph::new(field.value.clone()).block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(border),
        );
        f.render_widget(widget, area);
        if active {
            f.set_cursor_position(Position::new(cursor_x(area, field.cursor), area.y + 1));
        }
    }

    /// Render the AI capture prompt as a centered popup.
    fn render_ai_parse(&mut self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(70, 40, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title("AI Capture (Enter to parse, Esc to cancel)")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DARK_PURPLE));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // prompt
                Constraint::Length(3), // input
                Constraint::Length(1), // loading flag
                Constraint::Min(1),    // error
            ])
            .split(inner);

        let prompt = Paragraph::new("Describe the task in plain words:");
        f.render_widget(prompt, chunks[0]);

        let input_border = if self.ai_loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let input = Paragraph::new(self.ai_text.value.clone())
            .block(Block::default().borders(Borders::ALL).border_style(input_border));
        f.render_widget(input, chunks[1]);
        if !self.ai_loading {
            f.set_cursor_position(Position::new(
                cursor_x(chunks[1], self.ai_text.cursor),
                chunks[1].y + 1,
            ));
        }

        if self.ai_loading {
            let loading = Paragraph::new("Parsing…").style(Style::default().fg(Color::Cyan));
            f.render_widget(loading, chunks[2]);
        }

        if !self.ai_error.is_empty() {
            let error = Paragraph::new(self.ai_error.clone())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(error, chunks[3]);
        }
    }

    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(
                "Keys",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  j/k or arrows   move selection"),
            Line::from("  a or n          add a task"),
            Line::from("  i               AI capture (free text to task form)"),
            Line::from("  d or Enter      mark selected task done"),
            Line::from("  x or Delete     delete selected task"),
            Line::from("  f or Tab        cycle filter (1/2/3 jump directly)"),
            Line::from("  r               reload from server"),
            Line::from("  q               quit"),
            Line::from(""),
            Line::from("Every change is pushed to the server and the list is"),
            Line::from("re-fetched in full; there is no local storage."),
        ];
        let help = Paragraph::new(text)
            .block(Block::default().title("Help").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(help, area);
    }

    fn render_confirm(&mut self, f: &mut Frame, area: Rect) {
        let title = self
            .confirm_delete
            .and_then(|id| self.board.get(id))
            .map(|t| t.title.clone())
            .unwrap_or_default();

        let block = Block::default()
            .title("Confirm Delete")
            .borders(Borders::ALL)
            .style(Style::default().bg(EMBER));

        let popup = centered_rect(50, 20, area);
        f.render_widget(Clear, popup);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Delete this task?",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(title),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, popup);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::TaskList => format!(
                    "Tasks: {} | View: {} | Press 'h' for help",
                    self.board.visible().len(),
                    self.board.filter.label()
                ),
                AppState::AddTask => "Add Task".to_string(),
                AppState::AiParse => "AI Capture".to_string(),
                AppState::Help => "Help".to_string(),
                AppState::ConfirmDelete => "Confirm Delete".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to appropriate view renderers.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.state {
            AppState::TaskList => self.render_task_list(f, chunks[0]),
            AppState::AddTask => {
                self.render_task_list(f, chunks[0]);
                self.render_task_form(f, chunks[0]);
            }
            AppState::AiParse => {
                self.render_task_list(f, chunks[0]);
                self.render_ai_parse(f, chunks[0]);
            }
            AppState::Help => self.render_help(f, chunks[0]),
            AppState::ConfirmDelete => {
                self.render_task_list(f, chunks[0]);
                self.render_confirm(f, chunks[0]);
            }
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

/// Cursor column inside a bordered field, clamped to the inner width so a
/// long value cannot push the cursor past the field edge.
fn cursor_x(area: Rect, cursor: usize) -> u16 {
    let max = area.width.saturating_sub(2).saturating_sub(1) as usize;
    area.x + 1 + cursor.min(max) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Same arrangement as the client tests: the mock server lives on its own
    // runtime, the blocking app runs on the test thread.
    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Runtime::new().unwrap()
    }

    fn mount_empty_list(rt: &tokio::runtime::Runtime, server: &MockServer) {
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/tasks"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
                .mount(server),
        );
    }

    #[test]
    fn test_blank_ai_input_sends_nothing() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        mount_empty_list(&rt, &server);
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/ai/parse-task"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "x"})))
                .expect(0)
                .mount(&server),
        );

        let mut app = App::new(&server.uri());
        app.state = AppState::AiParse;
        app.ai_text = InputField::with_value("   ");
        app.submit_ai_text();

        assert_eq!(app.state, AppState::AiParse);
        assert!(app.ai_error.is_empty());
        rt.block_on(server.verify());
    }

    #[test]
    fn test_failed_ai_parse_leaves_form_untouched() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        mount_empty_list(&rt, &server);
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/ai/parse-task"))
                .respond_with(
                    ResponseTemplate::new(500).set_body_string("model backend unavailable"),
                )
                .mount(&server),
        );

        let mut app = App::new(&server.uri());
        app.task_form.title = InputField::with_value("Keep me");
        app.state = AppState::AiParse;
        app.ai_text = InputField::with_value("call mum friday");
        app.submit_ai_text();

        assert_eq!(app.task_form.title.value, "Keep me");
        assert_eq!(app.ai_error, "model backend unavailable");
        assert_eq!(app.ai_text.value, "call mum friday");
        assert_eq!(app.state, AppState::AiParse);
        assert!(!app.ai_loading);
    }

    #[test]
    fn test_blank_title_submit_sends_nothing() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        mount_empty_list(&rt, &server);
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/tasks"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
                .expect(0)
                .mount(&server),
        );

        let mut app = App::new(&server.uri());
        app.state = AppState::AddTask;
        app.task_form.title = InputField::with_value("   ");
        app.submit_form();

        assert_eq!(app.status_message, "Title cannot be empty");
        assert_eq!(app.state, AppState::AddTask);
        rt.block_on(server.verify());
    }

    #[test]
    fn test_cursor_stays_inside_field() {
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(cursor_x(area, 0), 1);
        assert_eq!(cursor_x(area, 5), 6);
        assert_eq!(cursor_x(area, 500), 18); // last inner column

        let tiny = Rect::new(0, 0, 2, 3);
        assert_eq!(cursor_x(tiny, 500), 1);
    }
}
