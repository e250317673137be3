//! Main view: calendar, day events and note panels plus the bottom bars.

use chrono::{Datelike, Duration, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use daybook_core::{Daybook, DaybookError, Erase, EventList, NoteStore};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout as Split, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use super::attr::{Attr, Attributes};
use super::calendar_view::MonthView;
use super::custom::{self, ConfigScreen, ScreenAction};
use super::notify_bar::NotifyBar;
use super::panels;
use super::prompt::{LinePrompt, PromptOutcome};
use super::status::{self, STATUS_HEIGHT, StatusBar};

/// Id given to events created from the interface.
const NEW_EVENT_ID: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptPurpose {
    AddEvent,
    AttachNote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirm {
    Delete,
    Quit,
}

enum Mode {
    Normal,
    Prompt(PromptPurpose, LinePrompt),
    Confirm(Confirm),
    Config(ConfigScreen),
}

pub(crate) struct App {
    daybook: Daybook,
    events: EventList,
    notes: NoteStore,
    notify: NotifyBar,
    today: NaiveDate,
    selected_day: NaiveDate,
    /// Index among the events of `selected_day`
    selected_event: usize,
    mode: Mode,
    message: Option<String>,
    show_progress: bool,
    should_quit: bool,
}

impl App {
    pub fn new(daybook: Daybook, today: NaiveDate) -> Result<Self, DaybookError> {
        let events = daybook.load_events()?;
        let notes = daybook.notes();
        let notify = NotifyBar::new(daybook.conf().notify_bar.clone());

        let mut app = App {
            daybook,
            events,
            notes,
            notify,
            today,
            selected_day: today,
            selected_event: 0,
            mode: Mode::Normal,
            message: None,
            show_progress: false,
            should_quit: false,
        };
        app.system_message("Data loaded");
        Ok(app)
    }

    pub fn notify(&self) -> &NotifyBar {
        &self.notify
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Called periodically so the calendar follows midnight.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;
        self.show_progress = false;

        let mode = std::mem::replace(&mut self.mode, Mode::Normal);
        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Prompt(purpose, mut prompt) => match prompt.handle_key(key) {
                PromptOutcome::Pending => Mode::Prompt(purpose, prompt),
                PromptOutcome::Cancelled => Mode::Normal,
                PromptOutcome::Submitted(text) => {
                    self.submit(purpose, &text);
                    Mode::Normal
                }
            },
            Mode::Confirm(what) => {
                if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                    match what {
                        Confirm::Delete => self.delete_selected(Erase::Item),
                        Confirm::Quit => self.quit(),
                    }
                }
                Mode::Normal
            }
            Mode::Config(mut screen) => {
                match screen.handle_key(key, self.daybook.conf_mut(), &self.notify) {
                    ScreenAction::Stay => Mode::Config(screen),
                    ScreenAction::Close => Mode::Normal,
                }
            }
        };
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Mode {
        let general = &self.daybook.conf().general;
        let (confirm_quit, confirm_delete) = (general.confirm_quit, general.confirm_delete);

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_day(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_day(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_day(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_day(7),
            KeyCode::Char('J') => {
                if self.selected_event + 1 < self.events.day_count(self.selected_day) {
                    self.selected_event += 1;
                }
            }
            KeyCode::Char('K') => self.selected_event = self.selected_event.saturating_sub(1),
            KeyCode::Char('t') => {
                self.selected_day = self.today;
                self.selected_event = 0;
            }
            KeyCode::Char('a') => {
                return Mode::Prompt(
                    PromptPurpose::AddEvent,
                    LinePrompt::new("Enter the description of the new event:"),
                );
            }
            KeyCode::Char('d') if self.has_selection() => {
                if confirm_delete {
                    return Mode::Confirm(Confirm::Delete);
                }
                self.delete_selected(Erase::Item);
            }
            KeyCode::Char('n') if self.has_selection() => {
                return Mode::Prompt(PromptPurpose::AttachNote, LinePrompt::new("Enter the note:"));
            }
            KeyCode::Char('r') if self.has_selection() => self.delete_selected(Erase::NoteOnly),
            KeyCode::Char('s') => {
                self.save();
            }
            KeyCode::Char('C') => return Mode::Config(ConfigScreen::Menu),
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                if confirm_quit {
                    return Mode::Confirm(Confirm::Quit);
                }
                self.quit();
            }
            _ => {}
        }
        Mode::Normal
    }

    fn has_selection(&self) -> bool {
        self.selected_event < self.events.day_count(self.selected_day)
    }

    fn move_day(&mut self, days: i64) {
        if let Some(day) = self.selected_day.checked_add_signed(Duration::days(days)) {
            self.selected_day = day;
            self.selected_event = 0;
        }
    }

    fn submit(&mut self, purpose: PromptPurpose, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        match purpose {
            PromptPurpose::AddEvent => {
                self.events.add(text, None, self.selected_day, NEW_EVENT_ID);
                self.selected_event = self.events.day_count(self.selected_day) - 1;
            }
            PromptPurpose::AttachNote => {
                if let Err(e) = self.attach_note(text) {
                    self.error(e);
                }
            }
        }
    }

    fn attach_note(&mut self, text: &str) -> Result<(), DaybookError> {
        let event = self.events.get_mut(self.selected_day, self.selected_event)?;
        let name = self.notes.create(text)?;
        if let Some(old) = event.note.replace(name) {
            self.notes.erase(&old)?;
        }
        Ok(())
    }

    fn delete_selected(&mut self, erase: Erase) {
        if let Err(e) = self
            .events
            .delete_by_num(self.selected_day, self.selected_event, erase, &self.notes)
        {
            self.error(e);
            return;
        }

        let remaining = self.events.day_count(self.selected_day);
        if self.selected_event >= remaining {
            self.selected_event = remaining.saturating_sub(1);
        }
    }

    /// Save events and configuration. Returns false if anything failed.
    fn save(&mut self) -> bool {
        self.daybook.conf_mut().notify_bar = self.notify.conf();

        let result = self
            .daybook
            .save_events(&self.events)
            .and_then(|()| self.daybook.save_conf());
        match result {
            Ok(()) => {
                self.show_progress = !self.daybook.conf().general.skip_progress_bar;
                self.system_message("Data saved");
                true
            }
            Err(e) => {
                self.error(e);
                false
            }
        }
    }

    fn quit(&mut self) {
        if self.daybook.conf().general.auto_save && !self.save() {
            return;
        }
        self.should_quit = true;
    }

    fn system_message(&mut self, text: &str) {
        if !self.daybook.conf().general.skip_system_dialogs {
            self.message = Some(text.to_string());
        }
    }

    fn error(&mut self, e: DaybookError) {
        tracing::error!("{e}");
        self.message = Some(e.to_string());
    }

    fn status_lines(&self, attrs: Attributes) -> Vec<Line<'static>> {
        match &self.mode {
            Mode::Normal => match &self.message {
                Some(message) => status::message_lines(message),
                None => status::main_hints(attrs),
            },
            Mode::Prompt(_, prompt) => custom::prompt_lines(prompt),
            Mode::Confirm(Confirm::Delete) => {
                status::confirm_lines("Do you really want to delete this event ?")
            }
            Mode::Confirm(Confirm::Quit) => status::confirm_lines("Do you really want to quit ?"),
            Mode::Config(screen) => screen.status_lines(attrs),
        }
    }

    fn render_panels(&self, area: Rect, buf: &mut Buffer, attrs: Attributes) {
        let conf = self.daybook.conf();
        let areas = panels::split(conf.appearance.layout, area);
        let title = |text: String| Span::styled(text, attrs.style(Attr::Highest));

        let events_block = Block::default()
            .borders(Borders::ALL)
            .title(title(format!(" Events: {} ", self.selected_day.format("%B %-d, %Y"))));
        let lines: Vec<Line> = self
            .events
            .in_day(self.selected_day)
            .enumerate()
            .map(|(i, event)| {
                let marker = if event.has_note() { ">" } else { " " };
                let line = Line::raw(format!("{marker} {}", event.mesg));
                if i == self.selected_event {
                    line.style(attrs.style(Attr::Middle))
                } else {
                    line
                }
            })
            .collect();
        Paragraph::new(lines)
            .block(events_block)
            .render(areas.events, buf);

        let calendar_block = Block::default()
            .borders(Borders::ALL)
            .title(title(" Calendar ".into()));
        let inner = calendar_block.inner(areas.calendar);
        calendar_block.render(areas.calendar, buf);
        let busy_days = self
            .events
            .days_with_events(self.selected_day.year(), self.selected_day.month());
        MonthView {
            selected: self.selected_day,
            today: self.today,
            busy_days: &busy_days,
            week_begins_on_monday: conf.general.week_begins_on_monday,
            attrs,
        }
        .render(inner, buf);

        let note_block = Block::default()
            .borders(Borders::ALL)
            .title(title(" Note ".into()));
        Paragraph::new(self.selected_note())
            .wrap(Wrap { trim: false })
            .block(note_block)
            .render(areas.note, buf);
    }

    fn selected_note(&self) -> String {
        let Ok(event) = self.events.get(self.selected_day, self.selected_event) else {
            return String::new();
        };
        match &event.note {
            Some(name) => self
                .notes
                .read(name)
                .unwrap_or_else(|_| "(note unavailable)".into()),
            None => String::new(),
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let conf = self.daybook.conf();
        let attrs = Attributes::new(conf.appearance.color_theme);
        let notify_height = u16::from(self.notify.is_shown());

        let [main, status_area, notify_area] = Split::vertical([
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(notify_height),
        ])
        .areas(area);

        match &self.mode {
            Mode::Config(screen) if !screen.is_menu() => {
                screen.render(main, buf, conf, &self.notify)
            }
            _ => self.render_panels(main, buf, attrs),
        }

        StatusBar {
            lines: self.status_lines(attrs),
            progress: self.show_progress,
            attrs,
        }
        .render(status_area, buf);

        if notify_height > 0 {
            let file_name = self
                .daybook
                .events_path()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let line = status::notify_line(
                &self.notify.lock(),
                &file_name,
                self.events.day_count(self.today),
                attrs,
            );
            Paragraph::new(line).render(notify_area, buf);
        }
    }
}
