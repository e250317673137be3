//! Status bar and notify bar at the bottom of the screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Widget};

use super::attr::{Attr, Attributes};
use super::notify_bar::NotifyState;

pub(crate) const STATUS_HEIGHT: u16 = 2;

const MAIN_HINTS: [[(&str, &str); 4]; 2] = [
    [("q", "Quit"), ("s", "Save"), ("a", "Add"), ("d", "Delete")],
    [("n", "Note"), ("r", "Rm note"), ("t", "Today"), ("C", "Config")],
];

/// Key hints of the main view.
pub(crate) fn main_hints(attrs: Attributes) -> Vec<Line<'static>> {
    let key = attrs.style(Attr::Highest);
    MAIN_HINTS
        .iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .flat_map(|(k, label)| [Span::styled(*k, key), Span::raw(format!(" {label:<10}"))])
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub(crate) fn message_lines(message: &str) -> Vec<Line<'static>> {
    vec![Line::raw(message.to_string()), Line::default()]
}

pub(crate) fn confirm_lines(question: &str) -> Vec<Line<'static>> {
    vec![Line::raw(question.to_string()), Line::raw("[y/n] ")]
}

pub(crate) struct StatusBar {
    pub lines: Vec<Line<'static>>,
    /// Draw a finished save gauge on the second line
    pub progress: bool,
    pub attrs: Attributes,
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.progress || area.height < 2 {
            Paragraph::new(self.lines).render(area, buf);
            return;
        }

        let first = Rect { height: 1, ..area };
        let second = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        Paragraph::new(self.lines.into_iter().take(1).collect::<Vec<_>>()).render(first, buf);
        Gauge::default()
            .gauge_style(self.attrs.style(Attr::True))
            .ratio(1.0)
            .label("Saving... done")
            .render(second, buf);
    }
}

/// `[ date | clock ]  file  N events today`
pub(crate) fn notify_line(
    state: &NotifyState,
    file_name: &str,
    today_count: usize,
    attrs: Attributes,
) -> Line<'static> {
    let events = match today_count {
        0 => "no event today".to_string(),
        1 => "1 event today".to_string(),
        n => format!("{n} events today"),
    };
    Line::styled(
        format!(
            " [ {} | {} ]  {}  > {}",
            state.date_text, state.clock_text, file_name, events
        ),
        attrs.style(Attr::Highest),
    )
}
