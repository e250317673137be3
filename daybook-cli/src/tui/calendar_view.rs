//! Month view of the calendar panel.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::attr::{Attr, Attributes};

const SUNDAY_FIRST: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const MONDAY_FIRST: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub(crate) struct MonthView<'a> {
    pub selected: NaiveDate,
    pub today: NaiveDate,
    /// Day-of-month numbers holding at least one event
    pub busy_days: &'a BTreeSet<u32>,
    pub week_begins_on_monday: bool,
    pub attrs: Attributes,
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (y, m) = (first.year(), first.month());
    let next = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)
    };
    next.map(|n| n.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31)
}

impl MonthView<'_> {
    fn first_of_month(&self) -> NaiveDate {
        self.selected.with_day(1).unwrap_or(self.selected)
    }

    /// Column (0..7) of the first day of the month.
    fn offset(&self, first: NaiveDate) -> u32 {
        if self.week_begins_on_monday {
            first.weekday().num_days_from_monday()
        } else {
            first.weekday().num_days_from_sunday()
        }
    }

    fn day_attr(&self, date: NaiveDate) -> Option<Attr> {
        if date == self.selected {
            Some(Attr::Middle)
        } else if date == self.today {
            Some(Attr::Lowest)
        } else if self.busy_days.contains(&date.day()) {
            Some(Attr::Low)
        } else {
            None
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let first = self.first_of_month();
        let high = self.attrs.style(Attr::High);

        let mut lines = vec![
            Line::styled(first.format("%B %Y").to_string(), high).alignment(Alignment::Center),
            Line::raw(""),
        ];

        let names = if self.week_begins_on_monday {
            MONDAY_FIRST
        } else {
            SUNDAY_FIRST
        };
        lines.push(Line::from(
            names
                .iter()
                .map(|n| Span::styled(format!(" {n} "), high))
                .collect::<Vec<_>>(),
        ));

        let mut col = self.offset(first);
        let mut week: Vec<Span<'static>> = (0..col).map(|_| Span::raw("    ")).collect();

        for day in 1..=days_in_month(first) {
            let date = first.with_day(day).unwrap_or(first);
            let text = Span::raw(format!("{day:>2}"));
            let text = match self.day_attr(date) {
                Some(attr) => text.style(self.attrs.style(attr)),
                None => text,
            };
            week.push(Span::raw(" "));
            week.push(text);
            week.push(Span::raw(" "));

            col += 1;
            if col == 7 {
                lines.push(Line::from(std::mem::take(&mut week)));
                col = 0;
            }
        }
        if !week.is_empty() {
            lines.push(Line::from(week));
        }

        lines
    }
}

impl Widget for MonthView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_core::config::ColorTheme;
    use ratatui::style::Color;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
        assert_eq!(days_in_month(date(2025, 2, 1)), 28);
        assert_eq!(days_in_month(date(2025, 12, 1)), 31);
    }

    #[test]
    fn test_first_week_respects_week_start() {
        // March 1st 2025 is a Saturday.
        let busy = BTreeSet::new();
        let mut view = MonthView {
            selected: date(2025, 3, 10),
            today: date(2025, 3, 10),
            busy_days: &busy,
            week_begins_on_monday: false,
            attrs: Attributes::new(ColorTheme::default()),
        };

        let lines = view.lines();
        assert_eq!(text(&lines[0]), "March 2025");
        assert!(text(&lines[2]).starts_with(" Su "));
        assert_eq!(text(&lines[3]), format!("{}  1 ", " ".repeat(24)));

        view.week_begins_on_monday = true;
        let lines = view.lines();
        assert!(text(&lines[2]).starts_with(" Mo "));
        assert_eq!(text(&lines[3]), format!("{}  1   2 ", " ".repeat(20)));
    }

    #[test]
    fn test_busy_and_selected_days_are_highlighted() {
        let busy: BTreeSet<u32> = [5].into_iter().collect();
        let view = MonthView {
            selected: date(2025, 3, 10),
            today: date(2025, 3, 3),
            busy_days: &busy,
            week_begins_on_monday: true,
            attrs: Attributes::new(ColorTheme::default()),
        };

        let spans: Vec<Span> = view.lines().into_iter().flat_map(|l| l.spans).collect();
        let style_of = |label: &str| {
            spans
                .iter()
                .find(|s| s.content == label)
                .map(|s| s.style.fg)
                .unwrap()
        };

        assert_eq!(style_of(" 5"), Some(Color::Cyan));
        assert_eq!(style_of("10"), Some(Color::Red));
        assert_eq!(style_of(" 3"), Some(Color::Yellow));
        assert_eq!(style_of(" 4"), None);
    }
}
