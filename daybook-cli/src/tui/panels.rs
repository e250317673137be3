//! Placement of the three main panels for each of the eight layouts.
//!
//! One panel takes a full-height column, the two others share the narrow
//! column, one stacked above the other.

use daybook_core::config::Layout;
use ratatui::layout::Rect;

/// Width of the narrow column, sized for the month view.
pub(crate) const SIDE_WIDTH: u16 = 30;
/// Height of the calendar when it sits in the narrow column.
pub(crate) const CALENDAR_HEIGHT: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Panel {
    Events,
    Calendar,
    Note,
}

impl Panel {
    pub fn letter(&self) -> char {
        match self {
            Panel::Events => 'E',
            Panel::Calendar => 'C',
            Panel::Note => 'N',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Arrangement {
    pub big: Panel,
    pub big_on_left: bool,
    pub top: Panel,
    pub bottom: Panel,
}

pub(crate) fn arrangement(layout: Layout) -> Arrangement {
    use Panel::*;

    let (big, big_on_left, top, bottom) = match layout.number() {
        2 => (Events, true, Note, Calendar),
        3 => (Events, false, Calendar, Note),
        4 => (Events, false, Note, Calendar),
        5 => (Note, true, Calendar, Events),
        6 => (Note, true, Events, Calendar),
        7 => (Note, false, Calendar, Events),
        8 => (Note, false, Events, Calendar),
        _ => (Events, true, Calendar, Note),
    };

    Arrangement {
        big,
        big_on_left,
        top,
        bottom,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PanelAreas {
    pub events: Rect,
    pub calendar: Rect,
    pub note: Rect,
}

impl PanelAreas {
    fn set(&mut self, panel: Panel, area: Rect) {
        match panel {
            Panel::Events => self.events = area,
            Panel::Calendar => self.calendar = area,
            Panel::Note => self.note = area,
        }
    }
}

pub(crate) fn split(layout: Layout, area: Rect) -> PanelAreas {
    let arr = arrangement(layout);

    let side_width = SIDE_WIDTH.min(area.width);
    let big_width = area.width - side_width;
    let (big_x, side_x) = if arr.big_on_left {
        (area.x, area.x + big_width)
    } else {
        (area.x + side_width, area.x)
    };

    let top_height = if arr.top == Panel::Calendar {
        CALENDAR_HEIGHT.min(area.height)
    } else {
        area.height.saturating_sub(CALENDAR_HEIGHT)
    };

    let mut areas = PanelAreas {
        events: Rect::default(),
        calendar: Rect::default(),
        note: Rect::default(),
    };
    areas.set(arr.big, Rect::new(big_x, area.y, big_width, area.height));
    areas.set(arr.top, Rect::new(side_x, area.y, side_width, top_height));
    areas.set(
        arr.bottom,
        Rect::new(side_x, area.y + top_height, side_width, area.height - top_height),
    );
    areas
}

/// Two-line sketch of a layout, e.g. `EC` over `EN` for layout 1.
pub(crate) fn diagram(layout: Layout) -> [String; 2] {
    let arr = arrangement(layout);
    let row = |side: Panel| {
        if arr.big_on_left {
            format!("{}{}", arr.big.letter(), side.letter())
        } else {
            format!("{}{}", side.letter(), arr.big.letter())
        }
    };
    [row(arr.top), row(arr.bottom)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout(n: u8) -> Layout {
        Layout::new(n).unwrap()
    }

    #[test]
    fn test_default_layout_puts_events_left() {
        let areas = split(layout(1), Rect::new(0, 0, 100, 40));
        assert_eq!(areas.events, Rect::new(0, 0, 70, 40));
        assert_eq!(areas.calendar, Rect::new(70, 0, 30, 12));
        assert_eq!(areas.note, Rect::new(70, 12, 30, 28));
    }

    #[test]
    fn test_calendar_at_bottom_keeps_its_height() {
        let areas = split(layout(4), Rect::new(0, 0, 100, 40));
        assert_eq!(areas.events, Rect::new(30, 0, 70, 40));
        assert_eq!(areas.note, Rect::new(0, 0, 30, 28));
        assert_eq!(areas.calendar, Rect::new(0, 28, 30, 12));
    }

    #[test]
    fn test_every_layout_covers_the_area() {
        let area = Rect::new(0, 1, 90, 30);
        for n in 1..=Layout::COUNT {
            let a = split(layout(n), area);
            let covered = a.events.area() + a.calendar.area() + a.note.area();
            assert_eq!(covered, area.area(), "layout {n}");
            assert_eq!(a.calendar.width, SIDE_WIDTH, "layout {n}");
        }
    }

    #[test]
    fn test_diagrams() {
        assert_eq!(diagram(layout(1)), ["EC".to_string(), "EN".to_string()]);
        assert_eq!(diagram(layout(3)), ["CE".to_string(), "NE".to_string()]);
        assert_eq!(diagram(layout(8)), ["EN".to_string(), "CN".to_string()]);
    }
}
