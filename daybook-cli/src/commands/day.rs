use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use daybook_core::{Daybook, Event, EventList};
use owo_colors::OwoColorize;

use crate::utils::datefmt::format_day;

pub fn run(daybook: &Daybook, date: Option<String>, range: u32) -> Result<()> {
    let conf = daybook.conf();
    let start = match date {
        Some(text) => conf.general.input_datefmt.parse_date(&text)?,
        None => Local::now().date_naive(),
    };
    let events = daybook.load_events()?;

    let days = events_by_day(&events, start, range);
    if days.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for (i, (day, day_events)) in days.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format_day(*day, &conf.general.output_datefmt).bold());
        for event in day_events {
            if event.has_note() {
                println!("  * {} {}", event.mesg, "(note)".dimmed());
            } else {
                println!("  * {}", event.mesg);
            }
        }
    }

    Ok(())
}

/// Events of `start` and the following `range - 1` days, skipping empty days.
fn events_by_day(events: &EventList, start: NaiveDate, range: u32) -> Vec<(NaiveDate, Vec<&Event>)> {
    (0..i64::from(range.max(1)))
        .filter_map(|offset| start.checked_add_signed(Duration::days(offset)))
        .map(|day| (day, events.in_day(day).collect::<Vec<_>>()))
        .filter(|(_, day_events)| !day_events.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_events_by_day_skips_empty_days() {
        let mut events = EventList::new();
        events.add("Rent", None, date(2025, 3, 1), 1);
        events.add("Dentist", None, date(2025, 3, 3), 1);
        events.add("Call Bob", None, date(2025, 3, 3), 1);
        events.add("Later", None, date(2025, 3, 9), 1);

        let days = events_by_day(&events, date(2025, 3, 1), 3);
        let summary: Vec<(NaiveDate, Vec<&str>)> = days
            .iter()
            .map(|(day, evs)| (*day, evs.iter().map(|e| e.mesg.as_str()).collect()))
            .collect();

        assert_eq!(
            summary,
            vec![
                (date(2025, 3, 1), vec!["Rent"]),
                (date(2025, 3, 3), vec!["Dentist", "Call Bob"]),
            ]
        );
    }

    #[test]
    fn test_zero_range_means_one_day() {
        let mut events = EventList::new();
        events.add("Rent", None, date(2025, 3, 1), 1);
        events.add("Dentist", None, date(2025, 3, 2), 1);

        assert_eq!(events_by_day(&events, date(2025, 3, 1), 0).len(), 1);
    }
}
