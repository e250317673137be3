//! Day-long calendar events and their one-line text form.
//!
//! An event is stored on a single line:
//!
//! ```text
//! 04/12/2008 [1] >3f2a9c... Dentist
//! 04/13/2008 [1] Team offsite
//! ```
//!
//! The `>name` token is only present when a note is attached; it names a
//! file in the note store. A message starting with `>` or `\` is written
//! with a leading `\` so it is not read back as a note name.

use std::fmt;
use std::io::{self, Write};

use chrono::NaiveDate;

/// Date layout used in the events file.
pub const EVENT_DATE_FORMAT: &str = "%m/%d/%Y";

const NOTE_MARKER: char = '>';
const ESCAPE: char = '\\';

/// A day-long calendar event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub mesg: String,
    /// Name of the attached note file, if any
    pub note: Option<String>,
    pub day: NaiveDate,
    pub id: i32,
}

impl Event {
    pub fn new(mesg: impl Into<String>, note: Option<String>, day: NaiveDate, id: i32) -> Self {
        Event {
            mesg: mesg.into(),
            note,
            day,
            id,
        }
    }

    /// Check if the event belongs to the given day.
    pub fn in_day(&self, day: NaiveDate) -> bool {
        self.day == day
    }

    pub fn has_note(&self) -> bool {
        self.note.is_some()
    }

    /// Write the event as one line, newline included.
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{}", self.to_line())
    }

    /// Render the event line (without trailing newline).
    pub fn to_line(&self) -> String {
        let mut line = format!("{} [{}] ", self.day.format(EVENT_DATE_FORMAT), self.id);
        if let Some(note) = &self.note {
            line.push(NOTE_MARKER);
            line.push_str(note);
            line.push(' ');
        }
        if self.mesg.starts_with([NOTE_MARKER, ESCAPE]) {
            line.push(ESCAPE);
        }
        line.push_str(&self.mesg);
        line
    }

    /// Parse one event line. The error carries a human-readable reason.
    pub fn scan(line: &str) -> Result<Event, String> {
        let line = line.trim_end_matches(['\n', '\r']);

        let (date_str, rest) = line
            .split_once(' ')
            .ok_or_else(|| format!("missing event description in '{}'", line))?;

        let day = NaiveDate::parse_from_str(date_str, EVENT_DATE_FORMAT)
            .map_err(|_| format!("date error in the event '{}'", date_str))?;

        let rest = rest
            .strip_prefix('[')
            .ok_or_else(|| "expected '[' before event id".to_string())?;
        let (id_str, rest) = rest
            .split_once(']')
            .ok_or_else(|| "expected ']' after event id".to_string())?;
        let id: i32 = id_str
            .trim()
            .parse()
            .map_err(|_| format!("wrong event id '{}'", id_str))?;

        let rest = rest.strip_prefix(' ').unwrap_or(rest);

        let (note, mesg) = match rest.strip_prefix(NOTE_MARKER) {
            Some(noted) => match noted.split_once(' ') {
                Some((name, mesg)) => (Some(name.to_string()), mesg),
                None => (Some(noted.to_string()), ""),
            },
            None => (None, rest),
        };

        if note.as_deref() == Some("") {
            return Err("empty note name".to_string());
        }
        let mesg = mesg.strip_prefix(ESCAPE).unwrap_or(mesg);

        Ok(Event::new(mesg, note, day, id))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mesg)
    }
}
