//! Day-ordered list of events.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::error::{DaybookError, DaybookResult};
use crate::event::Event;
use crate::note::{Erase, NoteStore};

/// Events sorted by day. Events on the same day keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new event before the first event of a later day.
    pub fn add(
        &mut self,
        mesg: impl Into<String>,
        note: Option<String>,
        day: NaiveDate,
        id: i32,
    ) -> &Event {
        let pos = self
            .events
            .iter()
            .position(|e| e.day > day)
            .unwrap_or(self.events.len());

        self.events.insert(pos, Event::new(mesg, note, day, id));
        &self.events[pos]
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Events belonging to `day`, in list order.
    pub fn in_day(&self, day: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.in_day(day))
    }

    pub fn day_count(&self, day: NaiveDate) -> usize {
        self.in_day(day).count()
    }

    /// Day-of-month numbers that have at least one event in the given month.
    pub fn days_with_events(&self, year: i32, month: u32) -> BTreeSet<u32> {
        self.events
            .iter()
            .filter(|e| e.day.year() == year && e.day.month() == month)
            .map(|e| e.day.day())
            .collect()
    }

    /// The `pos`-th event (0-based) of `day`.
    pub fn get(&self, day: NaiveDate, pos: usize) -> DaybookResult<&Event> {
        let index = self.index_of(day, pos)?;
        Ok(&self.events[index])
    }

    pub fn get_mut(&mut self, day: NaiveDate, pos: usize) -> DaybookResult<&mut Event> {
        let index = self.index_of(day, pos)?;
        Ok(&mut self.events[index])
    }

    /// Delete the `num`-th event of `day`, handling its note per `erase`.
    pub fn delete_by_num(
        &mut self,
        day: NaiveDate,
        num: usize,
        erase: Erase,
        notes: &NoteStore,
    ) -> DaybookResult<()> {
        let index = self.index_of(day, num)?;

        // The note goes first: a failed erase leaves the list untouched.
        if erase != Erase::ItemKeepNote {
            if let Some(note) = &self.events[index].note {
                notes.erase(note)?;
            }
        }

        match erase {
            Erase::NoteOnly => self.events[index].note = None,
            Erase::Item | Erase::ItemKeepNote => {
                self.events.remove(index);
            }
        }

        Ok(())
    }

    fn index_of(&self, day: NaiveDate, pos: usize) -> DaybookResult<usize> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.in_day(day))
            .nth(pos)
            .map(|(i, _)| i)
            .ok_or(DaybookError::NoSuchItem { day, pos })
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for event in &self.events {
            event.write(w)?;
        }
        Ok(())
    }

    /// Read events, one per line. Blank lines are skipped.
    pub fn load<R: BufRead>(reader: R) -> DaybookResult<Self> {
        let mut list = EventList::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let event = Event::scan(&line).map_err(|message| DaybookError::Parse {
                line: i + 1,
                message,
            })?;
            list.add(event.mesg, event.note, event.day, event.id);
        }

        Ok(list)
    }

    /// Load from disk. A missing file is an empty list.
    pub fn load_file(path: &Path) -> DaybookResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no events file yet");
            return Ok(EventList::new());
        }

        let file = std::fs::File::open(path)?;
        let list = Self::load(io::BufReader::new(file))?;
        tracing::info!(path = %path.display(), count = list.len(), "loaded events");

        Ok(list)
    }

    pub fn save(&self, path: &Path) -> DaybookResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut content = Vec::new();
        self.write(&mut content)?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), count = self.len(), "saved events");

        Ok(())
    }
}
