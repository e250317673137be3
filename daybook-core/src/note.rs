//! Note files attached to events.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::DaybookResult;

/// How an event and its note are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Erase {
    /// Remove the event and its note file
    Item,
    /// Remove the event but keep the note file on disk
    ItemKeepNote,
    /// Keep the event, erase and detach its note
    NoteOnly,
}

/// Directory holding one file per note.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        NoteStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Store `text` in a new note file and return its name.
    pub fn create(&self, text: &str) -> DaybookResult<String> {
        std::fs::create_dir_all(&self.dir)?;

        let name = Uuid::new_v4().simple().to_string();
        std::fs::write(self.path_for(&name), text)?;
        tracing::debug!(note = %name, "created note");

        Ok(name)
    }

    pub fn read(&self, name: &str) -> DaybookResult<String> {
        Ok(std::fs::read_to_string(self.path_for(name))?)
    }

    /// Remove a note file. A note that is already gone is not an error.
    pub fn erase(&self, name: &str) -> DaybookResult<()> {
        match std::fs::remove_file(self.path_for(name)) {
            Ok(()) => {
                tracing::debug!(note = %name, "erased note");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
