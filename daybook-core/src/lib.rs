//! Core types for daybook.
//!
//! - [`EventList`] keeps day-long events ordered by day and reads/writes
//!   them in a line-oriented text format
//! - [`NoteStore`] holds the note files attached to events
//! - [`config`] models user preferences and loads/saves them

pub mod config;
pub mod daybook;
pub mod error;
pub mod event;
pub mod event_list;
pub mod note;

pub use daybook::Daybook;
pub use error::{DaybookError, DaybookResult};
pub use event::Event;
pub use event_list::EventList;
pub use note::{Erase, NoteStore};
