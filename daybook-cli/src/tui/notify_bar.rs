//! Notification bar state, shared with the clock thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use daybook_core::config::NotifyConf;

use crate::utils::datefmt::strftime;

const CLOCK_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub(crate) struct NotifyState {
    pub conf: NotifyConf,
    pub date_text: String,
    pub clock_text: String,
}

/// Handle on the notify bar. Clones share the same state.
#[derive(Debug, Clone)]
pub(crate) struct NotifyBar {
    state: Arc<Mutex<NotifyState>>,
}

impl NotifyBar {
    pub fn new(conf: NotifyConf) -> Self {
        let bar = NotifyBar {
            state: Arc::new(Mutex::new(NotifyState {
                conf,
                date_text: String::new(),
                clock_text: String::new(),
            })),
        };
        bar.refresh(Local::now().naive_local());
        bar
    }

    /// Lock the shared state. A panicked holder does not leave the bar unusable.
    pub fn lock(&self) -> MutexGuard<'_, NotifyState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn conf(&self) -> NotifyConf {
        self.lock().conf.clone()
    }

    pub fn set_conf(&self, conf: NotifyConf) {
        self.lock().conf = conf;
        self.refresh(Local::now().naive_local());
    }

    pub fn is_shown(&self) -> bool {
        self.lock().conf.show
    }

    /// Re-format date and clock for `now`.
    pub fn refresh(&self, now: NaiveDateTime) {
        let mut state = self.lock();
        let date = strftime(now, &state.conf.date).unwrap_or_else(|| "??".into());
        let clock = strftime(now, &state.conf.clock).unwrap_or_else(|| "??".into());
        state.date_text = date;
        state.clock_text = clock;
    }

    /// Start the thread refreshing the clock every second. It stops when the
    /// returned handle is dropped.
    pub fn spawn_clock(&self) -> ClockHandle {
        let stop = Arc::new(AtomicBool::new(false));
        let bar = self.clone();
        let thread_stop = Arc::clone(&stop);

        let handle = std::thread::spawn(move || {
            while !thread_stop.load(Ordering::Relaxed) {
                std::thread::sleep(CLOCK_TICK);
                bar.refresh(Local::now().naive_local());
            }
        });

        ClockHandle {
            stop,
            handle: Some(handle),
        }
    }
}

pub(crate) struct ClockHandle {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("notify bar clock thread panicked");
            }
        }
    }
}
