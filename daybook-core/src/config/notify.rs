//! Notification bar settings.

use serde::{Deserialize, Serialize};

/// Settings of the notification bar shown under the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConf {
    pub show: bool,
    /// strftime format of the date
    pub date: String,
    /// strftime format of the clock
    pub clock: String,
    /// Seconds of advance warning before an upcoming item
    pub warning: u32,
    /// Shell command launched for a warning
    pub command: String,
}

impl Default for NotifyConf {
    fn default() -> Self {
        NotifyConf {
            show: true,
            date: "%a %F".to_string(),
            clock: "%T".to_string(),
            warning: 300,
            command: "printf '\\a'".to_string(),
        }
    }
}
