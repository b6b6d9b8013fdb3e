//! Event System
//!
//! Activity events shown in the dashboard log panel or written by the headless logger

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Outcomes of the periodic `/latest-data` fetch.
    Refresh,
    /// View lifecycle: mount, unmount.
    Dashboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresh_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Refresh, msg, event_type, log_level)
    }

    pub fn dashboard(msg: String) -> Self {
        Self::new(Source::Dashboard, msg, EventType::Refresh, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }

    /// Forward to the `log` facade (headless mode).
    pub fn log(&self) {
        let level: log::Level = self.log_level.into();
        log::log!(level, "[{}] {}", self.source, self.msg);
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
