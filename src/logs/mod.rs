
use ic_canister_log::{declare_log_buffer, export, GlobalBuffer, Sink};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// High-priority messages.
declare_log_buffer!(name = INFO_BUF, capacity = 1000);

// Low-priority info messages.
declare_log_buffer!(name = DEBUG_BUF, capacity = 1000);

pub const INFO: BufferSink = BufferSink(&Priority::Info, &INFO_BUF);
pub const DEBUG: BufferSink = BufferSink(&Priority::Debug, &DEBUG_BUF);

static ENTRY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Records a message in a buffer when the filter matches `"<PRIORITY> file:line message"`.
///
/// Nothing is written to stdout or stderr.
macro_rules! log {
    ($filter:expr, $sink:expr, $($arg:tt)*) => {{
        use ic_canister_log::Sink;
        let entry = $crate::logs::new_entry(std::format!($($arg)*), std::file!(), std::line!());
        if $filter.is_match(&$sink.format_line(&entry)) {
            $sink.append(entry);
        }
    }};
}
pub(crate) use log;

pub(crate) fn new_entry(
    message: String,
    file: &'static str,
    line: u32,
) -> ic_canister_log::LogEntry {
    ic_canister_log::LogEntry {
        timestamp: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default(),
        counter: ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
        message,
        file,
        line,
    }
}

/// Appends entries to the calling thread's buffer for one priority.
#[derive(Debug)]
pub struct BufferSink(&'static Priority, &'static GlobalBuffer);

impl BufferSink {
    pub fn format_line(&self, entry: &ic_canister_log::LogEntry) -> String {
        format!(
            "{} {}:{} {}",
            self.0.as_str_uppercase(),
            entry.file,
            entry.line,
            entry.message
        )
    }
}

impl Sink for BufferSink {
    fn append(&self, entry: ic_canister_log::LogEntry) {
        self.1.append(entry)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Priority {
    Info,
    Debug,
}

impl Priority {
    pub fn as_str_uppercase(self) -> &'static str {
        match self {
            Priority::Info => "INFO",
            Priority::Debug => "DEBUG",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Priority::Info),
            "debug" => Ok(Priority::Debug),
            _ => Err("could not recognize priority".to_string()),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: u64,
    pub priority: Priority,
    pub file: String,
    pub line: u32,
    pub message: String,
    pub counter: u64,
}

/// Entries buffered on the calling thread, oldest first. `None` returns every priority.
pub fn entries(priority: Option<Priority>) -> Vec<LogEntry> {
    let priorities = match priority {
        Some(priority) => vec![priority],
        None => vec![Priority::Info, Priority::Debug],
    };
    let mut entries: Vec<LogEntry> = priorities
        .into_iter()
        .flat_map(|priority| {
            let buffer = match priority {
                Priority::Info => &INFO_BUF,
                Priority::Debug => &DEBUG_BUF,
            };
            export(buffer).into_iter().map(move |entry| LogEntry {
                timestamp: entry.timestamp,
                counter: entry.counter,
                priority,
                file: entry.file.to_string(),
                line: entry.line,
                message: entry.message,
            })
        })
        .collect();
    entries.sort_by_key(|entry| entry.counter);
    entries
}
