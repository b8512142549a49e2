/// Columns written by the session log, in file order.
pub const HEADERS: [&str; 5] = ["task", "clock_in", "clock_out", "total_time", "date"];

/// One completed work session, as stored in the log file.
///
/// Every field is kept as the text found in (or written to) the file: the
/// log does not validate values, and rows coming from older files may have
/// any of them blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionEntry {
    pub task: String,       // ⇔ task       (free text, may be empty)
    pub clock_in: String,   // ⇔ clock_in   ("HH:MM:SS")
    pub clock_out: String,  // ⇔ clock_out  ("HH:MM:SS")
    pub total_time: String, // ⇔ total_time ("HH:MM:SS")
    pub date: String,       // ⇔ date       ("YYYY-MM-DD")

    /// Present only for rows read from the old `action,timestamp,date` layout.
    pub legacy: Option<LegacyAction>,
}

/// Punch recorded by the old single-event layout (`clock_in` / `clock_out`
/// plus a full timestamp). Never produced, only read back and listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyAction {
    pub action: String,
    pub timestamp: String,
}

impl SessionEntry {
    pub fn new(
        task: impl Into<String>,
        clock_in: impl Into<String>,
        clock_out: impl Into<String>,
        total_time: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            clock_in: clock_in.into(),
            clock_out: clock_out.into(),
            total_time: total_time.into(),
            date: date.into(),
            legacy: None,
        }
    }

    /// Build an entry from a raw row, matching columns by the file's own
    /// header names. Missing columns stay blank, unknown ones are ignored.
    pub fn from_record(headers: &csv::StringRecord, record: &csv::StringRecord) -> Self {
        let field = |name: &str| -> Option<String> {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
                .map(str::to_string)
        };

        let legacy = match (field("action"), field("timestamp")) {
            (Some(action), Some(timestamp)) => Some(LegacyAction { action, timestamp }),
            _ => None,
        };

        Self {
            task: field("task").unwrap_or_default(),
            clock_in: field("clock_in").unwrap_or_default(),
            clock_out: field("clock_out").unwrap_or_default(),
            total_time: field("total_time").unwrap_or_default(),
            date: field("date").unwrap_or_default(),
            legacy,
        }
    }

    /// Row written under [`HEADERS`].
    pub fn to_row(&self) -> [&str; 5] {
        [
            &self.task,
            &self.clock_in,
            &self.clock_out,
            &self.total_time,
            &self.date,
        ]
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy.is_some()
    }

    /// Single human-readable line used by the log listing.
    pub fn describe(&self) -> String {
        if let Some(legacy) = &self.legacy {
            return format!(
                "{} at {} on {}",
                capitalize(&legacy.action),
                legacy.timestamp,
                self.date
            );
        }

        let task = if self.task.is_empty() {
            "(no task)"
        } else {
            self.task.as_str()
        };

        format!(
            "{} | {} -> {} | {} | {}",
            self.date, self.clock_in, self.clock_out, self.total_time, task
        )
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
