//! Clock-in / clock-out form logic, independent of the window toolkit.

use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::models::{ClockState, Controls, SessionEntry};
use crate::store::SessionLogStore;
use crate::utils::time::{self, format_hms};
use chrono::NaiveDateTime;
use tracing::{error, info};

const NOT_YET: &str = "Not yet";
const NOT_AVAILABLE: &str = "N/A";

/// The three read-only status lines of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Displays {
    pub clock_in: String,
    pub clock_out: String,
    pub total: String,
}

impl Default for Displays {
    fn default() -> Self {
        Self {
            clock_in: format!("Clock In Time: {NOT_YET}"),
            clock_out: format!("Clock Out Time: {NOT_YET}"),
            total: format!("Total Time Worked: {NOT_AVAILABLE}"),
        }
    }
}

pub struct Controller<C: Clock> {
    store: SessionLogStore,
    clock: C,
    state: ClockState,
    task: String,
    clock_in_time: Option<NaiveDateTime>,
    displays: Displays,
}

impl<C: Clock> Controller<C> {
    pub fn new(store: SessionLogStore, clock: C) -> Self {
        Self {
            store,
            clock,
            state: ClockState::default(),
            task: String::new(),
            clock_in_time: None,
            displays: Displays::default(),
        }
    }

    /// Start a session.
    ///
    /// Only valid while ready to clock in; otherwise nothing changes.
    pub fn clock_in(&mut self) -> AppResult<NaiveDateTime> {
        if self.state != ClockState::ReadyToClockIn {
            return Err(self.rejected("clock in"));
        }

        let now = self.clock.now();
        self.clock_in_time = Some(now);
        self.displays.clock_in = format!("Clock In Time: {}", time::timestamp_str(&now));
        self.state = ClockState::ClockedIn;

        info!(at = %time::timestamp_str(&now), "clocked in");
        Ok(now)
    }

    /// Close the running session, record it and persist the whole log.
    ///
    /// The form returns to the ready state before the file is written: a
    /// failed save is reported to the caller but the entry stays in memory
    /// and goes out with the next successful save.
    pub fn clock_out(&mut self) -> AppResult<SessionEntry> {
        if self.state != ClockState::ClockedIn {
            return Err(self.rejected("clock out"));
        }

        let end = self.clock.now();
        let start = self.clock_in_time;
        let total = format_hms(start, Some(end));

        self.displays.clock_out = format!("Clock Out Time: {}", time::timestamp_str(&end));
        self.displays.total = format!("Total Time Worked: {total}");
        self.state = ClockState::ReadyToClockIn;

        // the start date wins for sessions crossing midnight
        let start = start.unwrap_or(end);
        let entry = SessionEntry::new(
            self.task.clone(),
            time::time_str(&start),
            time::time_str(&end),
            total,
            time::date_str(&start),
        );

        info!(task = %entry.task, total = %entry.total_time, "clocked out");

        self.store.append_entry(entry.clone());
        if let Err(e) = self.store.save() {
            error!(path = %self.store.path().display(), "failed to save session log: {e}");
            return Err(e);
        }

        Ok(entry)
    }

    fn rejected(&self, action: &'static str) -> AppError {
        AppError::InvalidTransition {
            action,
            state: self.state.as_str(),
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn controls(&self) -> Controls {
        self.state.controls()
    }

    pub fn displays(&self) -> &Displays {
        &self.displays
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn set_task(&mut self, task: impl Into<String>) {
        self.task = task.into();
    }

    /// Direct handle for text widgets that edit in place.
    pub fn task_mut(&mut self) -> &mut String {
        &mut self.task
    }

    pub fn clock_in_time(&self) -> Option<NaiveDateTime> {
        self.clock_in_time
    }

    pub fn store(&self) -> &SessionLogStore {
        &self.store
    }
}
