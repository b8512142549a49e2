#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rclockinout::core::Clock;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rci() -> Command {
    cargo_bin_cmd!("rclockinout")
}

/// Unique log path inside the system temp dir; any leftover file is removed.
pub fn setup_test_log(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_{}_clock_in_out_log.csv", name, std::process::id()));
    fs::remove_file(&path).ok();
    path
}

/// Fresh HOME for CLI tests so the user's config is never touched.
pub fn setup_test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_{}_home", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    d.and_time(time.parse().expect("valid time"))
}

/// Clock replaying a fixed list of instants, one per call.
pub struct ScriptedClock {
    instants: RefCell<VecDeque<NaiveDateTime>>,
}

impl ScriptedClock {
    pub fn new(instants: &[NaiveDateTime]) -> Self {
        Self {
            instants: RefCell::new(instants.iter().copied().collect()),
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> NaiveDateTime {
        self.instants
            .borrow_mut()
            .pop_front()
            .expect("scripted clock ran out of instants")
    }
}
