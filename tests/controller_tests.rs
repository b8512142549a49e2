mod common;
use common::{ScriptedClock, at, setup_test_log};
use rclockinout::core::Controller;
use rclockinout::errors::AppError;
use rclockinout::models::{ClockState, Controls, SessionEntry};
use rclockinout::store::SessionLogStore;
use std::fs;

#[test]
fn test_controls_follow_state() {
    assert_eq!(
        ClockState::ReadyToClockIn.controls(),
        Controls {
            clock_in_enabled: true,
            clock_out_enabled: false
        }
    );
    assert_eq!(
        ClockState::ClockedIn.controls(),
        Controls {
            clock_in_enabled: false,
            clock_out_enabled: true
        }
    );
}

#[test]
fn test_initial_form() {
    let path = setup_test_log("ctl_initial");
    let store = SessionLogStore::open(&path).expect("open");
    let ctl = Controller::new(store, ScriptedClock::new(&[]));

    assert_eq!(ctl.state(), ClockState::ReadyToClockIn);
    assert_eq!(ctl.task(), "");
    let d = ctl.displays();
    assert_eq!(d.clock_in, "Clock In Time: Not yet");
    assert_eq!(d.clock_out, "Clock Out Time: Not yet");
    assert_eq!(d.total, "Total Time Worked: N/A");
}

#[test]
fn test_write_report_session() {
    let path = setup_test_log("ctl_write_report");
    let store = SessionLogStore::open(&path).expect("open");
    let clock = ScriptedClock::new(&[
        at("2024-01-01", "09:00:00"),
        at("2024-01-01", "17:30:15"),
    ]);
    let mut ctl = Controller::new(store, clock);
    ctl.set_task("Write report");

    ctl.clock_in().expect("clock in");
    assert_eq!(ctl.state(), ClockState::ClockedIn);
    assert!(ctl.controls().clock_out_enabled);
    assert_eq!(ctl.displays().clock_in, "Clock In Time: 2024-01-01 09:00:00");

    let entry = ctl.clock_out().expect("clock out");
    assert_eq!(
        entry,
        SessionEntry::new("Write report", "09:00:00", "17:30:15", "08:30:15", "2024-01-01")
    );
    assert_eq!(ctl.state(), ClockState::ReadyToClockIn);
    assert_eq!(ctl.displays().clock_out, "Clock Out Time: 2024-01-01 17:30:15");
    assert_eq!(ctl.displays().total, "Total Time Worked: 08:30:15");

    // persisted immediately
    let on_disk = SessionLogStore::load(&path).expect("reload");
    assert_eq!(on_disk, vec![entry]);
}

#[test]
fn test_two_cycles_append_two_rows() {
    let path = setup_test_log("ctl_two_cycles");
    let store = SessionLogStore::open(&path).expect("open");
    let clock = ScriptedClock::new(&[
        at("2024-02-10", "08:00:00"),
        at("2024-02-10", "12:00:00"),
        at("2024-02-10", "13:00:00"),
        at("2024-02-10", "13:45:30"),
    ]);
    let mut ctl = Controller::new(store, clock);

    ctl.set_task("Morning");
    ctl.clock_in().expect("first in");
    ctl.clock_out().expect("first out");

    ctl.set_task("Afternoon");
    ctl.clock_in().expect("second in");
    ctl.clock_out().expect("second out");

    let content = fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "task,clock_in,clock_out,total_time,date",
            "Morning,08:00:00,12:00:00,04:00:00,2024-02-10",
            "Afternoon,13:00:00,13:45:30,00:45:30,2024-02-10",
        ]
    );
    assert_eq!(ctl.store().len(), 2);
}

#[test]
fn test_history_is_kept_across_restarts() {
    let path = setup_test_log("ctl_history");
    fs::write(
        &path,
        "task,clock_in,clock_out,total_time,date\nOld,07:00:00,07:30:00,00:30:00,2023-12-01\n",
    )
    .expect("seed log");

    let store = SessionLogStore::open(&path).expect("open");
    let clock = ScriptedClock::new(&[
        at("2024-01-01", "10:00:00"),
        at("2024-01-01", "10:00:42"),
    ]);
    let mut ctl = Controller::new(store, clock);
    ctl.clock_in().expect("in");
    ctl.clock_out().expect("out");

    let reloaded = SessionLogStore::load(&path).expect("reload");
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].task, "Old");
    assert_eq!(reloaded[1].task, "");
    assert_eq!(reloaded[1].total_time, "00:00:42");
}

#[test]
fn test_clock_skew_records_zero_duration() {
    let path = setup_test_log("ctl_skew");
    let store = SessionLogStore::open(&path).expect("open");
    let clock = ScriptedClock::new(&[
        at("2024-01-01", "10:00:00"),
        at("2024-01-01", "09:59:00"),
    ]);
    let mut ctl = Controller::new(store, clock);
    ctl.clock_in().expect("in");
    let entry = ctl.clock_out().expect("out");

    assert_eq!(entry.total_time, "00:00:00");
    assert_eq!(entry.clock_in, "10:00:00");
    assert_eq!(entry.clock_out, "09:59:00");
}

#[test]
fn test_session_across_midnight_uses_start_date() {
    let path = setup_test_log("ctl_midnight");
    let store = SessionLogStore::open(&path).expect("open");
    let clock = ScriptedClock::new(&[
        at("2024-03-31", "22:30:00"),
        at("2024-04-01", "01:15:00"),
    ]);
    let mut ctl = Controller::new(store, clock);
    ctl.clock_in().expect("in");
    let entry = ctl.clock_out().expect("out");

    assert_eq!(entry.date, "2024-03-31");
    assert_eq!(entry.total_time, "02:45:00");
}

#[test]
fn test_out_of_order_actions_are_rejected() {
    let path = setup_test_log("ctl_rejected");
    let store = SessionLogStore::open(&path).expect("open");
    let clock = ScriptedClock::new(&[at("2024-01-01", "09:00:00")]);
    let mut ctl = Controller::new(store, clock);

    let err = ctl.clock_out().expect_err("cannot clock out first");
    assert!(matches!(err, AppError::InvalidTransition { .. }));
    assert_eq!(ctl.state(), ClockState::ReadyToClockIn);

    ctl.clock_in().expect("in");
    let err = ctl.clock_in().expect_err("cannot clock in twice");
    assert!(matches!(err, AppError::InvalidTransition { .. }));
    assert_eq!(ctl.clock_in_time(), Some(at("2024-01-01", "09:00:00")));
    assert!(ctl.store().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_failed_save_still_returns_to_ready() {
    let mut path = setup_test_log("ctl_save_fail");
    path.set_file_name("missing_dir_rclockinout_ctl");
    path.push("log.csv");

    let store = SessionLogStore::open(&path).expect("open");
    let clock = ScriptedClock::new(&[
        at("2024-01-01", "09:00:00"),
        at("2024-01-01", "09:30:00"),
    ]);
    let mut ctl = Controller::new(store, clock);
    ctl.clock_in().expect("in");

    assert!(ctl.clock_out().is_err());
    assert_eq!(ctl.state(), ClockState::ReadyToClockIn);
    assert_eq!(ctl.displays().total, "Total Time Worked: 00:30:00");
    assert_eq!(ctl.store().len(), 1);
}
