/// Two-state machine behind the clock-in / clock-out form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    ReadyToClockIn,
    ClockedIn,
}

/// Which of the two buttons may be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub clock_in_enabled: bool,
    pub clock_out_enabled: bool,
}

impl ClockState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockState::ReadyToClockIn => "ready to clock in",
            ClockState::ClockedIn => "clocked in",
        }
    }

    /// Map the state to button enablement; exactly one button is live.
    pub fn controls(&self) -> Controls {
        match self {
            ClockState::ReadyToClockIn => Controls {
                clock_in_enabled: true,
                clock_out_enabled: false,
            },
            ClockState::ClockedIn => Controls {
                clock_in_enabled: false,
                clock_out_enabled: true,
            },
        }
    }
}
