use super::enums::TimerState;
use std::time::{Duration, Instant};

/// Length of one focus session in seconds (25 minutes)
pub const SESSION_SECS: u32 = 25 * 60;

/// Outcome of advancing the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    Ticked,
    /// The countdown reached zero on this advance; emitted exactly once per run
    Completed,
}

/// The focus countdown.
///
/// State is an explicit enum: `Idle` holds `SESSION_SECS` between runs,
/// `Running` counts wall-clock seconds down from wherever it stands.
/// `remaining_secs` stays within `[0, SESSION_SECS]`.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    remaining_secs: u32,
    state: TimerState,
    last_update: Instant,
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            remaining_secs: SESSION_SECS,
            state: TimerState::Idle,
            last_update: Instant::now(),
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Begin counting down. No-op if already running.
    pub fn start(&mut self) {
        if self.state == TimerState::Running {
            return;
        }
        self.state = TimerState::Running;
        self.last_update = Instant::now();
    }

    /// Stop any active countdown immediately and return to a full session,
    /// regardless of current state.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.remaining_secs = SESSION_SECS;
    }

    /// Convert wall-clock time since the last update into whole seconds and
    /// advance the countdown. Called from the event loop on every poll.
    pub fn tick(&mut self) -> TimerSignal {
        if self.state != TimerState::Running {
            return TimerSignal::Ticked;
        }

        let elapsed = self.last_update.elapsed().as_secs();
        if elapsed == 0 {
            return TimerSignal::Ticked;
        }

        // Keep the sub-second remainder for the next poll
        self.last_update += Duration::from_secs(elapsed);
        self.advance(elapsed.min(u64::from(u32::MAX)) as u32)
    }

    /// Count down `secs` seconds. On reaching zero the timer stops, resets
    /// to a full session, and reports `Completed`.
    pub fn advance(&mut self, secs: u32) -> TimerSignal {
        if self.state != TimerState::Running {
            return TimerSignal::Ticked;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(secs);
        if self.remaining_secs == 0 {
            self.state = TimerState::Idle;
            self.remaining_secs = SESSION_SECS;
            return TimerSignal::Completed;
        }

        TimerSignal::Ticked
    }

    /// Current countdown formatted for display ("MM:SS")
    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format seconds as "MM:SS", both parts zero-padded to two digits
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
