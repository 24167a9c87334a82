//! Click-count classification for ambiguous media keys.
//!
//! Headset buttons can only repeat the same key code, so double and triple
//! clicks have to be inferred from timing. The first press opens a gesture
//! window with a fixed deadline; further presses only bump the counter. When
//! the deadline passes the count resolves to a [`Gesture`].

use std::time::{Duration, Instant};

use crate::commands::PlayerCommand;

/// Default length of the gesture window
pub const DEFAULT_CLICK_TIMEOUT: Duration = Duration::from_millis(1000);

/// A resolved click gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SingleClick,
    DoubleClick,
    /// Three or more clicks
    TripleClick,
}

impl Gesture {
    /// Counts above three clamp to [`Gesture::TripleClick`]
    pub fn from_count(clicks: u32) -> Option<Gesture> {
        match clicks {
            0 => None,
            1 => Some(Gesture::SingleClick),
            2 => Some(Gesture::DoubleClick),
            _ => Some(Gesture::TripleClick),
        }
    }

    /// Commands issued when the window closes.
    ///
    /// A single click has none: its action already ran on the first press.
    pub fn follow_up(self) -> &'static [PlayerCommand] {
        match self {
            Gesture::SingleClick => &[],
            Gesture::DoubleClick => &[PlayerCommand::JumpBackward, PlayerCommand::Play],
            Gesture::TripleClick => &[PlayerCommand::JumpForward, PlayerCommand::Play],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowState {
    Closed,
    Open { clicks: u32, deadline: Instant },
}

/// What a press did to the gesture window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// First press: the caller runs the immediate action.
    ///
    /// `expired` is a window whose deadline had already passed, resolved
    /// before this one opened; its follow-up is still owed.
    Opened {
        deadline: Instant,
        expired: Option<Gesture>,
    },
    /// Repeat press inside an open window
    Counted { clicks: u32 },
}

/// One counter, one window, shared by every ambiguous key
#[derive(Debug, Clone)]
pub struct ClickClassifier {
    timeout: Duration,
    state: WindowState,
}

impl Default for ClickClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_TIMEOUT)
    }
}

impl ClickClassifier {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            state: WindowState::Closed,
        }
    }

    /// Register a press at `now`.
    ///
    /// Opening sets the deadline to `now + timeout`; repeats never move it.
    /// A press at or past the deadline closes the old window and opens a new one.
    pub fn press(&mut self, now: Instant) -> PressOutcome {
        let expired = self.poll(now);
        match &mut self.state {
            WindowState::Closed => {
                let deadline = now + self.timeout;
                self.state = WindowState::Open { clicks: 1, deadline };
                PressOutcome::Opened { deadline, expired }
            }
            WindowState::Open { clicks, .. } => {
                *clicks = clicks.saturating_add(1);
                PressOutcome::Counted { clicks: *clicks }
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, WindowState::Open { .. })
    }

    pub fn clicks(&self) -> u32 {
        match self.state {
            WindowState::Closed => 0,
            WindowState::Open { clicks, .. } => clicks,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            WindowState::Closed => None,
            WindowState::Open { deadline, .. } => Some(deadline),
        }
    }

    /// Resolve the window if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<Gesture> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.expire(),
            _ => None,
        }
    }

    /// Close the window and resolve the final count
    pub fn expire(&mut self) -> Option<Gesture> {
        let clicks = self.clicks();
        self.state = WindowState::Closed;
        Gesture::from_count(clicks)
    }
}
