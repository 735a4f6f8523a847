//! Run/pause state for the host frame loop.
//!
//! The pipeline stages are pure functions of (grid, config, time) and
//! never observe playback state; the host loop owns this machine and
//! simply stops invoking the per-frame render while paused.

/// Whether the frame loop is advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Running,
    Paused,
}

/// Frame counter gated by a run/pause toggle.
#[derive(Debug, Clone)]
pub struct Playback {
    state: PlaybackState,
    frame: u64,
}

impl Playback {
    /// Start in the running state at frame 0.
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Running,
            frame: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Flip between running and paused.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            PlaybackState::Running => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Running,
        };
    }

    /// Current frame number, not advanced past by `advance` while paused.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Claim the next frame number, or `None` while paused.
    pub fn advance(&mut self) -> Option<u64> {
        match self.state {
            PlaybackState::Running => {
                let frame = self.frame;
                self.frame += 1;
                Some(frame)
            }
            PlaybackState::Paused => None,
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}
