use serde::{Deserialize, Serialize};
use std::fmt;

/// Display state of the image currently shown in an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
    /// The fallback timer cleared the spinner before any load notification.
    TimedOut,
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadingState::Idle | LoadingState::Loading)
    }

    pub fn transition_to_idle(self) -> Self {
        Self::Idle
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingState::Idle => write!(f, "Idle"),
            LoadingState::Loading => write!(f, "Loading"),
            LoadingState::Ready => write!(f, "Ready"),
            LoadingState::Failed => write!(f, "Failed"),
            LoadingState::TimedOut => write!(f, "Timed out"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingEvent {
    StartLoading,
    LoadComplete,
    LoadError,
    FallbackElapsed,
}

impl LoadingEvent {
    /// Load notifications always settle the state. The fallback only ends an
    /// in-flight load and never overrides a real outcome.
    pub fn apply_to_state(self, current_state: LoadingState) -> LoadingState {
        match (self, current_state) {
            (LoadingEvent::StartLoading, _) => LoadingState::Loading,
            (LoadingEvent::LoadComplete, LoadingState::Idle) => LoadingState::Idle,
            (LoadingEvent::LoadComplete, _) => LoadingState::Ready,
            (LoadingEvent::LoadError, LoadingState::Idle) => LoadingState::Idle,
            (LoadingEvent::LoadError, _) => LoadingState::Failed,
            (LoadingEvent::FallbackElapsed, LoadingState::Loading) => LoadingState::TimedOut,
            (LoadingEvent::FallbackElapsed, state) => state,
        }
    }
}
