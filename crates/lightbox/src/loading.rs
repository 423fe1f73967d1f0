use crate::LightboxEvent;
use shared::{LoadingEvent, LoadingState};
use std::time::Duration;
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};

/// Fallback timer task; aborted when dropped.
#[derive(Debug)]
struct FallbackTimer(JoinHandle<()>);

impl Drop for FallbackTimer {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Spinner state for the displayed image.
///
/// Every `start` opens a new generation. Load notifications and fallback
/// expiries carry the generation they were issued for, so anything addressed
/// to an image that is no longer displayed is ignored.
#[derive(Debug)]
pub struct LoadTracker {
    state: LoadingState,
    generation: u64,
    fallback: Duration,
    timer: Option<FallbackTimer>,
    events: UnboundedSender<LightboxEvent>,
}

impl LoadTracker {
    pub fn new(fallback: Duration, events: UnboundedSender<LightboxEvent>) -> Self {
        Self {
            state: LoadingState::Idle,
            generation: 0,
            fallback,
            timer: None,
            events,
        }
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadingEvent::StartLoading.apply_to_state(self.state);

        let generation = self.generation;
        let delay = self.fallback;
        let events = self.events.clone();
        // Replacing the previous timer aborts it.
        self.timer = Some(FallbackTimer(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(LightboxEvent::LoadFallback { generation });
        })));

        generation
    }

    /// Returns whether the notification applied to the current generation.
    pub fn notify(&mut self, generation: u64, event: LoadingEvent) -> bool {
        if generation != self.generation || self.state == LoadingState::Idle {
            tracing::trace!(generation, current = self.generation, "stale load notification");
            return false;
        }

        self.state = event.apply_to_state(self.state);
        if self.state.is_settled() {
            self.timer = None;
        }
        true
    }

    pub fn cancel(&mut self) {
        self.timer = None;
        self.state = self.state.transition_to_idle();
    }
}
