pub mod accessibility;
pub mod loading_state;

pub use accessibility::{AccessibilityInfo, AriaRole};
pub use loading_state::{LoadingEvent, LoadingState};
