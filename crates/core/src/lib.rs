#![forbid(unsafe_code)]

pub mod error;
pub mod gate;
pub mod indicator;
pub mod interaction;
pub mod model;
pub mod time;

pub use error::GateError;
pub use gate::{AccessDecision, FallbackPolicy, ProgressionGate};
pub use indicator::{ProgressStep, StepMarker, progress_steps};
pub use interaction::{InteractionOutcome, PageInteraction, PageSession, Rejection, UnlockGuard};
pub use time::Clock;
