#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod journal_service;
pub mod progression_service;

pub use journey_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, JournalError, ProgressionError};
pub use journal_service::{JournalService, VisitGreeting};
pub use progression_service::{
    AdvanceOutcome, CompletionOutcome, PageEntry, ProgressionService, ResetConfirmation,
    ResetOutcome,
};
