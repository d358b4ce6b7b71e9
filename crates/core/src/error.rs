use thiserror::Error;

use crate::model::PageId;

/// Errors raised by the progression gate and the page state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GateError {
    #[error("{0} is the last page; there is nothing to unlock after it")]
    TerminalPage(PageId),

    #[error("{0} is not part of the page catalog")]
    UnknownPage(PageId),

    #[error("{0} has no final choice to make")]
    NotTerminal(PageId),
}
