use crate::gate::ProgressionGate;
use crate::model::{PageId, ProgressionState};

/// What a step shows in its bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepMarker {
    Number(usize),
    Lock,
}

/// One entry of the progress indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStep {
    pub page: PageId,
    pub title: &'static str,
    /// 1-based position in the catalog.
    pub position: usize,
    pub completed: bool,
    pub active: bool,
    pub locked: bool,
}

impl ProgressStep {
    #[must_use]
    pub fn marker(&self) -> StepMarker {
        if self.locked {
            StepMarker::Lock
        } else {
            StepMarker::Number(self.position)
        }
    }
}

/// Build the indicator for `rendered`. Read-only over `state`.
#[must_use]
pub fn progress_steps(
    gate: &ProgressionGate,
    state: &ProgressionState,
    rendered: PageId,
) -> Vec<ProgressStep> {
    gate.catalog()
        .pages()
        .iter()
        .enumerate()
        .map(|(idx, def)| {
            let completed = state.has_completed(def.id);
            let active = def.id == rendered;
            let locked = !completed && !active && !gate.is_accessible(state, def.id);
            ProgressStep {
                page: def.id,
                title: def.title,
                position: idx + 1,
                completed,
                active,
                locked,
            }
        })
        .collect()
}
