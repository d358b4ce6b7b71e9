use journey_core::{ProgressStep, StepMarker};
use journey_core::model::PageId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStepVm {
    pub page: PageId,
    pub title: &'static str,
    pub marker: String,
    pub class: String,
}

impl From<&ProgressStep> for ProgressStepVm {
    fn from(step: &ProgressStep) -> Self {
        let marker = match step.marker() {
            StepMarker::Number(position) => position.to_string(),
            StepMarker::Lock => "\u{1f512}".to_string(),
        };
        let mut class = String::from("progress-step");
        if step.completed {
            class.push_str(" completed");
        }
        if step.active {
            class.push_str(" active");
        }
        if step.locked {
            class.push_str(" locked");
        }
        Self {
            page: step.page,
            title: step.title,
            marker,
            class,
        }
    }
}

#[must_use]
pub fn map_progress_steps(steps: &[ProgressStep]) -> Vec<ProgressStepVm> {
    steps.iter().map(ProgressStepVm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_core::ProgressionGate;
    use journey_core::model::ProgressionState;
    use journey_core::progress_steps;
    use journey_core::time::fixed_now;

    #[test]
    fn fresh_state_on_index() {
        let gate = ProgressionGate::canonical();
        let state = ProgressionState::fresh(PageId::Index, fixed_now());
        let steps = map_progress_steps(&progress_steps(&gate, &state, PageId::Index));

        assert_eq!(steps[0].class, "progress-step completed active");
        assert_eq!(steps[0].marker, "1");
        assert_eq!(steps[1].class, "progress-step");
        assert_eq!(steps[1].marker, "2");
        assert_eq!(steps[2].class, "progress-step locked");
        assert_eq!(steps[2].marker, "\u{1f512}");
        assert_eq!(steps[4].title, "Connect");
    }

    #[test]
    fn completed_pages_keep_their_number() {
        let gate = ProgressionGate::canonical();
        let mut state = ProgressionState::fresh(PageId::Index, fixed_now());
        state.push_completed(PageId::Index);
        state.push_completed(PageId::Journey);
        let steps = map_progress_steps(&progress_steps(&gate, &state, PageId::Memories));

        assert_eq!(steps[0].class, "progress-step completed");
        assert_eq!(steps[1].marker, "2");
        assert_eq!(steps[2].class, "progress-step active");
        assert_eq!(steps[3].class, "progress-step locked");
    }
}
