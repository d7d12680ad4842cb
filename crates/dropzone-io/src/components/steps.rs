//! Step indicator across the top of the uploader.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdCheck;
use dropzone_core::Phase;

/// Labels of the steps, in order. The uploader is the second step.
pub const STEPS: [&str; 3] = ["Basic info", "Upload resume", "Done"];

/// Display state of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Finished.
    Completed,
    /// In progress.
    Active,
    /// Not reached yet.
    Pending,
}

impl StepState {
    const fn class(self) -> &'static str {
        match self {
            Self::Completed => "step completed",
            Self::Active => "step active",
            Self::Pending => "step",
        }
    }
}

/// State of each entry in [`STEPS`] for `phase`.
///
/// Completing the upload marks every step completed.
#[must_use]
pub const fn step_states(phase: Phase) -> [StepState; 3] {
    match phase {
        Phase::Completed => [StepState::Completed; 3],
        Phase::Empty | Phase::FileSelected | Phase::Processing => {
            [StepState::Completed, StepState::Active, StepState::Pending]
        }
    }
}

/// Props for the [`StepIndicator`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StepIndicatorProps {
    /// Current session phase.
    phase: Phase,
}

/// Numbered steps joined by lines; completed steps show a check mark.
#[component]
pub fn StepIndicator(props: StepIndicatorProps) -> Element {
    let states = step_states(props.phase);

    rsx! {
        ol { class: "steps",
            for (index, (label, state)) in STEPS.iter().zip(states).enumerate() {
                if index > 0 {
                    li {
                        class: if state == StepState::Pending { "step-line" } else { "step-line completed" },
                        aria_hidden: "true",
                    }
                }
                li { class: state.class(),
                    span { class: "step-marker",
                        if state == StepState::Completed {
                            Icon { icon: LdCheck, width: 14, height: 14 }
                        } else {
                            "{index + 1}"
                        }
                    }
                    span { class: "step-label", "{label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_step_is_active_until_completion() {
        for phase in [Phase::Empty, Phase::FileSelected, Phase::Processing] {
            assert_eq!(step_states(phase)[1], StepState::Active, "{phase}");
        }
    }

    #[test]
    fn completion_marks_every_step() {
        assert!(
            step_states(Phase::Completed)
                .iter()
                .all(|s| *s == StepState::Completed)
        );
    }
}
