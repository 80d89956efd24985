//! Registration wizard state machine
//!
//! A three-step linear wizard: Location, Health, Caregiver. The step value
//! plus the pure `transition` function are the whole state machine; nothing
//! here touches a rendering environment. Forward movement is gated on the
//! current step's required fields, backward movement is unconditional.

use serde::{Deserialize, Serialize};

use crate::model::form::{FieldId, RegistrationDraft};
use crate::rules::step_rules;

/// Number of wizard steps
pub const TOTAL_STEPS: u8 = 3;

/// The wizard's current step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    /// Step 1: location and basic information
    Location,
    /// Step 2: health and education information
    Health,
    /// Step 3: caregiver information (terminal; submit happens here)
    Caregiver,
}

impl WizardStep {
    /// 1-based step number, as shown in the step indicator
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Location => 1,
            WizardStep::Health => 2,
            WizardStep::Caregiver => 3,
        }
    }

    /// The following step; saturates at the terminal step
    pub fn next(&self) -> WizardStep {
        match self {
            WizardStep::Location => WizardStep::Health,
            WizardStep::Health | WizardStep::Caregiver => WizardStep::Caregiver,
        }
    }

    /// The preceding step; floors at step 1
    pub fn previous(&self) -> WizardStep {
        match self {
            WizardStep::Location | WizardStep::Health => WizardStep::Location,
            WizardStep::Caregiver => WizardStep::Health,
        }
    }

    /// Whether this is the terminal step (submit replaces next here)
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Caregiver)
    }

    /// Progress bar fill percentage for this step
    pub fn progress_percent(&self) -> f32 {
        f32::from(self.number()) / f32::from(TOTAL_STEPS) * 100.0
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Location
    }
}

/// Navigation intents accepted by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Previous,
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The wizard is now at this step (possibly unchanged at a boundary)
    Moved(WizardStep),
    /// Forward movement was refused; the step is unchanged and the listed
    /// required fields are missing. Advisory only - nothing was mutated.
    Rejected {
        step: WizardStep,
        missing: Vec<FieldId>,
    },
}

/// Pure wizard transition function
///
/// `Next` is permitted only when every required-and-visible field of the
/// current step holds a non-empty trimmed value. `Previous` always succeeds
/// and floors at step 1. Validation failure never blocks backward
/// navigation and never mutates anything.
pub fn transition(step: WizardStep, event: WizardEvent, draft: &RegistrationDraft) -> Transition {
    match event {
        WizardEvent::Next => {
            let missing = step_rules::missing_fields(step, draft);
            if missing.is_empty() {
                Transition::Moved(step.next())
            } else {
                Transition::Rejected { step, missing }
            }
        }
        WizardEvent::Previous => Transition::Moved(step.previous()),
    }
}

/// Display state derived from the current step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepView {
    pub step: WizardStep,
    pub step_number: u8,
    pub total_steps: u8,
    pub progress_percent: f32,
    pub previous_visible: bool,
    pub next_visible: bool,
    pub submit_visible: bool,
}

/// Compute the step indicator / navigation-button state for a step
pub fn step_view(step: WizardStep) -> StepView {
    StepView {
        step,
        step_number: step.number(),
        total_steps: TOTAL_STEPS,
        progress_percent: step.progress_percent(),
        previous_visible: step.number() > 1,
        next_visible: !step.is_terminal(),
        submit_visible: step.is_terminal(),
    }
}
