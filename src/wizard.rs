//! Finite-state machine for multi-step flows (booking, onboarding).
//!
//! Steps are an ordered list; the machine is a tagged state reduced by
//! explicit events. Terminal states absorb everything.

use tracing::{debug, warn};

/// Maximum transitions kept for diagnostics.
const MAX_TRANSITION_LOG: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// Zero-based index into the step list.
    Step(usize),
    /// The flow was submitted on its final step.
    Completed,
    /// The flow was cancelled before completion.
    Dismissed,
}

impl WizardState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardState::Completed | WizardState::Dismissed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Back,
    Submit,
    Cancel,
}

/// One recorded transition, for the diagnostics log.
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: WizardState,
    pub event: WizardEvent,
    pub to: WizardState,
}

/// A multi-step flow with explicit forward/back/submit/cancel transitions.
pub struct Wizard {
    steps: Vec<String>,
    state: WizardState,
    log: Vec<Transition>,
}

impl Wizard {
    /// Build a wizard over named steps. At least one step is required;
    /// an empty list collapses to a single unnamed step so the machine
    /// stays well-formed.
    pub fn new(steps: Vec<String>) -> Self {
        let steps = if steps.is_empty() {
            warn!(target: "wizard", "wizard created with no steps, using a single step");
            vec!["step".to_string()]
        } else {
            steps
        };
        Self {
            steps,
            state: WizardState::Step(0),
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Name of the current step, `None` in a terminal state.
    pub fn current_step_name(&self) -> Option<&str> {
        match self.state {
            WizardState::Step(i) => self.steps.get(i).map(|s| s.as_str()),
            _ => None,
        }
    }

    /// 1-based progress, e.g. `(2, 4)` on the second of four steps.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.state {
            WizardState::Step(i) => Some((i + 1, self.steps.len())),
            _ => None,
        }
    }

    pub fn is_first_step(&self) -> bool {
        self.state == WizardState::Step(0)
    }

    pub fn is_last_step(&self) -> bool {
        self.state == WizardState::Step(self.steps.len() - 1)
    }

    /// Apply one event and return the resulting state.
    ///
    /// `Next` saturates at the last step (it never auto-submits), `Back`
    /// saturates at the first. `Submit` completes only from the last step.
    /// Terminal states ignore all events.
    pub fn apply(&mut self, event: WizardEvent) -> &WizardState {
        let from = self.state.clone();

        let to = match (&self.state, event) {
            (WizardState::Step(i), WizardEvent::Next) => {
                WizardState::Step((*i + 1).min(self.steps.len() - 1))
            }
            (WizardState::Step(i), WizardEvent::Back) => WizardState::Step(i.saturating_sub(1)),
            (WizardState::Step(i), WizardEvent::Submit) => {
                if *i == self.steps.len() - 1 {
                    WizardState::Completed
                } else {
                    warn!(
                        target: "wizard",
                        "submit on step {} of {}, ignoring",
                        i + 1,
                        self.steps.len()
                    );
                    WizardState::Step(*i)
                }
            }
            (WizardState::Step(_), WizardEvent::Cancel) => WizardState::Dismissed,
            // Completed and Dismissed absorb everything
            (terminal, _) => terminal.clone(),
        };

        if to != from {
            debug!(target: "wizard", "{:?} --{:?}--> {:?}", from, event, to);
        }

        self.log.push(Transition {
            from,
            event,
            to: to.clone(),
        });
        if self.log.len() > MAX_TRANSITION_LOG {
            self.log.remove(0);
        }

        self.state = to;
        &self.state
    }

    pub fn transition_log(&self) -> &[Transition] {
        &self.log
    }
}
