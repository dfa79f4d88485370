//! State machine behind the analysis modal.
//!
//! Steps only ever move 1 → 2 → 3 → 4, with "back" from 2 to 1 and a reset
//! from anywhere. Each analysis run gets a [`Ticket`]; a completion carrying
//! any other ticket is dropped, so a run abandoned by closing the modal can
//! never land on a freshly reset wizard.

use std::rc::Rc;

use log::{debug, info, warn};
use thiserror::Error;
use yew::functional::Reducible;

use crate::analysis::{AnalysisError, AnalysisResult, Gender, UserInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Demographics,
    Medicine,
    Analyzing,
    Results,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Demographics, Step::Medicine, Step::Analyzing, Step::Results];

    pub fn number(self) -> u8 {
        match self {
            Step::Demographics => 1,
            Step::Medicine => 2,
            Step::Analyzing => 3,
            Step::Results => 4,
        }
    }

    /// Whether the step indicator dot for `self` is lit while on `current`.
    pub fn reached_by(self, current: Step) -> bool {
        self.number() <= current.number()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("age and gender are required before continuing")]
    IncompleteDemographics,
    #[error("a medicine name is required before analysis")]
    MissingMedicine,
    #[error("cannot {action} from step {}", .from.number())]
    InvalidTransition { from: Step, action: &'static str },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wizard {
    step: Step,
    info: UserInfo,
    result: Option<AnalysisResult>,
    error: Option<String>,
    pending: Option<Ticket>,
    issued: u32,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn info(&self) -> &UserInfo {
        &self.info
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Message from the last failed analysis, shown on the medicine step.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    pub fn set_age(&mut self, age: String) {
        self.info.age = age;
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.info.gender = gender;
    }

    pub fn set_medicine(&mut self, medicine: String) {
        self.info.medicine = medicine;
        self.error = None;
    }

    /// Drives the enabled state of the step's primary button.
    pub fn can_continue(&self) -> bool {
        match self.step {
            Step::Demographics => self.info.has_demographics(),
            Step::Medicine => self.info.has_medicine(),
            Step::Analyzing | Step::Results => false,
        }
    }

    pub fn continue_to_medicine(&mut self) -> Result<(), WizardError> {
        self.expect_step(Step::Demographics, "continue")?;
        if !self.info.has_demographics() {
            return Err(WizardError::IncompleteDemographics);
        }
        self.step = Step::Medicine;
        Ok(())
    }

    pub fn back(&mut self) -> Result<(), WizardError> {
        self.expect_step(Step::Medicine, "go back")?;
        self.step = Step::Demographics;
        Ok(())
    }

    /// Moves to the analyzing step and hands out the ticket the completion
    /// must present.
    pub fn begin_analysis(&mut self) -> Result<Ticket, WizardError> {
        self.expect_step(Step::Medicine, "analyze")?;
        if !self.info.has_medicine() {
            return Err(WizardError::MissingMedicine);
        }
        self.issued = self.issued.wrapping_add(1);
        let ticket = Ticket(self.issued);
        self.step = Step::Analyzing;
        self.error = None;
        self.pending = Some(ticket);
        Ok(ticket)
    }

    /// Applies an analysis outcome. Returns `false` when the ticket is stale
    /// and the outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> bool {
        if self.step != Step::Analyzing || self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.step = Step::Results;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.step = Step::Medicine;
            }
        }
        true
    }

    /// Back to an empty first step. The ticket counter survives so tickets
    /// from before the reset stay stale.
    pub fn reset(&mut self) {
        *self = Self {
            issued: self.issued,
            ..Self::default()
        };
    }

    fn expect_step(&self, expected: Step, action: &'static str) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition { from: self.step, action })
        }
    }
}

pub enum WizardAction {
    SetAge(String),
    SetGender(Option<Gender>),
    SetMedicine(String),
    Continue,
    Back,
    Analyze,
    Complete(Ticket, Result<AnalysisResult, AnalysisError>),
    Reset,
}

impl Reducible for Wizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let outcome = match action {
            WizardAction::SetAge(age) => {
                next.set_age(age);
                Ok(())
            }
            WizardAction::SetGender(gender) => {
                next.set_gender(gender);
                Ok(())
            }
            WizardAction::SetMedicine(medicine) => {
                next.set_medicine(medicine);
                Ok(())
            }
            WizardAction::Continue => next.continue_to_medicine(),
            WizardAction::Back => next.back(),
            WizardAction::Analyze => next.begin_analysis().map(|ticket| {
                info!("Starting analysis {:?} for {:?}", ticket, next.info.medicine);
            }),
            WizardAction::Complete(ticket, outcome) => {
                if next.complete(ticket, outcome) {
                    info!("Analysis {:?} finished on step {}", ticket, next.step.number());
                } else {
                    debug!("Dropping stale analysis {:?}", ticket);
                }
                Ok(())
            }
            WizardAction::Reset => {
                if let Some(ticket) = next.pending {
                    info!("Cancelling analysis {:?}", ticket);
                }
                next.reset();
                Ok(())
            }
        };

        if let Err(err) = outcome {
            warn!("Wizard transition rejected: {}", err);
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Analyzer, MockAnalyzer, RiskLevel};

    fn filled_demographics() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.set_age("70".into());
        wizard.set_gender(Some(Gender::Male));
        wizard
    }

    fn at_medicine() -> Wizard {
        let mut wizard = filled_demographics();
        wizard.continue_to_medicine().unwrap();
        wizard.set_medicine("Tylenol".into());
        wizard
    }

    fn mock_outcome(wizard: &Wizard) -> Result<AnalysisResult, AnalysisError> {
        MockAnalyzer.analyze(wizard.info())
    }

    #[test]
    fn test_starts_on_empty_first_step() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::Demographics);
        assert_eq!(wizard.info(), &UserInfo::default());
        assert!(wizard.result().is_none());
        assert!(!wizard.can_continue());
    }

    #[test]
    fn test_first_step_needs_age_and_gender() {
        let mut wizard = Wizard::new();
        wizard.set_age("30".into());
        assert!(!wizard.can_continue());
        assert_eq!(wizard.continue_to_medicine(), Err(WizardError::IncompleteDemographics));

        wizard.set_age(String::new());
        wizard.set_gender(Some(Gender::Female));
        assert!(!wizard.can_continue());

        wizard.set_age("30".into());
        assert!(wizard.can_continue());
        assert!(wizard.continue_to_medicine().is_ok());
        assert_eq!(wizard.step(), Step::Medicine);
    }

    #[test]
    fn test_age_is_not_range_checked() {
        let mut wizard = Wizard::new();
        wizard.set_age("-4".into());
        wizard.set_gender(Some(Gender::Other));
        assert!(wizard.continue_to_medicine().is_ok());
    }

    #[test]
    fn test_second_step_needs_medicine() {
        let mut wizard = filled_demographics();
        wizard.continue_to_medicine().unwrap();
        assert!(!wizard.can_continue());
        assert_eq!(wizard.begin_analysis(), Err(WizardError::MissingMedicine));
        assert_eq!(wizard.step(), Step::Medicine);

        wizard.set_medicine("Ibuprofen".into());
        assert!(wizard.can_continue());
    }

    #[test]
    fn test_back_keeps_fields() {
        let mut wizard = at_medicine();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), Step::Demographics);
        assert_eq!(wizard.info().medicine, "Tylenol");
        assert_eq!(wizard.info().age, "70");
    }

    #[test]
    fn test_cannot_skip_analyzing() {
        let mut wizard = filled_demographics();
        assert!(matches!(
            wizard.begin_analysis(),
            Err(WizardError::InvalidTransition { from: Step::Demographics, .. })
        ));

        let mut wizard = at_medicine();
        let result = mock_outcome(&wizard);
        let bogus = Ticket(99);
        assert!(!wizard.complete(bogus, result));
        assert_eq!(wizard.step(), Step::Medicine);
    }

    #[test]
    fn test_full_run_then_reset() {
        let mut wizard = at_medicine();
        let ticket = wizard.begin_analysis().unwrap();
        assert_eq!(wizard.step(), Step::Analyzing);
        assert!(!wizard.can_continue());
        assert_eq!(wizard.pending(), Some(ticket));

        let outcome = mock_outcome(&wizard);
        assert!(wizard.complete(ticket, outcome));
        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.pending(), None);
        let result = wizard.result().unwrap();
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.composition.len(), 4);
        assert_eq!(result.interactions.len(), 3);

        wizard.reset();
        assert_eq!(wizard.step(), Step::Demographics);
        assert_eq!(wizard.info(), &UserInfo::default());
        assert!(wizard.result().is_none());
    }

    #[test]
    fn test_completion_after_close_is_ignored() {
        let mut wizard = at_medicine();
        let stale = wizard.begin_analysis().unwrap();
        let outcome = mock_outcome(&wizard);
        wizard.reset();

        assert!(!wizard.complete(stale, outcome.clone()));
        assert_eq!(wizard.step(), Step::Demographics);
        assert!(wizard.result().is_none());

        // A new run must not accept the old ticket either.
        let mut wizard = {
            let mut w = wizard;
            w.set_age("30".into());
            w.set_gender(Some(Gender::Female));
            w.continue_to_medicine().unwrap();
            w.set_medicine("Ibuprofen".into());
            w
        };
        let fresh = wizard.begin_analysis().unwrap();
        assert_ne!(fresh, stale);
        assert!(!wizard.complete(stale, outcome));
        assert_eq!(wizard.step(), Step::Analyzing);
    }

    #[test]
    fn test_failed_analysis_returns_to_medicine() {
        let mut wizard = at_medicine();
        let ticket = wizard.begin_analysis().unwrap();
        assert!(wizard.complete(ticket, Err(AnalysisError::Service("timeout".into()))));
        assert_eq!(wizard.step(), Step::Medicine);
        assert_eq!(wizard.error(), Some("analysis service failed: timeout"));
        assert!(wizard.result().is_none());

        wizard.set_medicine("Tylenol PM".into());
        assert!(wizard.error().is_none());
    }

    #[test]
    fn test_missing_field_returns_to_medicine() {
        let mut wizard = at_medicine();
        let ticket = wizard.begin_analysis().unwrap();
        let mut info = wizard.info().clone();
        info.medicine.clear();

        assert!(wizard.complete(ticket, MockAnalyzer.analyze(&info)));
        assert_eq!(wizard.step(), Step::Medicine);
        assert_eq!(wizard.error(), Some("missing medicine"));
        assert!(wizard.result().is_none());
        assert_eq!(wizard.pending(), None);
    }

    #[test]
    fn test_step_indicator() {
        let lit: Vec<u8> = Step::ALL
            .iter()
            .filter(|s| s.reached_by(Step::Analyzing))
            .map(|s| s.number())
            .collect();
        assert_eq!(lit, vec![1, 2, 3]);
    }

    #[test]
    fn test_reducer_rejects_without_changing_state() {
        let wizard = Rc::new(Wizard::new());
        let next = wizard.clone().reduce(WizardAction::Continue);
        assert!(Rc::ptr_eq(&wizard, &next));

        let next = next.reduce(WizardAction::SetAge("70".into()));
        let next = next.reduce(WizardAction::SetGender(Some(Gender::Male)));
        let next = next.reduce(WizardAction::Continue);
        let next = next.reduce(WizardAction::SetMedicine("Tylenol".into()));
        let next = next.reduce(WizardAction::Analyze);
        assert_eq!(next.step(), Step::Analyzing);

        let ticket = next.pending().unwrap();
        let outcome = MockAnalyzer.analyze(next.info());
        let next = next.reduce(WizardAction::Complete(ticket, outcome));
        assert_eq!(next.step(), Step::Results);

        let next = next.reduce(WizardAction::Reset);
        assert_eq!(*next, Wizard { issued: 1, ..Wizard::new() });
    }

    #[test]
    fn test_error_messages() {
        let err = WizardError::InvalidTransition { from: Step::Results, action: "go back" };
        assert_eq!(err.to_string(), "cannot go back from step 4");
    }
}
