use log::{debug, info, warn};

use crate::config;
use crate::contact::transport::SubmitError;
use crate::contact::validation::{validate, Field, FormFields, UnknownField, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Handed out when a submission starts; carries the fields that were sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    generation: u64,
    fields: FormFields,
}

impl SubmissionTicket {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }
}

/// Identifies the banner that a pending auto-dismiss timer may clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    generation: u64,
}

impl DismissTicket {
    pub fn delay_ms(&self) -> u32 {
        config::BANNER_DISMISS_MS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are stored on the form.
    Rejected,
    /// A submission is already in flight.
    Busy,
    Started(SubmissionTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub succeeded: bool,
    pub dismiss: DismissTicket,
}

/// Field values, validation errors and the submission lifecycle of one contact form.
///
/// Every transition bumps a generation counter; tickets from older generations are
/// ignored, so a late timer or transport result never overwrites newer state.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    errors: ValidationErrors,
    state: SubmissionState,
    generation: u64,
    detached: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn inputs_disabled(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Stores a new value and drops any error on that field only.
    /// Returns false if the edit was ignored because a submission is in flight.
    pub fn handle_field_change(&mut self, field: Field, value: String) -> bool {
        if self.inputs_disabled() {
            debug!("Ignoring edit to {} while submitting", field);
            return false;
        }
        self.fields.set(field, value);
        self.errors.clear(field);
        true
    }

    /// Same as `handle_field_change`, keyed by the input's `name` attribute.
    pub fn handle_named_change(&mut self, name: &str, value: String) -> Result<bool, UnknownField> {
        let field = name.parse::<Field>()?;
        Ok(self.handle_field_change(field, value))
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.inputs_disabled() {
            return SubmitOutcome::Busy;
        }

        self.generation += 1;
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            let invalid: Vec<&str> = self.errors.iter().map(|(field, _)| field.as_str()).collect();
            debug!("Form rejected, invalid fields: {}", invalid.join(", "));
            self.state = SubmissionState::Idle;
            return SubmitOutcome::Rejected;
        }

        self.state = SubmissionState::Submitting;
        SubmitOutcome::Started(SubmissionTicket {
            generation: self.generation,
            fields: self.fields.clone(),
        })
    }

    pub fn finish(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<(), SubmitError>,
    ) -> Option<Completion> {
        if self.detached {
            debug!("Dropping submission result after teardown");
            return None;
        }
        if ticket.generation != self.generation || self.state != SubmissionState::Submitting {
            debug!("Dropping stale submission result");
            return None;
        }

        self.generation += 1;
        let succeeded = match result {
            Ok(()) => {
                info!("Contact form submitted");
                self.fields = FormFields::default();
                self.state = SubmissionState::Success;
                true
            }
            Err(e) => {
                warn!("Form submission error: {}", e);
                self.state = SubmissionState::Error;
                false
            }
        };

        Some(Completion {
            succeeded,
            dismiss: DismissTicket {
                generation: self.generation,
            },
        })
    }

    /// Clears the success or error banner. Returns whether anything changed.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        let showing_banner = matches!(
            self.state,
            SubmissionState::Success | SubmissionState::Error
        );
        if ticket.generation != self.generation || !showing_banner {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }

    /// Called when the owning component unmounts. Later results are discarded.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::ErrorKind;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.handle_field_change(Field::Name, "Anna Svensson".into());
        form.handle_field_change(Field::Email, "anna@example.se".into());
        form.handle_field_change(Field::Phone, "070-123 45 67".into());
        form.handle_field_change(Field::Service, "plattsattning".into());
        form.handle_field_change(Field::Message, "Vi vill ha en ny uteplats.".into());
        form
    }

    fn start(form: &mut ContactForm) -> SubmissionTicket {
        match form.submit() {
            SubmitOutcome::Started(ticket) => ticket,
            other => panic!("expected submission to start, got {other:?}"),
        }
    }

    #[test]
    fn invalid_submit_stays_idle_with_errors() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.errors().len(), 5);
        assert!(!form.inputs_disabled());
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        form.submit();
        assert!(form.handle_field_change(Field::Email, "x".into()));
        assert!(!form.errors().contains(Field::Email));
        for field in [Field::Name, Field::Phone, Field::Service, Field::Message] {
            assert_eq!(form.errors().get(field), Some(ErrorKind::Required));
        }
        assert_eq!(form.fields().email, "x");
    }

    #[test]
    fn named_changes_route_to_their_field() {
        let mut form = ContactForm::new();
        form.submit();
        assert_eq!(form.handle_named_change("phone", "070-123 45 67".into()), Ok(true));
        assert_eq!(form.fields().phone, "070-123 45 67");
        assert!(!form.errors().contains(Field::Phone));

        let err = form.handle_named_change("zip", "12345".into()).unwrap_err();
        assert_eq!(err, UnknownField("zip".into()));
        assert_eq!(form.errors().len(), 4);
        assert!(form.fields().phone == "070-123 45 67" && form.fields().name.is_empty());
    }

    #[test]
    fn successful_submission_resets_fields_then_dismisses() {
        let mut form = filled();
        let ticket = start(&mut form);
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert!(form.inputs_disabled());
        assert_eq!(ticket.fields().service, "plattsattning");

        let completion = form.finish(ticket, Ok(())).expect("current ticket");
        assert!(completion.succeeded);
        assert_eq!(form.state(), SubmissionState::Success);
        assert!(form.fields().is_empty());
        assert!(!form.inputs_disabled());

        assert_eq!(completion.dismiss.delay_ms(), 5_000);
        assert!(form.dismiss(completion.dismiss));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.fields().is_empty());
    }

    #[test]
    fn transport_fault_keeps_fields() {
        let mut form = filled();
        let before = form.fields().clone();
        let ticket = start(&mut form);

        let completion = form
            .finish(ticket, Err(SubmitError::Transport("offline".into())))
            .expect("current ticket");
        assert!(!completion.succeeded);
        assert_eq!(form.state(), SubmissionState::Error);
        assert_eq!(form.fields(), &before);

        assert!(form.dismiss(completion.dismiss));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn edits_and_resubmits_are_refused_while_submitting() {
        let mut form = filled();
        let _ticket = start(&mut form);
        assert!(!form.handle_field_change(Field::Name, "Bo".into()));
        assert_eq!(form.fields().name, "Anna Svensson");
        assert_eq!(form.submit(), SubmitOutcome::Busy);
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn old_dismiss_timer_does_not_clobber_new_submission() {
        let mut form = ContactForm::new();
        form.handle_field_change(Field::Name, "Anna".into());
        form.handle_field_change(Field::Email, "anna@example.se".into());
        form.handle_field_change(Field::Phone, "0701234567".into());
        form.handle_field_change(Field::Service, "murar".into());
        form.handle_field_change(Field::Message, "Stödmur vid infarten".into());

        let first = start(&mut form);
        let error = form
            .finish(first, Err(SubmitError::Transport("timeout".into())))
            .expect("current ticket");

        // Fields were kept, so the user can press submit again before the banner clears.
        let second = start(&mut form);
        assert!(!form.dismiss(error.dismiss));
        assert_eq!(form.state(), SubmissionState::Submitting);

        let success = form.finish(second, Ok(())).expect("current ticket");
        assert!(!form.dismiss(error.dismiss));
        assert_eq!(form.state(), SubmissionState::Success);
        assert!(form.dismiss(success.dismiss));
    }

    #[test]
    fn rejected_submit_clears_banner_and_supersedes_timer() {
        let mut form = filled();
        let ticket = start(&mut form);
        let completion = form.finish(ticket, Ok(())).expect("current ticket");

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!form.dismiss(completion.dismiss));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut form = filled();
        let ticket = start(&mut form);
        let copy = ticket.clone();
        form.finish(ticket, Ok(()));
        assert_eq!(form.finish(copy, Err(SubmitError::Transport("late".into()))), None);
        assert_eq!(form.state(), SubmissionState::Success);
    }

    #[test]
    fn results_after_detach_are_discarded() {
        let mut form = filled();
        let ticket = start(&mut form);
        form.detach();
        assert_eq!(form.finish(ticket, Ok(())), None);
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert_eq!(form.fields().name, "Anna Svensson");
    }
}
