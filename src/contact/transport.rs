use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;

use crate::config;
use crate::contact::machine::{Completion, ContactForm, SubmissionTicket};
use crate::contact::validation::FormFields;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("failed to encode form: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Delivers a validated form somewhere. The state machine only sees the outcome.
pub trait SubmissionTransport {
    fn submit(&self, fields: FormFields) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Stand-in for a backend: waits a fixed latency, logs the payload and succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency_ms: u32,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            latency_ms: config::SUBMIT_LATENCY_MS,
        }
    }
}

impl SubmissionTransport for SimulatedTransport {
    fn submit(&self, fields: FormFields) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let latency_ms = self.latency_ms;
        async move {
            TimeoutFuture::new(latency_ms).await;
            let payload = serde_json::to_string(&fields)?;
            info!("Form submitted: {}", payload);
            Ok(())
        }
        .boxed_local()
    }
}

/// Shared transport that can be passed as a component prop.
#[derive(Clone)]
pub struct TransportHandle(Rc<dyn SubmissionTransport>);

impl TransportHandle {
    pub fn new(transport: impl SubmissionTransport + 'static) -> Self {
        Self(Rc::new(transport))
    }
}

impl Default for TransportHandle {
    fn default() -> Self {
        Self::new(SimulatedTransport::default())
    }
}

impl PartialEq for TransportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SubmissionTransport for TransportHandle {
    fn submit(&self, fields: FormFields) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.0.submit(fields)
    }
}

/// Runs one submission to completion and applies its outcome to the form.
/// The form is not borrowed while the transport is pending.
pub async fn deliver<T>(
    form: &RefCell<ContactForm>,
    transport: &T,
    ticket: SubmissionTicket,
) -> Option<Completion>
where
    T: SubmissionTransport + ?Sized,
{
    let result = transport.submit(ticket.fields().clone()).await;
    form.borrow_mut().finish(ticket, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::machine::{SubmissionState, SubmitOutcome};
    use crate::contact::validation::Field;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeTransport {
        fail: bool,
        seen: Rc<RefCell<Vec<FormFields>>>,
        form: Option<Rc<RefCell<ContactForm>>>,
        state_during_send: Rc<Cell<Option<SubmissionState>>>,
    }

    impl FakeTransport {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                seen: Rc::default(),
                form: None,
                state_during_send: Rc::default(),
            }
        }
    }

    impl SubmissionTransport for FakeTransport {
        fn submit(&self, fields: FormFields) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            self.seen.borrow_mut().push(fields);
            if let Some(form) = &self.form {
                self.state_during_send.set(Some(form.borrow().state()));
            }
            let fail = self.fail;
            async move {
                if fail {
                    Err(SubmitError::Transport("connection reset".into()))
                } else {
                    Ok(())
                }
            }
            .boxed_local()
        }
    }

    fn started_form() -> (Rc<RefCell<ContactForm>>, SubmissionTicket) {
        let form = Rc::new(RefCell::new(ContactForm::new()));
        {
            let mut f = form.borrow_mut();
            f.handle_field_change(Field::Name, "Erik".into());
            f.handle_field_change(Field::Email, "erik@example.se".into());
            f.handle_field_change(Field::Phone, "+46 70 123 45 67".into());
            f.handle_field_change(Field::Service, "dranering".into());
            f.handle_field_change(Field::Message, "Vattnet blir stående i gräsmattan.".into());
        }
        let ticket = match form.borrow_mut().submit() {
            SubmitOutcome::Started(ticket) => ticket,
            other => panic!("unexpected outcome {other:?}"),
        };
        (form, ticket)
    }

    #[test]
    fn deliver_sends_snapshot_and_applies_success() {
        let (form, ticket) = started_form();
        let mut transport = FakeTransport::new(false);
        transport.form = Some(form.clone());

        let completion = block_on(deliver(&form, &transport, ticket)).expect("completion");

        assert!(completion.succeeded);
        assert_eq!(
            transport.state_during_send.get(),
            Some(SubmissionState::Submitting)
        );
        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].service, "dranering");
        assert_eq!(form.borrow().state(), SubmissionState::Success);
        assert!(form.borrow().fields().is_empty());
    }

    #[test]
    fn deliver_maps_fault_to_error_state() {
        let (form, ticket) = started_form();
        let transport = FakeTransport::new(true);

        let completion = block_on(deliver(&form, &transport, ticket)).expect("completion");

        assert!(!completion.succeeded);
        assert_eq!(form.borrow().state(), SubmissionState::Error);
        assert_eq!(form.borrow().fields().name, "Erik");
    }

    #[test]
    fn deliver_after_teardown_discards_result() {
        let (form, ticket) = started_form();
        form.borrow_mut().detach();
        let transport = FakeTransport::new(false);

        assert_eq!(block_on(deliver(&form, &transport, ticket)), None);
        assert_eq!(transport.seen.borrow().len(), 1);
        assert_eq!(form.borrow().fields().name, "Erik");
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = TransportHandle::default();
        let b = a.clone();
        assert!(a == b);
        assert!(a != TransportHandle::default());
    }

    #[test]
    fn submit_error_messages() {
        let e = SubmitError::Transport("offline".into());
        assert_eq!(e.to_string(), "transport failed: offline");
    }
}
