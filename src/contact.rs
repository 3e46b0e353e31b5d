#[cfg(feature = "hydrate")]
mod http_transport;

#[cfg(feature = "hydrate")]
pub use http_transport::HttpTransport;

use std::future::Future;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};
use std::time::Duration;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a success or failure toast stays up before the form returns to idle.
pub const RESET_AFTER: Duration = Duration::from_millis(4000);

pub const DEFAULT_FAILURE: &str = "Failed to send message. Please try again.";

pub const DEV_API_URL: &str = "http://localhost:3000";

/// Base URL of the contact API, resolved once per process.
pub static API_BASE_URL: LazyLock<String> = LazyLock::new(|| {
    resolve_base_url(option_env!("PORTFOLIO_API_URL"), cfg!(debug_assertions))
});

/// An explicit override wins, otherwise debug builds talk to the local
/// server and release builds use a same-origin relative path.
pub fn resolve_base_url(override_url: Option<&str>, is_dev: bool) -> String {
    match override_url.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ if is_dev => DEV_API_URL.to_string(),
        _ => String::new(),
    }
}

pub fn contact_endpoint(base_url: &str) -> String {
    format!("{}/contact", base_url.trim_end_matches('/'))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|s| !s.is_empty())
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failure(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Success and failure are the two states a reset timer applies to.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Failure(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Failed to send message")]
    Rejected(StatusCode),
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Encode(String),
}

impl ContactError {
    /// Text shown in the failure toast, server detail is never surfaced.
    pub fn user_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            DEFAULT_FAILURE.to_string()
        } else {
            msg
        }
    }
}

/// Identifies one submission so late responses and stale timers can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub message: ContactMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    Edit(Field, String),
    Submit,
    Settled {
        ticket: Ticket,
        outcome: Result<StatusCode, ContactError>,
    },
    Expired(Ticket),
}

/// Work the owner of a [`ContactForm`] has to carry out after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Send(Submission),
    ScheduleReset(Ticket),
}

pub trait ContactTransport {
    fn send(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<StatusCode, ContactError>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    message: ContactMessage,
    status: SubmissionStatus,
    last_ticket: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    fn current_ticket(&self) -> Ticket {
        Ticket(self.last_ticket)
    }

    pub fn dispatch(&mut self, event: ContactEvent) -> Option<Effect> {
        match event {
            ContactEvent::Edit(field, value) => {
                *self.message.field_mut(field) = value;
                None
            }
            ContactEvent::Submit => {
                if self.status.is_pending() || !self.message.is_complete() {
                    return None;
                }
                self.last_ticket += 1;
                self.status = SubmissionStatus::Pending;
                Some(Effect::Send(Submission {
                    ticket: self.current_ticket(),
                    message: self.message.clone(),
                }))
            }
            ContactEvent::Settled { ticket, outcome } => {
                if ticket != self.current_ticket() || !self.status.is_pending() {
                    return None;
                }
                self.status = match outcome {
                    Ok(status) if status.is_success() => {
                        self.message = ContactMessage::default();
                        SubmissionStatus::Success
                    }
                    Ok(status) => {
                        SubmissionStatus::Failure(ContactError::Rejected(status).user_message())
                    }
                    Err(err) => SubmissionStatus::Failure(err.user_message()),
                };
                Some(Effect::ScheduleReset(ticket))
            }
            ContactEvent::Expired(ticket) => {
                if ticket == self.current_ticket() && self.status.is_settled() {
                    self.status = SubmissionStatus::Idle;
                }
                None
            }
        }
    }
}

/// Shared access to a [`ContactForm`] that timers and tasks can hold on to.
pub trait FormHandle: Clone + Send + 'static {
    fn dispatch(&self, event: ContactEvent) -> Option<Effect>;
    fn status(&self) -> SubmissionStatus;
}

/// Runs a callback once after a delay. Handles cancel the pending callback.
pub trait ResetTimer {
    type Handle;

    /// `None` when no timer could be started.
    fn start<F>(&self, after: Duration, on_expire: F) -> Option<Self::Handle>
    where
        F: FnOnce() + Send + 'static;

    fn cancel(&self, handle: Self::Handle);
}

/// Carries a form through its submissions: sends the message, then returns
/// the status to idle [`RESET_AFTER`] later. At most one reset is pending and
/// a new submission cancels it.
pub struct ContactDriver<F, T, R: ResetTimer> {
    form: F,
    transport: T,
    timer: R,
    pending_reset: Arc<Mutex<Option<R::Handle>>>,
}

impl<F: Clone, T: Clone, R: ResetTimer + Clone> Clone for ContactDriver<F, T, R> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            transport: self.transport.clone(),
            timer: self.timer.clone(),
            pending_reset: Arc::clone(&self.pending_reset),
        }
    }
}

impl<F, T, R> ContactDriver<F, T, R>
where
    F: FormHandle,
    T: ContactTransport,
    R: ResetTimer,
{
    pub fn new(form: F, transport: T, timer: R) -> Self {
        Self {
            form,
            transport,
            timer,
            pending_reset: Arc::new(Mutex::new(None)),
        }
    }

    /// Submits synchronously. The returned submission still has to be
    /// delivered, which is the only part that waits.
    pub fn begin(&self) -> Option<Submission> {
        match self.form.dispatch(ContactEvent::Submit)? {
            Effect::Send(submission) => {
                self.cancel_reset();
                Some(submission)
            }
            Effect::ScheduleReset(_) => None,
        }
    }

    pub async fn deliver(&self, submission: Submission) -> SubmissionStatus {
        let Submission { ticket, message } = submission;
        let outcome = self.transport.send(&message).await;
        if let Err(e) = &outcome {
            log::warn!("contact submission failed: {e}");
        }
        if let Some(Effect::ScheduleReset(ticket)) =
            self.form.dispatch(ContactEvent::Settled { ticket, outcome })
        {
            self.schedule_reset(ticket);
        }
        self.form.status()
    }

    fn cancel_reset(&self) {
        let mut slot = self
            .pending_reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.take() {
            self.timer.cancel(handle);
        }
    }

    fn schedule_reset(&self, ticket: Ticket) {
        self.cancel_reset();
        let form = self.form.clone();
        let expire = move || {
            form.dispatch(ContactEvent::Expired(ticket));
        };
        match self.timer.start(RESET_AFTER, expire.clone()) {
            Some(handle) => {
                *self
                    .pending_reset
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = Some(handle);
            }
            None => {
                log::warn!("couldn't start reset timer, clearing status now");
                expire();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct StubTransport {
        reply: Result<StatusCode, ContactError>,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl StubTransport {
        fn replying(reply: Result<StatusCode, ContactError>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactTransport for StubTransport {
        async fn send(&self, message: &ContactMessage) -> Result<StatusCode, ContactError> {
            self.sent.borrow_mut().push(message.clone());
            self.reply.clone()
        }
    }

    fn jane() -> ContactMessage {
        ContactMessage {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        let msg = jane();
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            form.dispatch(ContactEvent::Edit(field, msg.field(field).to_string()));
        }
        form
    }

    fn settle(form: &mut ContactForm, outcome: Result<StatusCode, ContactError>) -> Ticket {
        let ticket = match form.dispatch(ContactEvent::Submit) {
            Some(Effect::Send(sub)) => sub.ticket,
            other => panic!("expected a send effect, got {other:?}"),
        };
        assert_eq!(
            form.dispatch(ContactEvent::Settled { ticket, outcome }),
            Some(Effect::ScheduleReset(ticket))
        );
        ticket
    }

    #[test]
    fn test_edit_updates_single_field() {
        let mut form = ContactForm::new();
        assert_eq!(form.dispatch(ContactEvent::Edit(Field::Subject, "Hi".into())), None);
        assert_eq!(form.message().subject, "Hi");
        assert_eq!(form.message().name, "");
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_submit_goes_pending_before_response() {
        let mut form = filled_form();
        let effect = form.dispatch(ContactEvent::Submit);
        assert_eq!(form.status(), &SubmissionStatus::Pending);
        match effect {
            Some(Effect::Send(sub)) => assert_eq!(sub.message, jane()),
            other => panic!("expected a send effect, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_ignored_while_pending() {
        let mut form = filled_form();
        assert!(form.dispatch(ContactEvent::Submit).is_some());
        assert_eq!(form.dispatch(ContactEvent::Submit), None);
        assert_eq!(form.status(), &SubmissionStatus::Pending);
    }

    #[test]
    fn test_incomplete_message_not_submitted() {
        let mut form = ContactForm::new();
        form.dispatch(ContactEvent::Edit(Field::Name, "Jane".into()));
        assert_eq!(form.dispatch(ContactEvent::Submit), None);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled_form();
        settle(&mut form, Ok(StatusCode::OK));
        assert_eq!(form.status(), &SubmissionStatus::Success);
        assert_eq!(form.message(), &ContactMessage::default());
    }

    #[test]
    fn test_server_error_keeps_fields() {
        let mut form = filled_form();
        settle(&mut form, Ok(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failure("Failed to send message".to_string())
        );
        assert_eq!(form.message(), &jane());
    }

    #[test]
    fn test_network_error_message() {
        let mut form = filled_form();
        settle(
            &mut form,
            Err(ContactError::Network("connection refused".to_string())),
        );
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failure("connection refused".to_string())
        );
        assert_eq!(form.message(), &jane());
    }

    #[test]
    fn test_network_error_without_text_uses_default() {
        let mut form = filled_form();
        settle(&mut form, Err(ContactError::Network(String::new())));
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failure(DEFAULT_FAILURE.to_string())
        );
    }

    #[test]
    fn test_expiry_returns_to_idle() {
        let mut form = filled_form();
        let ticket = settle(&mut form, Ok(StatusCode::OK));
        assert_eq!(form.dispatch(ContactEvent::Expired(ticket)), None);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_stale_timer_ignored_after_resubmit() {
        let mut form = filled_form();
        let first = settle(&mut form, Ok(StatusCode::INTERNAL_SERVER_ERROR));
        // fields survive the failure, so the user can retry right away
        let second = settle(&mut form, Ok(StatusCode::BAD_GATEWAY));
        assert_ne!(first, second);

        form.dispatch(ContactEvent::Expired(first));
        assert!(form.status().is_settled());

        form.dispatch(ContactEvent::Expired(second));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_stale_timer_does_not_cancel_pending() {
        let mut form = filled_form();
        let first = settle(&mut form, Ok(StatusCode::SERVICE_UNAVAILABLE));
        assert!(form.dispatch(ContactEvent::Submit).is_some());
        form.dispatch(ContactEvent::Expired(first));
        assert_eq!(form.status(), &SubmissionStatus::Pending);
    }

    #[test]
    fn test_late_response_for_old_ticket_ignored() {
        let mut form = filled_form();
        let first = settle(&mut form, Ok(StatusCode::OK));
        let effect = form.dispatch(ContactEvent::Settled {
            ticket: first,
            outcome: Ok(StatusCode::OK),
        });
        assert_eq!(effect, None);
        assert_eq!(form.status(), &SubmissionStatus::Success);
    }

    type SharedForm = Arc<Mutex<ContactForm>>;

    impl FormHandle for SharedForm {
        fn dispatch(&self, event: ContactEvent) -> Option<Effect> {
            self.lock().unwrap().dispatch(event)
        }

        fn status(&self) -> SubmissionStatus {
            self.lock().unwrap().status().clone()
        }
    }

    #[derive(Clone, Default)]
    struct TokioTimer {
        cancelled: Arc<AtomicUsize>,
    }

    impl ResetTimer for TokioTimer {
        type Handle = tokio::task::JoinHandle<()>;

        fn start<F>(&self, after: Duration, on_expire: F) -> Option<Self::Handle>
        where
            F: FnOnce() + Send + 'static,
        {
            // the deadline is fixed now, not when the task first runs
            let sleep = tokio::time::sleep(after);
            Some(tokio::spawn(async move {
                sleep.await;
                on_expire();
            }))
        }

        fn cancel(&self, handle: Self::Handle) {
            handle.abort();
            self.cancelled.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Clone)]
    struct NoTimer;

    impl ResetTimer for NoTimer {
        type Handle = ();

        fn start<F>(&self, _after: Duration, _on_expire: F) -> Option<()>
        where
            F: FnOnce() + Send + 'static,
        {
            None
        }

        fn cancel(&self, _handle: ()) {}
    }

    fn shared(form: ContactForm) -> SharedForm {
        Arc::new(Mutex::new(form))
    }

    fn driver(
        form: &SharedForm,
        reply: Result<StatusCode, ContactError>,
        timer: &TokioTimer,
    ) -> ContactDriver<SharedForm, StubTransport, TokioTimer> {
        ContactDriver::new(form.clone(), StubTransport::replying(reply), timer.clone())
    }

    async fn submit<T: ContactTransport, R: ResetTimer>(
        driver: &ContactDriver<SharedForm, T, R>,
    ) -> SubmissionStatus {
        match driver.begin() {
            Some(submission) => driver.deliver(submission).await,
            None => driver.form.status(),
        }
    }

    async fn wait(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        // let woken timer tasks run
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_resets_after_delay() {
        let form = shared(filled_form());
        let timer = TokioTimer::default();
        let driver = driver(&form, Ok(StatusCode::CREATED), &timer);

        assert_eq!(submit(&driver).await, SubmissionStatus::Success);
        assert_eq!(driver.transport.sent.borrow().as_slice(), &[jane()]);
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.lock().unwrap().message(), &ContactMessage::default());

        wait(3999).await;
        assert_eq!(form.status(), SubmissionStatus::Success);
        wait(1).await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_resets_after_delay() {
        let form = shared(filled_form());
        let timer = TokioTimer::default();
        let driver = driver(&form, Ok(StatusCode::SERVICE_UNAVAILABLE), &timer);

        let failed = SubmissionStatus::Failure("Failed to send message".to_string());
        assert_eq!(submit(&driver).await, failed);
        assert_eq!(form.lock().unwrap().message(), &jane());

        wait(3999).await;
        assert_eq!(form.status(), failed);
        wait(1).await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.lock().unwrap().message(), &jane());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_cancels_pending_reset() {
        let form = shared(filled_form());
        let timer = TokioTimer::default();
        let driver = driver(&form, Ok(StatusCode::INTERNAL_SERVER_ERROR), &timer);

        submit(&driver).await;
        wait(3000).await;

        let submission = driver.begin().expect("fields survive a failure");
        assert_eq!(timer.cancelled.load(Ordering::SeqCst), 1);
        assert_eq!(form.status(), SubmissionStatus::Pending);
        driver.deliver(submission).await;

        // the first reset would have fired here
        wait(1000).await;
        assert!(form.status().is_settled());
        wait(2999).await;
        assert!(form.status().is_settled());
        wait(1).await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_reset_without_timer_is_immediate() {
        let form = shared(filled_form());
        let driver = ContactDriver::new(
            form.clone(),
            StubTransport::replying(Ok(StatusCode::OK)),
            NoTimer,
        );
        assert_eq!(submit(&driver).await, SubmissionStatus::Idle);
        assert_eq!(form.lock().unwrap().message(), &ContactMessage::default());
    }

    #[tokio::test]
    async fn test_submit_incomplete_sends_nothing() {
        let form = shared(ContactForm::new());
        let timer = TokioTimer::default();
        let driver = driver(&form, Ok(StatusCode::OK), &timer);
        assert_eq!(submit(&driver).await, SubmissionStatus::Idle);
        assert!(driver.transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_message_wire_format() {
        let value = serde_json::to_value(jane()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Jane",
                "email": "jane@x.com",
                "subject": "Hi",
                "message": "Hello",
            })
        );
    }

    #[test]
    fn test_resolve_base_url() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.com/"), false),
            "https://api.example.com"
        );
        assert_eq!(
            resolve_base_url(Some("https://api.example.com"), true),
            "https://api.example.com"
        );
        assert_eq!(resolve_base_url(None, true), DEV_API_URL);
        assert_eq!(resolve_base_url(Some(""), true), DEV_API_URL);
        assert_eq!(resolve_base_url(None, false), "");
        assert_eq!(resolve_base_url(Some("  "), false), "");
    }

    #[test]
    fn test_contact_endpoint() {
        assert_eq!(contact_endpoint(""), "/contact");
        assert_eq!(
            contact_endpoint("http://localhost:3000"),
            "http://localhost:3000/contact"
        );
        assert_eq!(contact_endpoint("https://x.dev/"), "https://x.dev/contact");
    }
}
