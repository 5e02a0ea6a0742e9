use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::routes::contact::SubmissionResult;

/// How long a terminal state stays on screen before the form returns to
/// `Idle` on its own.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

/// Lifecycle of one contact form instance:
/// `Idle → Loading → {Success, Error} → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Loading,
    Success,
    Error,
}

struct Inner {
    state: FormState,
    error_message: String,
    reset_task: Option<JoinHandle<()>>,
}

/// Headless driver for the contact form, mirroring the behavior the contact
/// page ships to browsers: one in-flight submission at a time, an inline
/// success or error panel, and an automatic return to `Idle` after
/// [`RESET_DELAY`].
///
/// The reset is a spawned task whose handle is aborted on re-submit and on
/// drop, so a torn-down form never fires a stale transition.
pub struct FormController {
    inner: Arc<Mutex<Inner>>,
    reset_delay: Duration,
}

impl FormController {
    pub fn new() -> Self {
        Self::with_reset_delay(RESET_DELAY)
    }

    pub fn with_reset_delay(reset_delay: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: FormState::Idle,
                error_message: String::new(),
                reset_task: None,
            })),
            reset_delay,
        }
    }

    pub fn state(&self) -> FormState {
        self.inner.lock().unwrap().state
    }

    pub fn error_message(&self) -> String {
        self.inner.lock().unwrap().error_message.clone()
    }

    /// Runs one submission through `send` and tracks it in the state
    /// machine.
    ///
    /// Returns `None` without polling `send` when a submission is already in
    /// flight. Otherwise resolves to the handler's result after moving the
    /// form to the matching terminal state and scheduling the auto-reset.
    pub async fn submit<Fut>(&self, send: Fut) -> Option<SubmissionResult>
    where
        Fut: Future<Output = SubmissionResult>,
    {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.state == FormState::Loading {
                return None;
            }
            if let Some(task) = inner.reset_task.take() {
                task.abort();
            }
            inner.state = FormState::Loading;
            inner.error_message.clear();
        }

        let result = send.await;

        {
            let mut inner = self.inner.lock().unwrap();
            if result.success {
                inner.state = FormState::Success;
            } else {
                inner.state = FormState::Error;
                inner.error_message = result.message.clone();
            }
            inner.reset_task = Some(schedule_reset(self.inner.clone(), self.reset_delay));
        }

        Some(result)
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        if let Some(task) = self.inner.lock().unwrap().reset_task.take() {
            task.abort();
        }
    }
}

fn schedule_reset(inner: Arc<Mutex<Inner>>, delay: Duration) -> JoinHandle<()> {
    // Capture the deadline now, not when the task is first polled, so the
    // delay is measured from the terminal-state transition.
    let sleep = tokio::time::sleep(delay);
    tokio::spawn(async move {
        sleep.await;
        let mut inner = inner.lock().unwrap();
        inner.state = FormState::Idle;
        inner.reset_task = None;
    })
}
