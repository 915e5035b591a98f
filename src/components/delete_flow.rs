//! Confirm-then-delete sequencing for media cards.
//!
//! A delete moves through `PendingConfirmation` -> `InFlight` -> `Resolved`.
//! Declining the prompt drops straight back to `Idle` without touching the
//! backend.

use std::future::Future;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this media?";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    PendingConfirmation(String),
    InFlight(String),
    Resolved {
        media_id: String,
        outcome: Result<(), String>,
    },
}

impl DeleteFlow {
    pub fn request(media_id: impl Into<String>) -> Self {
        DeleteFlow::PendingConfirmation(media_id.into())
    }

    pub fn confirm(self, accepted: bool) -> Self {
        match self {
            DeleteFlow::PendingConfirmation(id) if accepted => DeleteFlow::InFlight(id),
            DeleteFlow::PendingConfirmation(_) => DeleteFlow::Idle,
            other => other,
        }
    }

    pub fn resolve(self, outcome: Result<(), String>) -> Self {
        match self {
            DeleteFlow::InFlight(media_id) => DeleteFlow::Resolved { media_id, outcome },
            other => other,
        }
    }

    pub fn in_flight_id(&self) -> Option<&str> {
        match self {
            DeleteFlow::InFlight(id) => Some(id),
            _ => None,
        }
    }
}

pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Blocking `window.confirm`. No window means no confirmation.
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Asks for confirmation, then awaits `delete` only if the user accepted.
pub async fn confirm_and_delete<P, F, Fut>(prompt: &P, media_id: String, delete: F) -> DeleteFlow
where
    P: ConfirmPrompt + ?Sized,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<(), anyhow::Error>>,
{
    let flow = DeleteFlow::request(media_id).confirm(prompt.confirm(DELETE_CONFIRM_MESSAGE));

    let Some(id) = flow.in_flight_id().map(str::to_owned) else {
        return flow;
    };
    let outcome = delete(id).await.map_err(|e| e.to_string());
    flow.resolve(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct Scripted {
        answer: bool,
        seen: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn new(answer: bool) -> Self {
            Scripted {
                answer,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ConfirmPrompt for Scripted {
        fn confirm(&self, message: &str) -> bool {
            self.seen.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    #[test]
    fn declined_confirmation_issues_no_delete() {
        let prompt = Scripted::new(false);
        let calls = Cell::new(0);
        let flow = block_on(confirm_and_delete(&prompt, "m1".to_string(), |_| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        }));

        assert_eq!(flow, DeleteFlow::Idle);
        assert_eq!(calls.get(), 0);
        assert_eq!(prompt.seen.borrow().as_slice(), [DELETE_CONFIRM_MESSAGE]);
    }

    #[test]
    fn accepted_confirmation_deletes_exactly_once() {
        let prompt = Scripted::new(true);
        let deleted = RefCell::new(Vec::new());
        let flow = block_on(confirm_and_delete(&prompt, "m1".to_string(), |id| {
            deleted.borrow_mut().push(id);
            async { Ok(()) }
        }));

        assert_eq!(
            flow,
            DeleteFlow::Resolved {
                media_id: "m1".to_string(),
                outcome: Ok(())
            }
        );
        assert_eq!(deleted.borrow().as_slice(), ["m1".to_string()]);
    }

    #[test]
    fn failed_delete_resolves_with_error() {
        let prompt = Scripted::new(true);
        let flow = block_on(confirm_and_delete(&prompt, "m2".to_string(), |_| async {
            Err(anyhow::Error::msg("Failed to delete media: Forbidden"))
        }));

        match flow {
            DeleteFlow::Resolved { media_id, outcome } => {
                assert_eq!(media_id, "m2");
                assert_eq!(outcome.unwrap_err(), "Failed to delete media: Forbidden");
            }
            other => panic!("unexpected flow state: {:?}", other),
        }
    }

    #[test]
    fn transitions_ignore_out_of_order_events() {
        assert_eq!(DeleteFlow::Idle.confirm(true), DeleteFlow::Idle);
        assert_eq!(DeleteFlow::Idle.resolve(Ok(())), DeleteFlow::Idle);

        let pending = DeleteFlow::request("x");
        assert_eq!(pending.clone().resolve(Ok(())), pending);

        let in_flight = pending.confirm(true);
        assert_eq!(in_flight.in_flight_id(), Some("x"));
        assert_eq!(in_flight.clone().confirm(false), in_flight);
    }
}
