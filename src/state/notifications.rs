// ============================================================================
// NOTIFICATIONS - Transient toasts
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::state::reactivity::{ReactiveState, SubscriptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue shared by every screen
#[derive(Clone, Default)]
pub struct NotificationState {
    toasts: ReactiveState<Vec<Toast>>,
    next_id: Rc<Cell<u64>>,
    on_push: Rc<RefCell<Option<Rc<dyn Fn(u64)>>>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook run with the id of every new toast (the app uses it to schedule dismissal)
    pub fn set_on_push<F>(&self, hook: F)
    where
        F: Fn(u64) + 'static,
    {
        *self.on_push.borrow_mut() = Some(Rc::new(hook));
    }

    pub fn success(&self, message: &str) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: &str) -> u64 {
        self.push(ToastKind::Error, message)
    }

    fn push(&self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });
        let hook = self.on_push.borrow().clone();
        if let Some(hook) = hook {
            hook(id);
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        if self.toasts.with(|toasts| toasts.iter().any(|t| t.id == id)) {
            self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Vec<Toast>) + 'static,
    {
        self.toasts.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let notifications = NotificationState::new();
        let ok = notifications.success("saved");
        let err = notifications.error("failed");

        let toasts = notifications.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[1].message, "failed");

        notifications.dismiss(ok);
        assert_eq!(notifications.toasts().len(), 1);
        assert_eq!(notifications.toasts()[0].id, err);
    }

    #[test]
    fn push_hook_receives_ids() {
        let notifications = NotificationState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        notifications.set_on_push(move |id| seen_clone.borrow_mut().push(id));

        let a = notifications.success("a");
        let b = notifications.error("b");
        assert_eq!(*seen.borrow(), vec![a, b]);
    }

    #[test]
    fn dismissing_unknown_id_does_not_notify() {
        let notifications = NotificationState::new();
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        notifications.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));

        notifications.dismiss(42);
        assert_eq!(calls.get(), 0);
    }
}
