// Transient notifications

use crate::messages::ToastLevel;
use std::rc::Rc;
use style_profiler_core::Diagnostic;
use yew::Reducible;

/// Time a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: uuid::Uuid,
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(level: ToastLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            level,
            title: title.into(),
            description: description.into(),
        }
    }
}

impl From<&Diagnostic> for Toast {
    fn from(diagnostic: &Diagnostic) -> Self {
        Toast::new(
            diagnostic.severity.into(),
            diagnostic.title.clone(),
            diagnostic.description.clone(),
        )
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(uuid::Uuid),
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastQueue { toasts })
    }
}
