//! Notification queue backing the toast tray.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// How loudly a toast presents itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Info,
    Error,
}

/// One user-visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Toast queue state. Provided as `RwSignal<ToastState>`; fire-and-forget
/// from the widgets' point of view.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, title: &str, message: &str, severity: ToastSeverity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            title: title.to_owned(),
            message: message.to_owned(),
            severity,
        });
        id
    }

    /// Shorthand for the standard failure toast.
    pub fn push_error(&mut self, message: &str) -> u64 {
        self.push("There was an error.", message, ToastSeverity::Error)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
