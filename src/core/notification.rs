//! One-shot success notification.
//!
//! Shown once when the exercise is solved and hidden again when the front end
//! dismisses it. Dismissal has no effect on the session itself.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub visible: bool,
    /// Number of times the notification has been raised
    pub shown: usize,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: false,
            shown: 0,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.shown += 1;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
