// File: src/notifier.rs
// Purpose: Notification seam and the toast queue behind it

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a severity id is not one of `success|error|warning|info`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity: {0}")]
pub struct UnknownSeverityError(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            other => Err(UnknownSeverityError(other.to_string())),
        }
    }
}

/// Surfaces messages to the user. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, message: &str, title: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, title: &str, severity: Severity) {
        (**self).notify(message, title, severity)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, message: &str, title: &str, severity: Severity) {
        (**self).notify(message, title, severity)
    }
}

/// Presentation flags carried with every toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastOptions {
    #[serde(default = "default_true")]
    pub close_button: bool,

    #[serde(default = "default_true")]
    pub progress_bar: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            close_button: true,
            progress_bar: true,
        }
    }
}

/// A notification waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub title: String,
    pub severity: Severity,
    pub options: ToastOptions,
}

/// Queues toasts for the rendering layer and logs each one.
#[derive(Debug, Default)]
pub struct ToastNotifier {
    options: ToastOptions,
    queue: RefCell<Vec<Toast>>,
}

impl ToastNotifier {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            options,
            queue: RefCell::new(Vec::new()),
        }
    }

    /// Take every pending toast, oldest first
    pub fn drain(&self) -> Vec<Toast> {
        self.queue.take()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, title: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::error!(title, "{}", message),
            Severity::Warning => tracing::warn!(title, "{}", message),
            Severity::Success | Severity::Info => tracing::info!(title, "{}", message),
        }
        self.queue.borrow_mut().push(Toast {
            message: message.to_string(),
            title: title.to_string(),
            severity,
            options: self.options,
        });
    }
}
