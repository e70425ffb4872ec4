//! Toast notifications.
//!
//! Widgets raise notifications through the [`Notifier`] trait and never wait
//! on them. On the server, a per-request [`ToastQueue`] collects the toasts and
//! [`hx_trigger`] encodes them for the `HX-Trigger` response header, where the
//! browser-side toast element picks them up and owns their display lifetime.
//!
//! # Example
//!
//! ```rust
//! use clinic_ui::notify::{Notifier, ToastOptions, ToastQueue};
//!
//! let queue = ToastQueue::new();
//! queue.success("Exporting 3 records", ToastOptions::default());
//!
//! let toasts = queue.drain();
//! assert_eq!(toasts.len(), 1);
//! assert!(queue.is_empty());
//! ```

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Completed action.
    Success,
}

/// Optional toast fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Secondary line under the message.
    pub description: Option<String>,
}

impl ToastOptions {
    /// Options with a description line.
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Client-side dedupe key.
    pub id: Uuid,
    /// Severity.
    pub kind: ToastKind,
    /// Headline.
    pub message: String,
    /// Secondary line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Toast {
    /// Build a success toast.
    pub fn success(message: impl Into<String>, options: ToastOptions) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ToastKind::Success,
            message: message.into(),
            description: options.description,
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    /// Raise a success notification.
    fn success(&self, message: &str, options: ToastOptions);
}

/// Collects toasts raised while handling one request.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued toast, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        // A poisoned queue still holds valid toasts.
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for ToastQueue {
    fn success(&self, message: &str, options: ToastOptions) {
        tracing::debug!(name: "toast.queued", toast = message, "Toast queued");
        self.lock().push(Toast::success(message, options));
    }
}

/// Encode toasts as an `HX-Trigger` header value: `{"toast":[...]}`.
///
/// Returns `None` when there is nothing to send.
pub fn hx_trigger(toasts: &[Toast]) -> Result<Option<String>, serde_json::Error> {
    if toasts.is_empty() {
        return Ok(None);
    }

    serde_json::to_string(&TriggerPayload { toast: toasts }).map(Some)
}

#[derive(Serialize)]
struct TriggerPayload<'a> {
    toast: &'a [Toast],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_preserves_order_and_drains() {
        let queue = ToastQueue::new();
        queue.success("first", ToastOptions::default());
        queue.success("second", ToastOptions::with_description("details"));

        let toasts = queue.drain();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].message, "first");
        assert_eq!(toasts[1].description.as_deref(), Some("details"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_hx_trigger_empty_is_none() {
        assert_eq!(hx_trigger(&[]).unwrap(), None);
    }

    #[test]
    fn test_hx_trigger_payload_shape() {
        let toast = Toast::success(
            "Exporting 7 records",
            ToastOptions::with_description("Your export will be ready shortly."),
        );
        let header = hx_trigger(&[toast]).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&header).unwrap();

        let first = &value["toast"][0];
        assert_eq!(first["kind"], "success");
        assert_eq!(first["message"], "Exporting 7 records");
        assert_eq!(first["description"], "Your export will be ready shortly.");
    }

    #[test]
    fn test_description_omitted_when_absent() {
        let toast = Toast::success("Email sent to 2 recipients", ToastOptions::default());
        let json = serde_json::to_string(&toast).unwrap();
        assert!(!json.contains("description"));
    }
}
