//! Zero-argument action handlers passed down from page code.

use std::fmt;
use std::sync::Arc;

/// A cheaply clonable `Fn()` run when its control is activated.
///
/// Pages own the behaviour. Components only render the control; the server
/// runs the handler when the control's request arrives.
#[derive(Clone)]
pub struct ActionHandler(Arc<dyn Fn() + Send + Sync>);

impl ActionHandler {
    /// Wrap a closure.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A handler that does nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Invoke the handler once.
    pub fn run(&self) {
        (self.0)();
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionHandler(..)")
    }
}

impl<F> From<F> for ActionHandler
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::ActionHandler;

    /// Handler that counts its invocations.
    pub(crate) fn counting() -> (ActionHandler, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let handler = ActionHandler::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (handler, calls)
    }
}
