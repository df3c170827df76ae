//! Cancellation shared between a parallel node and its descendants.

use std::sync::atomic::{AtomicBool, Ordering};

use morph_core::TimeControl;

/// One-shot stop signal for a subtree.
///
/// A token is cancelled when it, or any token it was derived from, has been
/// cancelled. [`CancelToken::should_stop`] additionally reports the search
/// deadline.
#[derive(Debug)]
pub struct CancelToken<'a> {
    cancelled: AtomicBool,
    parent: Option<&'a CancelToken<'a>>,
    time: &'a TimeControl,
}

impl<'a> CancelToken<'a> {
    pub fn root(time: &'a TimeControl) -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            parent: None,
            time,
        }
    }

    pub fn child(parent: &'a CancelToken<'a>) -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            parent: Some(parent),
            time: parent.time,
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// True once this token or an ancestor has been cancelled. Never resets.
    pub fn is_cancelled(&self) -> bool {
        let mut token = Some(self);
        while let Some(t) = token {
            if t.cancelled.load(Ordering::Acquire) {
                return true;
            }
            token = t.parent;
        }
        false
    }

    /// Cancelled, or the search has run out of time.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time.is_stopped() || self.is_cancelled()
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod cancel_tests;
