//! Cooperative cancellation.
//!
//! A [`CancellationToken`] is a cloneable, one-way signal: once cancelled it
//! stays cancelled. Every clone observes the same signal. Pending
//! computations carry a token and race it at each suspension point.

use std::sync::Arc;

use tokio::sync::watch;

use crate::control::Cancelled;

/// A cloneable cancellation signal.
///
/// # Examples
///
/// ```rust
/// use mettle::effect::CancellationToken;
///
/// let token = CancellationToken::new();
/// let observer = token.clone();
/// assert!(!observer.is_cancelled());
///
/// token.cancel();
/// assert!(observer.is_cancelled());
/// assert!(observer.check().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    state: Option<Arc<watch::Sender<bool>>>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled yet.
    pub fn new() -> Self {
        Self {
            state: Some(Arc::new(watch::Sender::new(false))),
        }
    }

    /// A token that can never be cancelled.
    pub const fn none() -> Self {
        Self { state: None }
    }

    /// Fires the signal. Cancelling twice is a no-op.
    pub fn cancel(&self) {
        if let Some(sender) = &self.state {
            let previously = sender.send_replace(true);
            if !previously {
                tracing::debug!("cancellation requested");
            }
        }
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.state.as_ref().is_some_and(|sender| *sender.borrow())
    }

    /// Returns `true` if this token is able to fire at all.
    pub const fn can_be_cancelled(&self) -> bool {
        self.state.is_some()
    }

    /// Returns `Err(Cancelled)` if the signal has fired.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the token is cancelled.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Completes when the signal fires; never completes for [`none`](Self::none).
    pub async fn cancelled(&self) {
        match &self.state {
            Some(sender) => {
                let mut receiver = sender.subscribe();
                // The sender lives as long as `self`, so this cannot observe a closed channel.
                let _ = receiver.wait_for(|cancelled| *cancelled).await;
            }
            None => std::future::pending().await,
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    fn none_is_never_cancelled() {
        let token = CancellationToken::none();
        token.cancel();
        assert!(!token.is_cancelled());
        assert!(!token.can_be_cancelled());
    }

    #[rstest]
    #[tokio::test]
    async fn cancelled_completes_after_cancel() {
        let token = CancellationToken::new();
        let waiter = token.clone();
        let handle = tokio::spawn(async move { waiter.cancelled().await });
        tokio::task::yield_now().await;
        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should observe cancellation")
            .expect("waiter task should not panic");
    }

    #[rstest]
    #[tokio::test]
    async fn cancelled_is_immediate_when_already_fired() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancelled().await;
        assert_eq!(token.check(), Err(Cancelled));
    }
}
