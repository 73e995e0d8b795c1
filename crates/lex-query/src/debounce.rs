//! Delay-coalescing of rapidly changing input.
//!
//! A [`Debouncer`] delivers a value to its callback only once no newer value
//! has arrived for the configured delay. Each pending delivery is a spawned
//! tokio task; a new call aborts it and schedules a replacement, so only the
//! settled value is ever delivered. Must be used inside a tokio runtime.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Coalesces calls so the callback sees only the last value of a burst.
pub struct Debouncer<T> {
    delay: Duration,
    callback: Callback<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` for delivery after the delay, replacing any pending one.
    pub fn call(&self, value: T) {
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        }));

        tracing::debug!(delay_ms = delay.as_millis(), "debounce scheduled");
    }

    /// Drop the pending delivery, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
            tracing::debug!("debounce cancelled");
        }
    }

    /// Whether a delivery is scheduled and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;
    use tokio::time::sleep;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn recording(delay: Duration) -> (Debouncer<String>, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(delay, move |value: String| {
            let _ = tx.send(value);
        });
        (debouncer, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn only_settled_value_is_delivered() {
        let (debouncer, mut rx) = recording(ms(300));

        debouncer.call("c".to_string());
        sleep(ms(100)).await;
        debouncer.call("ca".to_string());
        sleep(ms(100)).await;
        debouncer.call("case".to_string());

        sleep(ms(450)).await;
        assert_eq!(rx.try_recv().ok(), Some("case".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_fires_before_delay() {
        let (debouncer, mut rx) = recording(ms(300));

        debouncer.call("a".to_string());
        sleep(ms(150)).await;
        assert!(rx.try_recv().is_err());
        assert!(debouncer.is_pending());

        sleep(ms(300)).await;
        assert_eq!(rx.try_recv().ok(), Some("a".to_string()));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn separated_calls_each_fire() {
        let (debouncer, mut rx) = recording(ms(100));

        debouncer.call("first".to_string());
        sleep(ms(250)).await;
        debouncer.call("second".to_string());
        sleep(ms(250)).await;

        assert_eq!(rx.try_recv().ok(), Some("first".to_string()));
        assert_eq!(rx.try_recv().ok(), Some("second".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_value() {
        let (debouncer, mut rx) = recording(ms(300));

        debouncer.call("draft".to_string());
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        sleep(ms(1_000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_debouncer_cancels() {
        let (debouncer, mut rx) = recording(ms(300));

        debouncer.call("gone".to_string());
        drop(debouncer);

        sleep(ms(1_000)).await;
        assert!(rx.try_recv().is_err());
    }
}
