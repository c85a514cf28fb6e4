use std::future::Future;
use std::time::Duration;

use leksi_config::prediction::PredictionConfig;
use tokio_util::sync::CancellationToken;

/// Cancel handle for one scheduled run
#[derive(Debug, Clone)]
pub struct DebounceHandle {
    token: CancellationToken,
}

impl DebounceHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Coalesces bursts of triggers: each `schedule` cancels the pending task,
/// so only the last one inside a delay window runs.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<DebounceHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_config(config: &PredictionConfig) -> Self {
        Self::new(Duration::from_millis(config.debounce_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Must be called from within a tokio runtime
    pub fn schedule<F>(&mut self, task: F) -> DebounceHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let handle = DebounceHandle {
            token: token.clone(),
        };
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::trace!("Debounced task superseded");
                }
                _ = tokio::time::sleep(delay) => {
                    if !token.is_cancelled() {
                        task.await;
                    }
                }
            }
        });

        self.pending = Some(handle.clone());
        handle
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_task(counter: &Arc<AtomicUsize>, value: usize) -> impl Future<Output = ()> + Send + 'static {
        let counter = Arc::clone(counter);
        async move {
            counter.store(value, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_call_in_window_runs() {
        let last = Arc::new(AtomicUsize::new(0));
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        for i in 1..=3 {
            let runs = Arc::clone(&runs);
            let last = Arc::clone(&last);
            debouncer.schedule(async move {
                runs.fetch_add(1, Ordering::SeqCst);
                last.store(i, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(30)).await;
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let value = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::from_config(&PredictionConfig::default());
        debouncer.schedule(counting_task(&value, 7));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(value.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(value.load(Ordering::SeqCst), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_cancel() {
        let value = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let handle = debouncer.schedule(counting_task(&value, 1));
        handle.cancel();
        assert!(handle.is_cancelled());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(value.load(Ordering::SeqCst), 0);
    }
}
