//! # Task Scope
//!
//! Registry of the background tasks started on behalf of the page. Closing the
//! scope aborts every outstanding task; results that still arrive afterwards
//! are dropped by the event handler.

use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::AbortHandle;

#[derive(Default)]
struct ScopeInner {
    closed: AtomicBool,
    handles: Mutex<Vec<AbortHandle>>,
}

/// Cloneable handle; all clones share the same set of tasks.
#[derive(Clone, Default)]
pub struct TaskScope {
    inner: Arc<ScopeInner>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a tracked task inside this scope. No-op once the scope is closed.
    pub fn spawn<F>(&self, name: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.is_closed() {
            tracing::debug!(task = %name, "Scope closed, task not spawned");
            return;
        }

        let handle = crate::debug::spawn_tracked(name, future);
        let mut handles = self.inner.handles.lock();
        handles.retain(|h| !h.is_finished());
        handles.push(handle.abort_handle());
    }

    /// Abort every outstanding task and refuse new ones.
    pub fn close(&self) {
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let handles = std::mem::take(&mut *self.inner.handles.lock());
        tracing::info!(tasks = handles.len(), "Closing task scope");
        for handle in handles {
            handle.abort();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Number of tasks that have not finished yet.
    pub fn active(&self) -> usize {
        self.inner
            .handles
            .lock()
            .iter()
            .filter(|h| !h.is_finished())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_close_aborts_running_tasks() {
        let scope = TaskScope::new();
        let (tx, rx) = async_channel::unbounded::<()>();

        scope.spawn("sleeper", async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = tx.send(()).await;
        });
        assert_eq!(scope.active(), 1);

        scope.close();
        assert!(scope.is_closed());

        // The aborted task drops its sender without sending
        assert!(rx.recv().await.is_err());
    }

    #[tokio::test]
    async fn test_spawn_after_close_is_ignored() {
        let scope = TaskScope::new();
        scope.close();

        let (tx, rx) = async_channel::unbounded::<()>();
        scope.spawn("late", async move {
            let _ = tx.send(()).await;
        });

        assert!(rx.recv().await.is_err());
        assert_eq!(scope.active(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_tasks() {
        let scope = TaskScope::new();
        let clone = scope.clone();
        clone.spawn("sleeper", async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        assert_eq!(scope.active(), 1);
        scope.close();
        assert!(clone.is_closed());
    }
}
