//! Async task lifecycle tracking

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::task::JoinHandle;

/// Monotonic id source for spawned tasks
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(0);

/// Spawn an instrumented async task with lifecycle logging
///
/// # Arguments
///
/// * `name` - Task name for logging (e.g., "greeting_read", "receipt_wait")
/// * `future` - The async task to execute
///
/// # Example
///
/// ```rust,ignore
/// spawn_tracked("greeting_read", async move {
///     contract.read_greeting().await
/// });
/// ```
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    let start = Instant::now();

    tracing::debug!(task = %name, task_id = task_id, "Task spawned");

    tokio::spawn(async move {
        let result = future.await;
        let duration = start.elapsed();

        tracing::debug!(
            task = %name,
            task_id = task_id,
            duration_ms = duration.as_millis(),
            "Task completed"
        );

        if duration.as_secs() > 30 {
            tracing::warn!(
                task = %name,
                task_id = task_id,
                duration_ms = duration.as_millis(),
                "Task took very long"
            );
        }

        result
    })
}
