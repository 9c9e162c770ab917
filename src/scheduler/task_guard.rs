use std::future::Future;
use tokio::task::JoinHandle;
use tracing::debug;

/// Owns a spawned task and aborts it when dropped.
#[derive(Debug)]
pub struct TaskGuard {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl TaskGuard {
    pub fn spawn<F>(name: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        TaskGuard {
            name,
            handle: tokio::spawn(future),
        }
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("🛑 Cancelling task '{}'", self.name);
            self.handle.abort();
        }
    }
}
