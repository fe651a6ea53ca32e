use anyhow::Context as _;

/// A multi-threaded tokio runtime kept alive on its own thread.
///
/// The UI thread never enters the runtime; it spawns fire-and-forget tasks or
/// blocks on a single future through the runtime handle.
pub struct TokioThread {
    handle: tokio::runtime::Handle,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<std::thread::JoinHandle<()>>,
}
impl TokioThread {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("failed to start the tokio runtime")?;
        let handle = runtime.handle().clone();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let thread = std::thread::spawn(move || {
            runtime.block_on(async {
                let _ = shutdown_rx.await;
            });
            tracing::debug!("tokio thread shutting down");
            // In-flight requests are abandoned rather than awaited.
            runtime.shutdown_background();
        });

        Ok(Self {
            handle,
            shutdown_tx: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    pub fn spawn(&self, task: impl Future<Output = ()> + Send + 'static) {
        self.handle.spawn(task);
    }

    /// Runs `future` to completion on the runtime, blocking the caller.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.handle.block_on(future)
    }
}
impl Drop for TokioThread {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            tracing::warn!("tokio thread panicked");
        }
    }
}
