//! In-memory cron engine with replaceable behavior.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use tracing::debug;

use crate::engine::{CronClient, CronEngine};
use crate::error::{CronError, CronResult};
use crate::shutdown::ShutdownSignal;

type RunFn = Box<dyn Fn(ShutdownSignal) -> BoxFuture<'static, CronResult<()>> + Send + Sync>;
type ClientFn =
    Box<dyn Fn() -> BoxFuture<'static, CronResult<Option<Arc<dyn CronClient>>>> + Send + Sync>;

/// Fake [`CronEngine`] for scheduler tests.
///
/// By default `run` parks until shutdown and then reports
/// [`CronError::Cancelled`], and `client` reports that no client is ready.
pub struct FakeCron {
    run_fn: RunFn,
    client_fn: ClientFn,
}

impl FakeCron {
    #[must_use]
    pub fn new() -> Self {
        Self {
            run_fn: Box::new(|shutdown| {
                Box::pin(async move {
                    shutdown.recv().await;
                    debug!("Fake cron engine stopped");
                    CronResult::Err(CronError::Cancelled)
                })
            }),
            client_fn: Box::new(|| Box::pin(async { CronResult::Ok(None) })),
        }
    }

    /// Replace what `run` does.
    #[must_use]
    pub fn with_run<F, Fut>(mut self, run: F) -> Self
    where
        F: Fn(ShutdownSignal) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CronResult<()>> + Send + 'static,
    {
        self.run_fn = Box::new(move |shutdown| Box::pin(run(shutdown)));
        self
    }

    /// Replace what `client` returns.
    #[must_use]
    pub fn with_client<F, Fut>(mut self, client: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CronResult<Option<Arc<dyn CronClient>>>> + Send + 'static,
    {
        self.client_fn = Box::new(move || Box::pin(client()));
        self
    }
}

impl Default for FakeCron {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FakeCron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeCron").finish_non_exhaustive()
    }
}

#[async_trait]
impl CronEngine for FakeCron {
    async fn run(&self, shutdown: ShutdownSignal) -> CronResult<()> {
        (self.run_fn)(shutdown).await
    }

    async fn client(&self) -> CronResult<Option<Arc<dyn CronClient>>> {
        (self.client_fn)().await
    }
}
