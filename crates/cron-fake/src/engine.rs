//! Cron engine interface.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CronResult;
use crate::shutdown::ShutdownSignal;

/// Handle for scheduling jobs on a running engine.
pub trait CronClient: Send + Sync {
    /// Name of the engine or partition this client talks to.
    fn name(&self) -> &str;
}

/// A cron engine the scheduler runs for its whole lifetime.
#[async_trait]
pub trait CronEngine: Send + Sync {
    /// Run until the engine stops or `shutdown` fires.
    async fn run(&self, shutdown: ShutdownSignal) -> CronResult<()>;

    /// Client for the running engine, or `None` if it is not ready.
    async fn client(&self) -> CronResult<Option<Arc<dyn CronClient>>>;
}
