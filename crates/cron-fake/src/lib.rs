//! # Cron Fake
//!
//! The interface a scheduler uses to drive its cron engine, and a fake engine
//! whose behavior tests can swap out.
//!
//! [`CronEngine::run`] blocks until the engine stops; [`CronEngine::client`]
//! hands out a client once the engine is ready. [`FakeCron`] runs until the
//! [`ShutdownSignal`] fires and never offers a client, unless told otherwise.
//!
//! ```rust
//! use cron_fake::{CronEngine, CronError, FakeCron, Shutdown};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let engine = FakeCron::new();
//! let shutdown = Shutdown::new();
//! shutdown.trigger();
//!
//! let result = engine.run(shutdown.signal()).await;
//! assert!(matches!(result, Err(CronError::Cancelled)));
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

mod engine;
mod error;
mod fake;
mod shutdown;

pub use engine::{CronClient, CronEngine};
pub use error::{CronError, CronResult};
pub use fake::FakeCron;
pub use shutdown::{Shutdown, ShutdownSignal};
