//! # Actor Lock
//!
//! Turn-based concurrency for method invocations on a single virtual actor.
//!
//! An actor processes one invocation at a time. Call chains that come back
//! into an actor they already hold (A calls B, B calls A, all under the same
//! request id) are admitted without waiting, up to a configured stack depth.
//! Independent chains queue on a single-slot gate and are admitted strictly in
//! arrival order.
//!
//! ```text
//!   lock("r1") ──► gate free? ──► holder = r1, depth = 1
//!   lock("r1") ──► same holder ──► depth = 2          (no gate)
//!   lock("r2") ──► different holder ──► queued on gate (FIFO)
//!   unlock()   ──► depth = 1
//!   unlock()   ──► depth = 0, holder cleared, gate released ──► r2 admitted
//! ```
//!
//! # Example
//!
//! ```rust
//! use actor_lock::{ActorLock, LockError, RequestId};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), LockError> {
//! let lock = ActorLock::new(2);
//! let chain = RequestId::new("r1")?;
//!
//! lock.lock(&chain).await?;
//! lock.lock(&chain).await?; // reentrant
//! assert!(lock.lock(&chain).await.is_err()); // ceiling reached
//!
//! lock.unlock();
//! lock.unlock();
//! assert!(!lock.is_locked());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

mod config;
mod error;
mod lock;
mod request_id;

pub use config::{DEFAULT_MAX_STACK_DEPTH, LockConfig, MAX_STACK_DEPTH_ENV};
pub use error::{ConfigError, ConfigResult, LockError, LockResult};
pub use lock::{ActorLock, OwnedTurnGuard, TurnGuard};
pub use request_id::RequestId;
