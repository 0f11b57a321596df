//! Per-actor invocation lock.
//!
//! # Synchronization
//!
//! Three pieces of state, each with its own guard:
//!
//! - `holder`: the chain currently executing plus the gate guard it owns.
//!   Protected by a short `parking_lot` mutex that is never held across an
//!   `.await` or while the gate is released.
//! - `stack_depth`: atomic counter so admission checks and introspection can
//!   read it without taking `holder`. All writes happen under `holder`.
//! - `gate`: a tokio mutex used as a single-slot FIFO queue. Independent chains
//!   wait on it in arrival order; reentrant calls never touch it.
//!
//! The owned gate guard lives inside `holder`, so the gate is held exactly
//! while a holder exists, and the final `unlock` releases it by dropping the
//! guard.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;
use tokio::sync::{Mutex as Gate, OwnedMutexGuard};
use tracing::{debug, trace, warn};

use crate::{LockConfig, LockError, LockResult, RequestId};

/// The chain that currently owns the actor.
struct Turn {
    request_id: RequestId,
    _gate: OwnedMutexGuard<()>,
}

/// Turn-based lock guarding method execution on one actor instance.
///
/// Created at activation, dropped at deactivation. The dispatcher calls
/// [`lock`](Self::lock) before an invocation and [`unlock`](Self::unlock)
/// after it on every exit path; [`acquire`](Self::acquire) and
/// [`with_turn`](Self::with_turn) do the pairing automatically.
pub struct ActorLock {
    holder: Mutex<Option<Turn>>,
    stack_depth: AtomicU32,
    max_stack_depth: u32,
    gate: Arc<Gate<()>>,
}

impl ActorLock {
    /// Create a free lock with the given reentrancy ceiling.
    #[must_use]
    pub fn new(max_stack_depth: u32) -> Self {
        Self {
            holder: Mutex::new(None),
            stack_depth: AtomicU32::new(0),
            max_stack_depth,
            gate: Arc::new(Gate::new(())),
        }
    }

    /// Create a lock from runtime configuration.
    #[must_use]
    pub fn from_config(config: &LockConfig) -> Self {
        Self::new(config.max_stack_depth)
    }

    /// Take a turn on the actor for `request_id`.
    ///
    /// A call from the chain that already holds the lock is admitted
    /// immediately and deepens the stack. Any other chain waits until the
    /// holder fully unwinds; waiting chains are admitted in the order they
    /// called `lock`.
    ///
    /// The ceiling is checked against the current depth before anything
    /// else, so a chain arriving while the holder sits at the ceiling is
    /// rejected rather than queued.
    ///
    /// Dropping the returned future while it waits removes it from the queue
    /// without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::MaxStackDepthExceeded`] if the current depth has
    /// reached the ceiling. Nothing is mutated in that case, so no matching
    /// `unlock` is owed.
    pub async fn lock(&self, request_id: &RequestId) -> LockResult<()> {
        {
            let holder = self.holder.lock();
            let depth = self.stack_depth.load(Ordering::Acquire);

            if depth >= self.max_stack_depth {
                warn!(
                    request_id = %request_id,
                    depth,
                    max_stack_depth = self.max_stack_depth,
                    "Rejected invocation: maximum stack depth exceeded"
                );
                return Err(LockError::max_stack_depth_exceeded(self.max_stack_depth));
            }

            if holder
                .as_ref()
                .is_some_and(|turn| turn.request_id == *request_id)
            {
                let depth = depth.saturating_add(1);
                self.stack_depth.store(depth, Ordering::Release);
                trace!(request_id = %request_id, depth, "Reentered actor lock");
                return Ok(());
            }
        }

        let gate = Arc::clone(&self.gate).lock_owned().await;

        let mut holder = self.holder.lock();
        *holder = Some(Turn {
            request_id: request_id.clone(),
            _gate: gate,
        });
        self.stack_depth.store(1, Ordering::Release);
        debug!(request_id = %request_id, "Admitted invocation chain");

        Ok(())
    }

    /// Release one hold taken by [`lock`](Self::lock).
    ///
    /// When the depth reaches zero the holder is cleared and the next queued
    /// chain is admitted. An `unlock` with no matching `lock` is ignored and
    /// logged.
    pub fn unlock(&self) {
        let released = {
            let mut holder = self.holder.lock();
            let depth = self.stack_depth.load(Ordering::Acquire);

            let Some(remaining) = depth.checked_sub(1) else {
                warn!("Ignored unlock on a free actor lock");
                return;
            };

            self.stack_depth.store(remaining, Ordering::Release);
            if remaining == 0 {
                holder.take()
            } else {
                trace!(depth = remaining, "Released nested hold");
                None
            }
        };

        // Gate is released outside the holder guard.
        if let Some(turn) = released {
            debug!(request_id = %turn.request_id, "Released invocation chain");
        }
    }

    /// [`lock`](Self::lock) and return a guard that unlocks when dropped.
    ///
    /// # Errors
    ///
    /// Same as [`lock`](Self::lock).
    pub async fn acquire(&self, request_id: &RequestId) -> LockResult<TurnGuard<'_>> {
        self.lock(request_id).await?;
        Ok(TurnGuard { lock: self })
    }

    /// Like [`acquire`](Self::acquire), but the guard owns an `Arc` of the
    /// lock so it can move into a spawned task.
    ///
    /// # Errors
    ///
    /// Same as [`lock`](Self::lock).
    pub async fn acquire_owned(
        self: Arc<Self>,
        request_id: &RequestId,
    ) -> LockResult<OwnedTurnGuard> {
        self.lock(request_id).await?;
        Ok(OwnedTurnGuard { lock: self })
    }

    /// Run `invocation` while holding a turn for `request_id`.
    ///
    /// The turn is released however the invocation ends: normal return,
    /// panic, or the returned future being dropped.
    ///
    /// # Errors
    ///
    /// Returns the lock error if the turn could not be taken; `invocation` is
    /// not polled in that case.
    pub async fn with_turn<F, T>(&self, request_id: &RequestId, invocation: F) -> LockResult<T>
    where
        F: Future<Output = T>,
    {
        let _turn = self.acquire(request_id).await?;
        Ok(invocation.await)
    }

    /// Id of the chain currently holding the lock.
    #[must_use]
    pub fn holder(&self) -> Option<RequestId> {
        self.holder
            .lock()
            .as_ref()
            .map(|turn| turn.request_id.clone())
    }

    /// Number of nested holds of the current chain.
    #[must_use]
    pub fn stack_depth(&self) -> u32 {
        self.stack_depth.load(Ordering::Acquire)
    }

    /// Configured reentrancy ceiling.
    #[must_use]
    pub const fn max_stack_depth(&self) -> u32 {
        self.max_stack_depth
    }

    /// True while some chain holds the lock.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.stack_depth() > 0
    }
}

impl Default for ActorLock {
    fn default() -> Self {
        Self::from_config(&LockConfig::default())
    }
}

impl std::fmt::Debug for ActorLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorLock")
            .field("holder", &self.holder())
            .field("stack_depth", &self.stack_depth())
            .field("max_stack_depth", &self.max_stack_depth)
            .finish()
    }
}

/// One hold on an [`ActorLock`], released on drop.
#[must_use = "dropping the guard releases the turn immediately"]
#[derive(Debug)]
pub struct TurnGuard<'a> {
    lock: &'a ActorLock,
}

impl TurnGuard<'_> {
    /// The lock this guard holds a turn on.
    #[must_use]
    pub const fn lock(&self) -> &ActorLock {
        self.lock
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

/// Owned variant of [`TurnGuard`].
#[must_use = "dropping the guard releases the turn immediately"]
#[derive(Debug)]
pub struct OwnedTurnGuard {
    lock: Arc<ActorLock>,
}

impl OwnedTurnGuard {
    /// The lock this guard holds a turn on.
    #[must_use]
    pub fn lock(&self) -> &ActorLock {
        &self.lock
    }
}

impl Drop for OwnedTurnGuard {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}
