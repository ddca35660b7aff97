//! Per-user command cooldowns that expire on their own.
//!
//! Every [`CooldownRegistry::register`] call spawns a timer task that removes
//! the lockout when its deadline passes, so entries for members who never
//! come back do not linger. Timers run on `tokio::time`, which lets tests
//! drive them with a paused clock.

use bobby_common::UserId;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

/// Errors that can occur during cooldown operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CooldownError {
    /// A lockout must last for a non-zero amount of time.
    #[error("Cooldown for command '{command}' must be longer than zero")]
    InvalidDuration {
        /// Command the zero duration was supplied for.
        command: String,
    },

    /// The deadline would not fit in the monotonic clock.
    #[error("Cooldown for command '{command}' is too long")]
    DurationOutOfRange {
        /// Command the oversized duration was supplied for.
        command: String,
    },

    /// The registry no longer runs expiry timers.
    #[error("Cooldown registry has been shut down")]
    ShutDown,
}

/// A member's temporary restriction from one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockout {
    /// Command the member is locked out of.
    pub command: String,
    /// Restricted member.
    pub member: UserId,
    /// Deadline after which the member may use the command again.
    pub expires_at: Instant,
    generation: u64,
}

type LockoutMap = DashMap<String, HashMap<UserId, Lockout>>;

/// Tracks which members are locked out of which commands.
///
/// Maps command name to member to [`Lockout`]. A command whose last lockout
/// expires is dropped from the outer map.
#[derive(Debug)]
pub struct CooldownRegistry {
    lockouts: Arc<LockoutMap>,
    next_generation: AtomicU64,
    timers: TaskTracker,
    cancel: CancellationToken,
}

impl CooldownRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            lockouts: Arc::new(DashMap::new()),
            next_generation: AtomicU64::new(0),
            timers: TaskTracker::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Lock `member` out of `command` for `duration` and schedule the expiry.
    ///
    /// An existing lockout for the same pair is replaced; callers are expected
    /// to check [`is_locked_out`](Self::is_locked_out) first.
    ///
    /// Fails once [`shutdown`](Self::shutdown) has run, since the lockout
    /// could never expire. Must be called from within a Tokio runtime.
    pub fn register(
        &self,
        command: &str,
        member: UserId,
        duration: Duration,
    ) -> Result<(), CooldownError> {
        if duration.is_zero() {
            return Err(CooldownError::InvalidDuration {
                command: command.to_string(),
            });
        }

        if self.cancel.is_cancelled() {
            return Err(CooldownError::ShutDown);
        }
        let Some(expires_at) = Instant::now().checked_add(duration) else {
            return Err(CooldownError::DurationOutOfRange {
                command: command.to_string(),
            });
        };
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let lockout = Lockout {
            command: command.to_string(),
            member,
            expires_at,
            generation,
        };

        let replaced = self
            .lockouts
            .entry(command.to_string())
            .or_default()
            .insert(member, lockout)
            .is_some();
        if replaced {
            warn!("Replaced active lockout for user {} on command '{}'", member, command);
        }

        debug!(
            "Locked user {} out of command '{}' for {}s",
            member,
            command,
            duration.as_secs()
        );

        let lockouts = Arc::clone(&self.lockouts);
        let cancel = self.cancel.clone();
        let command = command.to_string();
        self.timers.spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                () = time::sleep_until(expires_at) => {
                    expire(&lockouts, &command, member, generation);
                }
            }
        });

        Ok(())
    }

    /// Whether `member` is currently locked out of `command`.
    pub fn is_locked_out(&self, command: &str, member: UserId) -> bool {
        self.expires_at(command, member)
            .is_some_and(|deadline| deadline > Instant::now())
    }

    /// Time left on the lockout, floored to whole seconds. Zero when the
    /// member is not locked out.
    pub fn remaining(&self, command: &str, member: UserId) -> Duration {
        let Some(deadline) = self.expires_at(command, member) else {
            return Duration::ZERO;
        };

        let left = deadline.saturating_duration_since(Instant::now());
        Duration::from_secs(left.as_secs())
    }

    /// Snapshot of the lockout for the pair, if one is tracked.
    pub fn lockout(&self, command: &str, member: UserId) -> Option<Lockout> {
        self.lockouts
            .get(command)
            .and_then(|members| members.get(&member).cloned())
    }

    /// Number of commands with at least one tracked lockout.
    pub fn tracked_commands(&self) -> usize {
        self.lockouts.len()
    }

    /// Number of members tracked for `command`.
    pub fn tracked_members(&self, command: &str) -> usize {
        self.lockouts.get(command).map_or(0, |members| members.len())
    }

    /// Number of expiry timers that have not fired yet.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Cancel every pending expiry timer and wait for them to finish.
    ///
    /// Lockouts still tracked at this point are never expired.
    pub async fn shutdown(&self) {
        let pending = self.timers.len();
        self.cancel.cancel();
        self.timers.close();
        self.timers.wait().await;
        debug!("Cooldown registry shut down, cancelled {} timers", pending);
    }

    fn expires_at(&self, command: &str, member: UserId) -> Option<Instant> {
        self.lockouts
            .get(command)
            .and_then(|members| members.get(&member).map(|lockout| lockout.expires_at))
    }
}

impl Default for CooldownRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CooldownRegistry {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn expire(lockouts: &LockoutMap, command: &str, member: UserId, generation: u64) {
    if let Some(mut members) = lockouts.get_mut(command) {
        // A newer registration for the same pair owns its own timer.
        if members
            .get(&member)
            .is_some_and(|lockout| lockout.generation == generation)
        {
            members.remove(&member);
            debug!("Cooldown expired for user {} on command '{}'", member, command);
        }
    }

    lockouts.remove_if(command, |_, members| members.is_empty());
}
