//! Session manager — the authenticated/unauthenticated state machine.
//!
//! ARCHITECTURE
//! ============
//! The manager exclusively owns the session record. Login and register go
//! through the network boundary; everything they persist (user record, keep
//! flag, auth-token cookie) flows through the client store so the route
//! guard sees a consistent picture. An idle watchdog task polls the manager
//! and forces a logout once the inactivity threshold is crossed.
//!
//! TRADE-OFFS
//! ==========
//! Every login/register attempt carries a monotonically increasing id, and
//! a logout (or a newer attempt) raises the acceptance barrier. A response
//! resolving behind the barrier is rejected instead of re-authenticating a
//! session the user already left.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};
use uuid::Uuid;

use crate::net::api::{self, AuthUser};
use crate::net::ApiTransport;
use crate::services::activity::ActivitySource;
use crate::storage::{ClientStore, StoreError};

/// The client-held record of the currently authenticated actor.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: AuthUser,
    pub keep_session_alive: bool,
    pub last_activity_at: Instant,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("registration failed; the email may already be in use")]
    RegistrationFailed,
    #[error("sign-in superseded by a newer sign-in or a sign-out")]
    Superseded,
    #[error("session could not be persisted: {0}")]
    Persistence(#[from] StoreError),
}

struct ManagerInner {
    session: Option<Session>,
    /// Id of the most recently issued login/register attempt.
    attempt_seq: u64,
    /// Attempts at or below this id are void (raised by logout).
    barrier: u64,
}

/// Owner of the auth state machine. Cheap to clone; all clones share state.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Mutex<ManagerInner>>,
    store: Arc<ClientStore>,
    transport: Arc<dyn ApiTransport>,
}

impl SessionManager {
    #[must_use]
    pub fn new(store: Arc<ClientStore>, transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ManagerInner { session: None, attempt_seq: 0, barrier: 0 })),
            store,
            transport,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManagerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // STATE INSPECTION
    // =========================================================================

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().session.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<AuthUser> {
        self.lock().session.as_ref().map(|s| s.user.clone())
    }

    /// Snapshot of the current session, if any.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    // =========================================================================
    // LOGIN / REGISTER / LOGOUT
    // =========================================================================

    /// Submit credentials to the network boundary and authenticate on
    /// success. Transport failures collapse into `InvalidCredentials`; the
    /// caller only ever learns that the sign-in did not happen.
    pub async fn login(&self, email: &str, password: &str, keep_session_alive: bool) -> Result<AuthUser, AuthError> {
        let attempt = self.begin_attempt();
        info!(%email, keep_session_alive, "login attempt");

        let user = match api::login(self.transport.as_ref(), email, password).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(%email, "login rejected");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                warn!(error = %e, "login transport failure");
                return Err(AuthError::InvalidCredentials);
            }
        };

        self.commit_auth(attempt, user, keep_session_alive)
    }

    /// Create an account and authenticate. A registered session is never
    /// kept alive across restarts.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let attempt = self.begin_attempt();
        info!(%email, "registration attempt");

        let user = match api::register(self.transport.as_ref(), name, email, password).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(%email, "registration rejected");
                return Err(AuthError::RegistrationFailed);
            }
            Err(e) => {
                warn!(error = %e, "registration transport failure");
                return Err(AuthError::RegistrationFailed);
            }
        };

        self.commit_auth(attempt, user, false)
    }

    /// Drop the session, clear everything persisted, and void in-flight
    /// attempts. Calling while anonymous is a no-op.
    pub fn logout(&self) {
        let had_session = {
            let mut inner = self.lock();
            inner.barrier = inner.attempt_seq;
            inner.session.take().is_some()
        };

        // Store failure only costs a stale record on disk; the in-memory
        // state is already anonymous either way.
        if let Err(e) = self.store.clear_session() {
            warn!(error = %e, "failed to clear persisted session");
        }
        if had_session {
            info!("logged out");
        }
    }

    /// Issue a new attempt id. Exposed to tests so stale-resolution
    /// orderings can be driven deterministically.
    pub(crate) fn begin_attempt(&self) -> u64 {
        let mut inner = self.lock();
        inner.attempt_seq += 1;
        inner.attempt_seq
    }

    /// Make `user` the authenticated actor, unless this attempt has been
    /// overtaken by a newer one or voided by a logout.
    pub(crate) fn commit_auth(&self, attempt: u64, user: AuthUser, keep_session_alive: bool) -> Result<AuthUser, AuthError> {
        let mut inner = self.lock();
        if attempt <= inner.barrier || attempt < inner.attempt_seq {
            info!(attempt, "discarding stale auth response");
            return Err(AuthError::Superseded);
        }

        let token = generate_token();
        self.store.save_session(&user, keep_session_alive, &token)?;
        inner.session = Some(Session {
            user: user.clone(),
            keep_session_alive,
            last_activity_at: Instant::now(),
        });
        info!(id = user.id, email = %user.email, "authenticated");
        Ok(user)
    }

    // =========================================================================
    // RESTORE ON START
    // =========================================================================

    /// Rehydrate a persisted session without touching the network. Only
    /// sessions saved with the keep flag survive a restart; anything else is
    /// swept so the token cookie cannot outlive its session.
    pub fn restore(&self) -> bool {
        match (self.store.persisted_user(), self.store.keep_logged_in()) {
            (Some(user), true) => {
                info!(id = user.id, email = %user.email, "restored persisted session");
                self.lock().session = Some(Session {
                    user,
                    keep_session_alive: true,
                    last_activity_at: Instant::now(),
                });
                true
            }
            (Some(_), false) => {
                if let Err(e) = self.store.clear_session() {
                    warn!(error = %e, "failed to sweep expired session");
                }
                false
            }
            (None, _) => false,
        }
    }

    // =========================================================================
    // ACTIVITY + IDLE EXPIRY
    // =========================================================================

    /// Stamp the activity timestamp. Does nothing while anonymous.
    pub fn record_activity(&self) {
        self.record_activity_at(Instant::now());
    }

    pub(crate) fn record_activity_at(&self, now: Instant) {
        if let Some(session) = self.lock().session.as_mut() {
            session.last_activity_at = now;
        }
    }

    /// Subscribe an activity handler that keeps this session fresh. Returns
    /// the subscription id so the shell can detach on teardown.
    pub fn attach_activity(&self, source: &dyn ActivitySource) -> Uuid {
        let manager = self.clone();
        source.subscribe(Arc::new(move |_signal| manager.record_activity()))
    }

    /// Force a logout if the session has been idle past `threshold`.
    /// Sessions marked keep-alive never expire. Returns whether a logout
    /// happened.
    pub fn expire_if_idle(&self, threshold: Duration) -> bool {
        self.expire_if_idle_at(Instant::now(), threshold)
    }

    pub(crate) fn expire_if_idle_at(&self, now: Instant, threshold: Duration) -> bool {
        let expired = {
            let inner = self.lock();
            match &inner.session {
                Some(s) if !s.keep_session_alive => now.duration_since(s.last_activity_at) > threshold,
                _ => false,
            }
        };

        if expired {
            info!(threshold_secs = threshold.as_secs(), "session idle past threshold; logging out");
            self.logout();
        }
        expired
    }
}

/// Spawn the recurring idle check. Returns a handle for shutdown.
pub fn spawn_idle_watchdog(
    manager: SessionManager,
    poll_interval: Duration,
    idle_threshold: Duration,
) -> JoinHandle<()> {
    info!(
        poll_interval_ms = poll_interval.as_millis() as u64,
        idle_threshold_secs = idle_threshold.as_secs(),
        "idle watchdog configured"
    );
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            manager.expire_if_idle(idle_threshold);
        }
    })
}

// =============================================================================
// TOKEN GENERATION
// =============================================================================

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Opaque random 32-byte hex token written into the auth cookie. The guard
/// only ever tests presence; the value exists so the cookie is not a raw,
/// guessable user id.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
