//! Keeps the dashboard's notice count and the shared user record in step
//! with the backend.
//!
//! Each sync run issues two independent, best-effort fetches:
//!
//! 1. the overview, whose unread count replaces the local notice count;
//! 2. only when the token sentinel is `"false"` and no user is held, the
//!    overview again, whose user is written to the shared store.
//!
//! Failures are logged and dropped. A result is discarded when the dashboard
//! went away or when a newer run already wrote the same slot; the two slots
//! never cancel each other.

use dioxus::prelude::*;
use shared_types::{FetchError, User, UserOverview};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Token sentinel value meaning "cached session without a user record".
pub const UNAUTHENTICATED_SENTINEL: &str = "false";

/// Source of the current user's overview.
#[allow(async_fn_in_trait)]
pub trait UserApi {
    async fn get_user(&self) -> Result<UserOverview, FetchError>;
}

/// Shared state the sync reads from and writes the user into.
pub trait SessionStore {
    fn current_user(&self) -> Option<User>;
    fn set_user(&self, user: User);
    fn token_sentinel(&self) -> Option<String>;
}

/// Destination for the unread notice count.
pub trait NoticeSink {
    fn set_notices_count(&self, count: u32);
}

impl NoticeSink for Signal<u32> {
    fn set_notices_count(&self, count: u32) {
        let mut slot = *self;
        slot.set(count);
    }
}

/// [`UserApi`] backed by the `get_user` server function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerUserApi;

impl UserApi for ServerUserApi {
    async fn get_user(&self) -> Result<UserOverview, FetchError> {
        server::api::get_user()
            .await
            .map_err(|e| FetchError::from_server_fn_message(&e.to_string()))
    }
}

/// Whether a run must also fetch and store the user record.
pub fn needs_user_fetch(token_sentinel: Option<&str>, user: Option<&User>) -> bool {
    token_sentinel == Some(UNAUTHENTICATED_SENTINEL) && user.is_none()
}

/// Notice count after the notifications panel marked one item read.
pub fn after_notice_read(count: u32) -> u32 {
    count.saturating_sub(1)
}

/// Lifetime of the component that owns the sync runs.
///
/// Every run takes a [`SyncTicket`]. Each state slot remembers the newest
/// run that wrote it; an older run may no longer write that slot. Closing the
/// lifetime blocks every write.
#[derive(Clone, Debug, Default)]
pub struct SyncLifetime {
    generation: Arc<AtomicU64>,
    notices_applied: Arc<AtomicU64>,
    user_applied: Arc<AtomicU64>,
    closed: Arc<AtomicBool>,
}

impl SyncLifetime {
    pub fn begin(&self) -> SyncTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SyncTicket {
            lifetime: self.clone(),
            generation,
        }
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Permission for one sync run to write its results.
#[derive(Clone, Debug)]
pub struct SyncTicket {
    lifetime: SyncLifetime,
    generation: u64,
}

impl SyncTicket {
    /// Take the notice-count slot. Fails after teardown or once a newer run
    /// has written the count.
    pub fn claim_notices(&self) -> bool {
        self.claim(&self.lifetime.notices_applied)
    }

    /// Take the user slot, under the same rule as [`Self::claim_notices`].
    pub fn claim_user(&self) -> bool {
        self.claim(&self.lifetime.user_applied)
    }

    fn claim(&self, applied: &AtomicU64) -> bool {
        if self.lifetime.is_closed() {
            return false;
        }
        applied
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                (self.generation >= last).then_some(self.generation)
            })
            .is_ok()
    }
}

/// What a sync run ended up writing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    pub notices_count: Option<u32>,
    pub user_stored: bool,
}

/// Run both fetches concurrently and apply whatever succeeded.
pub async fn sync_user_notices<A, S, N>(
    api: &A,
    store: &S,
    notices: &N,
    ticket: &SyncTicket,
) -> SyncReport
where
    A: UserApi,
    S: SessionStore,
    N: NoticeSink,
{
    let wants_user = needs_user_fetch(
        store.token_sentinel().as_deref(),
        store.current_user().as_ref(),
    );

    let refresh_notices = async {
        match api.get_user().await {
            Ok(overview) if ticket.claim_notices() => {
                let count = overview.notices_count();
                notices.set_notices_count(count);
                Some(count)
            }
            Ok(_) => {
                tracing::debug!("Discarding stale notices count");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch notices count");
                None
            }
        }
    };

    let restore_user = async {
        if !wants_user {
            return false;
        }
        match api.get_user().await {
            Ok(overview) if ticket.claim_user() => {
                store.set_user(overview.user);
                true
            }
            Ok(_) => {
                tracing::debug!("Discarding stale user record");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch user");
                false
            }
        }
    };

    let (notices_count, user_stored) = futures::join!(refresh_notices, restore_user);
    SyncReport {
        notices_count,
        user_stored,
    }
}

/// Hook: keep a notice count synced for the dashboard.
///
/// Re-runs on mount and whenever the shared user or the token sentinel
/// changes. Runs are spawned in the calling component's scope and can no
/// longer write once it unmounts.
pub fn use_user_notices_sync(auth: crate::auth::AuthState) -> Signal<u32> {
    let notices_count = use_signal(|| 0u32);
    let lifetime = use_hook(SyncLifetime::default);

    {
        let lifetime = lifetime.clone();
        use_drop(move || lifetime.close());
    }

    use_effect(move || {
        // Subscribe to the dependencies; the values are re-read by the run.
        let _ = auth.current_user.read();
        let _ = auth.token.read();

        let ticket = lifetime.begin();
        spawn(async move {
            let report = sync_user_notices(&ServerUserApi, &auth, &notices_count, &ticket).await;
            tracing::debug!(?report, "Dashboard sync finished");
        });
    });

    notices_count
}
