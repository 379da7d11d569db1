//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is built once at startup and handed to the shell. It wires the
//! client store, the network boundary (mock by default, with an optional
//! real upstream behind the bypass), the session manager, and the activity
//! hub — an explicit object graph with a start/stop lifecycle instead of a
//! process-wide singleton.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::net::fixtures::InMemoryUserStore;
use crate::net::http::HttpTransport;
use crate::net::mock::MockNetwork;
use crate::net::ApiTransport;
use crate::services::activity::ActivityHub;
use crate::services::session::SessionManager;
use crate::storage::{ClientStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<ClientStore>,
    pub transport: Arc<dyn ApiTransport>,
    pub sessions: SessionManager,
    pub activity: Arc<ActivityHub>,
}

impl AppState {
    /// Build the full object graph and restore any persisted session.
    pub fn new(config: AppConfig) -> Result<Self, StoreError> {
        let store = Arc::new(ClientStore::open(&config.state_dir)?);
        Ok(Self::with_store(config, store))
    }

    fn with_store(config: AppConfig, store: Arc<ClientStore>) -> Self {
        let users = Arc::new(InMemoryUserStore::seeded());
        let mut mock = MockNetwork::new(users);
        if let Some(url) = &config.upstream_api_url {
            mock = mock.with_upstream(Arc::new(HttpTransport::new(url.clone())));
        }
        let transport: Arc<dyn ApiTransport> = Arc::new(mock);

        let sessions = SessionManager::new(store.clone(), transport.clone());
        sessions.restore();

        let activity = Arc::new(ActivityHub::new());
        sessions.attach_activity(activity.as_ref());

        Self { config, store, transport, sessions, activity }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
