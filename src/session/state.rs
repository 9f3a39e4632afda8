//! Storefront State Management
//!
//! This module owns the shared catalog and the per-session storefront state.

use super::models::{Intent, Notice, Session, StorefrontView};
use super::reducer::{reduce, Transition};
use crate::catalog::Catalog;
use crate::error::StoreError;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog and all live sessions
pub struct AppState {
    /// Read-only product list, shared by every session.
    pub catalog: Arc<Catalog>,

    /// In-memory sessions, keyed by session id.
    /// The DashMap entry guard serializes intents within one session.
    /// Entries live for the whole process; nothing evicts idle sessions.
    pub sessions: DashMap<String, Session>,
}

/// Outcome of dispatching intents to a session
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub notices: Vec<Notice>,
    pub view: StorefrontView,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an AppState serving the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(Catalog::seeded())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        info!(products = catalog.products().len(), "catalog loaded");

        Self {
            catalog: Arc::new(catalog),
            sessions: DashMap::new(),
        }
    }

    /// Applies `intents` in order to the session, creating it if needed, and
    /// returns the notices raised along with the resulting view.
    pub fn dispatch<I>(&self, session_id: &str, intents: I) -> Dispatch
    where
        I: IntoIterator<Item = Intent>,
    {
        let mut session = self.sessions.entry(session_id.to_string()).or_default();
        let mut notices = Vec::new();

        for intent in intents {
            debug!(session_id, ?intent, "applying intent");
            let Transition {
                session: next,
                notice,
            } = reduce(std::mem::take(&mut *session), intent, &self.catalog);
            *session = next;

            if let Some(notice) = notice {
                info!(session_id, ?notice, "storefront notice");
                notices.push(notice);
            }
        }

        Dispatch {
            notices,
            view: session.view(&self.catalog),
        }
    }

    /// Current view of an existing session
    pub fn view(&self, session_id: &str) -> Result<StorefrontView, StoreError> {
        self.sessions
            .get(session_id)
            .map(|session| session.view(&self.catalog))
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))
    }
}
