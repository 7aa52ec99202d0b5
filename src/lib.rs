//! Backend for the Velocity Black car rental website.
//!
//! The only real business logic lives in [`pricing`]: a pure quote engine
//! over a rental period, a daily rate, and per-day add-ons. Everything
//! else is the surface around it - server-rendered pages, a small JSON
//! API, the persisted theme preference, and explicit presentation state.

pub mod catalog;
pub mod config;
pub mod error;
pub mod prefs;
pub mod pricing;
pub mod routes;
pub mod ui;

use std::sync::Arc;

use catalog::Catalog;
use prefs::ThemeStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Fleet and add-on rate table
    pub catalog: Arc<Catalog>,
    /// Persisted visitor preferences (theme flag)
    pub prefs: Arc<ThemeStore>,
}
