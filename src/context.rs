//! Application Context
//!
//! Shared state provided via Leptos Context API. Session user, app config,
//! and navigation live here instead of in module-level globals; the App
//! component initializes them once at startup and the only mutation points
//! are login, logout, and admin config saves.

use leptos::prelude::*;

use crate::api;
use crate::models::{AppConfig, User};

/// Which view the main content area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Groups,
    GroupDetail(u32),
    GroupProject(u32),
    Meetings,
    Inventory,
    /// `None` shows the session user's own plan, `Some` another member's
    Research(Option<u32>),
    Admin,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session user; `None` when logged out - read
    pub current_user: ReadSignal<Option<User>>,
    set_current_user: WriteSignal<Option<User>>,
    /// Admin-configured app settings - read
    pub config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    /// Current view - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Trigger to reload view data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        current_user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        config: (ReadSignal<AppConfig>, WriteSignal<AppConfig>),
        route: (ReadSignal<Route>, WriteSignal<Route>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            current_user: current_user.0,
            set_current_user: current_user.1,
            config: config.0,
            set_config: config.1,
            route: route.0,
            set_route: route.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the current view's data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    pub fn is_admin(&self) -> bool {
        self.current_user
            .get()
            .map(|u| u.is_admin)
            .unwrap_or(false)
    }

    /// Record a successful login
    pub fn sign_in(&self, user: User) {
        self.set_current_user.set(Some(user));
        self.set_route.set(Route::Dashboard);
    }

    /// Drop the session and return to the login screen
    pub fn sign_out(&self) {
        api::clear_token();
        self.set_current_user.set(None);
        self.set_route.set(Route::Dashboard);
    }

    pub fn apply_config(&self, config: AppConfig) {
        self.set_config.set(config);
    }
}
