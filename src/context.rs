//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::error::ApiError;
use crate::router::{self, Route};
use crate::session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub route: ReadSignal<Route>,
    /// Page currently shown - write
    set_route: WriteSignal<Route>,
    /// Bumped after a login or logout so the shell re-reads the session
    pub session_version: ReadSignal<u32>,
    set_session_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        session_version: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            session_version: session_version.0,
            set_session_version: session_version.1,
        }
    }

    /// Go to a page, adding a history entry
    pub fn navigate(&self, route: Route) {
        router::push_history(&route, false);
        self.set_route.set(route);
    }

    /// Go to a page, replacing the current history entry
    pub fn redirect(&self, route: Route) {
        router::push_history(&route, true);
        self.set_route.set(route);
    }

    /// Re-read the address bar (browser back/forward)
    pub fn sync_with_location(&self) {
        self.set_route.set(router::current_route());
    }

    pub fn session_changed(&self) {
        self.set_session_version.update(|v| *v += 1);
    }

    /// Store a fresh token and enter the app
    pub fn sign_in(&self, token: &str, remember: bool) {
        session::store_token(token, remember);
        self.session_changed();
        self.navigate(Route::Dashboard);
    }

    /// Drop the token and land on `destination`
    pub fn sign_out(&self, destination: Route) {
        session::clear_token();
        self.session_changed();
        self.redirect(destination);
    }

    /// Log a failed request; an expired session sends the user back to login
    pub fn report(&self, tag: &str, error: &ApiError) {
        web_sys::console::error_1(&format!("[{}] {}", tag, error).into());
        if error.is_unauthorized() {
            self.sign_out(Route::Login);
        }
    }
}
