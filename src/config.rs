//! Client Configuration
//!
//! API location and local display preferences.

use crate::models::Role;
use crate::storage::{self, Area};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

const API_BASE_URL_KEY: &str = "api_base_url";
const THEME_KEY: &str = "theme";
const ROLE_KEY: &str = "role";

/// Where API requests go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Stored override, then build-time `INVENTORY_API_URL`, then the default
    pub fn load() -> Self {
        let stored = storage::get(Area::Local, API_BASE_URL_KEY);
        Self::resolve(stored.as_deref(), option_env!("INVENTORY_API_URL"))
    }

    fn resolve(stored: Option<&str>, build_time: Option<&str>) -> Self {
        let base_url = stored
            .and_then(normalize_base_url)
            .or_else(|| build_time.and_then(normalize_base_url))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self { base_url }
    }

    /// `base_url` + `path` with exactly one slash between them
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn is_overridden() -> bool {
        storage::get(Area::Local, API_BASE_URL_KEY).is_some()
    }
}

/// Trim, require an http(s) scheme, drop trailing slashes
pub fn normalize_base_url(input: &str) -> Option<String> {
    let trimmed = input.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))?;
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Persist a base URL override; returns the normalized value
pub fn save_base_url(input: &str) -> Option<String> {
    let url = normalize_base_url(input)?;
    storage::set(Area::Local, API_BASE_URL_KEY, &url);
    Some(url)
}

pub fn reset_base_url() {
    storage::remove(Area::Local, API_BASE_URL_KEY);
}

// ========================
// Theme
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Class set on the document element
    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn load() -> Self {
        storage::get(Area::Local, THEME_KEY)
            .map(|t| Theme::parse(&t))
            .unwrap_or_default()
    }

    pub fn save(&self) {
        storage::set(Area::Local, THEME_KEY, self.as_str());
    }

    pub fn apply(&self) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            root.set_class_name(self.root_class());
        }
    }
}

// ========================
// Self-selected role
// ========================

/// Role the user picked for themselves; display only, the API enforces roles
pub fn load_role_preference() -> Role {
    storage::get(Area::Local, ROLE_KEY)
        .map(|r| Role::parse(&r))
        .unwrap_or_default()
}

pub fn save_role_preference(role: Role) {
    storage::set(Area::Local, ROLE_KEY, role.as_str());
}
