//! Routing
//!
//! Maps browser locations to pages and back, and drives the history API.

use wasm_bindgen::JsValue;

/// Every page the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
    Inventory,
    ItemDetail(u64),
    ItemForm { edit_id: Option<u64> },
    Profile,
    EditProfile,
    Settings,
    NotFound,
}

/// Sidebar entries: (label, route)
pub const NAVIGATION: &[(&str, Route)] = &[
    ("Dashboard", Route::Dashboard),
    ("Inventory", Route::Inventory),
    ("Profile", Route::Profile),
    ("Settings", Route::Settings),
];

impl Route {
    /// Parse a pathname plus query string (with or without the leading `?`)
    pub fn parse(path: &str, query: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Root,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["dashboard"] => Route::Dashboard,
            ["inventory"] => Route::Inventory,
            ["inventory", "add"] => Route::ItemForm {
                edit_id: query_param(query, "id").and_then(|v| v.parse().ok()),
            },
            ["inventory", id] => id.parse().map(Route::ItemDetail).unwrap_or(Route::NotFound),
            ["profile"] => Route::Profile,
            ["edit-profile"] => Route::EditProfile,
            ["settings"] => Route::Settings,
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Inventory => "/inventory".to_string(),
            Route::ItemDetail(id) => format!("/inventory/{}", id),
            Route::ItemForm { edit_id: None } => "/inventory/add".to_string(),
            Route::ItemForm { edit_id: Some(id) } => format!("/inventory/add?id={}", id),
            Route::Profile => "/profile".to_string(),
            Route::EditProfile => "/edit-profile".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Root | Route::Login | Route::Register | Route::NotFound)
    }

    /// Whether the sidebar entry for `self` should be highlighted on `current`
    pub fn is_active_on(&self, current: &Route) -> bool {
        match (self, current) {
            (Route::Inventory, Route::ItemDetail(_) | Route::ItemForm { .. }) => true,
            (Route::Profile, Route::EditProfile) => true,
            _ => self == current,
        }
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

// ========================
// Browser integration
// ========================

/// Route for the address bar as it is now
pub fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Root;
    };
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

/// Update the address bar without reloading
pub fn push_history(route: &Route, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let url = route.to_path();
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(&url))
    };
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[Router] history update failed: {:?}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/", ""), Route::Root);
        assert_eq!(Route::parse("", ""), Route::Root);
        assert_eq!(Route::parse("/login", ""), Route::Login);
        assert_eq!(Route::parse("/dashboard/", ""), Route::Dashboard);
        assert_eq!(Route::parse("/edit-profile", ""), Route::EditProfile);
        assert_eq!(Route::parse("/nope", ""), Route::NotFound);
        assert_eq!(Route::parse("/inventory/4/extra", ""), Route::NotFound);
    }

    #[test]
    fn test_add_wins_over_item_id() {
        assert_eq!(Route::parse("/inventory/add", ""), Route::ItemForm { edit_id: None });
        assert_eq!(Route::parse("/inventory/add", "?id=12"), Route::ItemForm { edit_id: Some(12) });
        assert_eq!(Route::parse("/inventory/add", "from=list&id=3"), Route::ItemForm { edit_id: Some(3) });
        assert_eq!(Route::parse("/inventory/add", "?id=abc"), Route::ItemForm { edit_id: None });
    }

    #[test]
    fn test_item_detail_requires_numeric_id() {
        assert_eq!(Route::parse("/inventory/42", ""), Route::ItemDetail(42));
        assert_eq!(Route::parse("/inventory/forty-two", ""), Route::NotFound);
    }

    #[test]
    fn test_paths_parse_back() {
        let routes = [
            Route::Login,
            Route::Register,
            Route::Dashboard,
            Route::Inventory,
            Route::ItemDetail(7),
            Route::ItemForm { edit_id: None },
            Route::ItemForm { edit_id: Some(7) },
            Route::Profile,
            Route::EditProfile,
            Route::Settings,
        ];
        for route in routes {
            let path = route.to_path();
            let (p, q) = path.split_once('?').unwrap_or((path.as_str(), ""));
            assert_eq!(Route::parse(p, q), route, "{}", path);
        }
    }

    #[test]
    fn test_requires_auth() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Register.requires_auth());
        assert!(!Route::NotFound.requires_auth());
        assert!(Route::Dashboard.requires_auth());
        assert!(Route::ItemDetail(1).requires_auth());
        assert!(Route::Settings.requires_auth());
    }

    #[test]
    fn test_active_navigation() {
        assert!(Route::Inventory.is_active_on(&Route::ItemDetail(3)));
        assert!(Route::Inventory.is_active_on(&Route::ItemForm { edit_id: None }));
        assert!(Route::Profile.is_active_on(&Route::EditProfile));
        assert!(!Route::Dashboard.is_active_on(&Route::Inventory));
    }
}
