//! Session Token
//!
//! Bearer token persistence. "Remember me" keeps the token in local storage,
//! otherwise it lives in session storage. Only one of the two holds it.

use crate::storage::{self, Area};

const TOKEN_KEY: &str = "token";

/// Current token, preferring the remembered one
pub fn token() -> Option<String> {
    storage::get(Area::Local, TOKEN_KEY)
        .or_else(|| storage::get(Area::Session, TOKEN_KEY))
        .filter(|t| !t.trim().is_empty())
}

pub fn store_token(token: &str, remember: bool) {
    let (keep, drop) = placement(remember);
    storage::set(keep, TOKEN_KEY, token);
    storage::remove(drop, TOKEN_KEY);
}

pub fn clear_token() {
    storage::remove(Area::Local, TOKEN_KEY);
    storage::remove(Area::Session, TOKEN_KEY);
}

pub fn is_authenticated() -> bool {
    token().is_some()
}

/// (area to write, area to clear)
fn placement(remember: bool) -> (Area, Area) {
    if remember {
        (Area::Local, Area::Session)
    } else {
        (Area::Session, Area::Local)
    }
}
