//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The REST wrapper and every guarded page apply identical sign-out and
//! redirect behavior through these helpers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, Session};
use crate::util::storage::KeyValueStore;

pub const LOGIN_PATH: &str = "/login";

/// `/login?redirect=<path>` for `current_path`, or `None` when already on the login page.
pub fn login_redirect_target(current_path: &str) -> Option<String> {
    if current_path == LOGIN_PATH || current_path.starts_with("/login?") {
        return None;
    }
    if current_path.is_empty() || current_path == "/" {
        return Some(LOGIN_PATH.to_owned());
    }
    Some(format!("{LOGIN_PATH}?redirect={}", encode_component(current_path)))
}

/// Response to a 401: drop every stored session key and report where to go.
pub fn handle_unauthorized(store: &impl KeyValueStore, current_path: &str) -> Option<String> {
    Session::clear(store);
    login_redirect_target(current_path)
}

/// Accept only same-origin relative paths as post-login targets.
///
/// Browsers read `\` as `/` and drop tabs and newlines, so `/\host` or
/// `/\t/host` would still leave the origin; both are refused.
pub fn sanitize_redirect(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with(LOGIN_PATH)
                && !path.contains('\\')
                && !path.chars().any(|c| c.is_ascii_control()) =>
        {
            path.to_owned()
        }
        _ => "/".to_owned(),
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Current browser path (`/` on the server).
pub fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}

/// Full-page navigation, used where router state must be discarded.
pub fn hard_redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.session.is_none() {
            let target = login_redirect_target(&current_path()).unwrap_or_else(|| LOGIN_PATH.to_owned());
            navigate(&target, NavigateOptions::default());
        }
    });
}

/// Clear the stored session and go to the login page.
pub fn sign_out(auth: RwSignal<AuthState>, store: &impl KeyValueStore) {
    Session::clear(store);
    auth.update(|a| a.session = None);
    hard_redirect(LOGIN_PATH);
}

/// Client-side navigation to whatever path `target` is set to.
///
/// Event handlers and async tasks only set the signal, so they stay `Copy`
/// and do not have to carry the router's navigate closure around.
pub fn install_navigation(target: RwSignal<Option<String>>) {
    let navigate = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
