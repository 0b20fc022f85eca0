//! Page chrome: header navigation, flash notice and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page renders inside `PageShell`, so the signed-in name, the
//! logout action and the transient notice line look the same everywhere.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::auth::{LOGIN_PATH, sign_out};
use crate::util::storage::BrowserStorage;

/// Top-level navigation destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Home,
    Books,
    Publish,
    Delivery,
    Personal,
}

impl NavKey {
    pub const ALL: [Self; 5] = [Self::Home, Self::Books, Self::Publish, Self::Delivery, Self::Personal];

    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Books => "/books",
            Self::Publish => "/publish",
            Self::Delivery => "/delivery",
            Self::Personal => "/personal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Books => "Books",
            Self::Publish => "Sell a book",
            Self::Delivery => "Delivery board",
            Self::Personal => "My account",
        }
    }
}

/// Which nav entry to highlight for `path`.
///
/// Book detail pages highlight "Books"; payment pages belong to the buyer's
/// account. Unknown paths highlight nothing.
pub fn nav_key_for_path(path: &str) -> Option<NavKey> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    match first {
        "" => Some(NavKey::Home),
        "books" => Some(NavKey::Books),
        "publish" => Some(NavKey::Publish),
        "delivery" => Some(NavKey::Delivery),
        "personal" | "orders" => Some(NavKey::Personal),
        _ => None,
    }
}

#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let location = use_location();
    let active = Memo::new(move |_| nav_key_for_path(&location.pathname.get()));

    let display_name = move || auth.get().display_name().map(str::to_owned);
    let on_logout = move |_| sign_out(auth, &BrowserStorage);

    view! {
        <div class="page-shell">
            <header class="site-header">
                <a class="site-header__brand" href="/">
                    "Campus Books"
                </a>
                <nav class="site-header__nav">
                    {NavKey::ALL
                        .into_iter()
                        .map(|key| {
                            view! {
                                <a
                                    class="site-header__link"
                                    class:site-header__link--active=move || active.get() == Some(key)
                                    href=key.href()
                                >
                                    {key.label()}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <span class="site-header__spacer"></span>
                <Show
                    when=move || display_name().is_some()
                    fallback=move || {
                        view! {
                            <a class="btn btn--primary" href=LOGIN_PATH>
                                "Sign in"
                            </a>
                        }
                    }
                >
                    <span class="site-header__user">{move || display_name().unwrap_or_default()}</span>
                    <button class="btn site-header__logout" on:click=on_logout>
                        "Sign out"
                    </button>
                </Show>
            </header>
            {move || {
                notice
                    .get()
                    .current
                    .map(|n| {
                        view! {
                            <div class=n.kind.css_class() role="status">
                                {n.text}
                            </div>
                        }
                    })
            }}
            <main class="page-shell__main">{children()}</main>
            <footer class="site-footer">"Campus Books · second-hand textbooks between students"</footer>
        </div>
    }
}
