//! Sign-in and registration.
//!
//! A successful sign-in stores the session and returns to the `redirect`
//! query target, which must be a same-origin path.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::layout::PageShell;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::auth::{install_navigation, sanitize_redirect};

pub fn validate_login_input(student_id: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let student_id = student_id.trim();
    if student_id.is_empty() || password.is_empty() {
        return Err("Enter your student ID and password.");
    }
    Ok(LoginRequest { student_id: student_id.to_owned(), password: password.to_owned() })
}

pub fn validate_register_input(
    student_id: &str,
    name: &str,
    phone: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let (student_id, name, phone) = (student_id.trim(), name.trim(), phone.trim());
    if student_id.is_empty() || name.is_empty() || phone.is_empty() || password.is_empty() {
        return Err("Student ID, name, phone and password are all required.");
    }
    Ok(RegisterRequest {
        student_id: student_id.to_owned(),
        name: name.to_owned(),
        phone: phone.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let query = use_query_map();
    let go_to = RwSignal::new(None::<String>);
    install_navigation(go_to);

    let registering = RwSignal::new(false);
    let student_id = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_login = move || {
        let payload = match validate_login_input(&student_id.get_untracked(), &password.get_untracked()) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let target = sanitize_redirect(query.read_untracked().get("redirect").as_deref());
        busy.set(true);
        info.set("Signing in...".to_owned());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::{NoticeKind, notify};

            match crate::net::api::login(&payload).await {
                Ok(session) => {
                    notify(notice, NoticeKind::Success, format!("Welcome back, {}.", session.user_name));
                    auth.set(AuthState { session: Some(session), loading: false });
                    info.set(String::new());
                    go_to.set(Some(target));
                }
                Err(e) => info.set(e.user_message("Sign-in failed")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, target, auth, notice);
    };

    let on_register = move || {
        let payload = match validate_register_input(
            &student_id.get_untracked(),
            &name.get_untracked(),
            &phone.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::{NoticeKind, notify};

            match crate::net::api::register(&payload).await {
                Ok(_) => {
                    notify(notice, NoticeKind::Success, "Account created, please sign in.");
                    password.set(String::new());
                    registering.set(false);
                    info.set(String::new());
                }
                Err(e) => info.set(e.user_message("Registration failed")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if registering.get_untracked() {
            on_register();
        } else {
            on_login();
        }
    };

    view! {
        <PageShell>
            <div class="login-page">
                <div class="login-card">
                    <h1>{move || if registering.get() { "Create an account" } else { "Sign in" }}</h1>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Student ID"
                            autocomplete="username"
                            prop:value=move || student_id.get()
                            on:input=move |ev| student_id.set(event_target_value(&ev))
                        />
                        <Show when=move || registering.get()>
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="tel"
                                placeholder="Phone"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </Show>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            autocomplete=move || if registering.get() { "new-password" } else { "current-password" }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if registering.get() { "Register" } else { "Sign in" }}
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message">{move || info.get()}</p>
                    </Show>
                    <button
                        class="btn btn--link"
                        on:click=move |_| {
                            registering.update(|r| *r = !*r);
                            info.set(String::new());
                        }
                    >
                        {move || {
                            if registering.get() {
                                "Already have an account? Sign in"
                            } else {
                                "New here? Create an account"
                            }
                        }}
                    </button>
                </div>
            </div>
        </PageShell>
    }
}
