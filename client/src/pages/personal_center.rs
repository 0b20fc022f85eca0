//! Personal center: profile, password, and the user's orders, sales and
//! listings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each table loads independently and can be refreshed on its own. Deletes go
//! through a confirmation dialog and only touch the table once the backend
//! has confirmed.

#[cfg(test)]
#[path = "personal_center_test.rs"]
mod personal_center_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::PageShell;
use crate::components::status_tag::StatusTag;
use crate::net::types::{Order, PasswordChange, PaymentStatus, ProfileUpdate};
use crate::pages::book_detail::payment_path;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::state::personal::{Collection, PersonalState};
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{
    book_status_label, book_status_tone, order_status_label, order_status_tone, payment_status_label, price,
};

/// Minimum length of a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Profile,
    Orders,
    Sales,
    Listings,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Orders, Self::Sales, Self::Listings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Orders => "My orders",
            Self::Sales => "My sales",
            Self::Listings => "My listings",
        }
    }

    pub fn collection(self) -> Option<Collection> {
        match self {
            Self::Profile => None,
            Self::Orders => Some(Collection::Orders),
            Self::Sales => Some(Collection::Sales),
            Self::Listings => Some(Collection::Listings),
        }
    }
}

pub fn validate_profile_form(name: &str, phone: &str) -> Result<ProfileUpdate, &'static str> {
    let (name, phone) = (name.trim(), phone.trim());
    if name.is_empty() || phone.is_empty() {
        return Err("Name and phone are both required.");
    }
    Ok(ProfileUpdate { name: name.to_owned(), phone: phone.to_owned() })
}

pub fn validate_password_form(current: &str, new: &str, confirm: &str) -> Result<PasswordChange, &'static str> {
    if current.is_empty() {
        return Err("Enter your current password.");
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err("The new password needs at least 6 characters.");
    }
    if new != confirm {
        return Err("The two new passwords do not match.");
    }
    Ok(PasswordChange { old_password: current.to_owned(), new_password: new.to_owned() })
}

/// Question shown in the delete confirmation.
pub fn delete_prompt(collection: Collection) -> String {
    format!("Delete this {}? This cannot be undone.", collection.noun())
}

fn load_profile(
    state: RwSignal<PersonalState>,
    notice: RwSignal<NoticeState>,
    name: RwSignal<String>,
    phone: RwSignal<String>,
) {
    state.update(PersonalState::begin_profile_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::notice::{NoticeKind, notify};

        let result = crate::net::api::fetch_profile().await;
        if let Ok(profile) = &result {
            name.set(profile.name.clone());
            phone.set(profile.phone.clone());
        }
        state.update(|s| s.finish_profile_load(result));
        if let Some(message) = state.with_untracked(|s| s.profile_error.clone()) {
            log::warn!("profile load failed: {message}");
            notify(notice, NoticeKind::Error, message);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (notice, name, phone);
}

fn load_collection(state: RwSignal<PersonalState>, notice: RwSignal<NoticeState>, collection: Collection) {
    state.update(|s| s.set_loading(collection, true));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;
        use crate::state::notice::{NoticeKind, notify};

        let failed = match collection {
            Collection::Orders => api::fetch_my_orders().await.map(|rows| state.update(|s| s.orders = rows)),
            Collection::Sales => api::fetch_my_sales().await.map(|rows| state.update(|s| s.sales = rows)),
            Collection::Listings => api::fetch_my_books().await.map(|rows| state.update(|s| s.listings = rows)),
        }
        .err();
        if let Some(e) = failed {
            notify(notice, NoticeKind::Error, e.user_message(&format!("Failed to load your {}s", collection.noun())));
        }
        state.update(|s| s.set_loading(collection, false));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = notice;
}

#[component]
pub fn PersonalCenterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());

    let state = RwSignal::new(PersonalState::default());
    let tab = RwSignal::new(Tab::Profile);
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let saving_profile = RwSignal::new(false);
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let changing_password = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<(Collection, String)>);
    let deleting = RwSignal::new(false);

    Effect::new(move || {
        load_profile(state, notice, name, phone);
        for collection in [Collection::Orders, Collection::Sales, Collection::Listings] {
            load_collection(state, notice, collection);
        }
    });

    let on_save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving_profile.get_untracked() {
            return;
        }
        let payload = match validate_profile_form(&name.get_untracked(), &phone.get_untracked()) {
            Ok(payload) => payload,
            Err(message) => {
                crate::state::notice::notify(notice, crate::state::notice::NoticeKind::Error, message);
                return;
            }
        };
        saving_profile.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::{NoticeKind, notify};

            match crate::net::api::update_profile(&payload).await {
                Ok(profile) => {
                    auth.update(|a| {
                        if let Some(session) = a.session.as_mut() {
                            session.user_name.clone_from(&profile.name);
                        }
                    });
                    state.update(|s| s.profile = Some(profile));
                    notify(notice, NoticeKind::Success, "Profile saved.");
                }
                Err(e) => notify(notice, NoticeKind::Error, e.user_message("Saving the profile failed")),
            }
            saving_profile.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if changing_password.get_untracked() {
            return;
        }
        let payload = match validate_password_form(
            &current_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                crate::state::notice::notify(notice, crate::state::notice::NoticeKind::Error, message);
                return;
            }
        };
        changing_password.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::{NoticeKind, notify};

            match crate::net::api::change_password(&payload).await {
                Ok(()) => {
                    notify(notice, NoticeKind::Success, "Password changed, please sign in again.");
                    crate::util::auth::sign_out(auth, &crate::util::storage::BrowserStorage);
                }
                Err(e) => {
                    notify(notice, NoticeKind::Error, e.user_message("Changing the password failed"));
                    changing_password.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let request_delete = move |collection: Collection, id: String| pending_delete.set(Some((collection, id)));

    let on_delete_cancel = Callback::new(move |()| {
        if !deleting.get_untracked() {
            pending_delete.set(None);
        }
    });
    let on_delete_confirm = Callback::new(move |()| {
        let Some((collection, id)) = pending_delete.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;
            use crate::state::notice::{NoticeKind, notify};

            let result = match collection {
                Collection::Orders | Collection::Sales => api::delete_order(&id).await,
                Collection::Listings => api::delete_my_book(&id).await,
            };
            let mut removed = false;
            state.update(|s| removed = s.apply_delete(collection, &id, &result));
            match result {
                Ok(()) if removed => notify(notice, NoticeKind::Success, "Deleted."),
                Ok(()) => log::warn!("deleted {} {id} was not in the table", collection.noun()),
                Err(e) => notify(notice, NoticeKind::Error, e.user_message("Delete failed")),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (collection, id);
    });

    view! {
        <PageShell>
            <section class="personal-page">
                <h1>"My account"</h1>
                <nav class="tabs">
                    {Tab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == t
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                    {t
                                        .collection()
                                        .map(|c| {
                                            view! {
                                                <span class="tabs__count">{move || state.with(|s| s.len(c))}</span>
                                            }
                                        })}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <Show when=move || tab.get() == Tab::Profile>
                    <div class="personal-page__profile">
                        <Show when=move || state.with(|s| s.profile_error.is_some())>
                            <p class="page-error">
                                {move || state.with(|s| s.profile_error.clone().unwrap_or_default())} " "
                                <button class="btn btn--link" on:click=move |_| load_profile(state, notice, name, phone)>
                                    "Retry"
                                </button>
                            </p>
                        </Show>
                        <dl>
                            <dt>"Student ID"</dt>
                            <dd>
                                {move || {
                                    state.with(|s| s.profile.as_ref().map(|p| p.student_id.clone()).unwrap_or_default())
                                }}
                            </dd>
                            <dt>"Credit score"</dt>
                            <dd>{move || state.with(|s| s.profile.as_ref().map(|p| p.credit_score).unwrap_or_default())}</dd>
                        </dl>
                        <form class="personal-page__form" on:submit=on_save_profile>
                            <h2>"Edit profile"</h2>
                            <label>
                                "Name"
                                <input
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Phone"
                                <input
                                    type="tel"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || saving_profile.get()>
                                "Save"
                            </button>
                        </form>
                        <form class="personal-page__form" on:submit=on_change_password>
                            <h2>"Change password"</h2>
                            <input
                                type="password"
                                placeholder="Current password"
                                autocomplete="current-password"
                                prop:value=move || current_password.get()
                                on:input=move |ev| current_password.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder="New password (at least 6 characters)"
                                autocomplete="new-password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder="Repeat new password"
                                autocomplete="new-password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                            <button class="btn" type="submit" disabled=move || changing_password.get()>
                                "Change password"
                            </button>
                        </form>
                    </div>
                </Show>

                {move || {
                    tab.get()
                        .collection()
                        .map(|collection| {
                            view! {
                                <div class="personal-page__table">
                                    <header class="page-header">
                                        <h2>{tab.get_untracked().label()}</h2>
                                        <button
                                            class="btn"
                                            disabled=move || state.with(|s| s.is_loading(collection))
                                            on:click=move |_| load_collection(state, notice, collection)
                                        >
                                            {move || {
                                                if state.with(|s| s.is_loading(collection)) { "Loading..." } else { "Refresh" }
                                            }}
                                        </button>
                                    </header>
                                    {move || match collection {
                                        Collection::Orders => {
                                            order_rows(state.with(|s| s.orders.clone()), collection, request_delete)
                                        }
                                        Collection::Sales => {
                                            order_rows(state.with(|s| s.sales.clone()), collection, request_delete)
                                        }
                                        Collection::Listings => listing_rows(state, request_delete),
                                    }}
                                </div>
                            }
                        })
                }}

                <Show when=move || pending_delete.get().is_some()>
                    <ConfirmDialog
                        title="Confirm delete"
                        message={pending_delete.get_untracked().map(|(c, _)| delete_prompt(c)).unwrap_or_default()}
                        busy=deleting
                        on_confirm=on_delete_confirm
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </section>
        </PageShell>
    }
}

fn order_rows<F>(orders: Vec<Order>, collection: Collection, request_delete: F) -> AnyView
where
    F: Fn(Collection, String) + Copy + 'static,
{
    if orders.is_empty() {
        return view! { <p class="empty-state">"Nothing here yet."</p> }.into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Order"</th>
                    <th>"Status"</th>
                    <th>"Payment"</th>
                    <th>"Total"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {orders
                    .into_iter()
                    .map(|order| {
                        let awaiting = collection == Collection::Orders && order.payment_status == PaymentStatus::Pending;
                        let pay_href = payment_path(&order.id);
                        let id = order.id.clone();
                        view! {
                            <tr>
                                <td>{order.order_number}</td>
                                <td>
                                    <StatusTag label=order_status_label(order.status) tone=order_status_tone(order.status) />
                                </td>
                                <td>{payment_status_label(order.payment_status)}</td>
                                <td>{price(order.total_amount)}</td>
                                <td class="data-table__actions">
                                    {awaiting.then(|| view! { <a class="btn btn--primary" href=pay_href>"Pay"</a> })}
                                    <button class="btn btn--danger" on:click=move |_| request_delete(collection, id.clone())>
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

fn listing_rows<F>(state: RwSignal<PersonalState>, request_delete: F) -> AnyView
where
    F: Fn(Collection, String) + Copy + 'static,
{
    let listings = state.with(|s| s.listings.clone());
    if listings.is_empty() {
        return view! {
            <p class="empty-state">"You have not listed any books. " <a href="/publish">"Sell one"</a></p>
        }
        .into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Price"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {listings
                    .into_iter()
                    .map(|book| {
                        let href = format!("/books/{}", book.id);
                        let id = book.id.clone();
                        view! {
                            <tr>
                                <td>
                                    <a href=href>{book.title}</a>
                                </td>
                                <td>{price(book.selling_price)}</td>
                                <td>
                                    <StatusTag label=book_status_label(book.status) tone=book_status_tone(book.status) />
                                </td>
                                <td class="data-table__actions">
                                    <button
                                        class="btn btn--danger"
                                        on:click=move |_| request_delete(Collection::Listings, id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
