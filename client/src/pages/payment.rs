//! Order payment page: countdown, pay, cancel and delivery request.
//!
//! SYSTEM CONTEXT
//! ==============
//! The order is fetched first and its book second; a missing book replaces
//! the book summary with its error line. The countdown re-renders every second from the order's
//! `payment_due_at` and never acts on its own, the backend owns expiry.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::layout::PageShell;
use crate::components::status_tag::StatusTag;
use crate::net::types::{DeliveryMethod, DeliveryRequest, PaymentMethod};
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::state::payment::PaymentState;
use crate::util::auth::{install_navigation, install_unauth_redirect};
use crate::util::countdown::{TICK, now_ms};
use crate::util::format::{
    delivery_method_label, or_placeholder, order_status_label, order_status_tone, payment_method_label,
    payment_status_label, price,
};
use crate::util::poll::install_interval;

/// Build a delivery request from the form, both locations required.
pub fn validate_delivery_request(pickup: &str, delivery: &str) -> Result<DeliveryRequest, &'static str> {
    let pickup = pickup.trim();
    let delivery = delivery.trim();
    if pickup.is_empty() {
        return Err("Enter a pickup location.");
    }
    if delivery.is_empty() {
        return Err("Enter a delivery location.");
    }
    Ok(DeliveryRequest { pickup_location: pickup.to_owned(), delivery_location: delivery.to_owned() })
}

/// Value of the payment method `<select>`; empty lets the backend choose.
pub fn parse_method_choice(raw: &str) -> Option<PaymentMethod> {
    PaymentMethod::parse(raw)
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());
    let go_to = RwSignal::new(None::<String>);
    install_navigation(go_to);

    let params = use_params_map();
    let order_id = move || params.read().get("id").unwrap_or_default();

    let state = RwSignal::new(PaymentState { loading: true, now_ms: now_ms(), ..PaymentState::default() });
    let method = RwSignal::new(None::<PaymentMethod>);
    let pickup = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());

    let load = move || {
        let id = order_id();
        state.update(|s| {
            s.loading = true;
            s.error = None;
            s.book_error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::fetch_order(&id).await {
                Ok(order) => {
                    let book_id = order.book_id.clone();
                    if let Some(point) = order.pickup_point() {
                        pickup.set(point.to_owned());
                    }
                    state.update(|s| s.order = Some(order));
                    let book = api::fetch_book(&book_id).await;
                    if let Err(e) = &book {
                        log::warn!("book {book_id} for order {id} not loaded: {e}");
                    }
                    state.update(|s| s.finish_book_load(book));
                }
                Err(e) => state.update(|s| s.error = Some(e.user_message("Failed to load the order"))),
            }
            state.update(|s| s.loading = false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };
    Effect::new(move || load());
    install_interval(TICK, move || state.update(|s| s.now_ms = now_ms()));

    let begin_action = move || -> Option<String> {
        if !state.with_untracked(PaymentState::actions_enabled) {
            return None;
        }
        state.update(|s| s.submitting = true);
        Some(order_id())
    };

    let on_pay = move |_| {
        let Some(id) = begin_action() else {
            return;
        };
        let choice = method.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::{NoticeKind, notify};

            match crate::net::api::pay_order(&id, choice).await {
                Ok(order) => {
                    state.update(|s| s.order = Some(order));
                    notify(notice, NoticeKind::Success, "Payment successful.");
                    go_to.set(Some("/personal".to_owned()));
                }
                Err(e) => notify(notice, NoticeKind::Error, e.user_message("Payment failed")),
            }
            state.update(|s| s.submitting = false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, choice);
    };

    let on_cancel = move |_| {
        let Some(id) = begin_action() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::{NoticeKind, notify};

            match crate::net::api::cancel_order(&id).await {
                Ok(_) => {
                    notify(notice, NoticeKind::Info, "Order cancelled.");
                    go_to.set(Some("/books".to_owned()));
                }
                Err(e) => notify(notice, NoticeKind::Error, e.user_message("Cancelling failed")),
            }
            state.update(|s| s.submitting = false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let on_request_delivery = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match validate_delivery_request(&pickup.get_untracked(), &destination.get_untracked()) {
            Ok(payload) => payload,
            Err(message) => {
                crate::state::notice::notify(notice, crate::state::notice::NoticeKind::Error, message);
                return;
            }
        };
        let Some(id) = begin_action() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::{NoticeKind, notify};

            match crate::net::api::request_delivery(&id, &payload).await {
                Ok(order) => {
                    state.update(|s| s.order = Some(order));
                    notify(notice, NoticeKind::Success, "Delivery requested, a courier will pick it up.");
                }
                Err(e) => notify(notice, NoticeKind::Error, e.user_message("Delivery request failed")),
            }
            state.update(|s| s.submitting = false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, payload);
    };

    let disabled = move || !state.with(PaymentState::actions_enabled);

    view! {
        <PageShell>
            <section class="payment-page">
                <h1>"Pay for your order"</h1>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="page-error">
                        {move || state.with(|s| s.error.clone().unwrap_or_default())} " "
                        <button class="btn btn--link" on:click=move |_| load()>
                            "Retry"
                        </button>
                    </p>
                </Show>
                <Show when=move || state.with(|s| s.loading && s.order.is_none())>
                    <p class="page-loading">"Loading order..."</p>
                </Show>
                <Show when=move || state.with(|s| s.book_error.is_some())>
                    <p class="payment-page__book payment-page__book--missing">
                        {move || state.with(|s| s.book_error.clone().unwrap_or_default())}
                    </p>
                </Show>
                {move || {
                    state
                        .with(|s| s.book.clone())
                        .map(|book| {
                            let href = format!("/books/{}", book.id);
                            view! {
                                <div class="payment-page__book">
                                    <a href=href>{book.title}</a>
                                    <span>{book.author}</span>
                                </div>
                            }
                        })
                }}
                {move || {
                    state
                        .with(|s| s.order.clone())
                        .map(|order| {
                            let is_delivery = order.delivery_method == DeliveryMethod::Delivery;
                            let pickup_point = or_placeholder(order.pickup_point(), "To be arranged");
                            let deliver_to = or_placeholder(order.delivery_location.as_deref(), "To be arranged");
                            view! {
                                <dl class="payment-page__order">
                                    <dt>"Order number"</dt>
                                    <dd>{order.order_number}</dd>
                                    <dt>"Status"</dt>
                                    <dd>
                                        <StatusTag
                                            label=order_status_label(order.status)
                                            tone=order_status_tone(order.status)
                                        />
                                    </dd>
                                    <dt>"Payment"</dt>
                                    <dd>{payment_status_label(order.payment_status)}</dd>
                                    <dt>"Book price"</dt>
                                    <dd>{price(order.book_price)}</dd>
                                    <dt>"Delivery fee"</dt>
                                    <dd>{price(order.delivery_fee)}</dd>
                                    <dt>"Total"</dt>
                                    <dd class="payment-page__total">{price(order.total_amount)}</dd>
                                    <dt>"Handover"</dt>
                                    <dd>{delivery_method_label(order.delivery_method)}</dd>
                                    <dt>"Pickup point"</dt>
                                    <dd>{pickup_point}</dd>
                                    <Show when=move || is_delivery>
                                        <dt>"Deliver to"</dt>
                                        <dd>{deliver_to.clone()}</dd>
                                    </Show>
                                </dl>
                            }
                        })
                }}
                <Show when=move || state.with(PaymentState::awaiting_payment)>
                    <p
                        class="payment-page__countdown"
                        class:payment-page__countdown--expired=move || state.with(|s| s.countdown().is_expired())
                    >
                        {move || state.with(|s| s.countdown().text())}
                    </p>
                    <div class="payment-page__actions">
                        <select
                            class="payment-page__method"
                            on:change=move |ev| method.set(parse_method_choice(&event_target_value(&ev)))
                        >
                            <option value="">"Default payment method"</option>
                            {PaymentMethod::ALL
                                .into_iter()
                                .map(|m| view! { <option value=m.as_str()>{payment_method_label(m)}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <button class="btn btn--primary" disabled=disabled on:click=on_pay>
                            "Pay now"
                        </button>
                        <button class="btn btn--danger" disabled=disabled on:click=on_cancel>
                            "Cancel order"
                        </button>
                    </div>
                    <form class="payment-page__delivery" on:submit=on_request_delivery>
                        <h2>"Prefer campus delivery?"</h2>
                        <label>
                            "Pickup location"
                            <input
                                type="text"
                                prop:value=move || pickup.get()
                                on:input=move |ev| pickup.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Delivery location"
                            <input
                                type="text"
                                prop:value=move || destination.get()
                                on:input=move |ev| destination.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn" type="submit" disabled=disabled>
                            "Request delivery"
                        </button>
                    </form>
                </Show>
            </section>
        </PageShell>
    }
}
