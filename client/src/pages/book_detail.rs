//! Single listing with the "buy" action.
//!
//! Buying always creates a meetup order; delivery can be requested later from
//! the payment page.

#[cfg(test)]
#[path = "book_detail_test.rs"]
mod book_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::layout::PageShell;
use crate::components::status_tag::StatusTag;
use crate::net::types::{Book, BookStatus};
use crate::state::notice::NoticeState;
use crate::util::auth::install_navigation;
use crate::util::format::{
    book_status_label, book_status_tone, condition_label, condition_tone, or_placeholder, price,
};

/// Route of the payment page for an order.
pub fn payment_path(order_id: &str) -> String {
    format!("/orders/{order_id}/pay")
}

/// Whether the buy button is offered for `book`.
pub fn can_buy(book: &Book, buying: bool) -> bool {
    book.status == BookStatus::Available && !buying
}

#[component]
pub fn BookDetailPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let go_to = RwSignal::new(None::<String>);
    install_navigation(go_to);

    let book = RwSignal::new(None::<Book>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let buying = RwSignal::new(false);

    let book_id = move || params.read().get("id").unwrap_or_default();

    let load = move || {
        let id = book_id();
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_book(&id).await {
                Ok(b) => book.set(Some(b)),
                Err(e) => error.set(Some(e.user_message("Failed to load the book"))),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };
    Effect::new(move || load());

    let on_buy = move |_| {
        let Some(current) = book.get_untracked() else {
            return;
        };
        if !can_buy(&current, buying.get_untracked()) {
            return;
        }
        buying.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::error::ApiError;
            use crate::net::types::DeliveryMethod;
            use crate::state::notice::{NoticeKind, notify};
            use crate::util::auth::{LOGIN_PATH, current_path, login_redirect_target};

            match crate::net::api::create_order(&current.id, DeliveryMethod::Meetup).await {
                Ok(order) => {
                    notify(notice, NoticeKind::Success, "Order created, please pay before the deadline.");
                    go_to.set(Some(payment_path(&order.id)));
                }
                Err(ApiError::NotSignedIn) => {
                    notify(notice, NoticeKind::Info, ApiError::NotSignedIn.user_message("Please sign in first."));
                    let target = login_redirect_target(&current_path()).unwrap_or_else(|| LOGIN_PATH.to_owned());
                    go_to.set(Some(target));
                }
                Err(e) => notify(notice, NoticeKind::Error, e.user_message("Failed to create the order")),
            }
            buying.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (notice, go_to, current);
    };

    view! {
        <PageShell>
            <section class="book-detail">
                <Show when=move || error.get().is_some()>
                    <p class="page-error">
                        {move || error.get().unwrap_or_default()} " "
                        <button class="btn btn--link" on:click=move |_| load()>
                            "Retry"
                        </button>
                    </p>
                </Show>
                <Show
                    when=move || !loading.get() || book.with(Option::is_some)
                    fallback=|| view! { <p class="page-loading">"Loading book..."</p> }
                >
                    {move || {
                        book.get()
                            .map(|b| {
                                let offer_buy = b.status == BookStatus::Available;
                                view! {
                                    <div class="book-detail__body">
                                        <div class="book-detail__gallery">
                                            {b
                                                .cover_image
                                                .clone()
                                                .map(|src| view! { <img class="book-detail__cover" src=src alt="cover" /> })}
                                            {b
                                                .gallery_images
                                                .iter()
                                                .map(|src| view! { <img class="book-detail__thumb" src=src.clone() alt="" /> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                        <div class="book-detail__info">
                                            <h1>{b.title.clone()}</h1>
                                            <p class="book-detail__author">{b.author.clone()}</p>
                                            <p class="book-detail__tags">
                                                <StatusTag
                                                    label=condition_label(b.condition_level)
                                                    tone=condition_tone(b.condition_level)
                                                />
                                                <StatusTag
                                                    label=book_status_label(b.status)
                                                    tone=book_status_tone(b.status)
                                                />
                                            </p>
                                            <p class="book-detail__price">
                                                {price(b.selling_price)} " "
                                                <s>{price(b.original_price)}</s>
                                            </p>
                                            <dl class="book-detail__facts">
                                                <dt>"ISBN"</dt>
                                                <dd>{b.isbn.clone()}</dd>
                                                <dt>"Publisher"</dt>
                                                <dd>{or_placeholder(b.publisher.as_deref(), "Unknown")}</dd>
                                                <dt>"Description"</dt>
                                                <dd>{or_placeholder(b.description.as_deref(), "No description")}</dd>
                                            </dl>
                                            <Show
                                                when=move || offer_buy
                                                fallback=|| view! { <p class="book-detail__unavailable">"This book is no longer for sale."</p> }
                                            >
                                                <button
                                                    class="btn btn--primary"
                                                    disabled=move || buying.get()
                                                    on:click=on_buy
                                                >
                                                    {move || if buying.get() { "Placing order..." } else { "Buy (meetup)" }}
                                                </button>
                                            </Show>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </Show>
            </section>
        </PageShell>
    }
}
