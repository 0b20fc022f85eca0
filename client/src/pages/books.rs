//! Full catalogue of listings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is reloaded on mount, whenever the window regains focus and on a
//! fixed poll. All three go through `refresh`, so they issue the identical
//! `GET /api/books` with no query.

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::layout::PageShell;
use crate::state::books::BooksState;
use crate::util::poll::{BOOK_LIST_POLL, install_focus_listener, install_interval};

/// Number of placeholder cards shown during the first load.
const SKELETON_CARDS: usize = 6;

/// Start a list load into `books`; `query` filters and `limit` truncates.
pub(crate) fn load_books(books: RwSignal<BooksState>, query: Option<String>, limit: Option<usize>) {
    books.update(BooksState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_books(query.as_deref()).await;
        if let Err(e) = &result {
            log::warn!("book list load failed: {e}");
        }
        books.update(|s| s.finish_load(result, limit));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (query, limit);
}

/// Grid of listings with skeleton, empty and error states.
#[component]
pub fn BookGrid(books: RwSignal<BooksState>, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || books.with(|s| s.error.is_some())>
            <p class="page-error">
                {move || books.with(|s| s.error.clone().unwrap_or_default())}
                " "
                <button class="btn btn--link" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </p>
        </Show>
        <Show
            when=move || !books.with(BooksState::show_skeleton)
            fallback=|| {
                view! {
                    <div class="book-grid book-grid--skeleton" aria-busy="true">
                        {(0..SKELETON_CARDS)
                            .map(|_| view! { <span class="book-card book-card--skeleton"></span> })
                            .collect::<Vec<_>>()}
                    </div>
                }
            }
        >
            <Show
                when=move || !books.with(BooksState::show_empty)
                fallback=|| view! { <p class="empty-state">"No books listed yet."</p> }
            >
                <div class="book-grid">
                    {move || {
                        books
                            .get()
                            .items
                            .into_iter()
                            .map(|book| view! { <BookCard book=book /> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </Show>
    }
}

#[component]
pub fn BooksPage() -> impl IntoView {
    let books = RwSignal::new(BooksState::default());
    let refresh = move || load_books(books, None, None);

    Effect::new(move || refresh());
    install_interval(BOOK_LIST_POLL, refresh);
    install_focus_listener(refresh);

    view! {
        <PageShell>
            <section class="books-page">
                <header class="page-header">
                    <h1>"All books"</h1>
                    <span class="page-header__meta">
                        {move || format!("{} listed", books.with(|s| s.items.len()))}
                    </span>
                    <Show when=move || books.with(BooksState::show_refreshing)>
                        <span class="page-header__meta">"Refreshing..."</span>
                    </Show>
                    <button
                        class="btn"
                        disabled=move || books.with(|s| s.loading)
                        on:click=move |_| refresh()
                    >
                        "Refresh"
                    </button>
                </header>
                <BookGrid books=books on_retry=move |()| refresh() />
            </section>
        </PageShell>
    }
}
