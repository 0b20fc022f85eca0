//! Landing page: search box and the newest listings.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::layout::PageShell;
use crate::pages::books::{BookGrid, load_books};
use crate::state::books::{BooksState, HOME_FEATURED_LIMIT};

/// Query to send for the search box contents; blank means "no filter".
pub(crate) fn search_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let books = RwSignal::new(BooksState::default());
    let query = RwSignal::new(String::new());
    let search = move || load_books(books, search_query(&query.get_untracked()), Some(HOME_FEATURED_LIMIT));

    Effect::new(move || search());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        search();
    };

    view! {
        <PageShell>
            <section class="home-hero">
                <h1>"Second-hand textbooks from your campus"</h1>
                <p>"Buy from fellow students, meet up or get it delivered."</p>
                <form class="search-form" on:submit=on_submit>
                    <input
                        class="search-form__input"
                        type="search"
                        placeholder="Title, author or ISBN"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || books.with(|s| s.loading)>
                        "Search"
                    </button>
                </form>
            </section>
            <section class="home-latest">
                <header class="page-header">
                    <h2>"Latest listings"</h2>
                    <a class="btn btn--link" href="/books">
                        "See all"
                    </a>
                </header>
                <BookGrid books=books on_retry=move |()| search() />
            </section>
        </PageShell>
    }
}
