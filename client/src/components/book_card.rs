//! Card for a book listing, used by the home and books pages.

use leptos::prelude::*;

use crate::components::status_tag::StatusTag;
use crate::net::types::Book;
use crate::util::format::{book_status_label, book_status_tone, condition_label, condition_tone, price};

/// A clickable card linking to the book detail page.
#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let href = format!("/books/{}", book.id);
    let selling = price(book.selling_price);
    let original = (book.original_price > book.selling_price).then(|| price(book.original_price));
    let cover = book.cover_image.clone().map(|src| {
        let alt = book.title.clone();
        view! { <img src=src alt=alt loading="lazy" /> }
    });

    view! {
        <a class="book-card" href=href>
            <span class="book-card__cover">{cover}</span>
            <span class="book-card__title">{book.title}</span>
            <span class="book-card__author">{book.author}</span>
            <span class="book-card__prices">
                <span class="book-card__price">{selling}</span>
                {original.map(|text| view! { <s class="book-card__original">{text}</s> })}
            </span>
            <span class="book-card__tags">
                <StatusTag
                    label=condition_label(book.condition_level)
                    tone=condition_tone(book.condition_level)
                />
                <StatusTag label=book_status_label(book.status) tone=book_status_tone(book.status) />
            </span>
        </a>
    }
}
