//! Colored pill for enum statuses.

use leptos::prelude::*;

use crate::util::format::Tone;

#[component]
pub fn StatusTag(#[prop(into)] label: String, tone: Tone) -> impl IntoView {
    view! { <span class=tone.css_class()>{label}</span> }
}
