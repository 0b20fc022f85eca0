use leptos::prelude::*;

use crate::components::layout::PageShell;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageShell>
            <section class="empty-state">
                <h1>"Page not found"</h1>
                <p>"The page you are looking for does not exist or has moved."</p>
                <a class="btn btn--primary" href="/">
                    "Back to home"
                </a>
            </section>
        </PageShell>
    }
}
