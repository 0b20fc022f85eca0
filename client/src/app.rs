//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    book_detail::BookDetailPage, books::BooksPage, delivery_tasks::DeliveryTasksPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, payment::PaymentPage, personal_center::PersonalCenterPage,
    publish::PublishPage,
};
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The session is read from local storage after hydration; until then
/// `AuthState::loading` holds guarded pages back from redirecting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { session: None, loading: true });
    let notice = RwSignal::new(NoticeState::default());
    provide_context(auth);
    provide_context(notice);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        let session = crate::state::auth::Session::load(&crate::util::storage::BrowserStorage);
        #[cfg(not(feature = "hydrate"))]
        let session = None;
        auth.set(AuthState { session, loading: false });
    });

    view! {
        <Title text="Campus Books"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("books") view=BooksPage/>
                <Route path=(StaticSegment("books"), ParamSegment("id")) view=BookDetailPage/>
                <Route
                    path=(StaticSegment("orders"), ParamSegment("id"), StaticSegment("pay"))
                    view=PaymentPage
                />
                <Route path=StaticSegment("delivery") view=DeliveryTasksPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("publish") view=PublishPage/>
                <Route path=StaticSegment("personal") view=PersonalCenterPage/>
            </Routes>
        </Router>
    }
}
