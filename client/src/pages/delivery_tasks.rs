//! Courier task board.

use leptos::prelude::*;

use crate::components::layout::PageShell;
use crate::components::status_tag::StatusTag;
use crate::net::types::DeliveryTask;
use crate::state::auth::AuthState;
use crate::state::delivery::{DeliveryBoardState, assignment_note};
use crate::state::notice::NoticeState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{price, task_status_label, task_status_tone};

fn load_tasks(board: RwSignal<DeliveryBoardState>, notice: RwSignal<NoticeState>) {
    board.update(DeliveryBoardState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::notice::{NoticeKind, notify};

        let result = crate::net::api::fetch_delivery_tasks().await;
        board.update(|b| b.finish_load(result));
        if let Some(message) = board.with_untracked(|b| b.error.clone()) {
            notify(notice, NoticeKind::Error, message);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = notice;
}

#[component]
pub fn DeliveryTasksPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());

    let board = RwSignal::new(DeliveryBoardState::default());
    let refresh = move || load_tasks(board, notice);
    Effect::new(move || refresh());

    let accept = move |task: DeliveryTask| {
        if !board.with_untracked(|b| b.can_accept(&task)) {
            return;
        }
        board.update(|b| b.accepting = Some(task.id.clone()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::{NoticeKind, notify};

            match crate::net::api::accept_delivery_task(&task.id).await {
                Ok(()) => {
                    notify(notice, NoticeKind::Success, "Task accepted, head to the pickup point.");
                    load_tasks(board, notice);
                }
                Err(e) => notify(notice, NoticeKind::Error, e.user_message("Accepting the task failed")),
            }
            board.update(|b| b.accepting = None);
        });
    };

    view! {
        <PageShell>
            <section class="delivery-page">
                <header class="page-header">
                    <h1>"Delivery board"</h1>
                    <span class="page-header__meta">
                        {move || format!("{} open", board.with(DeliveryBoardState::open_count))}
                    </span>
                    <button class="btn" disabled=move || board.with(|b| b.loading) on:click=move |_| refresh()>
                        {move || if board.with(|b| b.loading) { "Refreshing..." } else { "Refresh" }}
                    </button>
                </header>
                <Show when=move || board.with(|b| b.error.is_some())>
                    <p class="page-error">
                        {move || board.with(|b| b.error.clone().unwrap_or_default())} " "
                        <button class="btn btn--link" on:click=move |_| refresh()>
                            "Retry"
                        </button>
                    </p>
                </Show>
                <Show
                    when=move || board.with(|b| !b.tasks.is_empty())
                    fallback=move || {
                        view! {
                            <p class="empty-state">
                                {move || {
                                    board.with(|b| {
                                        if b.loading {
                                            "Loading tasks..."
                                        } else if b.error.is_some() {
                                            ""
                                        } else {
                                            "No delivery tasks right now."
                                        }
                                    })
                                }}
                            </p>
                        }
                    }
                >
                    <ul class="task-list">
                        {move || {
                            board
                                .get()
                                .tasks
                                .into_iter()
                                .map(|task| {
                                    let task_id = task.id.clone();
                                    let note = assignment_note(&task);
                                    let status = task.status;
                                    let eta = task.estimated_duration.map(|mins| format!("~{mins} min"));
                                    let route = (task.pickup_location.clone(), task.delivery_location.clone());
                                    let fee = price(task.delivery_fee);
                                    let order_label = format!("Order {}", task.order_id);
                                    let for_accept = task.clone();
                                    let acceptable = move || board.with(|b| b.can_accept(&for_accept));
                                    let accepting_this = {
                                        let task_id = task_id.clone();
                                        move || board.with(|b| b.accepting.as_deref() == Some(task_id.as_str()))
                                    };
                                    view! {
                                        <li class="task-card">
                                            <div class="task-card__route">
                                                <span>{route.0}</span>
                                                " → "
                                                <span>{route.1}</span>
                                            </div>
                                            <div class="task-card__meta">
                                                <StatusTag label=task_status_label(status) tone=task_status_tone(status) />
                                                <span class="task-card__fee">{fee}</span>
                                                {eta.map(|text| view! { <span class="task-card__eta">{text}</span> })}
                                                <span class="task-card__order">{order_label}</span>
                                            </div>
                                            {note.map(|text| view! { <p class="task-card__note">{text}</p> })}
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || !acceptable()
                                                on:click=move |_| accept(task.clone())
                                            >
                                                {move || if accepting_this() { "Accepting..." } else { "Accept" }}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </section>
        </PageShell>
    }
}
