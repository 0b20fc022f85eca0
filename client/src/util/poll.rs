//! Component-scoped timers and window listeners.
//!
//! Both helpers stop when the owning component is cleaned up; there is no
//! cancellation of a request already in flight.

use std::time::Duration;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Book list auto-refresh period.
pub const BOOK_LIST_POLL: Duration = Duration::from_secs(15);

/// Run `tick` every `period` until the calling component is disposed.
pub fn install_interval<F>(period: Duration, tick: F)
where
    F: Fn() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period, tick);
    }
}

/// Call `on_focus` whenever the browser window regains focus.
pub fn install_focus_listener<F>(on_focus: F)
where
    F: Fn() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::focus, move |_| on_focus());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_focus;
    }
}
