//! Listing form for sellers.
//!
//! DESIGN
//! ======
//! The form is kept as raw strings and only becomes a `CreateBookRequest`
//! through `validate_publish_form`; the submit handler has no other path to
//! `create_book`. The in-progress form is mirrored to local storage so a
//! reload does not lose it.

#[cfg(test)]
#[path = "publish_test.rs"]
mod publish_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::layout::PageShell;
use crate::net::types::{ConditionLevel, CreateBookRequest};
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::condition_label;
use crate::util::storage::{BrowserStorage, KeyValueStore, load_json, save_json};

/// Local-storage key of the unsent form.
pub const PUBLISH_DRAFT_KEY: &str = "publish_draft";

/// Raw form contents, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishForm {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub original_price: String,
    pub selling_price: String,
    /// `ConditionLevel::as_str` value, empty until chosen.
    pub condition: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("Please sign in before publishing.")]
    NotSignedIn,
    #[error("{0} is required.")]
    Missing(&'static str),
    #[error("{0} must be a non-negative number.")]
    InvalidPrice(&'static str),
}

fn required(value: &str, field: &'static str) -> Result<String, PublishError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PublishError::Missing(field));
    }
    Ok(value.to_owned())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn parse_price(value: &str, field: &'static str) -> Result<f64, PublishError> {
    let raw = required(value, field)?;
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(PublishError::InvalidPrice(field)),
    }
}

/// Turn the form into a create request, or the first problem found.
///
/// # Errors
///
/// `NotSignedIn` without a seller id, `Missing` for an empty required field,
/// `InvalidPrice` for a price that is not a non-negative number.
pub fn validate_publish_form(form: &PublishForm, seller_id: Option<&str>) -> Result<CreateBookRequest, PublishError> {
    let seller_id = seller_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(PublishError::NotSignedIn)?;
    let isbn = required(&form.isbn, "ISBN")?;
    let title = required(&form.title, "Title")?;
    let author = required(&form.author, "Author")?;
    let original_price = parse_price(&form.original_price, "Original price")?;
    let selling_price = parse_price(&form.selling_price, "Selling price")?;
    let condition_level = ConditionLevel::parse(form.condition.trim()).ok_or(PublishError::Missing("Condition"))?;

    Ok(CreateBookRequest {
        isbn,
        title,
        author,
        publisher: optional(&form.publisher),
        original_price,
        selling_price,
        condition_level,
        description: optional(&form.description),
        seller_id: seller_id.to_owned(),
    })
}

#[component]
pub fn PublishPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());

    let form = RwSignal::new(PublishForm::default());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // First run restores the draft, later runs persist edits.
    let restored = StoredValue::new(false);
    Effect::new(move || {
        let current = form.get();
        if !restored.get_value() {
            restored.set_value(true);
            if let Some(draft) = load_json::<PublishForm>(&BrowserStorage, PUBLISH_DRAFT_KEY) {
                form.set(draft);
                return;
            }
        }
        save_json(&BrowserStorage, PUBLISH_DRAFT_KEY, &current);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let seller_id = auth.with_untracked(|a| a.session.as_ref().map(|s| s.user_id.clone()));
        let payload = match form.with_untracked(|f| validate_publish_form(f, seller_id.as_deref())) {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::{NoticeKind, notify};

            match crate::net::api::create_book(&payload).await {
                Ok(book) => {
                    BrowserStorage.remove(PUBLISH_DRAFT_KEY);
                    form.set(PublishForm::default());
                    notify(notice, NoticeKind::Success, format!("\"{}\" is now listed.", book.title));
                }
                Err(e) => error.set(Some(e.user_message("Publishing failed"))),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, notice);
    };

    let on_reset = move |_| {
        form.set(PublishForm::default());
        BrowserStorage.remove(PUBLISH_DRAFT_KEY);
        error.set(None);
    };

    view! {
        <PageShell>
            <section class="publish-page">
                <h1>"Sell a book"</h1>
                <form class="publish-form" on:submit=on_submit>
                    <FormField label="ISBN" form=form get=|f| &f.isbn set=|f, v| f.isbn = v />
                    <FormField label="Title" form=form get=|f| &f.title set=|f, v| f.title = v />
                    <FormField label="Author" form=form get=|f| &f.author set=|f, v| f.author = v />
                    <FormField
                        label="Publisher (optional)"
                        form=form
                        get=|f| &f.publisher
                        set=|f, v| f.publisher = v
                    />
                    <FormField
                        label="Original price"
                        form=form
                        numeric=true
                        get=|f| &f.original_price
                        set=|f, v| f.original_price = v
                    />
                    <FormField
                        label="Selling price"
                        form=form
                        numeric=true
                        get=|f| &f.selling_price
                        set=|f, v| f.selling_price = v
                    />
                    <label class="form-field">
                        <span class="form-field__label">"Condition"</span>
                        <select
                            prop:value=move || form.with(|f| f.condition.clone())
                            on:change=move |ev| form.update(|f| f.condition = event_target_value(&ev))
                        >
                            <option value="">"Choose condition"</option>
                            {ConditionLevel::ALL
                                .into_iter()
                                .map(|level| view! { <option value=level.as_str()>{condition_label(level)}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Description (optional)"</span>
                        <textarea
                            rows="4"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="publish-form__actions">
                        <button class="btn" type="button" on:click=on_reset>
                            "Clear"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Publishing..." } else { "Publish" }}
                        </button>
                    </div>
                </form>
            </section>
        </PageShell>
    }
}

/// Text input bound to one `PublishForm` field.
#[component]
fn FormField(
    label: &'static str,
    form: RwSignal<PublishForm>,
    get: fn(&PublishForm) -> &String,
    set: fn(&mut PublishForm, String),
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                type=if numeric { "number" } else { "text" }
                step=numeric.then_some("0.01")
                min=numeric.then_some("0")
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}
