//! REST API helpers for communicating with the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, all funnelled
//! through `request`, which attaches the bearer token and applies the 401
//! policy. Server-side (SSR): every call resolves to `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 clears the stored session and sends the browser to `/login` before
//! the error is returned. Every other failure is returned as `ApiError` for
//! the page to report; nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Book, CreateBookRequest, CreateOrderRequest, DeliveryMethod, DeliveryRequest, DeliveryTask, LoginRequest,
    LoginResult, Order, PasswordChange, PayOrderRequest, PaymentMethod, ProfileUpdate, RegisterRequest, UserProfile,
};
use crate::state::auth::{Session, USER_NAME_KEY};
use crate::util::auth::encode_component;
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub const API_BASE: &str = "/api";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

// =============================================================
// Endpoints
// =============================================================

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Book list URL. Blank queries produce the bare list request so the
/// initial load, focus refresh and timed poll are indistinguishable.
fn books_endpoint(query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("{API_BASE}/books?q={}", encode_component(q)),
        None => endpoint("/books"),
    }
}

fn book_endpoint(book_id: &str) -> String {
    endpoint(&format!("/books/{}", encode_component(book_id)))
}

fn order_endpoint(order_id: &str) -> String {
    endpoint(&format!("/orders/{}", encode_component(order_id)))
}

fn order_action_endpoint(order_id: &str, action: &str) -> String {
    format!("{}/{action}", order_endpoint(order_id))
}

fn delivery_task_accept_endpoint(task_id: &str) -> String {
    endpoint(&format!("/delivery_tasks/{}/accept", encode_component(task_id)))
}

fn my_book_endpoint(book_id: &str) -> String {
    endpoint(&format!("/me/books/{}", encode_component(book_id)))
}

// =============================================================
// Transport
// =============================================================

async fn request<T, B>(method: Method, url: &str, body: Option<&B>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let raw = send(method, url, body).await?;
    serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like `request` but ignores the response body.
async fn request_empty<B: Serialize>(method: Method, url: &str, body: Option<&B>) -> Result<(), ApiError> {
    send(method, url, body).await.map(|_| ())
}

#[cfg(feature = "hydrate")]
async fn send<B: Serialize>(method: Method, url: &str, body: Option<&B>) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    };
    if let Some(session) = Session::load(&BrowserStorage) {
        builder = builder.header("Authorization", &session.bearer());
    }
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| {
        log::warn!("{method:?} {url} unreachable: {e}");
        ApiError::Network(e.to_string())
    })?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| e.to_string());
    let err = match read_outcome(status, text) {
        Ok(text) => return Ok(text),
        Err(err) => err,
    };
    if matches!(err, ApiError::Unauthorized { .. }) {
        log::info!("{method:?} {url} rejected with 401; clearing session");
        if let Some(target) = crate::util::auth::handle_unauthorized(&BrowserStorage, &crate::util::auth::current_path())
        {
            crate::util::auth::hard_redirect(&target);
        }
    } else {
        log::warn!("{method:?} {url} failed: {status}");
    }
    Err(err)
}

/// Classify a finished response from its status and body read.
///
/// A 2xx whose body cannot be read is a network failure, never an empty
/// success. Other statuses keep their classification without a detail.
pub fn read_outcome(status: u16, body: Result<String, String>) -> Result<String, ApiError> {
    let ok = (200..300).contains(&status);
    match body {
        Ok(text) if ok => Ok(text),
        Ok(text) => Err(ApiError::from_response(status, &text)),
        Err(e) if ok => Err(ApiError::Network(e)),
        Err(_) => Err(ApiError::from_response(status, "")),
    }
}

#[cfg(not(feature = "hydrate"))]
async fn send<B: Serialize>(method: Method, url: &str, body: Option<&B>) -> Result<String, ApiError> {
    let _ = (method, url, body);
    Err(ApiError::Unavailable)
}

const NO_BODY: Option<&()> = None;

// =============================================================
// Auth
// =============================================================

/// Sign in via `POST /api/login` and persist the returned session.
///
/// # Errors
///
/// Returns the classified `ApiError` when the credentials are rejected or the call fails.
pub async fn login(payload: &LoginRequest) -> Result<Session, ApiError> {
    let result: LoginResult = request(Method::Post, &endpoint("/login"), Some(payload)).await?;
    let session = Session::from_login(result);
    session.save(&BrowserStorage);
    Ok(session)
}

/// Create an account via `POST /api/users`.
///
/// # Errors
///
/// Returns the classified `ApiError` if registration fails (e.g. duplicate student id).
pub async fn register(payload: &RegisterRequest) -> Result<UserProfile, ApiError> {
    request(Method::Post, &endpoint("/users"), Some(payload)).await
}

// =============================================================
// Books
// =============================================================

/// List books, optionally filtered by a title/author/ISBN query.
///
/// # Errors
///
/// Returns the classified `ApiError` if the list cannot be fetched.
pub async fn fetch_books(query: Option<&str>) -> Result<Vec<Book>, ApiError> {
    request(Method::Get, &books_endpoint(query), NO_BODY).await
}

/// # Errors
///
/// Returns the classified `ApiError` if the book cannot be fetched.
pub async fn fetch_book(book_id: &str) -> Result<Book, ApiError> {
    request(Method::Get, &book_endpoint(book_id), NO_BODY).await
}

/// Publish a listing via `POST /api/books`.
///
/// # Errors
///
/// Returns the classified `ApiError` if the backend rejects the listing.
pub async fn create_book(payload: &CreateBookRequest) -> Result<Book, ApiError> {
    request(Method::Post, &endpoint("/books"), Some(payload)).await
}

// =============================================================
// Orders
// =============================================================

/// Build the create-order body for the signed-in buyer.
fn create_order_request(
    store: &impl KeyValueStore,
    book_id: &str,
    delivery_method: DeliveryMethod,
) -> Result<CreateOrderRequest, ApiError> {
    let session = Session::load(store).ok_or(ApiError::NotSignedIn)?;
    if session.user_id.is_empty() {
        return Err(ApiError::NotSignedIn);
    }
    Ok(CreateOrderRequest {
        book_id: book_id.to_owned(),
        buyer_id: session.user_id,
        delivery_method,
        meetup_location: None,
        payment_method: None,
    })
}

/// Reserve a book for the signed-in buyer via `POST /api/orders`.
///
/// # Errors
///
/// Returns `ApiError::NotSignedIn` without sending anything when no session is
/// stored, otherwise the classified `ApiError` from the backend.
pub async fn create_order(book_id: &str, delivery_method: DeliveryMethod) -> Result<Order, ApiError> {
    let payload = create_order_request(&BrowserStorage, book_id, delivery_method)?;
    request(Method::Post, &endpoint("/orders"), Some(&payload)).await
}

/// # Errors
///
/// Returns the classified `ApiError` if the order cannot be fetched.
pub async fn fetch_order(order_id: &str) -> Result<Order, ApiError> {
    request(Method::Get, &order_endpoint(order_id), NO_BODY).await
}

/// # Errors
///
/// Returns the classified `ApiError` if the payment is rejected.
pub async fn pay_order(order_id: &str, payment_method: Option<PaymentMethod>) -> Result<Order, ApiError> {
    let payload = PayOrderRequest { payment_method };
    request(Method::Post, &order_action_endpoint(order_id, "pay"), Some(&payload)).await
}

/// # Errors
///
/// Returns the classified `ApiError` if the cancellation is rejected.
pub async fn cancel_order(order_id: &str) -> Result<Order, ApiError> {
    request(Method::Post, &order_action_endpoint(order_id, "cancel"), NO_BODY).await
}

/// Ask for crowdsourced delivery of an order's book.
///
/// # Errors
///
/// Returns the classified `ApiError` if the backend refuses the delivery request.
pub async fn request_delivery(order_id: &str, payload: &DeliveryRequest) -> Result<Order, ApiError> {
    request(Method::Post, &order_action_endpoint(order_id, "delivery"), Some(payload)).await
}

/// Delete an order the user bought or sold.
///
/// # Errors
///
/// Returns the classified `ApiError` if the deletion is rejected.
pub async fn delete_order(order_id: &str) -> Result<(), ApiError> {
    request_empty(Method::Delete, &order_endpoint(order_id), NO_BODY).await
}

// =============================================================
// Delivery tasks
// =============================================================

/// # Errors
///
/// Returns the classified `ApiError` if the task board cannot be fetched.
pub async fn fetch_delivery_tasks() -> Result<Vec<DeliveryTask>, ApiError> {
    request(Method::Get, &endpoint("/delivery_tasks"), NO_BODY).await
}

/// # Errors
///
/// Returns the classified `ApiError` if another courier got there first or the call fails.
pub async fn accept_delivery_task(task_id: &str) -> Result<(), ApiError> {
    request_empty(Method::Post, &delivery_task_accept_endpoint(task_id), NO_BODY).await
}

// =============================================================
// Personal center
// =============================================================

/// # Errors
///
/// Returns the classified `ApiError` if the profile cannot be fetched.
pub async fn fetch_profile() -> Result<UserProfile, ApiError> {
    request(Method::Get, &endpoint("/me"), NO_BODY).await
}

/// Update name/phone and refresh the stored display name.
///
/// # Errors
///
/// Returns the classified `ApiError` if the update is rejected.
pub async fn update_profile(payload: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    let profile: UserProfile = request(Method::Patch, &endpoint("/me"), Some(payload)).await?;
    BrowserStorage.set(USER_NAME_KEY, &profile.name);
    Ok(profile)
}

/// # Errors
///
/// Returns the classified `ApiError` if the current password is wrong or the call fails.
pub async fn change_password(payload: &PasswordChange) -> Result<(), ApiError> {
    request_empty(Method::Patch, &endpoint("/me/password"), Some(payload)).await
}

/// # Errors
///
/// Returns the classified `ApiError` if the listings cannot be fetched.
pub async fn fetch_my_books() -> Result<Vec<Book>, ApiError> {
    request(Method::Get, &endpoint("/me/books"), NO_BODY).await
}

/// # Errors
///
/// Returns the classified `ApiError` if the listing cannot be deleted.
pub async fn delete_my_book(book_id: &str) -> Result<(), ApiError> {
    request_empty(Method::Delete, &my_book_endpoint(book_id), NO_BODY).await
}

/// # Errors
///
/// Returns the classified `ApiError` if the purchases cannot be fetched.
pub async fn fetch_my_orders() -> Result<Vec<Order>, ApiError> {
    request(Method::Get, &endpoint("/me/orders"), NO_BODY).await
}

/// # Errors
///
/// Returns the classified `ApiError` if the sales cannot be fetched.
pub async fn fetch_my_sales() -> Result<Vec<Order>, ApiError> {
    request(Method::Get, &endpoint("/me/sales"), NO_BODY).await
}
