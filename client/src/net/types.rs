//! REST DTOs mirrored from the marketplace backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's snake_case contract exactly. Status enums
//! carry an `Unknown` catch-all so a newer backend value degrades to a neutral
//! label instead of failing the whole list decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Physical condition grade of a listed book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ConditionLevel {
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    /// Wire value (`"excellent"`, `"good"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Parse a wire value as submitted by a `<select>`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw)
    }
}

/// Lifecycle status of a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    #[default]
    Available,
    Reserved,
    Sold,
    OffShelf,
    #[serde(other)]
    Unknown,
}

/// A book offered for sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(deserialize_with = "deserialize_money")]
    pub original_price: f64,
    #[serde(deserialize_with = "deserialize_money")]
    pub selling_price: f64,
    pub condition_level: ConditionLevel,
    #[serde(default)]
    pub description: Option<String>,
    pub seller_id: String,
    #[serde(default)]
    pub status: BookStatus,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Paid,
    Shipping,
    Completed,
    Cancelled,
    Refunded,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Meetup,
    Delivery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Wechat,
    Alipay,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Wechat, Self::Alipay, Self::Cash];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wechat => "wechat",
            Self::Alipay => "alipay",
            Self::Cash => "cash",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == raw)
    }
}

/// A buyer's claim on a listing.
///
/// Timestamps are kept as the backend's strings; only `payment_due_at` is ever
/// interpreted (by the payment countdown).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub book_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub book_price: f64,
    #[serde(default, deserialize_with = "deserialize_money")]
    pub delivery_fee: f64,
    #[serde(deserialize_with = "deserialize_money")]
    pub total_amount: f64,
    pub status: OrderStatus,
    pub delivery_method: DeliveryMethod,
    #[serde(default)]
    pub meetup_location: Option<String>,
    #[serde(default)]
    pub meetup_time: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub delivery_location: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_due_at: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub cancelled_at: Option<String>,
}

impl Order {
    /// Pickup point shown on the payment page; delivery orders name a pickup
    /// location, meetup orders only a meetup location.
    pub fn pickup_point(&self) -> Option<&str> {
        self.pickup_location
            .as_deref()
            .or(self.meetup_location.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryTaskStatus {
    Pending,
    Accepted,
    PickedUp,
    Delivering,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A crowdsourced request to carry a sold book between two locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTask {
    pub id: String,
    pub order_id: String,
    #[serde(default)]
    pub courier_id: Option<String>,
    pub pickup_location: String,
    pub delivery_location: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub delivery_fee: f64,
    pub status: DeliveryTaskStatus,
    #[serde(default)]
    pub estimated_duration: Option<i64>,
    #[serde(default)]
    pub accepted_at: Option<String>,
}

/// Account details from `GET /api/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub student_id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub credit_score: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub student_id: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    pub access_token: String,
    pub user_id: String,
    pub student_id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub student_id: String,
    pub name: String,
    pub phone: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateBookRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub original_price: f64,
    pub selling_price: f64,
    pub condition_level: ConditionLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub seller_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub book_id: String,
    pub buyer_id: String,
    pub delivery_method: DeliveryMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meetup_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayOrderRequest {
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    pub pickup_location: String,
    pub delivery_location: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

fn deserialize_money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite amount")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| D::Error::custom(format!("invalid amount string: {raw:?}"))),
        serde_json::Value::Null => Ok(0.0),
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}
