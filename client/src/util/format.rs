//! Display labels and status tones for backend enums.
//!
//! Tones map to `tag--{tone}` CSS modifiers so pages never hard-code colors.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{
    BookStatus, ConditionLevel, DeliveryMethod, DeliveryTaskStatus, OrderStatus, PaymentMethod, PaymentStatus,
};

/// Visual weight of a status tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Info,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "tag tag--positive",
            Self::Info => "tag tag--info",
            Self::Warning => "tag tag--warning",
            Self::Danger => "tag tag--danger",
            Self::Neutral => "tag tag--neutral",
        }
    }
}

/// `¥12.50`
pub fn price(amount: f64) -> String {
    format!("¥{amount:.2}")
}

/// Optional text, or `fallback` when absent/blank.
pub fn or_placeholder(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

pub fn condition_label(level: ConditionLevel) -> &'static str {
    match level {
        ConditionLevel::Excellent => "Excellent",
        ConditionLevel::Good => "Good",
        ConditionLevel::Fair => "Fair",
        ConditionLevel::Poor => "Poor",
    }
}

pub fn condition_tone(level: ConditionLevel) -> Tone {
    match level {
        ConditionLevel::Excellent => Tone::Positive,
        ConditionLevel::Good => Tone::Info,
        ConditionLevel::Fair => Tone::Warning,
        ConditionLevel::Poor => Tone::Danger,
    }
}

pub fn book_status_label(status: BookStatus) -> &'static str {
    match status {
        BookStatus::Available => "Available",
        BookStatus::Reserved => "Reserved",
        BookStatus::Sold => "Sold",
        BookStatus::OffShelf => "Off shelf",
        BookStatus::Unknown => "Unknown",
    }
}

pub fn book_status_tone(status: BookStatus) -> Tone {
    match status {
        BookStatus::Available => Tone::Positive,
        BookStatus::Reserved => Tone::Warning,
        BookStatus::Sold => Tone::Danger,
        BookStatus::OffShelf | BookStatus::Unknown => Tone::Neutral,
    }
}

pub fn order_status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pending",
        OrderStatus::Confirmed => "Confirmed",
        OrderStatus::Paid => "Paid",
        OrderStatus::Shipping => "Shipping",
        OrderStatus::Completed => "Completed",
        OrderStatus::Cancelled => "Cancelled",
        OrderStatus::Refunded => "Refunded",
        OrderStatus::Unknown => "Unknown",
    }
}

pub fn order_status_tone(status: OrderStatus) -> Tone {
    match status {
        OrderStatus::Pending => Tone::Warning,
        OrderStatus::Confirmed | OrderStatus::Paid | OrderStatus::Shipping => Tone::Info,
        OrderStatus::Completed => Tone::Positive,
        OrderStatus::Cancelled | OrderStatus::Refunded => Tone::Danger,
        OrderStatus::Unknown => Tone::Neutral,
    }
}

pub fn payment_status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "Awaiting payment",
        PaymentStatus::Paid => "Paid",
        PaymentStatus::Failed => "Payment failed",
        PaymentStatus::Refunded => "Refunded",
        PaymentStatus::Unknown => "Unknown",
    }
}

pub fn delivery_method_label(method: DeliveryMethod) -> &'static str {
    match method {
        DeliveryMethod::Meetup => "Meetup / self pickup",
        DeliveryMethod::Delivery => "Campus delivery",
    }
}

pub fn payment_method_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Wechat => "WeChat Pay",
        PaymentMethod::Alipay => "Alipay",
        PaymentMethod::Cash => "Cash on meetup",
    }
}

pub fn task_status_label(status: DeliveryTaskStatus) -> &'static str {
    match status {
        DeliveryTaskStatus::Pending => "Waiting for courier",
        DeliveryTaskStatus::Accepted => "Accepted",
        DeliveryTaskStatus::PickedUp => "Picked up",
        DeliveryTaskStatus::Delivering => "Delivering",
        DeliveryTaskStatus::Delivered => "Delivered",
        DeliveryTaskStatus::Cancelled => "Cancelled",
        DeliveryTaskStatus::Unknown => "Unknown",
    }
}

pub fn task_status_tone(status: DeliveryTaskStatus) -> Tone {
    match status {
        DeliveryTaskStatus::Pending => Tone::Warning,
        DeliveryTaskStatus::Accepted | DeliveryTaskStatus::PickedUp | DeliveryTaskStatus::Delivering => Tone::Info,
        DeliveryTaskStatus::Delivered => Tone::Positive,
        DeliveryTaskStatus::Cancelled => Tone::Danger,
        DeliveryTaskStatus::Unknown => Tone::Neutral,
    }
}
