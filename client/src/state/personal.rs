//! Personal-center view state: profile plus the three owned collections.
//!
//! DESIGN
//! ======
//! Rows leave a table only once the backend confirmed the delete; a failed
//! delete leaves the table untouched so it still matches the server.

#[cfg(test)]
#[path = "personal_test.rs"]
mod personal_test;

use crate::net::error::ApiError;
use crate::net::types::{Book, Order, UserProfile};

/// One of the deletable tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    /// Orders the user bought.
    Orders,
    /// Orders for books the user sold.
    Sales,
    /// Books the user has listed.
    Listings,
}

impl Collection {
    pub fn noun(self) -> &'static str {
        match self {
            Self::Orders => "order",
            Self::Sales => "sale record",
            Self::Listings => "listing",
        }
    }
}

/// Per-section loading flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Loading {
    pub profile: bool,
    pub orders: bool,
    pub sales: bool,
    pub listings: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PersonalState {
    pub profile: Option<UserProfile>,
    pub orders: Vec<Order>,
    pub sales: Vec<Order>,
    pub listings: Vec<Book>,
    pub loading: Loading,
    /// Why the profile is missing, if its load failed.
    pub profile_error: Option<String>,
}

impl PersonalState {
    pub fn begin_profile_load(&mut self) {
        self.loading.profile = true;
        self.profile_error = None;
    }

    /// Store the fetched profile, or the message explaining why it is absent.
    pub fn finish_profile_load(&mut self, result: Result<UserProfile, ApiError>) {
        self.loading.profile = false;
        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => self.profile_error = Some(e.user_message("Failed to load your profile")),
        }
    }

    pub fn set_loading(&mut self, collection: Collection, value: bool) {
        match collection {
            Collection::Orders => self.loading.orders = value,
            Collection::Sales => self.loading.sales = value,
            Collection::Listings => self.loading.listings = value,
        }
    }

    pub fn is_loading(&self, collection: Collection) -> bool {
        match collection {
            Collection::Orders => self.loading.orders,
            Collection::Sales => self.loading.sales,
            Collection::Listings => self.loading.listings,
        }
    }

    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Orders => self.orders.len(),
            Collection::Sales => self.sales.len(),
            Collection::Listings => self.listings.len(),
        }
    }

    /// Apply the outcome of a delete call. Returns whether a row was removed.
    pub fn apply_delete(&mut self, collection: Collection, id: &str, result: &Result<(), ApiError>) -> bool {
        if result.is_err() {
            return false;
        }
        let before = self.len(collection);
        match collection {
            Collection::Orders => self.orders.retain(|o| o.id != id),
            Collection::Sales => self.sales.retain(|o| o.id != id),
            Collection::Listings => self.listings.retain(|b| b.id != id),
        }
        self.len(collection) < before
    }
}
