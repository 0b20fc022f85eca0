//! Book list view state shared by the home and catalogue pages.
//!
//! DESIGN
//! ======
//! A failed refresh keeps the last good list on screen; only the error line
//! changes. The list is replaced wholesale on every successful load.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::error::ApiError;
use crate::net::types::Book;

/// Number of books shown in the home page "latest" strip.
pub const HOME_FEATURED_LIMIT: usize = 8;

#[derive(Clone, Debug, Default)]
pub struct BooksState {
    pub items: Vec<Book>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BooksState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list response, keeping at most `limit` books when given.
    pub fn finish_load(&mut self, result: Result<Vec<Book>, ApiError>, limit: Option<usize>) {
        self.loading = false;
        match result {
            Ok(mut books) => {
                if let Some(limit) = limit {
                    books.truncate(limit);
                }
                self.items = books;
            }
            Err(e) => self.error = Some(e.user_message("Load failed")),
        }
    }

    /// Placeholder cards while nothing has been loaded yet.
    pub fn show_skeleton(&self) -> bool {
        self.loading && self.items.is_empty()
    }

    /// Background refresh over an already-rendered list.
    pub fn show_refreshing(&self) -> bool {
        self.loading && !self.items.is_empty()
    }

    pub fn show_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
