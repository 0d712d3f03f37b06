//! Page selection over task listings.

use super::{TaskListQuery, ValidationErrors};
use std::num::NonZeroU32;

/// Page size used when a caller paginates without choosing a size.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A zero-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: NonZeroU32,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] naming `size` when `size` is zero.
    pub fn new(page: u32, size: u32) -> Result<Self, ValidationErrors> {
        let non_zero = NonZeroU32::new(size)
            .ok_or_else(|| ValidationErrors::single("size", "must be greater than 0"))?;
        Ok(Self {
            page,
            size: non_zero,
        })
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size.get()
    }

    /// Keeps only the items that fall on this page.
    ///
    /// Pages past the end yield an empty vector.
    #[must_use]
    pub fn slice<T>(self, items: Vec<T>) -> Vec<T> {
        let size = usize::try_from(self.size.get()).unwrap_or(usize::MAX);
        let offset = usize::try_from(self.page)
            .unwrap_or(usize::MAX)
            .saturating_mul(size);
        items.into_iter().skip(offset).take(size).collect()
    }
}

impl TaskListQuery {
    /// Resolves the requested page.
    ///
    /// Returns `Ok(None)` when neither `page` nor `size` was supplied; a
    /// missing half takes its default (page 0, size [`DEFAULT_PAGE_SIZE`]).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when the size is zero.
    pub fn page_request(&self) -> Result<Option<PageRequest>, ValidationErrors> {
        if self.page.is_none() && self.size.is_none() {
            return Ok(None);
        }
        PageRequest::new(
            self.page.unwrap_or_default(),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .map(Some)
    }
}
