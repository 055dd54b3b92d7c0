//! Limit/offset paging over a server-side total.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

/// Rows requested per page unless a page says otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Paging position for a list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub limit: u32,
    pub offset: u32,
    /// Row count reported by the last response.
    pub total: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// First page of `limit` rows. A zero limit is treated as one.
    pub fn new(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            offset: 0,
            total: 0,
        }
    }

    /// Record the total from a response, clamping the offset back onto the
    /// last page if the list shrank.
    pub fn with_total(self, total: u64) -> Self {
        let last = u64::from(self.limit) * u64::from(self.page_count_for(total) - 1);
        let offset = u64::from(self.offset).min(last);
        Self {
            offset: u32::try_from(offset).unwrap_or(self.offset),
            total,
            ..self
        }
    }

    /// Zero-based page index.
    pub fn page(&self) -> u32 {
        self.offset / self.limit
    }

    /// Page count; an empty list still has one (empty) page.
    pub fn page_count(&self) -> u32 {
        self.page_count_for(self.total)
    }

    fn page_count_for(&self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.limit)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.offset) + u64::from(self.limit) < self.total
    }

    pub fn prev(self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.limit),
            ..self
        }
    }

    /// Next page, or `self` unchanged on the last page.
    pub fn next(self) -> Self {
        if !self.has_next() {
            return self;
        }
        Self {
            offset: self.offset.saturating_add(self.limit),
            ..self
        }
    }

    /// Back to the first page (after a filter change).
    pub fn reset(self) -> Self {
        Self { offset: 0, ..self }
    }

    /// "21–40 of 57", or "0 results" for an empty list.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "0 results".to_owned();
        }
        let first = u64::from(self.offset) + 1;
        let last = (u64::from(self.offset) + u64::from(self.limit)).min(self.total);
        format!("{first}–{last} of {}", self.total)
    }
}
