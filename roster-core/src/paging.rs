//! Page cursor and fetch sequencing
//!
//! Every page fetch is tagged with a monotonically increasing sequence
//! number. Only the response carrying the latest issued number may replace
//! the visible page; anything older is dropped (last request wins).

use roster_model::{Page, PageQuery, UserId};
use tracing::debug;

use crate::error::FetchError;

/// Rows per page used by the admin table.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Position within the paged collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_index: u64,
    page_size: u64,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageCursor {
    /// Cursor at the first page. A zero page size is bumped to one.
    pub fn new(page_size: u64) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        self.page_index.saturating_mul(self.page_size)
    }

    pub fn go_to(&mut self, page_index: u64) {
        self.page_index = page_index;
    }

    /// Number of pages needed to show `total` rows.
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }

    pub fn query(&self) -> Result<PageQuery, FetchError> {
        Ok(PageQuery::for_page(self.page_index, self.page_size)?)
    }
}

/// Handle for one issued page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page_index: u64,
    pub query: PageQuery,
}

/// Issues fetch tickets and decides which responses are still wanted.
#[derive(Debug, Clone, Default)]
pub struct FetchSequencer {
    latest: u64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for the cursor's current page. Any ticket issued
    /// earlier becomes stale.
    pub fn issue(&mut self, cursor: &PageCursor) -> Result<FetchTicket, FetchError> {
        let query = cursor.query()?;
        self.latest += 1;
        debug!(
            seq = self.latest,
            page = cursor.page_index(),
            skip = query.skip,
            limit = query.limit,
            "issued page fetch"
        );
        Ok(FetchTicket {
            seq: self.latest,
            page_index: cursor.page_index(),
            query,
        })
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }

    /// Whether a response tagged `seq` may be applied.
    pub fn accept(&self, seq: u64) -> bool {
        let current = self.is_current(seq);
        if !current {
            debug!(seq, latest = self.latest, "discarding stale page response");
        }
        current
    }
}

/// The last page that loaded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    page_index: u64,
    page: Page,
}

impl LoadedPage {
    pub fn new(page_index: u64, page: Page) -> Self {
        Self { page_index, page }
    }

    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Collection size as last reported by the server.
    pub fn total(&self) -> u64 {
        self.page.total
    }

    pub fn ids(&self) -> Vec<UserId> {
        self.page.ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_page_count() {
        let mut cursor = PageCursor::new(10);
        assert_eq!(cursor.offset(), 0);
        cursor.go_to(4);
        assert_eq!(cursor.offset(), 40);
        assert_eq!(cursor.page_count(0), 0);
        assert_eq!(cursor.page_count(10), 1);
        assert_eq!(cursor.page_count(47), 5);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let cursor = PageCursor::new(0);
        assert_eq!(cursor.page_size(), 1);
        assert_eq!(cursor.query().unwrap(), PageQuery { skip: 0, limit: 1 });
    }

    #[test]
    fn only_the_latest_ticket_is_accepted() {
        let mut cursor = PageCursor::default();
        let mut sequencer = FetchSequencer::new();
        assert!(!sequencer.accept(0));

        let first = sequencer.issue(&cursor).unwrap();
        cursor.go_to(1);
        let second = sequencer.issue(&cursor).unwrap();

        assert!(second.seq > first.seq);
        assert_eq!(second.query, PageQuery { skip: 10, limit: 10 });
        assert!(!sequencer.accept(first.seq));
        assert!(sequencer.accept(second.seq));
    }
}
