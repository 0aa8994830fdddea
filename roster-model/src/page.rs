use crate::error::{ModelError, Result};
use crate::ids::UserId;
use crate::user::UserRecord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Query parameters of the users listing endpoint (`?skip=&limit=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageQuery {
    pub skip: u64,
    pub limit: u64,
}

impl PageQuery {
    pub fn new(skip: u64, limit: u64) -> Result<Self> {
        if limit == 0 {
            return Err(ModelError::InvalidPageSize(limit));
        }
        Ok(Self { skip, limit })
    }

    /// Query for the zero-based `page_index` at `page_size` rows per page.
    pub fn for_page(page_index: u64, page_size: u64) -> Result<Self> {
        Self::new(page_index.saturating_mul(page_size), page_size)
    }
}

/// One fetched batch of users plus the server-reported collection size.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    pub items: Vec<UserRecord>,
    pub total: u64,
}

impl Page {
    pub fn new(items: Vec<UserRecord>, total: u64) -> Self {
        Self { items, total }
    }

    /// Record ids in display order.
    pub fn ids(&self) -> Vec<UserId> {
        self.items.iter().map(|record| record.id).collect()
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.items.iter().find(|record| record.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_rejects_zero_limit() {
        assert_eq!(
            PageQuery::new(0, 0),
            Err(ModelError::InvalidPageSize(0))
        );
    }

    #[test]
    fn page_query_offset_follows_page_index() {
        let query = PageQuery::for_page(3, 10).unwrap();
        assert_eq!(query, PageQuery { skip: 30, limit: 10 });
    }

    #[test]
    fn ids_keep_display_order() {
        let page = Page::new(
            vec![
                UserRecord::new(9, "Ian", "ian@example.com", true),
                UserRecord::new(2, "Bob", "bob@example.com", false),
            ],
            47,
        );
        assert_eq!(page.ids(), vec![UserId(9), UserId(2)]);
        assert_eq!(page.get(UserId(2)).map(|r| r.active), Some(false));
        assert!(page.get(UserId(5)).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_listing_response() {
        let raw = r#"{
            "items": [
                {"id": 1, "name": "Alice", "email": "alice@example.com", "active": true}
            ],
            "total": 147
        }"#;
        let page: Page = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total, 147);
        assert_eq!(page.items[0].name, "Alice");
        assert_eq!(page.items[0].id, UserId(1));
    }
}
