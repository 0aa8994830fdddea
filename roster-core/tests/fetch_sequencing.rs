//! Last-request-wins page loading against an in-memory provider.

use async_trait::async_trait;
use roster_core::roster_model::{Page, PageQuery, UserId, UserRecord};
use roster_core::{
    FetchError, FetchSequencer, LoadedPage, PageCursor, PageDataProvider,
};

struct SeededUsers {
    users: Vec<UserRecord>,
}

impl SeededUsers {
    fn new(count: i64) -> Self {
        let users = (1..=count)
            .map(|id| {
                UserRecord::new(
                    id,
                    format!("user-{id}"),
                    format!("user{id}@example.com"),
                    true,
                )
            })
            .collect();
        Self { users }
    }
}

#[async_trait]
impl PageDataProvider for SeededUsers {
    async fn fetch_page(&self, query: PageQuery) -> Result<Page, FetchError> {
        let items = self
            .users
            .iter()
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();
        Ok(Page::new(items, self.users.len() as u64))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("roster_core=debug")
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn slow_earlier_response_does_not_overwrite_newer_page() {
    init_tracing();
    let provider = SeededUsers::new(47);
    let mut cursor = PageCursor::default();
    let mut sequencer = FetchSequencer::new();
    let mut visible: Option<LoadedPage> = None;

    let first = sequencer.issue(&cursor).unwrap();
    cursor.go_to(2);
    let second = sequencer.issue(&cursor).unwrap();

    // The newer request resolves first.
    let newer = provider.fetch_page(second.query).await.unwrap();
    if sequencer.accept(second.seq) {
        visible = Some(LoadedPage::new(second.page_index, newer));
    }

    let older = provider.fetch_page(first.query).await.unwrap();
    if sequencer.accept(first.seq) {
        visible = Some(LoadedPage::new(first.page_index, older));
    }

    let visible = visible.expect("newer page applied");
    assert_eq!(visible.page_index(), 2);
    assert_eq!(visible.ids().first(), Some(&UserId(21)));
    assert_eq!(visible.total(), 47);
}

#[tokio::test]
async fn last_page_is_partial() {
    let provider = SeededUsers::new(47);
    let mut cursor = PageCursor::default();
    cursor.go_to(cursor.page_count(47) - 1);

    let page = provider.fetch_page(cursor.query().unwrap()).await.unwrap();
    assert_eq!(page.items.len(), 7);
    assert_eq!(page.ids().last(), Some(&UserId(47)));
}

#[tokio::test]
async fn provider_is_usable_as_trait_object() {
    let provider: Box<dyn PageDataProvider> = Box::new(SeededUsers::new(3));
    let page = provider
        .fetch_page(PageQuery::new(0, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(page.ids(), vec![UserId(1), UserId(2), UserId(3)]);
}
