use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use roster_core::{
    BulkUpdateOutcome, BulkUpdateService, FetchError, PageDataProvider,
    UpdateError,
};
use roster_model::{BulkUpdateRequest, Page, PageQuery, UserId, UserRecord};

const SAMPLE_NAMES: [&str; 26] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "George", "Hannah",
    "Ian", "Jack", "Kate", "Liam", "Mia", "Noah", "Olivia", "Peter", "Quinn",
    "Rachel", "Sam", "Tina", "Uma", "Violet", "William", "Xavier", "Yara",
    "Zane",
];

/// In-memory users backend implementing both admin ports.
///
/// Records every page query and update request it receives, and can be told
/// to fail the next fetch or update once.
#[derive(Debug, Clone, Default)]
pub struct TestUserAdminService {
    inner: Arc<RwLock<InnerUsersState>>,
}

#[derive(Debug, Default)]
struct InnerUsersState {
    users: Vec<UserRecord>,
    report_counts: bool,
    fetch_failures: VecDeque<FetchError>,
    update_failures: VecDeque<UpdateError>,
    queries: Vec<PageQuery>,
    applied: Vec<BulkUpdateRequest>,
}

impl TestUserAdminService {
    /// `count` active users with ids `1..=count`.
    pub fn with_users(count: i64) -> Self {
        let users = (1..=count)
            .map(|id| sample_user(id, true))
            .collect::<Vec<_>>();
        Self::from_users(users)
    }

    pub fn from_users(users: Vec<UserRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerUsersState {
                users,
                report_counts: true,
                ..InnerUsersState::default()
            })),
        }
    }

    /// Whether successful updates report `updated_count`.
    pub fn set_report_counts(&self, value: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.report_counts = value;
        }
    }

    pub fn fail_next_fetch(&self, error: FetchError) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fetch_failures.push_back(error);
        }
    }

    pub fn fail_next_update(&self, error: UpdateError) {
        if let Ok(mut guard) = self.inner.write() {
            guard.update_failures.push_back(error);
        }
    }

    pub fn push_user(&self, user: UserRecord) {
        if let Ok(mut guard) = self.inner.write() {
            guard.users.push(user);
        }
    }

    pub fn users(&self) -> Vec<UserRecord> {
        if let Ok(guard) = self.inner.read() {
            guard.users.clone()
        } else {
            Vec::new()
        }
    }

    pub fn user(&self, id: UserId) -> Option<UserRecord> {
        if let Ok(guard) = self.inner.read() {
            guard.users.iter().find(|user| user.id == id).cloned()
        } else {
            None
        }
    }

    pub fn active_count(&self) -> usize {
        if let Ok(guard) = self.inner.read() {
            guard.users.iter().filter(|user| user.active).count()
        } else {
            0
        }
    }

    pub fn queries(&self) -> Vec<PageQuery> {
        if let Ok(guard) = self.inner.read() {
            guard.queries.clone()
        } else {
            Vec::new()
        }
    }

    pub fn applied_requests(&self) -> Vec<BulkUpdateRequest> {
        if let Ok(guard) = self.inner.read() {
            guard.applied.clone()
        } else {
            Vec::new()
        }
    }
}

#[async_trait]
impl PageDataProvider for TestUserAdminService {
    async fn fetch_page(&self, query: PageQuery) -> Result<Page, FetchError> {
        let Ok(mut guard) = self.inner.write() else {
            return Err(FetchError::Transport("users stub lock poisoned".into()));
        };
        guard.queries.push(query);
        if let Some(error) = guard.fetch_failures.pop_front() {
            return Err(error);
        }

        let items = guard
            .users
            .iter()
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();
        Ok(Page::new(items, guard.users.len() as u64))
    }
}

#[async_trait]
impl BulkUpdateService for TestUserAdminService {
    async fn apply(
        &self,
        request: &BulkUpdateRequest,
    ) -> Result<BulkUpdateOutcome, UpdateError> {
        let Ok(mut guard) = self.inner.write() else {
            return Err(UpdateError::Transport("users stub lock poisoned".into()));
        };
        if let Some(error) = guard.update_failures.pop_front() {
            return Err(error);
        }

        let active = request.set_active();
        let mut updated = 0;
        for user in guard.users.iter_mut() {
            let hit = match request {
                BulkUpdateRequest::Explicit { ids, .. } => ids.contains(&user.id),
                BulkUpdateRequest::AllExcept { exclude_ids, .. } => {
                    !exclude_ids.contains(&user.id)
                }
            };
            if hit {
                user.active = active;
                updated += 1;
            }
        }
        guard.applied.push(request.clone());

        Ok(if guard.report_counts {
            BulkUpdateOutcome::reported(updated)
        } else {
            BulkUpdateOutcome::default()
        })
    }
}

pub fn sample_user(id: i64, active: bool) -> UserRecord {
    let name = SAMPLE_NAMES[(id.unsigned_abs() as usize) % SAMPLE_NAMES.len()];
    UserRecord::new(
        id,
        name,
        format!("{}{}@example.com", name.to_ascii_lowercase(), id),
        active,
    )
}
