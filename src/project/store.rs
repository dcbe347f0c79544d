use std::{
    collections::{VecDeque, vec_deque},
    sync::Arc,
};

use tokio::sync::RwLock;

use crate::{
    foundation::core::ProjectId,
    project::{model::ProjectRecord, seed::seed_projects},
};

/// In-memory collection of project records, newest first.
///
/// Owned by whoever constructs it; nothing is persisted. Ids are not checked for
/// uniqueness: inserting a duplicate keeps both records and [`SessionStore::find_by_id`]
/// returns the newer one.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    projects: VecDeque<ProjectRecord>,
}

impl SessionStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store holding the seed projects.
    pub fn seeded() -> Self {
        Self {
            projects: seed_projects().into(),
        }
    }

    /// All records, most recently inserted first.
    pub fn list(&self) -> vec_deque::Iter<'_, ProjectRecord> {
        self.projects.iter()
    }

    /// The most recently inserted record.
    pub fn latest(&self) -> Option<&ProjectRecord> {
        self.projects.front()
    }

    /// Prepend `record`.
    #[tracing::instrument(skip(self, record), fields(id = %record.id))]
    pub fn insert(&mut self, record: ProjectRecord) {
        self.projects.push_front(record);
    }

    /// First record with `id` in listing order.
    pub fn find_by_id(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Cloneable, lock-protected handle for hosts that run several studio sessions
/// against one store.
#[derive(Clone, Debug, Default)]
pub struct SharedSessionStore {
    inner: Arc<RwLock<SessionStore>>,
}

impl SharedSessionStore {
    pub fn new(store: SessionStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Snapshot of the current listing.
    pub async fn list(&self) -> Vec<ProjectRecord> {
        self.inner.read().await.list().cloned().collect()
    }

    pub async fn insert(&self, record: ProjectRecord) {
        self.inner.write().await.insert(record);
    }

    pub async fn find_by_id(&self, id: &ProjectId) -> Option<ProjectRecord> {
        self.inner.read().await.find_by_id(id).cloned()
    }

    /// Run `f` with exclusive access, e.g. to publish a studio session.
    pub async fn with_mut<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> R {
        let mut guard = self.inner.write().await;
        f(&mut guard)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/store.rs"]
mod tests;
