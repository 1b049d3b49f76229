use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::UserBackend;
use crate::error::{Error, Result};
use crate::models::{NewUser, User, UserId, UserPatch};

/// A request received by [`MemoryBackend`], in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    List,
    Create(NewUser),
    Update(UserId, UserPatch),
}

/// In-memory UserBackend for testing and offline demos.
///
/// Behaves like a minimal REST server: ids are assigned sequentially on create
/// and patches overwrite the editable fields. Every request is recorded.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
    calls: Vec<BackendCall>,
    failing: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with existing records.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|u| match u.id {
                Some(UserId::Number(n)) => Some(n),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                users,
                next_id,
                ..Default::default()
            })),
        }
    }

    /// Make every following request fail with a transport error.
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock().calls.clone()
    }

    /// Records as currently stored on the "server".
    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Inner {
    fn record(&mut self, call: BackendCall) -> Result<()> {
        self.calls.push(call);
        if self.failing {
            return Err(Error::Transport("memory backend is offline".to_string()));
        }
        Ok(())
    }
}

impl UserBackend for MemoryBackend {
    async fn list_users(&self) -> Result<Vec<User>> {
        let mut inner = self.lock();
        inner.record(BackendCall::List)?;
        Ok(inner.users.clone())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let mut inner = self.lock();
        inner.record(BackendCall::Create(user.clone()))?;
        inner.next_id += 1;
        let created = User {
            id: Some(UserId::Number(inner.next_id)),
            first: user.first.clone(),
            last: user.last.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            actived: user.actived,
        };
        inner.users.push(created.clone());
        Ok(created)
    }

    async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User> {
        let mut inner = self.lock();
        inner.record(BackendCall::Update(id.clone(), patch.clone()))?;
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.has_id(id))
            .ok_or(Error::Status { status: 404 })?;
        user.first = patch.first.clone();
        user.last = patch.last.clone();
        user.email = patch.email.clone();
        user.role = patch.role.clone();
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(first: &str) -> NewUser {
        NewUser {
            first: first.to_string(),
            last: String::new(),
            email: String::new(),
            role: String::new(),
            actived: false,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let backend = MemoryBackend::new();

        let a = backend.create_user(&new_user("A")).await.unwrap();
        let b = backend.create_user(&new_user("B")).await.unwrap();

        assert_eq!(a.id, Some(UserId::Number(1)));
        assert_eq!(b.id, Some(UserId::Number(2)));
        assert_eq!(backend.list_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seeded_ids_continue_after_max() {
        let backend = MemoryBackend::with_users(vec![User {
            id: Some(UserId::Number(7)),
            ..Default::default()
        }]);

        let created = backend.create_user(&new_user("C")).await.unwrap();
        assert_eq!(created.id, Some(UserId::Number(8)));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_404() {
        let backend = MemoryBackend::new();
        let patch = UserPatch {
            first: "X".into(),
            last: String::new(),
            email: String::new(),
            role: String::new(),
        };

        let err = backend.update_user(&UserId::Number(1), &patch).await.unwrap_err();
        assert_eq!(err, Error::Status { status: 404 });
    }

    #[tokio::test]
    async fn test_failing_backend_still_records_calls() {
        let backend = MemoryBackend::new();
        backend.set_failing(true);

        assert!(backend.list_users().await.is_err());
        assert_eq!(backend.calls(), vec![BackendCall::List]);
    }
}
