//! # UserStore — actions over observable state
//!
//! [`UserStore`] pairs a [`UserBackend`] with a [`StateCell`] and exposes the
//! actions the views dispatch. Synchronous actions mutate state only. Async
//! actions interleave state updates with backend calls; no state borrow is
//! held across an `.await`.
//!
//! ## Actions
//!
//! | Action | Network | State touched |
//! |--------|---------|---------------|
//! | [`fetch_users`](UserStore::fetch_users) | `GET /users` | `fetch_state`, `users` |
//! | [`set_filter_type`](UserStore::set_filter_type) | — | `filter_type` |
//! | [`set_editing_user`](UserStore::set_editing_user) | — | `editing_user` |
//! | [`set_draft_field`](UserStore::set_draft_field) | — | `editing_user` |
//! | [`clear_form`](UserStore::clear_form) | — | `editing_user` |
//! | [`save_user`](UserStore::save_user) | create or update | see below |
//! | [`create`](UserStore::create) | `POST /users`, then `GET /users` | `editing_user`, then as `fetch_users` |
//! | [`update`](UserStore::update) | `PATCH /users/{id}`, then `GET /users` | `editing_user`, then as `fetch_users` |
//! | [`toggle`](UserStore::toggle) | — | `users[i].actived` |
//!
//! ## Failure handling
//!
//! Backend errors never reach the caller. A failed fetch sets `fetch_state` to
//! error; a failed create or update leaves the edit buffer untouched so the
//! form keeps what the user typed. Both are logged with `tracing::error!`.
//!
//! Nothing is serialized: two overlapping fetches both run, and whichever
//! resolves last decides the list.

use crate::backend::UserBackend;
use crate::models::{DraftField, FilterType, NewUser, SaveMode, UserId, UserPatch};
use crate::state::{SharedState, StateCell, UserState};

/// The user store: state plus the actions that change it.
#[derive(Clone, Debug)]
pub struct UserStore<B, C = SharedState> {
    backend: B,
    state: C,
}

impl<B: UserBackend> UserStore<B, SharedState> {
    /// Store with fresh state held in a [`SharedState`].
    pub fn headless(backend: B) -> Self {
        Self::new(backend, SharedState::default())
    }
}

impl<B: UserBackend, C: StateCell> UserStore<B, C> {
    pub fn new(backend: B, state: C) -> Self {
        Self { backend, state }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Read the current state.
    pub fn with<R>(&self, f: impl FnOnce(&UserState) -> R) -> R {
        self.state.with(f)
    }

    /// Replace the user list with the server's.
    pub async fn fetch_users(&self) {
        self.state.update(UserState::begin_fetch);
        match self.backend.list_users().await {
            Ok(users) => {
                tracing::debug!("Fetched {} users", users.len());
                self.state.update(|s| s.finish_fetch(users));
            }
            Err(e) => {
                tracing::error!("Failed to fetch users: {}", e);
                self.state.update(UserState::fail_fetch);
            }
        }
    }

    pub fn set_filter_type(&self, filter: impl Into<FilterType>) {
        let filter = filter.into();
        self.state.update(|s| s.set_filter_type(filter));
    }

    /// Load a user into the edit buffer. Unknown ids are ignored.
    pub fn set_editing_user(&self, id: &UserId) {
        if !self.state.update(|s| s.set_editing_user(id)) {
            tracing::debug!("No user with id {} to edit", id);
        }
    }

    pub fn set_draft_field(&self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        self.state.update(|s| s.set_draft_field(field, value));
    }

    pub fn clear_form(&self) {
        self.state.update(UserState::clear_form);
    }

    /// Create or update, depending on whether the edit buffer has an id.
    pub async fn save_user(&self) {
        match self.with(|s| s.editing_user.mode()) {
            SaveMode::Create => self.create().await,
            SaveMode::Update(_) => self.update().await,
        }
    }

    /// POST the edit buffer as a new, inactive user.
    pub async fn create(&self) {
        let new_user = self.with(|s| NewUser::from(&s.editing_user));
        match self.backend.create_user(&new_user).await {
            Ok(created) => {
                tracing::info!("Created user {:?}", created);
                self.clear_form();
                self.fetch_users().await;
            }
            Err(e) => tracing::error!("Failed to create user: {}", e),
        }
    }

    /// PATCH the edited user with the edit buffer's fields.
    pub async fn update(&self) {
        let (id, patch) = self.with(|s| (s.editing_user.id.clone(), UserPatch::from(&s.editing_user)));
        let Some(id) = id else {
            tracing::debug!("Edit buffer has no id, nothing to update");
            return;
        };
        match self.backend.update_user(&id, &patch).await {
            Ok(updated) => {
                tracing::info!("Updated user {:?}", updated);
                self.clear_form();
                self.fetch_users().await;
            }
            Err(e) => tracing::error!("Failed to update user {}: {}", id, e),
        }
    }

    /// Flip the active flag of a user in local state.
    ///
    /// The change is not sent to the server; the next fetch overwrites it.
    pub fn toggle(&self, id: &UserId) {
        if !self.state.update(|s| s.toggle(id)) {
            tracing::debug!("No user with id {} to toggle", id);
        }
    }
}
