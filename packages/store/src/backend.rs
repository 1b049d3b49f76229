//! # Backend — the network seam of the store
//!
//! [`UserBackend`] is the async interface the store drives for its three REST
//! calls. [`crate::MemoryBackend`] implements it in memory for tests and
//! headless use; the `api` crate implements it over HTTP.
//!
//! | Method | REST call |
//! |--------|-----------|
//! | [`list_users`](UserBackend::list_users) | `GET /users` |
//! | [`create_user`](UserBackend::create_user) | `POST /users` |
//! | [`update_user`](UserBackend::update_user) | `PATCH /users/{id}` |

use crate::error::Result;
use crate::models::{NewUser, User, UserId, UserPatch};

/// Async trait for reading and writing user records.
pub trait UserBackend {
    fn list_users(&self) -> impl std::future::Future<Output = Result<Vec<User>>>;
    fn create_user(
        &self,
        user: &NewUser,
    ) -> impl std::future::Future<Output = Result<User>>;
    fn update_user(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> impl std::future::Future<Output = Result<User>>;
}
