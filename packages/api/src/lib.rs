//! # API crate — HTTP transport for the users endpoint
//!
//! Implements [`store::UserBackend`] over the REST API the client talks to.
//! The store never sees `reqwest` types; every failure is mapped onto
//! [`store::Error`].
//!
//! ## Endpoints
//!
//! | Operation | Method | Path | Body | Response |
//! |-----------|--------|------|------|----------|
//! | List | `GET` | `/users` | — | JSON array of users |
//! | Create | `POST` | `/users` | [`store::NewUser`] | created user |
//! | Update | `PATCH` | `/users/{id}` | [`store::UserPatch`] | updated user |
//!
//! No authentication, pagination, timeouts or retries.

mod http;

pub use http::HttpBackend;
pub use store::{ClientConfig, NewUser, User, UserId, UserPatch};
