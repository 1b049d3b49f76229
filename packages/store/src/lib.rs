//! Client-side state and actions for managing remote user records.
//!
//! The crate is UI-framework agnostic: views plug a [`StateCell`] of their
//! choice into a [`UserStore`] and a transport into [`UserBackend`].

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod user_store;

mod memory;
pub use memory::{BackendCall, MemoryBackend};

pub use backend::UserBackend;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::{
    DraftField, EditBuffer, FetchState, FilterType, NewUser, SaveMode, User, UserId, UserPatch,
    ROLES,
};
pub use state::{SharedState, StateCell, Subscription, UserState};
pub use user_store::UserStore;
