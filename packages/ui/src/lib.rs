//! This crate contains the user management views and the store context they share.

mod provider;
pub use provider::{use_user_store, AppStore, SignalState, UserStoreProvider};

mod app;
pub use app::UserApp;

mod user_form;
pub use user_form::UserForm;

mod user_list;
pub use user_list::{UserList, UserRow};

mod user_filter;
pub use user_filter::UserFilter;

mod status;
pub use status::{FetchIndicator, UserCounter};

mod json_view;
pub use json_view::JsonView;
