//! # Observable user state
//!
//! [`UserState`] is the single source of truth the views render from: the
//! authoritative list of users, the active filter, the edit buffer and the
//! fetch status. Every mutation goes through one of its methods, and each
//! method documents the fields it touches.
//!
//! Derived values ([`filtered`](UserState::filtered),
//! [`active_count`](UserState::active_count)) are recomputed on every read.
//! No filtered copy of the list is ever stored.
//!
//! ## Where the state lives
//!
//! [`StateCell`] abstracts over the container that owns a `UserState`, so the
//! same store logic can drive a Dioxus signal in the UI or a plain
//! [`SharedState`] with change listeners in tests and headless tools.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::models::{DraftField, EditBuffer, FetchState, FilterType, User, UserId};

/// Everything the user views display.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserState {
    pub users: Vec<User>,
    pub filter_type: FilterType,
    pub editing_user: EditBuffer,
    pub fetch_state: FetchState,
}

impl UserState {
    /// Users matching the current filter, in list order.
    pub fn filtered(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| self.filter_type.matches(u))
    }

    pub fn active_count(&self) -> usize {
        self.users.iter().filter(|u| u.actived).count()
    }

    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| u.has_id(id))
    }

    /// Mutates: `filter_type`.
    pub fn set_filter_type(&mut self, filter: FilterType) {
        self.filter_type = filter;
    }

    /// Mutates: `editing_user`, only when a user with `id` exists.
    ///
    /// Returns whether a matching user was found.
    pub fn set_editing_user(&mut self, id: &UserId) -> bool {
        let Some(user) = self.users.iter().find(|u| u.has_id(id)) else {
            return false;
        };
        self.editing_user.load(user);
        true
    }

    /// Mutates: one field of `editing_user`.
    pub fn set_draft_field(&mut self, field: DraftField, value: String) {
        self.editing_user.set_field(field, value);
    }

    /// Mutates: `editing_user`, back to an empty create-mode buffer.
    pub fn clear_form(&mut self) {
        self.editing_user = EditBuffer::default();
    }

    /// Mutates: `actived` of the matching user in `users`.
    ///
    /// Returns whether a matching user was found.
    pub fn toggle(&mut self, id: &UserId) -> bool {
        match self.users.iter_mut().find(|u| u.has_id(id)) {
            Some(user) => {
                user.actived = !user.actived;
                true
            }
            None => false,
        }
    }

    /// Mutates: `fetch_state` to pending.
    pub fn begin_fetch(&mut self) {
        self.fetch_state = FetchState::Pending;
    }

    /// Mutates: `users` (full replacement) and `fetch_state` to done.
    pub fn finish_fetch(&mut self, users: Vec<User>) {
        self.users = users;
        self.fetch_state = FetchState::Done;
    }

    /// Mutates: `fetch_state` to error. `users` is left as it was.
    pub fn fail_fetch(&mut self) {
        self.fetch_state = FetchState::Error;
    }

    /// Pretty-printed JSON of the whole state, for the debug view.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

/// A container owning a [`UserState`].
///
/// `update` is the only way to mutate; implementations notify their observers
/// after each call.
pub trait StateCell {
    fn with<R>(&self, f: impl FnOnce(&UserState) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut UserState) -> R) -> R;
}

/// Handle returned by [`SharedState::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Box<dyn Fn(&UserState)>;

/// Single-threaded observable state with change listeners.
///
/// Clones share the same state. Listeners receive a snapshot taken after each
/// update, so they may read or update the state themselves, but must not
/// subscribe or unsubscribe from inside the callback.
#[derive(Clone, Default)]
pub struct SharedState {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    state: RefCell<UserState>,
    listeners: RefCell<Vec<(Subscription, Listener)>>,
    next_subscription: Cell<u64>,
}

impl SharedState {
    pub fn new(state: UserState) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                ..Default::default()
            }),
        }
    }

    /// Register a listener called after every update.
    pub fn subscribe(&self, listener: impl Fn(&UserState) + 'static) -> Subscription {
        let id = self.inner.next_subscription.get();
        self.inner.next_subscription.set(id + 1);
        let subscription = Subscription(id);
        self.inner
            .listeners
            .borrow_mut()
            .push((subscription, Box::new(listener)));
        subscription
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(s, _)| *s != subscription);
        listeners.len() != before
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> UserState {
        self.inner.state.borrow().clone()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for (_, listener) in self.inner.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}

impl StateCell for SharedState {
    fn with<R>(&self, f: impl FnOnce(&UserState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut UserState) -> R) -> R {
        let result = f(&mut self.inner.state.borrow_mut());
        self.notify();
        result
    }
}

impl fmt::Debug for SharedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedState")
            .field("state", &self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}
