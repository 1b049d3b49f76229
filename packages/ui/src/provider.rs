//! User store context and hooks for the UI.

use api::HttpBackend;
use dioxus::prelude::*;
use store::{ClientConfig, StateCell, UserState, UserStore};

/// [`StateCell`] backed by a Dioxus signal.
///
/// Reads subscribe the current component, so any update re-renders every view
/// that looked at the state.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalState(pub Signal<UserState>);

impl StateCell for SignalState {
    fn with<R>(&self, f: impl FnOnce(&UserState) -> R) -> R {
        f(&self.0.read())
    }

    fn update<R>(&self, f: impl FnOnce(&mut UserState) -> R) -> R {
        let mut signal = self.0;
        signal.with_mut(f)
    }
}

/// The store type shared by every view.
pub type AppStore = UserStore<HttpBackend, SignalState>;

/// Get the user store.
/// Reading through it subscribes the calling component to state changes.
pub fn use_user_store() -> AppStore {
    use_context::<AppStore>()
}

/// Provider component that owns the user store.
/// Wrap the user views with this component; it fetches the list on mount.
#[component]
pub fn UserStoreProvider(config: ClientConfig, children: Element) -> Element {
    let state = use_signal(UserState::default);
    let store = use_context_provider(|| {
        tracing::info!("Users endpoint: {}", config.base_url());
        UserStore::new(HttpBackend::new(&config), SignalState(state))
    });

    // Fetch the list once on mount
    use_hook(move || {
        spawn(async move {
            store.fetch_users().await;
        })
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{FetchState, FilterType};

    #[test]
    fn test_signal_state_update_is_visible_to_readers() {
        fn app() -> Element {
            let cell = SignalState(use_signal(UserState::default));
            let fetch_state = use_hook(|| {
                cell.update(|s| {
                    s.set_filter_type(FilterType::Active);
                    s.begin_fetch();
                    s.fetch_state
                })
            });

            assert_eq!(fetch_state, FetchState::Pending);
            assert_eq!(cell.with(|s| s.filter_type.clone()), FilterType::Active);
            rsx! {}
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }
}
