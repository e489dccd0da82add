//! Durable client-side slots.
//!
//! All localStorage access of the console goes through this module. Key
//! names come from `Resource` (per-list slots) or the constants in
//! `system::auth::storage` (token); pages never spell keys themselves.
//!
//! Slots are shared by every tab of the browser profile and are not
//! synchronized: the last write of a whole value wins.

use contracts::domain::common::Resource;
use contracts::shared::list_state::ListViewState;

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `window.localStorage`. Every operation is a no-op when storage
/// is unavailable (private mode, quota exceeded).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ============================================================================
// List view state: `{resources}Filters`
// ============================================================================

/// Reads the persisted list state, falling back to the resource defaults
/// when the slot is missing or malformed.
pub fn load_filters(store: &impl KeyValueStore, resource: Resource) -> ListViewState {
    let Some(raw) = store.get(resource.filters_key()) else {
        return ListViewState::for_resource(resource);
    };
    match ListViewState::restore(&raw) {
        Some(state) => state,
        None => {
            log::warn!(
                "ignoring malformed list state in `{}`",
                resource.filters_key()
            );
            ListViewState::for_resource(resource)
        }
    }
}

pub fn persist_filters(store: &impl KeyValueStore, resource: Resource, state: &ListViewState) {
    let Some(raw) = state.to_json() else { return };
    store.set(resource.filters_key(), &raw);
}

// ============================================================================
// Recently viewed marker: `lastViewed{Resource}`
// ============================================================================

pub fn mark_last_viewed(store: &impl KeyValueStore, resource: Resource, id: &str) {
    store.set(resource.last_viewed_key(), id);
}

pub fn read_last_viewed(store: &impl KeyValueStore, resource: Resource) -> Option<String> {
    store
        .get(resource.last_viewed_key())
        .filter(|id| !id.is_empty())
}

pub fn clear_last_viewed(store: &impl KeyValueStore, resource: Resource) {
    store.remove(resource.last_viewed_key());
}

#[cfg(test)]
pub(crate) mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for localStorage
    #[derive(Default)]
    pub struct MemoryStore(RefCell<HashMap<String, String>>);

    impl MemoryStore {
        pub fn contains(&self, key: &str) -> bool {
            self.0.borrow().contains_key(key)
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use contracts::shared::list_state::SortDirection;

    #[test]
    fn missing_slot_yields_resource_defaults() {
        let store = MemoryStore::default();
        let state = load_filters(&store, Resource::Teachers);
        assert_eq!(state, ListViewState::for_resource(Resource::Teachers));
    }

    #[test]
    fn malformed_slot_fails_soft() {
        let store = MemoryStore::default();
        store.set("studentsFilters", "{\"page\":");
        assert_eq!(
            load_filters(&store, Resource::Students),
            ListViewState::for_resource(Resource::Students)
        );
    }

    #[test]
    fn persisted_state_round_trips_field_for_field() {
        let store = MemoryStore::default();
        let mut state = ListViewState::for_resource(Resource::Courses);
        state.change_page_size(50);
        state.set_search_input("mate");
        state.submit_search();
        state.change_sort("nota_maxima");
        state.change_sort("nota_maxima");
        state.go_to_page(3);

        persist_filters(&store, Resource::Courses, &state);
        assert!(store.contains("coursesFilters"));
        assert_eq!(load_filters(&store, Resource::Courses), state);
    }

    #[test]
    fn page_size_change_survives_reload() {
        let store = MemoryStore::default();
        let mut state = ListViewState::with_sort_field("id");
        state.go_to_page(4);
        state.change_page_size(25);
        persist_filters(&store, Resource::Grades, &state);

        let loaded = load_filters(&store, Resource::Grades);
        assert_eq!(loaded.page_size, 25);
        assert_eq!(loaded.page, 1);
        assert_eq!(loaded.committed_search, "");
        assert_eq!(loaded.sort_field, "id");
        assert_eq!(loaded.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn slots_are_per_resource() {
        let store = MemoryStore::default();
        let mut state = ListViewState::for_resource(Resource::Users);
        state.change_page_size(100);
        persist_filters(&store, Resource::Users, &state);

        assert_eq!(load_filters(&store, Resource::Cycles).page_size, 10);
    }

    #[test]
    fn last_viewed_marker_lifecycle() {
        let store = MemoryStore::default();
        assert_eq!(read_last_viewed(&store, Resource::Students), None);

        mark_last_viewed(&store, Resource::Students, "17");
        assert!(store.contains("lastViewedStudent"));
        assert_eq!(read_last_viewed(&store, Resource::Students), Some("17".into()));

        clear_last_viewed(&store, Resource::Students);
        assert!(!store.contains("lastViewedStudent"));
    }
}
