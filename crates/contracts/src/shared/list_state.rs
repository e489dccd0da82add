//! Paginated, sorted and searched state of one entity list.
//!
//! The whole struct is persisted as JSON into the resource's filters slot
//! after every transition and restored when the list page mounts.

use crate::domain::common::Resource;
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE_OPTIONS: [u32; 6] = [5, 10, 15, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListViewState {
    /// 1-indexed
    pub page: u32,
    pub page_size: u32,
    /// Text in the search box, not yet sent
    pub search_input: String,
    /// Text sent to the backend as `search`
    pub committed_search: String,
    pub sort_field: String,
    pub sort_direction: SortDirection,
}

/// Parameters of one `GET /{resource}` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    #[serde(rename = "sortBy")]
    pub sort_by: String,
    #[serde(rename = "sortDir")]
    pub sort_dir: SortDirection,
}

impl ListViewState {
    pub fn with_sort_field(sort_field: impl Into<String>) -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_input: String::new(),
            committed_search: String::new(),
            sort_field: sort_field.into(),
            sort_direction: SortDirection::Asc,
        }
    }

    pub fn for_resource(resource: Resource) -> Self {
        Self::with_sort_field(resource.default_sort_field())
    }

    /// Rebuilds the state from a persisted slot.
    ///
    /// Returns `None` when the slot is malformed or holds values outside the
    /// state's domain; callers fall back to the resource defaults. A
    /// committed search with an empty search box is dropped, as typing would
    /// have done.
    pub fn restore(raw: &str) -> Option<Self> {
        let mut state: ListViewState = serde_json::from_str(raw).ok()?;
        if !state.is_valid() {
            return None;
        }
        let input = std::mem::take(&mut state.search_input);
        state.set_search_input(input);
        Some(state)
    }

    pub fn is_valid(&self) -> bool {
        self.page >= 1
            && PAGE_SIZE_OPTIONS.contains(&self.page_size)
            && !self.sort_field.trim().is_empty()
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Typing in the search box. Emptying the box while a search is
    /// committed clears the committed search too.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
        if self.search_input.is_empty() && !self.committed_search.is_empty() {
            self.committed_search.clear();
            self.page = 1;
        }
    }

    pub fn set_committed_search(&mut self, text: impl Into<String>) {
        self.committed_search = text.into();
        self.page = 1;
    }

    /// Search form submission: commits whatever is typed
    pub fn submit_search(&mut self) {
        let text = self.search_input.trim().to_string();
        self.set_committed_search(text);
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.committed_search.clear();
        self.page = 1;
    }

    pub fn change_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field.to_string();
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    /// Sizes outside `PAGE_SIZE_OPTIONS` are ignored
    pub fn change_page_size(&mut self, size: u32) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page = 1;
        true
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            limit: self.page_size,
            search: self.committed_search.clone(),
            sort_by: self.sort_field.clone(),
            sort_dir: self.sort_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(page: u32) -> ListViewState {
        let mut s = ListViewState::with_sort_field("id");
        s.page = page;
        s
    }

    #[test]
    fn defaults_match_contract() {
        let s = ListViewState::with_sort_field("id");
        assert_eq!(s.page, 1);
        assert_eq!(s.page_size, 10);
        assert_eq!(s.committed_search, "");
        assert_eq!(s.sort_field, "id");
        assert_eq!(s.sort_direction, SortDirection::Asc);
        assert!(s.is_valid());
    }

    #[test]
    fn committing_search_resets_page() {
        for page in [2, 7, 40] {
            let mut s = paged(page);
            s.set_committed_search("garcía");
            assert_eq!(s.page, 1);
            assert_eq!(s.committed_search, "garcía");
        }
    }

    #[test]
    fn typing_does_not_commit() {
        let mut s = paged(3);
        s.set_search_input("lop");
        assert_eq!(s.committed_search, "");
        assert_eq!(s.page, 3);

        s.submit_search();
        assert_eq!(s.committed_search, "lop");
        assert_eq!(s.page, 1);
    }

    #[test]
    fn emptying_input_auto_clears_committed_search() {
        let mut s = paged(1);
        s.set_search_input("ana");
        s.submit_search();
        s.go_to_page(4);

        s.set_search_input("");
        assert_eq!(s.committed_search, "");
        assert_eq!(s.page, 1);
    }

    #[test]
    fn emptying_input_without_commit_keeps_page() {
        let mut s = paged(5);
        s.set_search_input("x");
        s.set_search_input("");
        assert_eq!(s.page, 5);
    }

    #[test]
    fn clear_search_resets_everything_search_related() {
        let mut s = paged(6);
        s.set_search_input("pérez");
        s.submit_search();
        s.go_to_page(2);
        s.clear_search();
        assert_eq!(s.search_input, "");
        assert_eq!(s.committed_search, "");
        assert_eq!(s.page, 1);
    }

    #[test]
    fn same_field_twice_flips_direction() {
        let mut s = paged(1);
        s.change_sort("nombre");
        let after_first = s.sort_direction;
        s.change_sort("nombre");
        assert_eq!(s.sort_field, "nombre");
        assert_eq!(s.sort_direction, after_first.flipped());
    }

    #[test]
    fn switching_field_resets_direction_and_page() {
        let mut s = paged(9);
        s.sort_direction = SortDirection::Desc;
        s.change_sort("apellidos");
        assert_eq!(s.sort_field, "apellidos");
        assert_eq!(s.sort_direction, SortDirection::Asc);
        assert_eq!(s.page, 1);
    }

    #[test]
    fn page_size_outside_options_is_ignored() {
        let mut s = paged(3);
        assert!(!s.change_page_size(20));
        assert_eq!(s.page_size, 10);
        assert_eq!(s.page, 3);

        assert!(s.change_page_size(25));
        assert_eq!(s.page_size, 25);
        assert_eq!(s.page, 1);
    }

    #[test]
    fn go_to_page_is_one_indexed() {
        let mut s = paged(3);
        s.go_to_page(0);
        assert_eq!(s.page, 1);
    }

    #[test]
    fn json_uses_camel_case_and_round_trips() {
        let mut s = ListViewState::with_sort_field("id");
        s.change_sort("id");
        s.set_search_input("abc");
        let raw = s.to_json().unwrap();
        assert!(raw.contains("\"pageSize\":10"));
        assert!(raw.contains("\"committedSearch\":\"\""));
        assert!(raw.contains("\"sortDirection\":\"desc\""));
        assert_eq!(ListViewState::restore(&raw), Some(s));
    }

    #[test]
    fn restore_fails_soft() {
        assert_eq!(ListViewState::restore("not json"), None);
        assert_eq!(ListViewState::restore("{\"page\":1}"), None);
        let bad_size = r#"{"page":1,"pageSize":7,"searchInput":"","committedSearch":"","sortField":"id","sortDirection":"asc"}"#;
        assert_eq!(ListViewState::restore(bad_size), None);
        let bad_page = r#"{"page":0,"pageSize":10,"searchInput":"","committedSearch":"","sortField":"id","sortDirection":"asc"}"#;
        assert_eq!(ListViewState::restore(bad_page), None);
        let bad_dir = r#"{"page":1,"pageSize":10,"searchInput":"","committedSearch":"","sortField":"id","sortDirection":"up"}"#;
        assert_eq!(ListViewState::restore(bad_dir), None);
    }

    #[test]
    fn restore_drops_search_hidden_by_an_empty_box() {
        let raw = r#"{"page":3,"pageSize":10,"searchInput":"","committedSearch":"ana","sortField":"id","sortDirection":"asc"}"#;
        let s = ListViewState::restore(raw).unwrap();
        assert_eq!(s.committed_search, "");
        assert_eq!(s.page, 1);

        let raw = r#"{"page":3,"pageSize":10,"searchInput":"ana","committedSearch":"ana","sortField":"id","sortDirection":"asc"}"#;
        let s = ListViewState::restore(raw).unwrap();
        assert_eq!(s.committed_search, "ana");
        assert_eq!(s.page, 3);
    }

    #[test]
    fn query_ignores_uncommitted_input() {
        let mut s = ListViewState::for_resource(Resource::Students);
        s.set_search_input("typing...");
        let q = s.query();
        assert_eq!(q.search, "");
        assert_eq!(q.sort_by, "apellidos");
        assert_eq!(q.limit, DEFAULT_PAGE_SIZE);
    }
}
