//! Load State
//!
//! What a section shows while its data is in flight, loaded, or failed.

use crate::models::{CasePage, DesignCase};
use crate::query::CaseQuery;

/// Status of a single fetch-and-render section
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// Section shows its fixed error string and nothing else
    Failed,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(_) => LoadState::Failed,
        }
    }
}

/// Accumulated case gallery
///
/// Tracks the query of the latest request so a response that arrives after
/// the filter changed is dropped instead of mixed into the new list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseListState {
    pub query: CaseQuery,
    pub cases: LoadState<Vec<DesignCase>>,
    pub has_more: bool,
    pub loading_more: bool,
}

impl CaseListState {
    pub fn new(query: CaseQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// Record `query` as the request in flight. A first page clears the
    /// gallery; later pages keep it visible.
    pub fn begin(&mut self, query: CaseQuery) {
        if query.is_first_page() || self.cases.ready().is_none() {
            self.cases = LoadState::Loading;
            self.has_more = false;
            self.loading_more = false;
        } else {
            self.loading_more = true;
        }
        self.query = query;
    }

    /// Apply a loaded page: page one replaces, later pages append.
    /// Returns `false` (and changes nothing) for a stale query.
    pub fn apply_page(&mut self, query: &CaseQuery, page: CasePage) -> bool {
        if *query != self.query {
            return false;
        }
        self.has_more = page.has_more();
        self.loading_more = false;
        match (query.is_first_page(), &mut self.cases) {
            (false, LoadState::Ready(cases)) => cases.extend(page.cases),
            (_, cases) => *cases = LoadState::Ready(page.cases),
        }
        true
    }

    /// Replace the gallery with the error state. Ignored for a stale query.
    pub fn fail(&mut self, query: &CaseQuery) -> bool {
        if *query != self.query {
            return false;
        }
        self.cases = LoadState::Failed;
        self.has_more = false;
        self.loading_more = false;
        true
    }

    /// Ready with zero cases
    pub fn is_empty(&self) -> bool {
        self.cases.ready().is_some_and(Vec::is_empty)
    }

    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.loading_more && self.cases.ready().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_case(id: u32) -> DesignCase {
        DesignCase {
            id,
            title: format!("Case {}", id),
            description: None,
            style: None,
            area: None,
            budget: None,
            duration: None,
            location: None,
            cover_image: None,
            images: None,
            featured: None,
            status: None,
        }
    }

    fn make_page(ids: &[u32], current_page: u32, pages: u32) -> CasePage {
        CasePage {
            cases: ids.iter().copied().map(make_case).collect(),
            total: pages * 2,
            pages,
            current_page,
        }
    }

    fn ids(state: &CaseListState) -> Vec<u32> {
        state
            .cases
            .ready()
            .map(|cases| cases.iter().map(|c| c.id).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_first_page_replaces() {
        let query = CaseQuery::new(2);
        let mut state = CaseListState::new(query.clone());

        state.begin(query.clone());
        assert_eq!(state.cases, LoadState::Loading);

        assert!(state.apply_page(&query, make_page(&[1, 2], 1, 3)));
        assert_eq!(ids(&state), vec![1, 2]);
        assert!(state.can_load_more());
    }

    #[test]
    fn test_next_page_appends() {
        let first = CaseQuery::new(2);
        let mut state = CaseListState::new(first.clone());
        state.begin(first.clone());
        state.apply_page(&first, make_page(&[1, 2], 1, 2));

        let second = first.next_page();
        state.begin(second.clone());
        assert!(state.loading_more);
        assert_eq!(ids(&state), vec![1, 2]);

        state.apply_page(&second, make_page(&[3, 4], 2, 2));
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);
        assert!(!state.has_more);
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_filter_change_starts_over() {
        let first = CaseQuery::new(2);
        let mut state = CaseListState::new(first.clone());
        state.begin(first.clone());
        state.apply_page(&first, make_page(&[1, 2], 1, 2));

        let filtered = first.next_page().with_style("北欧");
        assert_eq!(filtered.page, 1);
        state.begin(filtered.clone());
        assert_eq!(state.cases, LoadState::Loading);

        state.apply_page(&filtered, make_page(&[9], 1, 1));
        assert_eq!(ids(&state), vec![9]);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let all = CaseQuery::new(2);
        let mut state = CaseListState::new(all.clone());
        state.begin(all.clone());

        let filtered = all.with_style("美式");
        state.begin(filtered.clone());

        assert!(!state.apply_page(&all, make_page(&[1, 2], 1, 1)));
        assert!(!state.fail(&all));
        assert_eq!(state.cases, LoadState::Loading);

        assert!(state.apply_page(&filtered, make_page(&[5], 1, 1)));
        assert_eq!(ids(&state), vec![5]);
    }

    #[test]
    fn test_failure_replaces_everything() {
        let first = CaseQuery::new(2);
        let mut state = CaseListState::new(first.clone());
        state.begin(first.clone());
        state.apply_page(&first, make_page(&[1, 2], 1, 2));

        let second = first.next_page();
        state.begin(second.clone());
        assert!(state.fail(&second));

        assert_eq!(state.cases, LoadState::Failed);
        assert!(ids(&state).is_empty());
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_empty_first_page() {
        let query = CaseQuery::new(6).with_style("工业风");
        let mut state = CaseListState::new(query.clone());
        state.begin(query.clone());
        state.apply_page(&query, make_page(&[], 1, 0));

        assert!(state.is_empty());
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_load_state_from_result() {
        let ok: LoadState<u32> = Ok::<u32, String>(3).into();
        assert_eq!(ok.ready(), Some(&3));

        let failed: LoadState<u32> = Err::<u32, String>("boom".to_string()).into();
        assert_eq!(failed, LoadState::Failed);
        assert_eq!(LoadState::<u32>::default(), LoadState::Loading);
    }
}
