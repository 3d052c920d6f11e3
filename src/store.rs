//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use studio_core::models::{Designer, Service};
use studio_core::query::CaseQuery;
use studio_core::state::{CaseListState, LoadState};

/// Fetched collections, one field per page section
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Services grid
    pub services: LoadState<Vec<Service>>,
    /// Case gallery, accumulated across "load more" pages
    pub cases: CaseListState,
    /// Designer grid
    pub designers: LoadState<Vec<Designer>>,
}

impl AppState {
    pub fn new(case_query: CaseQuery) -> Self {
        Self {
            cases: CaseListState::new(case_query),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
