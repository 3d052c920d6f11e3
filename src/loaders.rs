//! Section Loaders
//!
//! Fire-and-forget fetches that fill the store. Each runs independently;
//! failures are logged and leave the section in its error state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use studio_core::config::AppConfig;
use studio_core::query::CaseQuery;
use studio_core::state::LoadState;

use crate::api;
use crate::store::{AppStateStoreFields, AppStore};

pub fn load_services(store: AppStore, config: AppConfig) {
    spawn_local(async move {
        let result = api::list_services(&config).await;
        match &result {
            Ok(services) => log::debug!("[LOAD] {} services", services.len()),
            Err(err) => log::error!("加载服务失败: {err}"),
        }
        *store.services().write() = LoadState::from(result);
    });
}

/// Load one page of cases. Page one replaces the gallery, later pages append;
/// a response for a query that is no longer current is dropped.
pub fn load_cases(store: AppStore, config: AppConfig, query: CaseQuery) {
    store.cases().write().begin(query.clone());
    spawn_local(async move {
        match api::list_cases(&config, &query).await {
            Ok(page) => {
                let count = page.cases.len();
                if store.cases().write().apply_page(&query, page) {
                    log::debug!("[LOAD] {count} cases for {query:?}");
                } else {
                    log::debug!("[LOAD] dropped stale cases for {query:?}");
                }
            }
            Err(err) => {
                log::error!("加载案例失败: {err}");
                store.cases().write().fail(&query);
            }
        }
    });
}

pub fn load_designers(store: AppStore, config: AppConfig) {
    spawn_local(async move {
        let result = api::list_designers(&config).await;
        match &result {
            Ok(designers) => log::debug!("[LOAD] {} designers", designers.len()),
            Err(err) => log::error!("加载设计师失败: {err}"),
        }
        *store.designers().write() = LoadState::from(result);
    });
}
