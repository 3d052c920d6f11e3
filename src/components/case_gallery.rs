//! Case Gallery Component
//!
//! Style filter, case cards and "load more". The page/filter view-state is
//! owned by the caller and passed in as a signal.

use leptos::prelude::*;
use studio_core::copy::{self, Section};
use studio_core::display::CaseSummary;
use studio_core::query::CaseQuery;
use studio_core::state::LoadState;

use crate::components::StyleFilter;
use crate::context::{use_app_context, DetailTarget};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn CaseCard(case: CaseSummary) -> impl IntoView {
    let ctx = use_app_context();
    let id = case.id;
    let alt = case.title.clone();

    view! {
        <div class="case-card">
            <img src=case.cover_image alt=alt class="case-image" />
            <div class="case-content">
                <h3>{case.title}</h3>
                <p>{case.excerpt}</p>
                <div class="case-tags">
                    <span class="case-tag">{case.style_tag}</span>
                    <span class="case-tag">{case.area_tag}</span>
                    <span class="case-tag">{case.budget_tag}</span>
                </div>
                <button class="btn-secondary" on:click=move |_| ctx.show_detail(DetailTarget::Case(id))>
                    {copy::VIEW_CASE}
                </button>
            </div>
        </div>
    }
}

/// Filterable, paginated case gallery
#[component]
pub fn CaseGallery(query: RwSignal<CaseQuery>) -> impl IntoView {
    let store = use_app_store();

    // New filter always restarts at page one
    let select_style = move |style: String| query.update(|q| *q = q.with_style(&style));
    let load_more = move |_: web_sys::MouseEvent| query.update(|q| *q = q.next_page());

    view! {
        <StyleFilter active=Signal::derive(move || query.get().style) on_select=select_style />

        <div id="cases-container" class="cases-grid">
            {move || {
                let gallery = store.cases().get();
                if gallery.is_empty() {
                    return view! { <p class="no-results">{copy::NO_CASES}</p> }.into_any();
                }
                match gallery.cases {
                    LoadState::Loading => view! { <p class="loading">{copy::LOADING}</p> }.into_any(),
                    LoadState::Failed => {
                        view! { <p class="error">{Section::Cases.load_failed()}</p> }.into_any()
                    }
                    LoadState::Ready(cases) => cases
                        .iter()
                        .map(|case| view! { <CaseCard case=CaseSummary::from(case) /> })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>

        <Show when=move || store.cases().get().has_more>
            <div class="load-more">
                <button
                    class="btn-secondary"
                    disabled=move || !store.cases().get().can_load_more()
                    on:click=load_more
                >
                    {move || if store.cases().get().loading_more { copy::LOADING } else { copy::LOAD_MORE }}
                </button>
            </div>
        </Show>
    }
}
