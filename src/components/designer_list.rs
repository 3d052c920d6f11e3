//! Designer List Component
//!
//! Designer grid with ratings and portfolio buttons.

use leptos::prelude::*;
use studio_core::copy::{self, Section};
use studio_core::display::DesignerSummary;
use studio_core::state::LoadState;

use crate::components::RatingStars;
use crate::context::{use_app_context, DetailTarget};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn DesignerCard(designer: DesignerSummary) -> impl IntoView {
    let ctx = use_app_context();
    let id = designer.id;
    let alt = designer.name.clone();

    view! {
        <div class="designer-card">
            <img src=designer.image alt=alt class="designer-image" />
            <div class="designer-content">
                <h3>{designer.name}</h3>
                <p class="designer-title">{designer.title}</p>
                <RatingStars stars=designer.stars />
                <p><strong>"经验:"</strong>" "{designer.experience}</p>
                <p><strong>"专长:"</strong>" "{designer.specialization}</p>
                <p>{designer.excerpt}</p>
                <button
                    class="btn-secondary"
                    on:click=move |_| ctx.show_detail(DetailTarget::Designer(id))
                >
                    {copy::VIEW_PORTFOLIO}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn DesignerList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="designers-container" class="designers-grid">
            {move || match store.designers().get() {
                LoadState::Loading => view! { <p class="loading">{copy::LOADING}</p> }.into_any(),
                LoadState::Failed => {
                    view! { <p class="error">{Section::Designers.load_failed()}</p> }.into_any()
                }
                LoadState::Ready(designers) => designers
                    .iter()
                    .map(|designer| view! { <DesignerCard designer=DesignerSummary::from(designer) /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
