//! Service List Component
//!
//! Services grid fed from the store.

use leptos::prelude::*;
use studio_core::copy::{self, Section};
use studio_core::display::ServiceSummary;
use studio_core::state::LoadState;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn ServiceCard(service: ServiceSummary) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-icon">
                <i class=service.icon_class></i>
            </div>
            <h3>{service.name}</h3>
            <p>{service.description}</p>
            <p><strong>"价格区间:"</strong>" "{service.price_range}</p>
            <p><strong>"工期:"</strong>" "{service.duration}</p>
        </div>
    }
}

#[component]
pub fn ServiceList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="services-container" class="services-grid">
            {move || match store.services().get() {
                LoadState::Loading => view! { <p class="loading">{copy::LOADING}</p> }.into_any(),
                LoadState::Failed => {
                    view! { <p class="error">{Section::Services.load_failed()}</p> }.into_any()
                }
                LoadState::Ready(services) => services
                    .iter()
                    .map(|service| view! { <ServiceCard service=ServiceSummary::from(service) /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
