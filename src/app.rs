//! Decor Studio App
//!
//! Single-page layout: hero, services, cases, designers, contact, plus the
//! appointment and detail modals.

use leptos::prelude::*;
use reactive_stores::Store;
use studio_core::query::CaseQuery;

use crate::components::{
    AppointmentModal, CaseGallery, DesignerList, DetailModal, NavBar, ServiceList,
};
use crate::config;
use crate::context::AppContext;
use crate::loaders;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = config::load_config();
    log::info!("[APP] API base {}", config.api_base_url);

    // Case gallery view-state: page + style filter
    let case_query = RwSignal::new(CaseQuery::new(config.cases_per_page));

    let store = Store::new(AppState::new(case_query.get_untracked()));
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Services and designers load once on mount, independently
    Effect::new(move |_| {
        loaders::load_services(store, ctx.config());
        loaders::load_designers(store, ctx.config());
    });

    // Cases reload whenever the page or filter changes
    Effect::new(move |_| {
        let query = case_query.get();
        loaders::load_cases(store, ctx.config(), query);
    });

    view! {
        <NavBar />

        <section id="home" class="hero">
            <div class="hero-content">
                <h1>"为你打造理想的家"</h1>
                <p>"从空间规划到软装落地，一站式家居设计服务"</p>
                <button class="btn-primary" on:click=move |_| ctx.open_appointment()>
                    "免费预约设计"
                </button>
            </div>
        </section>

        <section id="services" class="section">
            <h2 class="section-title">"服务项目"</h2>
            <ServiceList />
        </section>

        <section id="cases" class="section">
            <h2 class="section-title">"设计案例"</h2>
            <CaseGallery query=case_query />
        </section>

        <section id="designers" class="section">
            <h2 class="section-title">"设计团队"</h2>
            <DesignerList />
        </section>

        <footer id="contact" class="footer">
            <p><i class="fas fa-phone"></i>" 400-820-1234"</p>
            <p><i class="fas fa-envelope"></i>" hello@qiju-studio.cn"</p>
            <button class="btn-secondary" on:click=move |_| ctx.open_appointment()>
                "预约咨询"
            </button>
        </footer>

        <AppointmentModal />
        <DetailModal />
    }
}
