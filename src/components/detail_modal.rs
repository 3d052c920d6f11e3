//! Detail Modal Component
//!
//! Full case or designer record, fetched when a card button sets the
//! detail target.

use leptos::prelude::*;
use leptos::task::spawn_local;
use studio_core::copy::{self, Section};
use studio_core::display::{CaseDetail, DesignerProfile};
use studio_core::state::LoadState;

use crate::api;
use crate::components::RatingStars;
use crate::context::{use_app_context, DetailTarget};

#[derive(Clone, Debug, PartialEq)]
enum DetailContent {
    Case(CaseDetail),
    Designer(DesignerProfile),
}

fn gallery(images: Vec<String>) -> impl IntoView {
    view! {
        <div class="detail-gallery">
            {images.into_iter().map(|src| view! { <img src=src class="gallery-image" alt="" /> }).collect_view()}
        </div>
    }
}

#[component]
fn CaseDetailView(detail: CaseDetail) -> impl IntoView {
    let CaseDetail { summary, description, gallery: images, location, duration, status } = detail;
    let alt = summary.title.clone();

    view! {
        <div class="detail case-detail">
            <img class="detail-cover" src=summary.cover_image alt=alt />
            <h2>{summary.title}</h2>
            <div class="case-tags">
                <span class="case-tag">{summary.style_tag}</span>
                <span class="case-tag">{summary.area_tag}</span>
                <span class="case-tag">{summary.budget_tag}</span>
                {status.map(|label| view! { <span class="case-tag status">{label}</span> })}
            </div>
            <p class="detail-meta">
                {location.map(|place| view! {
                    <span><i class="fas fa-map-marker-alt"></i>" "{place}</span>
                })}
                {duration.map(|days| view! {
                    <span><i class="far fa-clock"></i>" 工期 "{days}</span>
                })}
            </p>
            <p class="detail-description">{description}</p>
            {gallery(images)}
        </div>
    }
}

#[component]
fn DesignerProfileView(profile: DesignerProfile) -> impl IntoView {
    let DesignerProfile { summary, bio, portfolio } = profile;
    let alt = summary.name.clone();

    view! {
        <div class="detail designer-detail">
            <div class="detail-header">
                <img class="designer-image" src=summary.image alt=alt />
                <div>
                    <h2>{summary.name}</h2>
                    <p class="designer-title">{summary.title}</p>
                    <RatingStars stars=summary.stars />
                    <p><strong>"经验:"</strong>" "{summary.experience}</p>
                    <p><strong>"专长:"</strong>" "{summary.specialization}</p>
                </div>
            </div>
            <p class="detail-description">{bio}</p>
            <h3>"作品集"</h3>
            {if portfolio.is_empty() {
                view! { <p class="no-results">{copy::NO_PORTFOLIO}</p> }.into_any()
            } else {
                gallery(portfolio).into_any()
            }}
        </div>
    }
}

/// Modal for the current detail target
#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = use_app_context();
    let (content, set_content) = signal(LoadState::<DetailContent>::Loading);

    // Fetch whenever the target changes
    Effect::new(move |_| {
        let Some(target) = ctx.detail.get() else {
            return;
        };
        set_content.set(LoadState::Loading);
        let config = ctx.config();
        spawn_local(async move {
            let loaded = match target {
                DetailTarget::Case(id) => api::get_case(&config, id)
                    .await
                    .map(|case| DetailContent::Case(CaseDetail::from(&case))),
                DetailTarget::Designer(id) => api::get_designer(&config, id)
                    .await
                    .map(|designer| DetailContent::Designer(DesignerProfile::from(&designer))),
            };
            // Closed or switched to another record while loading
            if ctx.detail.get_untracked() != Some(target) {
                return;
            }
            match loaded {
                Ok(detail) => set_content.set(LoadState::Ready(detail)),
                Err(err) => {
                    log::error!("加载详情失败 {:?}: {err}", target);
                    set_content.set(LoadState::Failed);
                }
            }
        });
    });

    view! {
        <Show when=move || ctx.detail.get().is_some()>
            <div class="modal detail-modal" on:click=move |_| ctx.close_detail()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" title="关闭" on:click=move |_| ctx.close_detail()>
                        "×"
                    </button>
                    {move || match content.get() {
                        LoadState::Loading => view! { <p class="loading">{copy::LOADING}</p> }.into_any(),
                        LoadState::Failed => {
                            view! { <p class="error">{Section::Detail.load_failed()}</p> }.into_any()
                        }
                        LoadState::Ready(DetailContent::Case(detail)) => {
                            view! { <CaseDetailView detail=detail /> }.into_any()
                        }
                        LoadState::Ready(DetailContent::Designer(profile)) => {
                            view! { <DesignerProfileView profile=profile /> }.into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}
