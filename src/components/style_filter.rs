//! Style Filter Component
//!
//! Case gallery filter buttons; exactly one is active.

use leptos::prelude::*;
use studio_core::query::CASE_STYLES;

/// Filter buttons for case styles
#[component]
pub fn StyleFilter(
    #[prop(into)] active: Signal<String>,
    on_select: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="case-filters">
            {CASE_STYLES.iter().map(|&(value, label)| {
                let is_active = move || active.get() == value;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-style=value
                        on:click=move |_| on_select(value.to_string())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
