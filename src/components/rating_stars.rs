//! Rating Stars Component

use leptos::prelude::*;
use studio_core::rating::StarRating;

/// Five Font Awesome star glyphs
#[component]
pub fn RatingStars(stars: StarRating) -> impl IntoView {
    view! {
        <div class="designer-rating">
            {stars.stars().map(|star| view! { <i class=star.icon_class()></i> }).collect_view()}
        </div>
    }
}
