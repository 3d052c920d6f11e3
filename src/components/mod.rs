//! UI Components
//!
//! Page sections, cards and modals.

mod nav_bar;
mod service_list;
mod case_gallery;
mod style_filter;
mod designer_list;
mod rating_stars;
mod appointment_modal;
mod detail_modal;

pub use nav_bar::NavBar;
pub use service_list::ServiceList;
pub use case_gallery::CaseGallery;
pub use style_filter::StyleFilter;
pub use designer_list::DesignerList;
pub use rating_stars::RatingStars;
pub use appointment_modal::AppointmentModal;
pub use detail_modal::DetailModal;
