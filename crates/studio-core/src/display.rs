//! Display Models
//!
//! Card and detail view models derived from API records, with every missing
//! field replaced by its fixed fallback.

use crate::models::{DesignCase, Designer, Service};
use crate::rating::StarRating;

/// Characters kept in card excerpts
pub const EXCERPT_CHARS: usize = 100;

pub const DEFAULT_SERVICE_ICON: &str = "paint-roller";
pub const DEFAULT_CASE_IMAGE: &str = "images/default-case.jpg";
pub const DEFAULT_CASE_STYLE: &str = "现代";
pub const BUDGET_NEGOTIABLE: &str = "面议";
pub const DEFAULT_DESIGNER_IMAGE: &str = "images/default-designer.jpg";
pub const DEFAULT_DESIGNER_NAME: &str = "设计师";
pub const DEFAULT_DESIGNER_TITLE: &str = "设计师";
pub const DEFAULT_SPECIALIZATION: &str = "室内设计";

/// First 100 characters followed by an ellipsis (the ellipsis is always added)
///
/// Counts Unicode scalar values, not UTF-16 units, so an emoji counts as one
/// character and is never split in half.
pub fn excerpt(text: Option<&str>) -> String {
    let mut short: String = text.unwrap_or_default().chars().take(EXCERPT_CHARS).collect();
    short.push_str("...");
    short
}

fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => fallback,
    }
}

fn area_tag(area: Option<f64>) -> String {
    format!("{}㎡", area.unwrap_or(0.0))
}

fn budget_tag(budget: Option<f64>) -> String {
    match budget {
        Some(amount) if amount != 0.0 => format!("¥{amount}"),
        _ => BUDGET_NEGOTIABLE.to_string(),
    }
}

fn specialization_text(specialization: Option<&[String]>) -> String {
    match specialization {
        Some(list) if !list.is_empty() => list.join(", "),
        _ => DEFAULT_SPECIALIZATION.to_string(),
    }
}

fn non_empty(images: Option<&Vec<String>>) -> Vec<String> {
    images
        .map(|list| list.iter().filter(|url| !url.is_empty()).cloned().collect())
        .unwrap_or_default()
}

// ========================
// Services
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSummary {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price_range: String,
    pub duration: String,
    pub icon_class: String,
}

impl From<&Service> for ServiceSummary {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id,
            name: service.name.clone(),
            description: service.description.clone().unwrap_or_default(),
            price_range: service.price_range.clone().unwrap_or_default(),
            duration: service.duration.clone().unwrap_or_default(),
            icon_class: format!(
                "fas fa-{}",
                text_or(service.icon.as_deref(), DEFAULT_SERVICE_ICON)
            ),
        }
    }
}

// ========================
// Cases
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CaseSummary {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub cover_image: String,
    pub style_tag: String,
    pub area_tag: String,
    pub budget_tag: String,
}

impl From<&DesignCase> for CaseSummary {
    fn from(case: &DesignCase) -> Self {
        Self {
            id: case.id,
            title: case.title.clone(),
            excerpt: excerpt(case.description.as_deref()),
            cover_image: text_or(case.cover_image.as_deref(), DEFAULT_CASE_IMAGE).to_string(),
            style_tag: text_or(case.style.as_deref(), DEFAULT_CASE_STYLE).to_string(),
            area_tag: area_tag(case.area),
            budget_tag: budget_tag(case.budget),
        }
    }
}

/// Full case for the detail modal
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDetail {
    pub summary: CaseSummary,
    pub description: String,
    pub gallery: Vec<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub status: Option<&'static str>,
}

/// Label for a backend case status
pub fn case_status_label(status: &str) -> Option<&'static str> {
    match status {
        "planning" => Some("规划中"),
        "in_progress" => Some("施工中"),
        "completed" => Some("已完工"),
        _ => None,
    }
}

impl From<&DesignCase> for CaseDetail {
    fn from(case: &DesignCase) -> Self {
        Self {
            summary: CaseSummary::from(case),
            description: case.description.clone().unwrap_or_default(),
            gallery: non_empty(case.images.as_ref()),
            location: case.location.clone().filter(|s| !s.is_empty()),
            duration: case.duration.map(|days| format!("{days}天")),
            status: case.status.as_deref().and_then(case_status_label),
        }
    }
}

// ========================
// Designers
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct DesignerSummary {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub image: String,
    pub stars: StarRating,
    pub experience: String,
    pub specialization: String,
    pub excerpt: String,
}

impl From<&Designer> for DesignerSummary {
    fn from(designer: &Designer) -> Self {
        let name = designer
            .user
            .as_ref()
            .and_then(|user| user.full_name.as_deref());
        let image = designer
            .portfolio_images
            .as_ref()
            .and_then(|images| images.first())
            .map(String::as_str);
        Self {
            id: designer.id,
            name: text_or(name, DEFAULT_DESIGNER_NAME).to_string(),
            title: text_or(designer.title.as_deref(), DEFAULT_DESIGNER_TITLE).to_string(),
            image: text_or(image, DEFAULT_DESIGNER_IMAGE).to_string(),
            stars: StarRating::new(designer.rating.unwrap_or(0.0)),
            experience: format!("{}年", designer.experience_years.unwrap_or(0)),
            specialization: specialization_text(designer.specialization.as_deref()),
            excerpt: excerpt(designer.bio.as_deref()),
        }
    }
}

/// Full designer profile for the detail modal
#[derive(Debug, Clone, PartialEq)]
pub struct DesignerProfile {
    pub summary: DesignerSummary,
    pub bio: String,
    pub portfolio: Vec<String>,
}

impl From<&Designer> for DesignerProfile {
    fn from(designer: &Designer) -> Self {
        Self {
            summary: DesignerSummary::from(designer),
            bio: designer.bio.clone().unwrap_or_default(),
            portfolio: non_empty(designer.portfolio_images.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DesignerUser;

    fn make_case(id: u32) -> DesignCase {
        DesignCase {
            id,
            title: format!("Case {}", id),
            description: None,
            style: None,
            area: None,
            budget: None,
            duration: None,
            location: None,
            cover_image: None,
            images: None,
            featured: None,
            status: None,
        }
    }

    fn make_designer(id: u32) -> Designer {
        Designer {
            id,
            title: None,
            bio: None,
            experience_years: None,
            specialization: None,
            rating: None,
            portfolio_images: None,
            user: None,
        }
    }

    #[test]
    fn test_excerpt_truncates_by_chars() {
        let long = "客".repeat(150);
        let short = excerpt(Some(&long));
        assert_eq!(short.chars().count(), EXCERPT_CHARS + 3);
        assert!(short.ends_with("..."));

        assert_eq!(excerpt(Some("小户型")), "小户型...");
        assert_eq!(excerpt(None), "...");

        let emoji = "🏠".repeat(120);
        assert_eq!(excerpt(Some(&emoji)), format!("{}...", "🏠".repeat(EXCERPT_CHARS)));
    }

    #[test]
    fn test_fallback_images_ship_with_site() {
        let site_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        for image in [DEFAULT_CASE_IMAGE, DEFAULT_DESIGNER_IMAGE] {
            assert!(site_root.join(image).is_file(), "missing {}", image);
        }
    }

    #[test]
    fn test_service_defaults() {
        let service = Service {
            id: 1,
            name: "全案设计".to_string(),
            description: None,
            price_range: Some("300-800元/㎡".to_string()),
            duration: None,
            icon: None,
        };
        let summary = ServiceSummary::from(&service);

        assert_eq!(summary.icon_class, "fas fa-paint-roller");
        assert_eq!(summary.price_range, "300-800元/㎡");
        assert_eq!(summary.description, "");

        let with_icon = Service { icon: Some("couch".to_string()), ..service };
        assert_eq!(ServiceSummary::from(&with_icon).icon_class, "fas fa-couch");
    }

    #[test]
    fn test_case_defaults() {
        let summary = CaseSummary::from(&make_case(1));

        assert_eq!(summary.cover_image, DEFAULT_CASE_IMAGE);
        assert_eq!(summary.style_tag, "现代");
        assert_eq!(summary.area_tag, "0㎡");
        assert_eq!(summary.budget_tag, "面议");
        assert_eq!(summary.excerpt, "...");
    }

    #[test]
    fn test_case_values_render_like_numbers() {
        let case = DesignCase {
            style: Some("北欧".to_string()),
            area: Some(120.0),
            budget: Some(250000.0),
            cover_image: Some("/uploads/cover.jpg".to_string()),
            ..make_case(2)
        };
        let summary = CaseSummary::from(&case);

        assert_eq!(summary.style_tag, "北欧");
        assert_eq!(summary.area_tag, "120㎡");
        assert_eq!(summary.budget_tag, "¥250000");
        assert_eq!(summary.cover_image, "/uploads/cover.jpg");

        let half = DesignCase { area: Some(88.5), ..make_case(3) };
        assert_eq!(CaseSummary::from(&half).area_tag, "88.5㎡");
    }

    #[test]
    fn test_case_detail() {
        let case = DesignCase {
            description: Some("开放式厨房与客厅一体".to_string()),
            images: Some(vec!["/a.jpg".to_string(), String::new(), "/b.jpg".to_string()]),
            duration: Some(45),
            status: Some("in_progress".to_string()),
            ..make_case(4)
        };
        let detail = CaseDetail::from(&case);

        assert_eq!(detail.description, "开放式厨房与客厅一体");
        assert_eq!(detail.gallery, vec!["/a.jpg", "/b.jpg"]);
        assert_eq!(detail.duration.as_deref(), Some("45天"));
        assert_eq!(detail.status, Some("施工中"));
        assert_eq!(detail.location, None);
    }

    #[test]
    fn test_designer_defaults() {
        let summary = DesignerSummary::from(&make_designer(1));

        assert_eq!(summary.name, "设计师");
        assert_eq!(summary.title, "设计师");
        assert_eq!(summary.image, DEFAULT_DESIGNER_IMAGE);
        assert_eq!(summary.stars, StarRating::new(0.0));
        assert_eq!(summary.experience, "0年");
        assert_eq!(summary.specialization, "室内设计");
    }

    #[test]
    fn test_designer_values() {
        let designer = Designer {
            title: Some("首席设计师".to_string()),
            experience_years: Some(12),
            specialization: Some(vec!["现代简约".to_string(), "软装".to_string()]),
            rating: Some(4.6),
            portfolio_images: Some(vec!["/p1.jpg".to_string(), "/p2.jpg".to_string()]),
            user: Some(DesignerUser { full_name: Some("李然".to_string()) }),
            ..make_designer(2)
        };
        let summary = DesignerSummary::from(&designer);

        assert_eq!(summary.name, "李然");
        assert_eq!(summary.title, "首席设计师");
        assert_eq!(summary.image, "/p1.jpg");
        assert_eq!(summary.experience, "12年");
        assert_eq!(summary.specialization, "现代简约, 软装");
        assert_eq!(summary.stars, StarRating { full: 4, half: true, empty: 0 });

        let profile = DesignerProfile::from(&designer);
        assert_eq!(profile.portfolio.len(), 2);
    }

    #[test]
    fn test_designer_empty_specialization_falls_back() {
        let designer = Designer {
            specialization: Some(Vec::new()),
            user: Some(DesignerUser { full_name: None }),
            ..make_designer(3)
        };
        let summary = DesignerSummary::from(&designer);
        assert_eq!(summary.specialization, "室内设计");
        assert_eq!(summary.name, "设计师");
    }
}
