//! Case Query
//!
//! Pagination and style filter for the case gallery, passed explicitly to
//! the case loader.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::DEFAULT_CASES_PER_PAGE;

/// Filter value that disables style filtering
pub const ALL_STYLES: &str = "all";

/// Filter buttons: (style value, label)
pub const CASE_STYLES: &[(&str, &str)] = &[
    (ALL_STYLES, "全部"),
    ("现代", "现代"),
    ("北欧", "北欧"),
    ("新中式", "新中式"),
    ("美式", "美式"),
    ("工业风", "工业风"),
];

/// View-state of the case gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseQuery {
    pub page: u32,
    pub per_page: u32,
    pub style: String,
}

impl Default for CaseQuery {
    fn default() -> Self {
        Self::new(DEFAULT_CASES_PER_PAGE)
    }
}

impl CaseQuery {
    /// First page, no filter
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            style: ALL_STYLES.to_string(),
        }
    }

    /// Switch filter; always restarts at page one
    pub fn with_style(&self, style: &str) -> Self {
        Self {
            page: 1,
            per_page: self.per_page,
            style: style.to_string(),
        }
    }

    /// Same filter, next page
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Style to send to the backend, `None` for "all"
    pub fn style_filter(&self) -> Option<&str> {
        let style = self.style.trim();
        (!style.is_empty() && style != ALL_STYLES).then_some(style)
    }

    /// Query string for `GET /cases`, without the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&per_page={}", self.page, self.per_page);
        if let Some(style) = self.style_filter() {
            query.push_str("&style=");
            query.extend(utf8_percent_encode(style, NON_ALPHANUMERIC));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = CaseQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 6);
        assert_eq!(query.style_filter(), None);
        assert_eq!(query.to_query_string(), "page=1&per_page=6");
    }

    #[test]
    fn test_style_change_resets_page() {
        let query = CaseQuery::new(6).next_page().next_page();
        assert_eq!(query.page, 3);

        let filtered = query.with_style("北欧");
        assert_eq!(filtered.page, 1);
        assert_eq!(filtered.per_page, 6);
        assert_eq!(filtered.style_filter(), Some("北欧"));
    }

    #[test]
    fn test_next_page_keeps_filter() {
        let query = CaseQuery::new(6).with_style("美式").next_page();
        assert_eq!(query.page, 2);
        assert_eq!(query.style, "美式");
        assert!(!query.is_first_page());
    }

    #[test]
    fn test_style_is_percent_encoded() {
        let query = CaseQuery::new(6).with_style("现代");
        assert_eq!(query.to_query_string(), "page=1&per_page=6&style=%E7%8E%B0%E4%BB%A3");

        let query = CaseQuery::new(12).with_style("loft & co").next_page();
        assert_eq!(query.to_query_string(), "page=2&per_page=12&style=loft%20%26%20co");
    }

    #[test]
    fn test_all_and_blank_styles_send_no_filter() {
        assert_eq!(CaseQuery::new(6).with_style(ALL_STYLES).style_filter(), None);
        assert_eq!(CaseQuery::new(6).with_style("  ").style_filter(), None);
    }

    #[test]
    fn test_filter_buttons_start_with_all() {
        assert_eq!(CASE_STYLES[0].0, ALL_STYLES);
        let mut values: Vec<&str> = CASE_STYLES.iter().map(|(value, _)| *value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), CASE_STYLES.len());
    }
}
