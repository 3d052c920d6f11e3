//! UI Copy
//!
//! Localized strings shown to visitors.

pub const LOADING: &str = "加载中...";

pub const SERVICES_LOAD_FAILED: &str = "加载服务失败，请稍后重试";
pub const CASES_LOAD_FAILED: &str = "加载案例失败，请稍后重试";
pub const DESIGNERS_LOAD_FAILED: &str = "加载设计师失败，请稍后重试";
pub const DETAIL_LOAD_FAILED: &str = "加载详情失败，请稍后重试";

pub const NO_CASES: &str = "暂无案例";
pub const LOAD_MORE: &str = "加载更多";
pub const VIEW_CASE: &str = "查看详情";
pub const VIEW_PORTFOLIO: &str = "查看作品集";
pub const NO_PORTFOLIO: &str = "暂无作品";

pub const APPOINTMENT_SUBMITTED: &str = "预约提交成功！我们的客服将在24小时内联系您。";
pub const SUBMIT_RETRY_LATER: &str = "请稍后重试";
pub const SUBMIT_NETWORK_FAILED: &str = "提交失败，请检查网络连接后重试";

/// Alert text for a rejected or invalid appointment
pub fn submit_failed(reason: &str) -> String {
    format!("提交失败: {reason}")
}

/// Page region that fetches its own data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Services,
    Cases,
    Designers,
    Detail,
}

impl Section {
    /// The only text a section shows once its fetch fails
    pub fn load_failed(self) -> &'static str {
        match self {
            Section::Services => SERVICES_LOAD_FAILED,
            Section::Cases => CASES_LOAD_FAILED,
            Section::Designers => DESIGNERS_LOAD_FAILED,
            Section::Detail => DETAIL_LOAD_FAILED,
        }
    }
}
