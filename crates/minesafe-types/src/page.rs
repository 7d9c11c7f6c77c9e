use serde::{Deserialize, Serialize};

/// 页面类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// 实时监控
    Monitor,
    /// 告警管理
    Alerts,
    /// 统计分析
    Analytics,
}

impl Page {
    pub fn as_str(&self) -> &str {
        match self {
            Page::Monitor => "monitor",
            Page::Alerts => "alerts",
            Page::Analytics => "analytics",
        }
    }

    /// 解析页面标识，未知值返回 None（由调用方显式拒绝）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "monitor" => Some(Page::Monitor),
            "alerts" => Some(Page::Alerts),
            "analytics" => Some(Page::Analytics),
            _ => None,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Monitor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_conversion() {
        assert_eq!(Page::Monitor.as_str(), "monitor");
        assert_eq!(Page::from_str("alerts"), Some(Page::Alerts));
        assert_eq!(Page::from_str("settings"), None);
    }

    #[test]
    fn test_default_page() {
        assert_eq!(Page::default(), Page::Monitor);
    }
}
