use crate::sensor::SensorReading;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 告警类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// 未戴安全帽
    Helmet,
    /// 跨越轨道
    Track,
    /// 气体超标
    Gas,
}

impl AlertKind {
    pub fn as_str(&self) -> &str {
        match self {
            AlertKind::Helmet => "helmet",
            AlertKind::Track => "track",
            AlertKind::Gas => "gas",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "helmet" => Some(AlertKind::Helmet),
            "track" => Some(AlertKind::Track),
            "gas" => Some(AlertKind::Gas),
            _ => None,
        }
    }

    /// 类型展示名
    pub fn label(&self) -> &str {
        match self {
            AlertKind::Helmet => "未戴安全帽",
            AlertKind::Track => "跨越轨道",
            AlertKind::Gas => "气体超标",
        }
    }
}

/// 告警优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// 高
    High,
    /// 中
    Medium,
    /// 低
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// 告警处理状态
///
/// 严格单向的状态机：Pending → Processing → Resolved。
/// 状态只能由操作员指令逐级推进，Resolved 为终态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// 未处理
    Pending,
    /// 处理中
    Processing,
    /// 已解决
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AlertStatus::Pending => "pending",
            AlertStatus::Processing => "processing",
            AlertStatus::Resolved => "resolved",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(AlertStatus::Pending),
            "processing" => Some(AlertStatus::Processing),
            "resolved" => Some(AlertStatus::Resolved),
            _ => None,
        }
    }

    /// 下一个合法状态，终态返回 None
    pub fn next(&self) -> Option<AlertStatus> {
        match self {
            AlertStatus::Pending => Some(AlertStatus::Processing),
            AlertStatus::Processing => Some(AlertStatus::Resolved),
            AlertStatus::Resolved => None,
        }
    }

    /// 是否允许推进到目标状态（仅允许单步前进）
    pub fn can_advance_to(&self, target: AlertStatus) -> bool {
        self.next() == Some(target)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AlertStatus::Resolved)
    }
}

/// 行为检测告警
///
/// 由检测系统（不在本系统范围内）产生，会话内只通过状态推进被修改，
/// 从不删除。`device_id` 仅作查询用的弱引用，不表示所有权。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// 告警 ID（全局唯一）
    pub id: String,

    /// 告警类型
    #[serde(rename = "type")]
    pub kind: AlertKind,

    /// 标题
    pub title: String,

    /// 发生位置
    pub location: String,

    /// 发生时间
    pub timestamp: DateTime<Utc>,

    /// 优先级
    pub priority: Priority,

    /// 处理状态
    pub status: AlertStatus,

    /// 详情描述
    pub description: String,

    /// 关联设备 ID（弱引用）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// 现场抓拍（图片引用）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,

    /// 随告警附带的传感器读数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_data: Option<Vec<SensorReading>>,
}

impl Alert {
    /// 推进处理状态
    ///
    /// 仅当目标是当前状态的下一步时生效，只改动 `status` 字段。
    /// 返回是否发生了变更；非法推进（含终态上的任何请求）是无操作。
    pub fn advance_to(&mut self, target: AlertStatus) -> bool {
        if self.status.can_advance_to(target) {
            self.status = target;
            true
        } else {
            false
        }
    }
}

/// 时间窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    /// 最近 24 小时
    #[serde(rename = "24h")]
    Last24h,
    /// 最近 7 天
    #[serde(rename = "7d")]
    Last7d,
    /// 最近 30 天
    #[serde(rename = "30d")]
    Last30d,
}

impl TimeRange {
    /// 窗口长度（小时）
    pub fn hours(&self) -> i64 {
        match self {
            TimeRange::Last24h => 24,
            TimeRange::Last7d => 168,
            TimeRange::Last30d => 720,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "24h" => Some(TimeRange::Last24h),
            "7d" => Some(TimeRange::Last7d),
            "30d" => Some(TimeRange::Last30d),
            _ => None,
        }
    }

    /// 时间戳是否落在以 `now` 为基准的窗口内
    pub fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let elapsed_hours = (now - timestamp).num_seconds() as f64 / 3600.0;
        elapsed_hours <= self.hours() as f64
    }
}

/// 告警过滤器
///
/// 各维度相互独立，同时生效（AND）。`None` 为该维度的通配。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertFilter {
    /// 类型过滤
    pub kind: Option<AlertKind>,
    /// 状态过滤
    pub status: Option<AlertStatus>,
    /// 优先级过滤
    pub priority: Option<Priority>,
    /// 时间窗口过滤
    pub range: Option<TimeRange>,
}

impl AlertFilter {
    /// 单条告警是否命中过滤条件
    pub fn matches(&self, alert: &Alert, now: DateTime<Utc>) -> bool {
        if let Some(kind) = self.kind {
            if alert.kind != kind {
                return false;
            }
        }
        if let Some(status) = self.status {
            if alert.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if alert.priority != priority {
                return false;
            }
        }
        if let Some(range) = self.range {
            if !range.contains(alert.timestamp, now) {
                return false;
            }
        }
        true
    }

    /// 从原始查询串构造过滤器
    ///
    /// 缺省与 "all" 均为通配；出现无法识别的取值时返回 None，
    /// 表示条件不可满足（调用方应返回空结果而非报错）。
    pub fn from_raw(
        kind: Option<&str>,
        status: Option<&str>,
        priority: Option<&str>,
        range: Option<&str>,
    ) -> Option<Self> {
        fn dim<T>(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>, ()> {
            match raw {
                None | Some("all") => Ok(None),
                Some(s) => parse(s).map(Some).ok_or(()),
            }
        }

        Some(AlertFilter {
            kind: dim(kind, AlertKind::from_str).ok()?,
            status: dim(status, AlertStatus::from_str).ok()?,
            priority: dim(priority, Priority::from_str).ok()?,
            range: dim(range, TimeRange::from_str).ok()?,
        })
    }
}

/// 应用过滤器
///
/// 纯函数：不修改输入，保持原有相对顺序，不重复、不补插。
pub fn filter_alerts(alerts: &[Alert], filter: &AlertFilter, now: DateTime<Utc>) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|alert| filter.matches(alert, now))
        .cloned()
        .collect()
}

/// 告警统计
///
/// 必须在过滤后的集合上计算，与列表展示保持一致。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AlertStats {
    /// 未处理数
    pub pending: usize,
    /// 处理中数
    pub processing: usize,
    /// 已解决数
    pub resolved: usize,
    /// 高优先级未解决数
    pub high_unresolved: usize,
}

impl AlertStats {
    pub fn over(alerts: &[Alert]) -> Self {
        let mut stats = AlertStats::default();
        for alert in alerts {
            match alert.status {
                AlertStatus::Pending => stats.pending += 1,
                AlertStatus::Processing => stats.processing += 1,
                AlertStatus::Resolved => stats.resolved += 1,
            }
            if alert.priority == Priority::High && !alert.status.is_terminal() {
                stats.high_unresolved += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_alert(id: &str, kind: AlertKind, priority: Priority, status: AlertStatus) -> Alert {
        Alert {
            id: id.to_string(),
            kind,
            title: "测试告警".to_string(),
            location: "主井口区域".to_string(),
            timestamp: Utc::now() - Duration::minutes(30),
            priority,
            status,
            description: String::new(),
            device_id: None,
            snapshot: None,
            sensor_data: None,
        }
    }

    fn sample_alerts() -> Vec<Alert> {
        vec![
            make_alert("ALT-001", AlertKind::Helmet, Priority::High, AlertStatus::Pending),
            make_alert("ALT-002", AlertKind::Track, Priority::High, AlertStatus::Processing),
            make_alert("ALT-003", AlertKind::Gas, Priority::High, AlertStatus::Resolved),
            make_alert("ALT-004", AlertKind::Helmet, Priority::Medium, AlertStatus::Pending),
        ]
    }

    #[test]
    fn test_status_machine_forward_only() {
        assert_eq!(AlertStatus::Pending.next(), Some(AlertStatus::Processing));
        assert_eq!(AlertStatus::Processing.next(), Some(AlertStatus::Resolved));
        assert_eq!(AlertStatus::Resolved.next(), None);

        // 每个非终态只有一个合法推进
        assert!(AlertStatus::Pending.can_advance_to(AlertStatus::Processing));
        assert!(!AlertStatus::Pending.can_advance_to(AlertStatus::Resolved));
        assert!(!AlertStatus::Pending.can_advance_to(AlertStatus::Pending));
        assert!(AlertStatus::Processing.can_advance_to(AlertStatus::Resolved));
        assert!(!AlertStatus::Processing.can_advance_to(AlertStatus::Pending));
        assert!(!AlertStatus::Resolved.can_advance_to(AlertStatus::Pending));
        assert!(!AlertStatus::Resolved.can_advance_to(AlertStatus::Processing));
    }

    #[test]
    fn test_advance_only_touches_status() {
        let mut alert = make_alert("ALT-001", AlertKind::Helmet, Priority::High, AlertStatus::Pending);
        let before = alert.clone();

        assert!(alert.advance_to(AlertStatus::Processing));
        assert_eq!(alert.status, AlertStatus::Processing);
        assert_eq!(alert.id, before.id);
        assert_eq!(alert.title, before.title);
        assert_eq!(alert.timestamp, before.timestamp);
        assert_eq!(alert.priority, before.priority);

        // 终态上的请求是无操作
        alert.status = AlertStatus::Resolved;
        assert!(!alert.advance_to(AlertStatus::Processing));
        assert_eq!(alert.status, AlertStatus::Resolved);
    }

    #[test]
    fn test_filter_wildcard_is_identity() {
        let alerts = sample_alerts();
        let now = Utc::now();
        let filtered = filter_alerts(&alerts, &AlertFilter::default(), now);

        assert_eq!(filtered.len(), alerts.len());
        let ids: Vec<_> = filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["ALT-001", "ALT-002", "ALT-003", "ALT-004"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let alerts = sample_alerts();
        let now = Utc::now();
        let filter = AlertFilter {
            priority: Some(Priority::High),
            ..Default::default()
        };

        let once = filter_alerts(&alerts, &filter, now);
        let twice = filter_alerts(&once, &filter, now);

        let once_ids: Vec<_> = once.iter().map(|a| a.id.as_str()).collect();
        let twice_ids: Vec<_> = twice.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_filter_conjunction() {
        // priority=high AND status=pending 只命中 ALT-001
        let alerts = sample_alerts();
        let filter = AlertFilter {
            priority: Some(Priority::High),
            status: Some(AlertStatus::Pending),
            ..Default::default()
        };

        let filtered = filter_alerts(&alerts, &filter, Utc::now());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "ALT-001");
    }

    #[test]
    fn test_filter_time_window() {
        let now = Utc::now();
        let mut recent = make_alert("ALT-010", AlertKind::Gas, Priority::Low, AlertStatus::Pending);
        recent.timestamp = now - Duration::hours(2);
        let mut old = make_alert("ALT-011", AlertKind::Gas, Priority::Low, AlertStatus::Pending);
        old.timestamp = now - Duration::hours(30);

        let filter = AlertFilter {
            range: Some(TimeRange::Last24h),
            ..Default::default()
        };
        let filtered = filter_alerts(&[recent, old], &filter, now);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "ALT-010");
    }

    #[test]
    fn test_filter_from_raw() {
        // "all" 与缺省均为通配
        let filter = AlertFilter::from_raw(Some("all"), None, Some("high"), Some("7d")).unwrap();
        assert!(filter.kind.is_none());
        assert!(filter.status.is_none());
        assert_eq!(filter.priority, Some(Priority::High));
        assert_eq!(filter.range, Some(TimeRange::Last7d));

        // 无法识别的取值 → 不可满足
        assert!(AlertFilter::from_raw(Some("smoke"), None, None, None).is_none());
        assert!(AlertFilter::from_raw(None, None, None, Some("1y")).is_none());
    }

    #[test]
    fn test_stats_over_filtered_set() {
        let alerts = sample_alerts();
        let filter = AlertFilter {
            priority: Some(Priority::High),
            ..Default::default()
        };
        let filtered = filter_alerts(&alerts, &filter, Utc::now());
        let stats = AlertStats::over(&filtered);

        assert_eq!(stats.pending, 1);
        assert_eq!(stats.processing, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.high_unresolved, 2);

        // 统计跟随过滤集合，而不是全集
        let all_stats = AlertStats::over(&alerts);
        assert_eq!(all_stats.pending, 2);
    }

    #[test]
    fn test_wire_spelling() {
        // 线上字段沿用检测源的拼写：type/小写枚举/窗口缩写
        let alert = make_alert("ALT-001", AlertKind::Helmet, Priority::High, AlertStatus::Pending);
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "helmet");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["status"], "pending");

        assert_eq!(serde_json::to_value(TimeRange::Last24h).unwrap(), "24h");
    }

    #[test]
    fn test_alert_kind_labels() {
        assert_eq!(AlertKind::Helmet.label(), "未戴安全帽");
        assert_eq!(AlertKind::from_str("gas"), Some(AlertKind::Gas));
        assert_eq!(AlertKind::from_str("fire"), None);
    }
}
