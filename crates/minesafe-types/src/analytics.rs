use serde::{Deserialize, Serialize};

/// 单日告警计数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAlertCount {
    /// 日期标签
    pub day: String,
    /// 告警数
    pub alerts: u64,
}

/// 按类型的告警分布
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindCount {
    /// 类型展示名
    #[serde(rename = "type")]
    pub kind: String,
    /// 数量
    pub count: u64,
}

/// 单个传感器的指标汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorMetricSummary {
    /// 指标名称
    pub name: String,
    /// 当前值
    pub current: f64,
    /// 平均值
    pub average: f64,
    /// 最大值
    pub max: f64,
    /// 计量单位
    pub unit: String,
}

/// 统计分析快照
///
/// 只读聚合数据。历史部分由遥测源上报，可实时推导的计数
/// （告警/设备）在每次读取时按当前集合重算。缺失时各视图
/// 按空/零展示，不作为错误处理。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsData {
    /// 告警总数
    pub total_alerts: u64,
    /// 已解决告警数
    pub resolved_alerts: u64,
    /// 未处理告警数
    pub pending_alerts: u64,
    /// 在线设备数
    pub devices_online: u64,
    /// 离线设备数
    pub devices_offline: u64,
    /// 每日告警趋势（按时间先后排列）
    pub weekly_trend: Vec<DailyAlertCount>,
    /// 告警类型分布
    pub alert_distribution: Vec<KindCount>,
    /// 传感器指标汇总
    pub sensor_metrics: Vec<SensorMetricSummary>,
}
