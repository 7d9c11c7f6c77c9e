use serde::{Deserialize, Serialize};

/// 传感器读数等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorLevel {
    /// 正常
    Normal,
    /// 预警（达到阈值 80%）
    Warning,
    /// 危险（达到或超过阈值）
    Danger,
}

impl SensorLevel {
    /// 按阈值分类读数
    ///
    /// 读数达到阈值为 Danger，达到阈值 80% 为 Warning，否则 Normal。
    /// 展示侧必须以此函数的结果为准，不得信任存储的等级字段。
    pub fn classify(value: f64, threshold: f64) -> Self {
        if value >= threshold {
            SensorLevel::Danger
        } else if value >= threshold * 0.8 {
            SensorLevel::Warning
        } else {
            SensorLevel::Normal
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SensorLevel::Normal => "normal",
            SensorLevel::Warning => "warning",
            SensorLevel::Danger => "danger",
        }
    }
}

/// 环境传感器读数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    /// 传感器 ID
    pub id: String,

    /// 指标名称
    pub name: String,

    /// 当前读数
    pub value: f64,

    /// 计量单位
    pub unit: String,

    /// 报警阈值
    pub threshold: f64,

    /// 上报时的等级（仅为上报值，展示时必须重新计算）
    pub status: SensorLevel,
}

impl SensorReading {
    /// 当前等级（按 value/threshold 重新计算）
    pub fn current_level(&self) -> SensorLevel {
        SensorLevel::classify(self.value, self.threshold)
    }

    /// 返回等级已重算的副本，供展示侧使用
    pub fn refreshed(&self) -> Self {
        let mut reading = self.clone();
        reading.status = reading.current_level();
        reading
    }
}
