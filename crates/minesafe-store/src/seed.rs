use chrono::{Duration, Utc};
use minesafe_types::{
    Alert, AlertKind, AlertStatus, AnalyticsData, DailyAlertCount, Device, DeviceStatus,
    KindCount, Priority, SensorLevel, SensorMetricSummary, SensorReading,
};

/// 会话种子数据
///
/// 替代真实遥测/检测后端的静态集合。时间戳以装载时刻为基准。
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub devices: Vec<Device>,
    pub sensors: Vec<SensorReading>,
    pub alerts: Vec<Alert>,
    pub analytics: Option<AnalyticsData>,
}

impl SeedData {
    /// 内置的矿区示例数据
    pub fn builtin() -> Self {
        let now = Utc::now();

        let devices = vec![
            Device {
                id: "CAM-001".to_string(),
                name: "主井口摄像头".to_string(),
                location: "主井口区域".to_string(),
                status: DeviceStatus::Online,
                last_seen: now - Duration::minutes(2),
                camera_active: true,
            },
            Device {
                id: "CAM-002".to_string(),
                name: "掘进工作面摄像头".to_string(),
                location: "掘进工作面".to_string(),
                status: DeviceStatus::Online,
                last_seen: now - Duration::minutes(1),
                camera_active: true,
            },
            Device {
                id: "CAM-003".to_string(),
                name: "运输巷道摄像头".to_string(),
                location: "运输巷道".to_string(),
                status: DeviceStatus::Warning,
                last_seen: now - Duration::minutes(15),
                camera_active: false,
            },
            Device {
                id: "CAM-004".to_string(),
                name: "通风机房摄像头".to_string(),
                location: "通风机房".to_string(),
                status: DeviceStatus::Online,
                last_seen: now - Duration::minutes(5),
                camera_active: true,
            },
            Device {
                id: "CAM-005".to_string(),
                name: "变电所摄像头".to_string(),
                location: "变电所".to_string(),
                status: DeviceStatus::Offline,
                last_seen: now - Duration::hours(2),
                camera_active: false,
            },
            Device {
                id: "CAM-006".to_string(),
                name: "采煤工作面摄像头".to_string(),
                location: "采煤工作面".to_string(),
                status: DeviceStatus::Online,
                last_seen: now - Duration::minutes(3),
                camera_active: true,
            },
        ];

        let sensors = vec![
            SensorReading {
                id: "GAS-001".to_string(),
                name: "瓦斯浓度".to_string(),
                value: 0.8,
                unit: "%".to_string(),
                threshold: 1.0,
                status: SensorLevel::Normal,
            },
            SensorReading {
                id: "DUST-001".to_string(),
                name: "粉尘浓度".to_string(),
                value: 8.5,
                unit: "mg/m³".to_string(),
                threshold: 10.0,
                status: SensorLevel::Warning,
            },
            SensorReading {
                id: "TEMP-001".to_string(),
                name: "环境温度".to_string(),
                value: 28.5,
                unit: "°C".to_string(),
                threshold: 35.0,
                status: SensorLevel::Normal,
            },
            SensorReading {
                id: "HUMI-001".to_string(),
                name: "环境湿度".to_string(),
                value: 75.0,
                unit: "%".to_string(),
                threshold: 80.0,
                status: SensorLevel::Normal,
            },
            SensorReading {
                id: "OXY-001".to_string(),
                name: "氧气浓度".to_string(),
                value: 19.5,
                unit: "%".to_string(),
                threshold: 19.0,
                status: SensorLevel::Normal,
            },
            SensorReading {
                id: "WIND-001".to_string(),
                name: "风速".to_string(),
                value: 2.2,
                unit: "m/s".to_string(),
                threshold: 0.5,
                status: SensorLevel::Normal,
            },
        ];

        let alerts = vec![
            Alert {
                id: "ALT-001".to_string(),
                kind: AlertKind::Helmet,
                title: "未佩戴安全帽".to_string(),
                location: "主井口区域".to_string(),
                timestamp: now - Duration::minutes(30),
                priority: Priority::High,
                status: AlertStatus::Pending,
                description: "检测到工作人员进入主井口区域时未佩戴安全帽".to_string(),
                device_id: Some("CAM-001".to_string()),
                snapshot: None,
                sensor_data: None,
            },
            Alert {
                id: "ALT-002".to_string(),
                kind: AlertKind::Track,
                title: "跨越运输轨道".to_string(),
                location: "运输巷道".to_string(),
                timestamp: now - Duration::minutes(45),
                priority: Priority::High,
                status: AlertStatus::Processing,
                description: "检测到人员在运输巷道违规跨越运输轨道".to_string(),
                device_id: Some("CAM-003".to_string()),
                snapshot: None,
                sensor_data: None,
            },
            Alert {
                id: "ALT-003".to_string(),
                kind: AlertKind::Gas,
                title: "瓦斯浓度超标".to_string(),
                location: "掘进工作面".to_string(),
                timestamp: now - Duration::hours(2),
                priority: Priority::High,
                status: AlertStatus::Resolved,
                description: "掘进工作面瓦斯浓度超过安全阈值，已启动通风系统".to_string(),
                device_id: Some("CAM-002".to_string()),
                snapshot: None,
                sensor_data: None,
            },
            Alert {
                id: "ALT-004".to_string(),
                kind: AlertKind::Helmet,
                title: "未佩戴安全帽".to_string(),
                location: "采煤工作面".to_string(),
                timestamp: now - Duration::hours(4),
                priority: Priority::Medium,
                status: AlertStatus::Pending,
                description: "采煤工作面工作人员未按规定佩戴安全帽".to_string(),
                device_id: Some("CAM-006".to_string()),
                snapshot: None,
                sensor_data: None,
            },
            Alert {
                id: "ALT-005".to_string(),
                kind: AlertKind::Track,
                title: "接近危险区域".to_string(),
                location: "变电所".to_string(),
                timestamp: now - Duration::hours(6),
                priority: Priority::Medium,
                status: AlertStatus::Resolved,
                description: "未授权人员接近变电所危险区域".to_string(),
                device_id: Some("CAM-005".to_string()),
                snapshot: None,
                sensor_data: None,
            },
            Alert {
                id: "ALT-006".to_string(),
                kind: AlertKind::Gas,
                title: "粉尘浓度偏高".to_string(),
                location: "运输巷道".to_string(),
                timestamp: now - Duration::hours(8),
                priority: Priority::Low,
                status: AlertStatus::Processing,
                description: "运输巷道粉尘浓度接近警戒值，建议增加喷雾降尘".to_string(),
                device_id: Some("CAM-003".to_string()),
                snapshot: None,
                sensor_data: None,
            },
        ];

        let analytics = AnalyticsData {
            total_alerts: 156,
            resolved_alerts: 98,
            pending_alerts: 12,
            devices_online: 4,
            devices_offline: 1,
            weekly_trend: vec![
                DailyAlertCount { day: "周一".to_string(), alerts: 24 },
                DailyAlertCount { day: "周二".to_string(), alerts: 18 },
                DailyAlertCount { day: "周三".to_string(), alerts: 31 },
                DailyAlertCount { day: "周四".to_string(), alerts: 15 },
                DailyAlertCount { day: "周五".to_string(), alerts: 28 },
                DailyAlertCount { day: "周六".to_string(), alerts: 22 },
                DailyAlertCount { day: "周日".to_string(), alerts: 18 },
            ],
            alert_distribution: vec![
                KindCount { kind: AlertKind::Helmet.label().to_string(), count: 68 },
                KindCount { kind: AlertKind::Track.label().to_string(), count: 45 },
                KindCount { kind: AlertKind::Gas.label().to_string(), count: 43 },
            ],
            sensor_metrics: vec![
                SensorMetricSummary {
                    name: "瓦斯浓度".to_string(),
                    current: 0.8,
                    average: 0.6,
                    max: 1.2,
                    unit: "%".to_string(),
                },
                SensorMetricSummary {
                    name: "粉尘浓度".to_string(),
                    current: 8.5,
                    average: 6.2,
                    max: 12.8,
                    unit: "mg/m³".to_string(),
                },
                SensorMetricSummary {
                    name: "环境温度".to_string(),
                    current: 28.5,
                    average: 26.8,
                    max: 32.1,
                    unit: "°C".to_string(),
                },
                SensorMetricSummary {
                    name: "氧气浓度".to_string(),
                    current: 19.5,
                    average: 20.1,
                    max: 21.0,
                    unit: "%".to_string(),
                },
            ],
        };

        Self {
            devices,
            sensors,
            alerts,
            analytics: Some(analytics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed_shape() {
        let seed = SeedData::builtin();
        assert_eq!(seed.devices.len(), 6);
        assert_eq!(seed.sensors.len(), 6);
        assert_eq!(seed.alerts.len(), 6);
        assert!(seed.analytics.is_some());

        // 种子告警保持检测源给定的顺序
        let ids: Vec<_> = seed.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["ALT-001", "ALT-002", "ALT-003", "ALT-004", "ALT-005", "ALT-006"]
        );
    }

    #[test]
    fn test_seed_device_references_resolve() {
        let seed = SeedData::builtin();
        for alert in &seed.alerts {
            if let Some(device_id) = &alert.device_id {
                assert!(
                    seed.devices.iter().any(|d| &d.id == device_id),
                    "alert {} references unknown device {}",
                    alert.id,
                    device_id
                );
            }
        }
    }
}
