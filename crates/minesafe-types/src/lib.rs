pub mod alert;
pub mod analytics;
pub mod device;
pub mod page;
pub mod sensor;

pub use alert::{
    filter_alerts, Alert, AlertFilter, AlertKind, AlertStats, AlertStatus, Priority, TimeRange,
};
pub use analytics::{AnalyticsData, DailyAlertCount, KindCount, SensorMetricSummary};
pub use device::{Device, DeviceStatus};
pub use page::Page;
pub use sensor::{SensorLevel, SensorReading};
